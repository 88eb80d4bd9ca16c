//! API data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;

/// Shared state for the API handlers.
pub struct AppState<F> {
    /// The analyzer every request runs through
    pub analyzer: Arc<Analyzer<F>>,
}

// Manual impl: derive would require `F: Clone`
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Page to analyze; `null` and missing are both rejected
    #[serde(default)]
    pub url: Option<String>,
}

/// JSON body of a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Why the request was rejected
    pub error: String,
}
