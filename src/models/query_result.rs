//! Export envelope

use crate::models::Certificate;
use serde::{Deserialize, Serialize};

/// Everything a run found, in the shape written to the export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub url: String,
    pub certificates: Vec<Certificate>,
}
