use serde::Serialize;

/// Envelope for successful deletions; no data, just a confirmation.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
