use crate::ProjectDto;

use serde::Serialize;

/// Single project envelope
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub success: bool,
    pub data: ProjectDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
