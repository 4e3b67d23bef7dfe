use crate::ProjectDto;

use serde::Serialize;

/// Collection envelope, newest project first
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub data: Vec<ProjectDto>,
    pub count: usize,
}
