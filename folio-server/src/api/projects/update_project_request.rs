use folio_core::ProjectPatch;

use serde::Deserialize;

/// Request body for updating a project; absent fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectPatch {
            title: req.title,
            content: req.content,
            image_url: req.image_url,
            skills: req.skills,
        }
    }
}
