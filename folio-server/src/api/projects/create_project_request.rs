use serde::Deserialize;

/// Request body for creating a project.
///
/// Every field is optional at the deserialization layer so that missing
/// required fields surface as a 400 with an explicit message from the
/// handler's presence check, not as a body rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}
