use folio_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization; the wire name for the image field
/// is exactly `imageURL`.
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub skills: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            content: p.content,
            image_url: p.image_url,
            skills: p.skills,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
