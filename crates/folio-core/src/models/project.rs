//! Project entity - a portfolio showcase item.

use crate::models;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted portfolio project.
///
/// `skills` is an ordered, non-empty list; the creation form caps the
/// selection at three client-side but the server does not enforce a maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// URL of the project's showcase image
    pub image_url: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a fresh project with a new id and current timestamps.
    pub fn new(title: String, content: String, image_url: String, skills: Vec<String>) -> Self {
        let now = models::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            skills,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; untouched fields keep their prior values.
    /// `updated_at` is bumped unconditionally, even for an empty patch.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(ref title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(ref content) = patch.content {
            self.content = content.trim().to_string();
        }
        if let Some(ref image_url) = patch.image_url {
            self.image_url = image_url.trim().to_string();
        }
        if let Some(ref skills) = patch.skills {
            self.skills = skills.clone();
        }
        self.updated_at = models::now();
    }
}

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub skills: Vec<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.image_url.is_none()
            && self.skills.is_none()
    }
}
