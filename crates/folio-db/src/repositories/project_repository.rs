//! Project repository for CRUD operations on portfolio projects.
//!
//! Same write-layer ownership rules as the Pokédex repository. The skills
//! list is stored as a JSON array in a TEXT column and decoded on read.

use crate::repositories::{decode_timestamp, decode_uuid};
use crate::{DbError, Result as DbErrorResult};

use folio_core::{NewProject, Project, ProjectPatch, validation};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    title: String,
    content: String,
    image_url: String,
    skills: String,
    created_at: i64,
    updated_at: i64,
}

/// Explicit mapping from the stored representation to the public record.
fn map_row(row: ProjectRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: decode_uuid(&row.id, "projects.id")?,
        title: row.title,
        content: row.content,
        image_url: row.image_url,
        skills: decode_skills(&row.skills)?,
        created_at: decode_timestamp(row.created_at, "projects.created_at")?,
        updated_at: decode_timestamp(row.updated_at, "projects.updated_at")?,
    })
}

#[track_caller]
fn decode_skills(stored: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(stored).map_err(|e| DbError::Decode {
        message: format!("Invalid JSON in projects.skills: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn encode_skills(skills: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(skills).map_err(|e| DbError::Decode {
        message: format!("Failed to encode projects.skills: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All projects, newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, content, image_url, skills, created_at, updated_at
                FROM projects
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_row).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, content, image_url, skills, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_row).transpose()
    }

    /// Validates, persists, and returns the stored record with its
    /// assigned id and timestamps.
    pub async fn create(&self, input: &NewProject) -> DbErrorResult<Project> {
        let title = input.title.trim();
        let content = input.content.trim();
        let image_url = input.image_url.trim();

        validation::validate_project(title, content, image_url, &input.skills)?;

        let project = Project::new(
            title.to_string(),
            content.to_string(),
            image_url.to_string(),
            input.skills.clone(),
        );

        sqlx::query(
            r#"
                INSERT INTO projects (id, title, content, image_url, skills, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.content)
        .bind(&project.image_url)
        .bind(encode_skills(&project.skills)?)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    /// Applies only the provided fields, re-validates the result, and
    /// returns the updated record, or `None` for an unknown id.
    pub async fn update(&self, id: Uuid, patch: &ProjectPatch) -> DbErrorResult<Option<Project>> {
        let Some(mut project) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        project.apply(patch);

        validation::validate_project(
            &project.title,
            &project.content,
            &project.image_url,
            &project.skills,
        )?;

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET title = ?, content = ?, image_url = ?, skills = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.content)
        .bind(&project.image_url)
        .bind(encode_skills(&project.skills)?)
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        // The row can vanish between the read and this write
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(project))
    }

    /// Returns whether a row was removed; an already-absent id is `false`,
    /// never an error.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
