//! Field-level validation for both entities.
//!
//! This module is the single source of constraint truth: the HTTP handlers
//! use it for their pre-checks and the repositories run it again on the
//! write path, so a record violating any constraint is never persisted.
//! Limits are character counts, applied after trimming.

use serde::Serialize;

pub const POKEMON_NAME_MIN: usize = 3;
pub const POKEMON_NAME_MAX: usize = 25;
pub const POKEMON_TYPE_MIN: usize = 3;
pub const POKEMON_TYPE_MAX: usize = 20;

pub const PROJECT_TITLE_MIN: usize = 3;
pub const PROJECT_TITLE_MAX: usize = 100;
pub const PROJECT_CONTENT_MIN: usize = 10;

/// One constraint violation, attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// The full set of violations for one payload.
///
/// Serializes as a plain list so it can ride in the response envelope's
/// `details` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a Pokémon record's fields. Inputs are expected pre-trimmed.
pub fn validate_pokemon(
    name: &str,
    type_1: &str,
    type_2: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_required(&mut errors, "name", name);
    check_length(&mut errors, "name", name, POKEMON_NAME_MIN, POKEMON_NAME_MAX);

    check_required(&mut errors, "type_1", type_1);
    check_length(&mut errors, "type_1", type_1, POKEMON_TYPE_MIN, POKEMON_TYPE_MAX);

    // Present-but-empty is invalid here; absence is expressed with None,
    // so the empty-skip in check_length must not apply.
    if let Some(type_2) = type_2 {
        let len = type_2.chars().count();
        if len < POKEMON_TYPE_MIN || len > POKEMON_TYPE_MAX {
            errors.push(
                "type_2",
                format!(
                    "must be between {} and {} characters",
                    POKEMON_TYPE_MIN, POKEMON_TYPE_MAX
                ),
            );
        }
    }

    errors.into_result()
}

/// Validate a project record's fields. Inputs are expected pre-trimmed.
pub fn validate_project(
    title: &str,
    content: &str,
    image_url: &str,
    skills: &[String],
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_required(&mut errors, "title", title);
    check_length(&mut errors, "title", title, PROJECT_TITLE_MIN, PROJECT_TITLE_MAX);

    check_required(&mut errors, "content", content);
    if !content.is_empty() && content.chars().count() < PROJECT_CONTENT_MIN {
        errors.push(
            "content",
            format!("must contain at least {} characters", PROJECT_CONTENT_MIN),
        );
    }

    check_required(&mut errors, "imageURL", image_url);

    if skills.is_empty() {
        errors.push("skills", "at least one skill is required");
    }

    errors.into_result()
}

fn check_required(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, "is required");
    }
}

fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize, max: usize) {
    // Required-ness is reported separately; don't pile on for empty values.
    if value.is_empty() {
        return;
    }

    let len = value.chars().count();
    if len < min || len > max {
        errors.push(
            field,
            format!("must be between {} and {} characters", min, max),
        );
    }
}
