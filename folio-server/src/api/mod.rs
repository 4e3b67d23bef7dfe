pub mod delete_response;
pub mod error;
pub mod pokedex;
pub mod projects;

/// A field counts as present when it has non-whitespace content.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
