pub mod models;
pub mod validation;


pub use models::pokemon::{NewPokemon, Pokemon, PokemonPatch};
pub use models::project::{NewProject, Project, ProjectPatch};
pub use validation::{
    FieldError, ValidationErrors, validate_pokemon, validate_project,
};
