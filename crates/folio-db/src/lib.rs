pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connection_manager::{ConnectionManager, ConnectionSettings};
pub use error::{DbError, Result};
pub use repositories::pokemon_repository::PokemonRepository;
pub use repositories::project_repository::ProjectRepository;
