use std::sync::Arc;

use folio_db::ConnectionManager;

/// Shared state handed to every handler.
///
/// The connection manager is the only shared mutable state in the server;
/// everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<ConnectionManager>,
}
