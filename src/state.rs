use std::sync::Arc;

use crate::{
    db::{DbPool, PgStore},
    store::Store,
};

/// Built once in `main` and handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub pool: Option<DbPool>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            store: Arc::new(PgStore::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn with_store(store: Arc<dyn Store>) -> Self {
        Self { store, pool: None }
    }
}
