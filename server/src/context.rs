use crate::database::Database;
use std::sync::Arc;

/// Per-request view of the shared user registry.
#[derive(Clone, Debug)]
pub struct GraphqlContext(Arc<Database>);

impl GraphqlContext {
    pub fn database(&self) -> &Database {
        &self.0
    }
}

impl From<Arc<Database>> for GraphqlContext {
    fn from(database: Arc<Database>) -> Self {
        Self(database)
    }
}

impl juniper::Context for GraphqlContext {}
