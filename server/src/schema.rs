use crate::{
    context::GraphqlContext,
    models::{Health, User},
};
use juniper::{EmptyMutation, EmptySubscription, RootNode};
use std::{fs, io, path::Path};

#[derive(Debug)]
pub struct Query;

#[juniper::graphql_object(context = GraphqlContext)]
impl Query {
    fn health() -> Health {
        Health::ok()
    }

    /// Greets `name` as given.
    fn echo(name: String) -> String {
        format!("Hello {}", name)
    }

    fn default_user(ctx: &GraphqlContext) -> User {
        ctx.database().default_user().clone()
    }

    fn test_method() -> &'static str {
        "What's up iOS!!!"
    }
}

pub type GraphqlRoot =
    RootNode<'static, Query, EmptyMutation<GraphqlContext>, EmptySubscription<GraphqlContext>>;

pub fn init() -> GraphqlRoot {
    GraphqlRoot::new(Query, EmptyMutation::new(), EmptySubscription::new())
}

/// Schema definition language text for `root`.
pub fn sdl(root: &GraphqlRoot) -> String {
    root.as_sdl()
}

/// Writes the schema definition to `path`, replacing any previous export.
pub fn export(root: &GraphqlRoot, path: &Path) -> io::Result<()> {
    fs::write(path, sdl(root))
}
