use crate::context::GraphqlContext;
use juniper::{GraphQLObject, ID};
use serde::Serialize;

/// A person profile. Friends are stored as ids and resolved through the
/// database held by the request context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub friends: Vec<String>,
    pub motto: String,
    pub image_url: String,
}

impl User {
    pub fn new(id: &str, name: &str, age: i32, motto: &str, image_url: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            age,
            friends: vec![],
            motto: motto.to_owned(),
            image_url: image_url.to_owned(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Hello, my name is: {}. I am {} years old. I have {} friends.",
            self.name,
            self.age,
            self.friends.len()
        )
    }
}

#[juniper::graphql_object(context = GraphqlContext)]
impl User {
    fn id(&self) -> ID {
        ID::new(self.id.as_str())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn friends(&self, ctx: &GraphqlContext) -> Vec<User> {
        ctx.database().friends_of(self)
    }

    fn motto(&self) -> &str {
        &self.motto
    }

    fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Short self-introduction built from the current name, age and friend count.
    #[graphql(name = "summary")]
    fn summary_field(&self) -> String {
        self.summary()
    }

    #[graphql(deprecated = "Use `summary`.")]
    fn process_title(&self) -> String {
        self.summary()
    }
}

/// Service status, served both as a GraphQL object and as the `GET /` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, GraphQLObject)]
pub struct Health {
    pub status: String,
    pub graphql: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
            graphql: "/graphql".to_owned(),
        }
    }
}
