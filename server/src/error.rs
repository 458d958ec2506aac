use thiserror::Error;

/// Reasons the static friend graph can be rejected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("user set is empty")]
    Empty,
    #[error("user id {0:?} appears more than once")]
    DuplicateId(String),
    #[error("user {user:?} lists unknown friend {friend:?}")]
    UnknownFriend { user: String, friend: String },
    #[error("user {user:?} has negative age {age}")]
    NegativeAge { user: String, age: i32 },
    #[error("user {0:?} lists themselves as a friend")]
    SelfFriendship(String),
    #[error("user {user:?} lists friend {friend:?} more than once")]
    DuplicateFriend { user: String, friend: String },
    #[error("user {user:?} lists {friend:?} as a friend, but not the other way around")]
    Asymmetric { user: String, friend: String },
}
