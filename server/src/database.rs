use crate::{error::DataError, models::User};
use std::collections::{HashMap, HashSet};

/// Immutable registry of users. Friend links are ids into the same table.
#[derive(Debug)]
pub struct Database {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl Database {
    /// Builds the fixed demo data: two cliques of three mutual friends.
    pub fn seeded() -> Result<Self, DataError> {
        // Every record exists before any link is assigned.
        let mut users = vec![
            User::new("0", "John Doe", 30, "Live and let live.", &portrait("men", 0)),
            User::new("1", "Jane Smith", 28, "Carpe diem.", &portrait("women", 1)),
            User::new("2", "Kevin Nguyen", 32, "Stay curious.", &portrait("men", 2)),
            User::new("3", "Jack Doe", 25, "Never give up.", &portrait("men", 3)),
            User::new("4", "Janice Doe", 27, "Dream big.", &portrait("women", 4)),
            User::new("5", "Shaniqua Doe", 29, "Be yourself.", &portrait("women", 5)),
        ];

        let links: [(usize, [usize; 2]); 6] = [
            (0, [1, 2]),
            (1, [0, 2]),
            (2, [0, 1]),
            (3, [4, 5]),
            (4, [3, 5]),
            (5, [3, 4]),
        ];
        for (user, friends) in links.iter() {
            let ids: Vec<String> = friends.iter().map(|&friend| users[friend].id.clone()).collect();
            users[*user].friends = ids;
        }

        Self::from_users(users)
    }

    /// Indexes `users` and checks them: ages are non-negative, and every
    /// friend link points at a known user other than the owner and is mirrored.
    pub fn from_users(users: Vec<User>) -> Result<Self, DataError> {
        if users.is_empty() {
            return Err(DataError::Empty);
        }

        let mut index = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            if index.insert(user.id.clone(), position).is_some() {
                return Err(DataError::DuplicateId(user.id.clone()));
            }
        }

        let database = Self { users, index };
        database.validate()?;
        Ok(database)
    }

    fn validate(&self) -> Result<(), DataError> {
        for user in &self.users {
            if user.age < 0 {
                return Err(DataError::NegativeAge {
                    user: user.id.clone(),
                    age: user.age,
                });
            }
            let mut seen = HashSet::new();
            for friend_id in &user.friends {
                if *friend_id == user.id {
                    return Err(DataError::SelfFriendship(user.id.clone()));
                }
                if !seen.insert(friend_id) {
                    return Err(DataError::DuplicateFriend {
                        user: user.id.clone(),
                        friend: friend_id.clone(),
                    });
                }
                let friend = self.get_user(friend_id).ok_or_else(|| DataError::UnknownFriend {
                    user: user.id.clone(),
                    friend: friend_id.clone(),
                })?;
                if !friend.friends.contains(&user.id) {
                    return Err(DataError::Asymmetric {
                        user: user.id.clone(),
                        friend: friend_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn default_user(&self) -> &User {
        // from_users rejects an empty set
        &self.users[0]
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.index.get(id).map(|&position| &self.users[position])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn friends_of(&self, user: &User) -> Vec<User> {
        user.friends
            .iter()
            .filter_map(|id| self.get_user(id))
            .cloned()
            .collect()
    }
}

fn portrait(gender: &str, number: u32) -> String {
    format!("https://randomuser.me/api/portraits/{}/{}.jpg", gender, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, friends: &[&str]) -> User {
        let mut user = User::new(id, &format!("user{}", id), 20, "", "");
        user.friends = friends.iter().map(|id| id.to_string()).collect();
        user
    }

    #[test]
    fn default_user_is_john_doe() {
        let database = Database::seeded().unwrap();
        let user = database.default_user();
        assert_eq!(user.id, "0");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.age, 30);
        assert_eq!(user.image_url, "https://randomuser.me/api/portraits/men/0.jpg");
    }

    #[test]
    fn seeded_cliques_are_mutual() {
        let database = Database::seeded().unwrap();
        assert_eq!(database.users().len(), 6);

        for clique in [["0", "1", "2"], ["3", "4", "5"]] {
            for id in clique {
                let member = database.get_user(id).unwrap();
                assert_eq!(member.friends.len(), 2);
                for friend in database.friends_of(member) {
                    assert!(clique.contains(&friend.id.as_str()));
                    assert!(friend.friends.contains(&member.id));
                }
            }
        }
    }

    #[test]
    fn friends_resolve_in_list_order() {
        let database = Database::seeded().unwrap();
        let names: Vec<_> = database
            .friends_of(database.get_user("4").unwrap())
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["Jack Doe", "Shaniqua Doe"]);
    }

    #[test]
    fn summaries_follow_friend_count() {
        let database = Database::seeded().unwrap();
        for user in database.users() {
            assert_eq!(
                user.summary(),
                format!(
                    "Hello, my name is: {}. I am {} years old. I have {} friends.",
                    user.name,
                    user.age,
                    user.friends.len()
                )
            );
        }
        assert_eq!(
            database.get_user("2").unwrap().summary(),
            "Hello, my name is: Kevin Nguyen. I am 32 years old. I have 2 friends."
        );
    }

    #[test]
    fn unknown_id_is_none() {
        let database = Database::seeded().unwrap();
        assert!(database.get_user("6").is_none());
    }

    #[test]
    fn rejects_broken_graphs() {
        assert_eq!(Database::from_users(vec![]).unwrap_err(), DataError::Empty);

        assert_eq!(
            Database::from_users(vec![user("a", &[]), user("a", &[])]).unwrap_err(),
            DataError::DuplicateId("a".to_owned())
        );

        let mut young = user("a", &[]);
        young.age = -1;
        assert_eq!(
            Database::from_users(vec![young]).unwrap_err(),
            DataError::NegativeAge {
                user: "a".to_owned(),
                age: -1
            }
        );

        assert_eq!(
            Database::from_users(vec![user("a", &["a"])]).unwrap_err(),
            DataError::SelfFriendship("a".to_owned())
        );

        assert_eq!(
            Database::from_users(vec![user("a", &["z"])]).unwrap_err(),
            DataError::UnknownFriend {
                user: "a".to_owned(),
                friend: "z".to_owned()
            }
        );

        assert_eq!(
            Database::from_users(vec![user("a", &["b", "b"]), user("b", &["a"])]).unwrap_err(),
            DataError::DuplicateFriend {
                user: "a".to_owned(),
                friend: "b".to_owned()
            }
        );

        assert_eq!(
            Database::from_users(vec![user("a", &["b"]), user("b", &[])]).unwrap_err(),
            DataError::Asymmetric {
                user: "a".to_owned(),
                friend: "b".to_owned()
            }
        );
    }

    #[test]
    fn accepts_users_without_friends() {
        let mut newborn = user("solo", &[]);
        newborn.age = 0;
        let database = Database::from_users(vec![newborn]).unwrap();
        assert!(database.friends_of(database.default_user()).is_empty());
    }
}
