//! User entity - represents a platform user account

use crate::value_objects::Snowflake;

/// Platform user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// Legacy `#1234` suffix; `"0"` for accounts migrated to unique usernames
    pub discriminator: Option<String>,
    pub global_name: Option<String>,
    pub bot: bool,
}

impl User {
    /// Create a new non-bot User with required fields
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            discriminator: None,
            global_name: None,
            bot: false,
        }
    }

    /// Get the display tag
    ///
    /// `username#discriminator` for legacy accounts, otherwise just the username.
    pub fn tag(&self) -> String {
        match self.discriminator.as_deref() {
            Some(discriminator) if !discriminator.is_empty() && discriminator != "0" => {
                format!("{}#{}", self.username, discriminator)
            }
            _ => self.username.clone(),
        }
    }
}

/// Guild member data attached to guild reaction events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub user: Option<User>,
    pub nick: Option<String>,
}
