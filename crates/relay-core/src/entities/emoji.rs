//! Reaction emoji descriptor

use crate::value_objects::Snowflake;

/// Name written into the key of a custom emoji whose name was withheld
const MISSING_NAME: &str = "null";

/// Emoji attached to a reaction
///
/// Standard emoji carry only a unicode `name`; custom emoji also carry the
/// platform `id`. The platform sends no name for custom emoji that were
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEmoji {
    pub id: Option<Snowflake>,
    pub name: Option<String>,
    pub animated: bool,
}

impl ReactionEmoji {
    /// Create a standard (unicode) emoji
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            animated: false,
        }
    }

    /// Create a custom emoji
    pub fn custom(name: Option<String>, id: Snowflake, animated: bool) -> Self {
        Self {
            id: Some(id),
            name,
            animated,
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }

    /// Matching key: `name:id` for custom emoji, `name` otherwise
    ///
    /// A custom emoji without a name keys as `null:id`.
    pub fn key(&self) -> String {
        match self.id {
            Some(id) => format!("{}:{id}", self.name().unwrap_or(MISSING_NAME)),
            None => self.name().unwrap_or_default().to_string(),
        }
    }

    /// Check if two descriptors denote the same emoji
    ///
    /// Custom emoji compare by id, standard emoji by name.
    pub fn same_as(&self, other: &ReactionEmoji) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}
