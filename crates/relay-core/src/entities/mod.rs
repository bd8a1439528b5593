//! Platform entities - the objects a reaction notification refers to

mod emoji;
mod message;
mod user;

pub use emoji::ReactionEmoji;
pub use message::{Message, MessageReaction};
pub use user::{Member, User};
