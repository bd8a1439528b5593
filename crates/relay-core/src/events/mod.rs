//! Platform events consumed by the relay

mod reaction_add;

pub use reaction_add::{ReactionAddEvent, ResolvedReaction};
