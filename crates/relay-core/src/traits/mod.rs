//! Traits (ports) - define the interfaces the relay needs from infrastructure

mod resolver;

pub use resolver::{EntityResolver, ResolveResult};
