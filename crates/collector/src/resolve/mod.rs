//! Resolution domain — host display names and component labels.

pub mod component;
pub mod host;

pub use component::{component_label, ContextLookup, COMPONENT_KEYS};
pub use host::{HostResolver, ReverseDns, SystemDns};
