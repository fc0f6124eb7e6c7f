//! Component label derivation from event context metadata.
//!
//! Every upstream shape exposes contextual metadata through a different
//! accessor; the priority policy must be identical across all of them, so
//! the scan is written once against [`ContextLookup`].

/// Context keys consulted for the component label, in strict priority order.
pub const COMPONENT_KEYS: [&str; 3] = ["component", "server", "application"];

/// Access to an event's contextual metadata by key.
pub trait ContextLookup {
    fn context_value(&self, key: &str) -> Option<&str>;
}

/// Derive the logical service/application label for an event.
///
/// Returns the first present value among [`COMPONENT_KEYS`]; absence of all
/// three is not an error, just `None`.
pub fn component_label<C: ContextLookup>(source: &C) -> Option<String> {
    COMPONENT_KEYS
        .iter()
        .find_map(|key| source.context_value(key))
        .map(str::to_string)
}
