use serde::{Deserialize, Serialize};

/// A single heap slot: an opaque payload tagged with the priority that orders it.
///
/// Element and priority always travel together, so swapping two slots can never
/// leave a payload paired with someone else's priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T, P> {
    pub element: T,
    pub priority: P,
}
