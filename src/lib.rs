//! Array-backed binary min-heap priority queues.
//!
//! [`MinHeap`] associates opaque elements with orderable priorities and always
//! exposes the element with the smallest priority in constant time.
//! [`BoundedMinHeap`] layers a fixed capacity on top to track the top N
//! largest entries out of an arbitrarily long stream.
//!
//! Both structures are single-threaded and perform no internal locking; wrap
//! an instance behind a mutex if it must be shared across threads.

mod bounded_heap;
mod heap;
mod types;

pub use bounded_heap::BoundedMinHeap;
pub use heap::MinHeap;
pub use types::Entry;
