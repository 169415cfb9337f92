//! Store module providing the durable content capability.
//!
//! The store holds the authoritative copy of every content record. The
//! service layer only ever talks to the [`ContentStore`] trait; the
//! reference [`MemoryStore`] backs it for local runs and tests, with a
//! configurable artificial latency standing in for a real database:
//!
//! ```toml
//! [store]
//! latency_ms = 100
//! ```

mod error;
mod memory;
mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::ContentStore;
