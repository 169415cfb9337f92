//! Cache module providing the in-process content cache capability.
//!
//! The cache is a disposable mirror of the store: reads consult it first,
//! store-satisfied reads and every successful write refresh it, and a
//! delete clears it before touching the store. It is constructed once at
//! startup and shared by reference; there are no process-wide globals.
//!
//! # Configuration
//!
//! ```toml
//! [cache]
//! enabled = true
//! ```
//!
//! With `enabled = false` a [`NoOpCache`] is injected instead and every
//! read goes straight to the store.

mod error;
mod memory;
mod noop;
mod traits;

pub use error::CacheError;
pub use memory::MemoryCache;
pub use noop::NoOpCache;
pub use traits::ContentCache;
