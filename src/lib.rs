//! Armenian transliteration and product search.
//!
//! Re-exports the engine crates and owns process-wide logging setup.

mod trace_init;

pub use tarr_core as translit;
pub use tarr_search as search;

pub use trace_init::init_logging;
#[cfg(feature = "trace")]
pub use trace_init::init_tracing;
