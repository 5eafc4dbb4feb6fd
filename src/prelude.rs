//! Prelude module for plate_dates crate.
//!
//! Re-exports the derive_more macros the crate's types use.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, Into};
