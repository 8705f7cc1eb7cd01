//! Shared foundation for the bimodal explorer crates
//!
//! Every crate in the workspace reports failures through the single
//! [`Error`] type defined here, so callers only ever match on one enum
//! regardless of whether a failure came from sampling, sorting, or a
//! histogram query.

pub mod error;
pub mod utils;

pub use error::{Error, Result};
pub use utils::{approx_eq, ensure_finite, WEIGHT_TOLERANCE};
