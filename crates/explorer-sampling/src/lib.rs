//! Sample generation for the bimodal explorer
//!
//! This crate turns a validated Gaussian mixture description into a flat,
//! unordered buffer of samples. Generation is the first of the two
//! construction phases; the buffer is handed to the sorted store in
//! `explorer-histogram` and never touched again.
//!
//! # Examples
//!
//! ```rust
//! use explorer_sampling::{MixtureComponent, MixtureSampler, MixtureSpec, SampleGenerator};
//!
//! let spec = MixtureSpec::new(vec![
//!     MixtureComponent::new(0.0, 8.0, 0.06),
//!     MixtureComponent::new(50.0, 13.8, 0.94),
//! ])
//! .unwrap();
//!
//! let sampler = MixtureSampler::with_seed(spec, 42);
//! let samples = sampler.generate(10_000).unwrap();
//! assert_eq!(samples.len(), 10_000);
//! ```
//!
//! Component sample counts are allocated with `floor(n * weight)` for every
//! component but the last, which absorbs the remainder:
//!
//! ```rust
//! use explorer_sampling::MixtureSpec;
//!
//! let spec = MixtureSpec::bimodal((0.0, 1.0, 0.3), (5.0, 1.0, 0.7)).unwrap();
//! assert_eq!(spec.component_counts(11), vec![3, 8]);
//! ```

pub mod generator;
pub mod mixture;

pub use generator::{generate, MixtureSampler, SampleGenerator};
pub use mixture::{MixtureComponent, MixtureSpec};

pub use explorer_core::{Error, Result};
