//! Shared building blocks for the capdash dashboard
//!
//! Holds the pieces that are independent of the HTTP service: the error
//! taxonomy, the data-URL codec, and the dataset key namespace.

pub mod codec;
pub mod dataset;
pub mod error;

pub use error::{Error, Result};
