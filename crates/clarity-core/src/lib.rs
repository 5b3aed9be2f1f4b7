//! Domain layer of Clarity.
//!
//! - [`analysis`]: the analysis model, the service boundary and wire
//!   normalization
//! - [`highlight`]: locating reported phrases in the submitted text
//! - [`state`]: the session state store (theme, font size, name, history)
//! - [`practice`]: built-in practice texts
//! - [`config`]: configuration model

pub mod analysis;
pub mod config;
pub mod error;
pub mod highlight;
pub mod practice;
pub mod state;

// Re-export common error type
pub use error::{ClarityError, Result};
