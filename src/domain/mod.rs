//! Domain layer for the Gazette plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`article`]: Article model with lenient feed decoding

pub mod article;
pub mod error;

pub use article::{Article, Tags};
pub use error::{GazetteError, Result};
