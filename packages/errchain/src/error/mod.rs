//! Error chain values
//!
//! Provides the chain node handle and everything built around it:
//! - Construction and wrapping with optional call-site capture
//! - Plain and verbose rendering
//! - `Result`/`Option` extensions and early-return macros
//! - Structured logging of whole chains

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod types;

pub use constructors::{locate, locate_with, wrap, wrap_opt, wrap_with};
pub use extensions::{OptionExt, ResultExt};
pub use logging::ChainLogger;
pub use types::{Cause, Error, IntoCause, Leaf, Result, Style};

pub(crate) use types::Node;
