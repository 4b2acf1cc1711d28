//! Structured error annotation with cause chains
//!
//! This crate provides:
//! - [`Definition`]s and [`ErrorCode`]s: reusable, identity-bearing templates
//! - Wrapping that keeps the original failure as the cause of each new layer
//! - Optional call-site capture per layer
//! - Plain (`{}`) and verbose (`{:#}`, `{:?}`) rendering of the whole chain
//! - Hop-based matching: [`unwrap`], [`is`], [`find`], [`has_definition`],
//!   [`has_error_code`]
//!
//! ```
//! use std::error::Error as _;
//! use std::sync::Arc;
//! use errchain::{Definition, ErrorCode};
//!
//! static ERR_UPDATE_ONE_FAILED: Definition =
//!     Definition::new("ErrUpdateOneFailed", "db.UpdateOne failed");
//! static ERR_INTERNAL_SERVER_ERROR: ErrorCode =
//!     ErrorCode::new("ErrInternalServerError", 500, "Internal server error");
//!
//! type DynError = dyn std::error::Error + Send + Sync;
//!
//! let root: Arc<DynError> = Arc::from(Box::<DynError>::from("mock mongodb error"));
//! let inner = ERR_UPDATE_ONE_FAILED.wrap(root.clone(), &["SaveUser failed, uid: 123"]);
//! let outer = ERR_INTERNAL_SERVER_ERROR.wrap(inner, &["Login failed"]);
//!
//! assert_eq!(
//!     outer.to_string(),
//!     "ErrInternalServerError, Code=500, Msg=Internal server error, Login failed \
//!      <= ErrUpdateOneFailed, db.UpdateOne failed, SaveUser failed, uid: 123 \
//!      <= mock mongodb error"
//! );
//! assert!(errchain::is(&outer, &*root));
//! assert!(errchain::has_error_code(&outer, &ERR_INTERNAL_SERVER_ERROR));
//! assert!(errchain::has_definition(&outer, &ERR_UPDATE_ONE_FAILED));
//! assert!(outer.source().is_some());
//! ```

pub mod call_site;
pub mod code;
pub mod config;
pub mod definition;
pub mod error;
pub mod matching;

pub use call_site::{CallSite, Capture, FixedCapture, Frame, LocationCapture};
#[cfg(feature = "symbolize")]
pub use call_site::BacktraceCapture;
pub use code::{CodeNode, ErrorCode};
pub use config::{Config, ConfigError};
pub use definition::{Definition, DefinitionNode};
pub use error::*;
pub use matching::{
    chain, find, find_definition, find_error_code, has_definition, has_error_code, is,
    root_cause, unwrap, Chain,
};
