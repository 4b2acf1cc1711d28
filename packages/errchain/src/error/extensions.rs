//! Extension traits for attaching chain layers to `Result` and `Option`
//!
//! `Ok` and `Some` pass through untouched, so there is never a layer without a
//! cause underneath it.

use super::constructors::wrap;
use super::types::{Error, IntoCause};
use crate::code::ErrorCode;
use crate::definition::Definition;

/// Wrap the error of a `Result` into a new chain layer
pub trait ResultExt<T> {
    /// Wrap the error with `definition`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_definition(self, definition: &'static Definition, messages: &[&str]) -> Result<T, Error>;

    /// Wrap the error with `code`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_code(self, code: &'static ErrorCode, messages: &[&str]) -> Result<T, Error>;

    /// Wrap the error beneath a plain message
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_msg(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`wrap_msg`](Self::wrap_msg), building the message only on error
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn with_wrap_msg<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E: IntoCause> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn wrap_definition(self, definition: &'static Definition, messages: &[&str]) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(definition.wrap(cause, messages)),
        }
    }

    #[track_caller]
    fn wrap_code(self, code: &'static ErrorCode, messages: &[&str]) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(code.wrap(cause, messages)),
        }
    }

    #[track_caller]
    fn wrap_msg(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(wrap(cause, message)),
        }
    }

    #[track_caller]
    fn with_wrap_msg<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(wrap(cause, message())),
        }
    }
}

/// Turn a missing value into a chain error
pub trait OptionExt<T> {
    /// `None` becomes `definition.error(messages)`
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `None`.
    fn ok_or_definition(self, definition: &'static Definition, messages: &[&str]) -> Result<T, Error>;

    /// `None` becomes `code.error(messages)`
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `None`.
    fn ok_or_code(self, code: &'static ErrorCode, messages: &[&str]) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_definition(self, definition: &'static Definition, messages: &[&str]) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(definition.error(messages)),
        }
    }

    #[track_caller]
    fn ok_or_code(self, code: &'static ErrorCode, messages: &[&str]) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(code.error(messages)),
        }
    }
}
