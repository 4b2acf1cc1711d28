//! Error codes: numeric identities that cross a service boundary

use std::fmt;
use std::ptr;

use crate::call_site::CallSite;
use crate::config::{self, Config};
use crate::error::{IntoCause, Node};
use crate::Error;

/// A reusable error code meant to be reported outside the current system
///
/// Like [`Definition`](crate::Definition), codes are declared once and compared
/// by address.
#[derive(Debug)]
pub struct ErrorCode {
    name: &'static str,
    code: i32,
    message: &'static str,
}

impl ErrorCode {
    /// Declare an error code
    #[must_use]
    pub const fn new(name: &'static str, code: i32, message: &'static str) -> Self {
        Self {
            name,
            code,
            message,
        }
    }

    /// Code name, e.g. `ErrUnauthorized`
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Numeric code returned to clients
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Client-facing message
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Build an error annotated with this code
    #[track_caller]
    #[must_use]
    pub fn error(&'static self, messages: &[&str]) -> Error {
        self.error_with(&config::current(), messages)
    }

    /// [`error`](Self::error) with an explicit configuration
    #[track_caller]
    #[must_use]
    pub fn error_with(&'static self, config: &Config, messages: &[&str]) -> Error {
        Error::from_node(self.node(config, messages))
    }

    /// Annotate `cause` with this code
    #[track_caller]
    #[must_use]
    pub fn wrap<E: IntoCause>(&'static self, cause: E, messages: &[&str]) -> Error {
        self.wrap_with(&config::current(), cause, messages)
    }

    /// [`wrap`](Self::wrap) with an explicit configuration
    #[track_caller]
    #[must_use]
    pub fn wrap_with<E: IntoCause>(
        &'static self,
        config: &Config,
        cause: E,
        messages: &[&str],
    ) -> Error {
        Error::caused(self.node(config, messages), cause.into_cause())
    }

    /// Annotate an optional cause; no cause means no error
    #[track_caller]
    #[must_use]
    pub fn wrap_opt<E: IntoCause>(
        &'static self,
        cause: Option<E>,
        messages: &[&str],
    ) -> Option<Error> {
        let cause = cause?;
        Some(self.wrap(cause, messages))
    }

    #[track_caller]
    fn node(&'static self, config: &Config, messages: &[&str]) -> Node {
        Node::Code(CodeNode {
            code: self,
            message: messages.join(&*config.messages_separator),
            call_site: Error::capture(config),
        })
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for ErrorCode {}

/// Chain node that carries an [`ErrorCode`]
#[derive(Debug, Clone)]
pub struct CodeNode {
    pub(crate) code: &'static ErrorCode,
    pub(crate) message: String,
    pub(crate) call_site: CallSite,
}

impl CodeNode {
    /// The code this node was built from
    #[must_use]
    pub fn error_code(&self) -> &'static ErrorCode {
        self.code
    }

    /// Extra message joined at construction; empty when none was given
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the node was built
    #[must_use]
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    pub(crate) fn write_plain(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        write!(
            f,
            "{}, Code={}, Msg={}",
            self.code.name, self.code.code, self.code.message
        )?;
        if !self.message.is_empty() {
            f.write_str(&config.messages_separator)?;
            f.write_str(&self.message)?;
        }
        Ok(())
    }
}

impl fmt::Display for CodeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_plain(f, &config::current())
    }
}

impl std::error::Error for CodeNode {}
