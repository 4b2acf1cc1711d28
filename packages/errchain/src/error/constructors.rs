//! Error constructors and methods

use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

use super::types::{Cause, CauseLink, Error, Head, IntoCause, Leaf, Located, Node};
use crate::call_site::CallSite;
use crate::code::ErrorCode;
use crate::config::{self, Config};
use crate::definition::Definition;

impl Error {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            inner: Arc::new(node),
        }
    }

    pub(crate) fn caused(upper: Node, lower: Cause) -> Self {
        Self::from_node(Node::Cause(CauseLink {
            upper: Box::new(upper),
            lower,
        }))
    }

    /// Capture the application call site when `config` asks for it
    #[track_caller]
    pub(crate) fn capture(config: &Config) -> CallSite {
        if config.capture_call_site {
            config.capturer.capture(Location::caller())
        } else {
            CallSite::absent()
        }
    }

    /// Create a terminal error from a plain message
    #[track_caller]
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::msg_with(&config::current(), message)
    }

    /// [`msg`](Self::msg) with an explicit configuration
    #[track_caller]
    #[must_use]
    pub fn msg_with(config: &Config, message: impl Into<String>) -> Self {
        Self::from_node(Self::leaf(config, message.into()))
    }

    #[track_caller]
    fn leaf(config: &Config, message: String) -> Node {
        Node::Leaf(Leaf {
            message,
            call_site: Self::capture(config),
        })
    }

    /// The definition carried by this layer, if any
    ///
    /// Only this layer is inspected; use [`find_definition`](crate::find_definition)
    /// to search the whole chain.
    #[must_use]
    pub fn definition(&self) -> Option<&'static Definition> {
        match self.inner.head() {
            Head::Definition(node) => Some(node.definition),
            _ => None,
        }
    }

    /// The error code carried by this layer, if any
    #[must_use]
    pub fn error_code(&self) -> Option<&'static ErrorCode> {
        match self.inner.head() {
            Head::Code(node) => Some(node.code),
            _ => None,
        }
    }

    /// Where this layer was built; absent unless capture was enabled
    #[must_use]
    pub fn call_site(&self) -> &CallSite {
        self.inner.head().call_site()
    }

    /// The wrapped cause, one hop down
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.source()
    }

    /// Typed access to this layer's own node
    ///
    /// `T` is one of [`Leaf`], [`DefinitionNode`](crate::DefinitionNode) or
    /// [`CodeNode`](crate::CodeNode). A cause link answers for its upper node
    /// only; reaching the cause takes a hop.
    #[must_use]
    pub fn node<T: 'static>(&self) -> Option<&T> {
        let head: &dyn std::any::Any = match self.inner.head() {
            Head::Leaf(node) => node,
            Head::Definition(node) => node,
            Head::Code(node) => node,
            Head::Located(_) => return None,
        };
        head.downcast_ref()
    }

    /// Whether both handles share the same node
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Whether `target` appears anywhere along this chain
    #[must_use]
    pub fn is(&self, target: &(dyn StdError + 'static)) -> bool {
        crate::matching::is(self, target)
    }

    /// See [`has_definition`](crate::has_definition)
    #[must_use]
    pub fn has_definition(&self, target: &Definition) -> bool {
        crate::matching::has_definition(self, target)
    }

    /// See [`has_error_code`](crate::has_error_code)
    #[must_use]
    pub fn has_error_code(&self, target: &ErrorCode) -> bool {
        crate::matching::has_error_code(self, target)
    }
}

/// Wrap `cause` beneath a plain message
///
/// `cause` is any `Error + Send + Sync + 'static` or a [`Cause`]. A concrete
/// `Arc<E>` is kept as an `Arc<E>` value, so hand it over as
/// [`Cause::shared`] when it must stay matchable by [`is`](crate::is) and
/// [`find`](crate::find). A `Box<dyn Error + Send + Sync>` goes through
/// `Cause::from`.
///
/// ```
/// let err = errchain::wrap(std::fmt::Error, "json.Unmarshal failed");
/// assert_eq!(
///     err.to_string(),
///     "json.Unmarshal failed <= an error occurred when formatting an argument"
/// );
/// ```
#[track_caller]
#[must_use]
pub fn wrap<E: IntoCause>(cause: E, message: impl Into<String>) -> Error {
    wrap_with(&config::current(), cause, message)
}

/// [`wrap`] with an explicit configuration
#[track_caller]
#[must_use]
pub fn wrap_with<E: IntoCause>(config: &Config, cause: E, message: impl Into<String>) -> Error {
    Error::caused(Error::leaf(config, message.into()), cause.into_cause())
}

/// [`wrap`] an optional cause; `None` in, `None` out
#[track_caller]
#[must_use]
pub fn wrap_opt<E: IntoCause>(cause: Option<E>, message: impl Into<String>) -> Option<Error> {
    let cause = cause?;
    Some(wrap(cause, message))
}

/// Record where `cause` was observed without adding any text
///
/// The plain rendering is the cause's own; the verbose rendering adds the call
/// site when capture is enabled.
#[track_caller]
#[must_use]
pub fn locate<E: IntoCause>(cause: E) -> Error {
    locate_with(&config::current(), cause)
}

/// [`locate`] with an explicit configuration
#[track_caller]
#[must_use]
pub fn locate_with<E: IntoCause>(config: &Config, cause: E) -> Error {
    Error::from_node(Node::Located(Located {
        error: cause.into_cause(),
        call_site: Error::capture(config),
    }))
}
