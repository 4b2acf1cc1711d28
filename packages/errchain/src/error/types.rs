//! Core chain types

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::call_site::CallSite;
use crate::code::CodeNode;
use crate::definition::DefinitionNode;

/// One link of an error chain
///
/// A cheap-to-clone handle over an immutable node. Clones share the node, so a
/// chain can be logged in one place and returned in another without copying.
#[derive(Clone)]
pub struct Error {
    pub(crate) inner: Arc<Node>,
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Leaf(Leaf),
    Definition(DefinitionNode),
    Code(CodeNode),
    /// A foreign error annotated with nothing but a call site
    Located(Located),
    Cause(CauseLink),
}

#[derive(Debug, Clone)]
pub(crate) struct Located {
    pub(crate) error: Cause,
    pub(crate) call_site: CallSite,
}

/// `upper` describes this layer, `lower` is what it wraps
#[derive(Debug, Clone)]
pub(crate) struct CauseLink {
    pub(crate) upper: Box<Node>,
    pub(crate) lower: Cause,
}

/// The lower half of a cause link
#[derive(Debug, Clone)]
pub enum Cause {
    /// Another chain built by this crate
    Chain(Error),
    /// Any other error; the chain ends here unless it reports a `source()`
    Foreign(Arc<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Share a concretely typed error
    ///
    /// The cause keeps pointing at the same allocation, so [`is`](crate::is)
    /// against `&*err` and [`find`](crate::find) for `E` both succeed after
    /// wrapping. Passing an `Arc<E>` straight to a wrap function stores it as a
    /// value of type `Arc<E>` instead.
    #[must_use]
    pub fn shared<E>(err: Arc<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Foreign(err)
    }

    pub(crate) fn as_dyn(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Chain(err) => err,
            Self::Foreign(err) => &**err,
        }
    }
}

/// Conversion of a cause argument into a [`Cause`]
///
/// Implemented for every `Error + Send + Sync + 'static` and for [`Cause`]
/// itself. Chains built by this crate are linked as chains, and
/// `Arc<dyn Error + Send + Sync>` handles are shared as-is (so identity checks
/// against the same `Arc` succeed). Anything else is moved into a new
/// allocation. Use [`Cause::shared`] for an `Arc<E>` and `Cause::from` for a
/// `Box<dyn Error + Send + Sync>`.
pub trait IntoCause {
    /// Perform the conversion
    fn into_cause(self) -> Cause;
}

impl<E> IntoCause for E
where
    E: StdError + Send + Sync + 'static,
{
    fn into_cause(self) -> Cause {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(self);
        let boxed = match boxed.downcast::<Error>() {
            Ok(chain) => return Cause::Chain(*chain),
            Err(other) => other,
        };
        match boxed.downcast::<Arc<dyn StdError + Send + Sync>>() {
            Ok(shared) => Cause::Foreign(*shared),
            Err(other) => Cause::Foreign(Arc::from(other)),
        }
    }
}

impl IntoCause for Cause {
    fn into_cause(self) -> Cause {
        self
    }
}

/// Boxed errors do not implement `Error` themselves; convert them here first
impl From<Box<dyn StdError + Send + Sync>> for Cause {
    fn from(boxed: Box<dyn StdError + Send + Sync>) -> Self {
        match boxed.downcast::<Error>() {
            Ok(chain) => Self::Chain(*chain),
            Err(other) => Self::Foreign(Arc::from(other)),
        }
    }
}

/// Terminal node holding a plain message
#[derive(Debug, Clone)]
pub struct Leaf {
    pub(crate) message: String,
    pub(crate) call_site: CallSite,
}

impl Leaf {
    /// The message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the node was built
    #[must_use]
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Leaf {}

/// Borrowed view of the node that answers capability and call-site questions
#[derive(Debug, Clone, Copy)]
pub(crate) enum Head<'a> {
    Leaf(&'a Leaf),
    Definition(&'a DefinitionNode),
    Code(&'a CodeNode),
    Located(&'a Located),
}

impl Node {
    /// A cause link answers for its upper node, never for its cause
    pub(crate) fn head(&self) -> Head<'_> {
        match self {
            Self::Cause(link) => link.upper.head(),
            Self::Leaf(node) => Head::Leaf(node),
            Self::Definition(node) => Head::Definition(node),
            Self::Code(node) => Head::Code(node),
            Self::Located(node) => Head::Located(node),
        }
    }

    pub(crate) fn lower(&self) -> Option<&Cause> {
        match self {
            Self::Cause(link) => Some(&link.lower),
            Self::Located(located) => Some(&located.error),
            Self::Leaf(_) | Self::Definition(_) | Self::Code(_) => None,
        }
    }
}

impl<'a> Head<'a> {
    pub(crate) fn call_site(self) -> &'a CallSite {
        match self {
            Self::Leaf(node) => &node.call_site,
            Self::Definition(node) => &node.call_site,
            Self::Code(node) => &node.call_site,
            Self::Located(node) => &node.call_site,
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.lower().map(Cause::as_dyn)
    }
}

/// Rendering style for [`Error::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Single line, every layer joined by the chain separator
    #[default]
    Plain,
    /// One section per layer with call sites and `cause:` markers
    Verbose,
}

/// Result type alias using our Error
pub type Result<T, E = Error> = std::result::Result<T, E>;
