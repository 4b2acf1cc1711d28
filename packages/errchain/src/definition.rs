//! Error definitions: named templates for intra-system diagnosis

use std::fmt;
use std::ptr;

use crate::call_site::CallSite;
use crate::config::{self, Config};
use crate::error::{IntoCause, Node};
use crate::Error;

/// A reusable, named error template
///
/// Definitions are declared once, normally as `static` items, and compared by
/// address: two definitions with the same name and description are still
/// different definitions.
///
/// ```
/// use errchain::Definition;
///
/// static ERR_UPDATE_ONE_FAILED: Definition =
///     Definition::new("ErrUpdateOneFailed", "db.UpdateOne failed");
///
/// let err = ERR_UPDATE_ONE_FAILED.error(&["SaveUser failed, uid: 123"]);
/// assert_eq!(
///     err.to_string(),
///     "ErrUpdateOneFailed, db.UpdateOne failed, SaveUser failed, uid: 123"
/// );
/// ```
#[derive(Debug)]
pub struct Definition {
    name: &'static str,
    description: &'static str,
}

impl Definition {
    /// Declare a definition
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    /// Definition name, e.g. `ErrNotFound`
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Build an error annotated with this definition
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

    /// Annotate `cause` with this definition
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
        Node::Definition(DefinitionNode {
            definition: self,
            message: messages.join(&*config.messages_separator),
            call_site: Error::capture(config),
        })
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Definition {}

/// Chain node that carries a [`Definition`]
#[derive(Debug, Clone)]
pub struct DefinitionNode {
    pub(crate) definition: &'static Definition,
    pub(crate) message: String,
    pub(crate) call_site: CallSite,
}

impl DefinitionNode {
    /// The definition this node was built from
    #[must_use]
    pub fn definition(&self) -> &'static Definition {
        self.definition
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
        f.write_str(self.definition.name)?;
        f.write_str(&config.messages_separator)?;
        f.write_str(self.definition.description)?;
        if !self.message.is_empty() {
            f.write_str(&config.messages_separator)?;
            f.write_str(&self.message)?;
        }
        Ok(())
    }
}

impl fmt::Display for DefinitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_plain(f, &config::current())
    }
}

impl std::error::Error for DefinitionNode {}
