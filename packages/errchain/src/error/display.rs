//! Display and trait implementations for Error
//!
//! `{}` renders the plain single-line form, `{:#}` and `{:?}` the verbose form.
//! Rendering is a pure read of the chain.

use std::fmt;

use super::types::{Cause, Error, Head, Node, Style};
use crate::config::{self, Config};

impl Node {
    fn write_plain(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        match self {
            Self::Leaf(node) => f.write_str(&node.message),
            Self::Definition(node) => node.write_plain(f, config),
            Self::Code(node) => node.write_plain(f, config),
            Self::Located(node) => node.error.write_plain(f, config),
            Self::Cause(link) => {
                link.upper.write_plain(f, config)?;
                f.write_str(&config.chain_separator)?;
                link.lower.write_plain(f, config)
            }
        }
    }

    fn write_verbose(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        match self {
            Self::Cause(link) => {
                link.upper.write_verbose(f, config)?;
                f.write_str("\ncause: ")?;
                link.lower.write_verbose(f, config)
            }
            other => {
                other.write_plain(f, config)?;
                other.head().call_site().write_section(f)
            }
        }
    }

    fn write_own(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        match self.head() {
            Head::Leaf(node) => f.write_str(&node.message),
            Head::Definition(node) => node.write_plain(f, config),
            Head::Code(node) => node.write_plain(f, config),
            Head::Located(node) => node.error.write_plain(f, config),
        }
    }
}

impl Cause {
    fn write_plain(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        match self {
            Self::Chain(err) => err.inner.write_plain(f, config),
            Self::Foreign(err) => write!(f, "{err}"),
        }
    }

    // Foreign errors carry no call site, so only their plain text is shown
    fn write_verbose(&self, f: &mut dyn fmt::Write, config: &Config) -> fmt::Result {
        match self {
            Self::Chain(err) => err.inner.write_verbose(f, config),
            Self::Foreign(err) => write!(f, "{err}"),
        }
    }
}

impl Error {
    /// Render with the process-wide configuration
    #[must_use]
    pub fn render(&self, style: Style) -> String {
        self.render_with(&config::current(), style)
    }

    /// Render with an explicit configuration
    #[must_use]
    pub fn render_with(&self, config: &Config, style: Style) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_with(&mut out, config, style);
        out
    }

    /// This layer's text alone, without any cause
    #[must_use]
    pub fn own_text(&self) -> String {
        self.own_text_with(&config::current())
    }

    /// [`own_text`](Self::own_text) with an explicit configuration
    #[must_use]
    pub fn own_text_with(&self, config: &Config) -> String {
        let mut out = String::new();
        let _ = self.inner.write_own(&mut out, config);
        out
    }

    fn write_with(&self, f: &mut dyn fmt::Write, config: &Config, style: Style) -> fmt::Result {
        match style {
            Style::Plain => self.inner.write_plain(f, config),
            Style::Verbose => self.inner.write_verbose(f, config),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            Style::Verbose
        } else {
            Style::Plain
        };
        self.write_with(f, &config::current(), style)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &config::current(), Style::Verbose)
    }
}
