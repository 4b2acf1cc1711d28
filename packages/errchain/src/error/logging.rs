//! Structured logging of error chains through `tracing`
//!
//! Building, matching and rendering never log on their own. These helpers are
//! for the application's logging boundary.

use tracing::{error, warn};

use super::types::{Error, Style};
use crate::code::ErrorCode;
use crate::config;
use crate::definition::Definition;
use crate::matching::{chain, find_definition, find_error_code};

/// Emits one event per chain with the template identities as fields
pub struct ChainLogger;

impl ChainLogger {
    /// Log `err` at ERROR level
    pub fn error(err: &Error) {
        let fields = ChainFields::of(err);
        error!(
            package = %fields.package,
            definition = fields.definition,
            code = fields.code,
            depth = fields.depth,
            "{}",
            fields.report
        );
    }

    /// Log `err` at WARN level
    pub fn warn(err: &Error) {
        let fields = ChainFields::of(err);
        warn!(
            package = %fields.package,
            definition = fields.definition,
            code = fields.code,
            depth = fields.depth,
            "{}",
            fields.report
        );
    }
}

struct ChainFields {
    package: String,
    definition: Option<&'static str>,
    code: Option<i32>,
    depth: usize,
    report: String,
}

impl ChainFields {
    fn of(err: &Error) -> Self {
        let config = config::current();
        Self {
            package: config.package.to_string(),
            definition: find_definition(err).map(Definition::name),
            code: find_error_code(err).map(ErrorCode::code),
            depth: chain(err).count(),
            report: err.render_with(&config, Style::Verbose),
        }
    }
}
