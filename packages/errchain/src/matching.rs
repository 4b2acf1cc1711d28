//! Traversal and matching over error chains
//!
//! Every function here walks *hops*: the error itself, then whatever
//! `source()` returns, repeatedly. Chains built by this crate report their
//! cause as `source()`, foreign errors end the walk unless they report one.
//!
//! A cause link answers typed questions for its upper node only. Whatever sits
//! below it is reached by the next hop, never by the link itself.

use std::error::Error as StdError;
use std::{mem, ptr};

use crate::code::{CodeNode, ErrorCode};
use crate::definition::{Definition, DefinitionNode};
use crate::Error;

/// One hop down: the immediate cause of `err`, if any
#[must_use]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Iterator over the hops of a chain, starting with the error itself
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = unwrap(current);
        Some(current)
    }
}

/// Walk `err` and its causes
#[must_use]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The last error of the chain
#[must_use]
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}

/// Whether any hop of `err` is `target`
///
/// A hop matches when it is the very same object as `target`, or when both are
/// [`Error`] handles sharing one node. Share foreign errors as
/// `Arc<dyn Error + Send + Sync>` (or pass them through
/// [`Cause::shared`](crate::Cause::shared)) to match them after wrapping.
///
/// Zero-sized errors have no address of their own; they match only through
/// the same trait object they were reported as.
#[must_use]
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|hop| same_error(hop, target))
}

fn same_error(hop: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    if same_object(hop, target) {
        return true;
    }
    match (hop.downcast_ref::<Error>(), target.downcast_ref::<Error>()) {
        (Some(hop), Some(target)) => Error::ptr_eq(hop, target),
        _ => false,
    }
}

fn same_object(hop: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    if address(hop) != address(target) {
        return false;
    }
    let size = mem::size_of_val(target);
    if size == 0 {
        // distinct zero-sized values may share one address
        return ptr::eq(hop, target);
    }
    // a value and its leading field can share an address
    mem::size_of_val(hop) == size
}

fn address(err: &(dyn StdError + 'static)) -> *const () {
    (err as *const (dyn StdError + 'static)).cast()
}

/// First hop that is, or whose own node is, a `T`
///
/// `T` may be any concrete error type, including [`Error`] itself and the node
/// types [`Leaf`](crate::Leaf), [`DefinitionNode`] and [`CodeNode`].
#[must_use]
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|hop| {
        hop.downcast_ref::<T>()
            .or_else(|| hop.downcast_ref::<Error>().and_then(Error::node::<T>))
    })
}

/// The first definition exposed along the chain
#[must_use]
pub fn find_definition(err: &(dyn StdError + 'static)) -> Option<&'static Definition> {
    find::<DefinitionNode>(err).map(DefinitionNode::definition)
}

/// The first error code exposed along the chain
///
/// This is the code to report across a service boundary.
#[must_use]
pub fn find_error_code(err: &(dyn StdError + 'static)) -> Option<&'static ErrorCode> {
    find::<CodeNode>(err).map(CodeNode::error_code)
}

/// Whether the first definition exposed along the chain is `target`
///
/// Comparison is by identity; a different definition with the same text never
/// matches.
#[must_use]
pub fn has_definition(err: &(dyn StdError + 'static), target: &Definition) -> bool {
    find_definition(err).is_some_and(|definition| definition == target)
}

/// Whether the first error code exposed along the chain is `target`
#[must_use]
pub fn has_error_code(err: &(dyn StdError + 'static), target: &ErrorCode) -> bool {
    find_error_code(err).is_some_and(|code| code == target)
}
