//! Tests for hop-based traversal: unwrap, is, find and template membership

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use errchain::{Cause, CodeNode, Definition, DefinitionNode, Error, ErrorCode, Leaf};

static ERR_UPDATE_ONE_FAILED: Definition =
    Definition::new("ErrUpdateOneFailed", "db.UpdateOne failed");
static ERR_UPDATE_ONE_FAILED_TWIN: Definition =
    Definition::new("ErrUpdateOneFailed", "db.UpdateOne failed");
static ERR_NO_DOCUMENT_WAS_UPDATED: Definition =
    Definition::new("ErrNoDocumentWasUpdated", "No document was updated");
static ERR_INTERNAL_SERVER_ERROR: ErrorCode =
    ErrorCode::new("ErrInternalServerError", 500, "Internal server error");
static ERR_UNAUTHORIZED: ErrorCode = ErrorCode::new("ErrUnauthorized", 401, "Unauthorized");

#[derive(Debug, thiserror::Error)]
#[error("mock mongodb error")]
struct MockMongoError;

#[derive(Debug, thiserror::Error)]
#[error("connection reset")]
struct ConnectionReset;

#[derive(Debug, thiserror::Error)]
#[error("driver failure")]
struct DriverFailure(#[source] ConnectionReset);

#[derive(Debug, thiserror::Error)]
#[error("timeout")]
struct Timeout;

#[derive(Debug, thiserror::Error)]
#[error("not found")]
struct NotFound;

static TIMEOUT: Timeout = Timeout;
static NOT_FOUND: NotFound = NotFound;

/// Foreign error whose source is a zero-sized static
#[derive(Debug)]
struct QueryDriver;

impl fmt::Display for QueryDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("query driver failed")
    }
}

impl StdError for QueryDriver {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&TIMEOUT)
    }
}

fn login_chain() -> (Arc<dyn StdError + Send + Sync>, Error) {
    let root: Arc<dyn StdError + Send + Sync> = Arc::new(MockMongoError);
    let inner = ERR_UPDATE_ONE_FAILED.wrap(root.clone(), &["SaveUser failed, uid: 123"]);
    let outer = ERR_INTERNAL_SERVER_ERROR.wrap(inner, &["Login failed"]);
    (root, outer)
}

#[test]
fn test_unwrap_returns_cause() {
    let cause = Error::msg("cause error");
    let err = errchain::wrap(cause.clone(), "wrapped error");
    let unwrapped = errchain::unwrap(&err).expect("wrapped error has a cause");
    let unwrapped = unwrapped
        .downcast_ref::<Error>()
        .expect("cause is the original chain");
    assert!(Error::ptr_eq(unwrapped, &cause));
}

#[test]
fn test_unwrap_without_cause() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "error");
    assert!(errchain::unwrap(&err).is_none());
    assert!(errchain::unwrap(&Error::msg("leaf")).is_none());
}

#[test]
fn test_is_finds_shared_root() {
    let (root, outer) = login_chain();
    assert!(errchain::is(&outer, &*root));
    assert!(outer.is(&*root));
}

#[test]
fn test_is_without_matching_target() {
    let (root, _) = login_chain();
    let other = std::io::Error::new(std::io::ErrorKind::Other, "other error");
    assert!(!errchain::is(&other, &*root));

    let unrelated: Arc<dyn StdError + Send + Sync> = Arc::new(MockMongoError);
    let (_, outer) = login_chain();
    assert!(!errchain::is(&outer, &*unrelated));
}

#[test]
fn test_is_matches_chain_handles_sharing_a_node() {
    let inner = ERR_NO_DOCUMENT_WAS_UPDATED.error(&[]);
    let outer = errchain::wrap(inner.clone(), "SaveUser failed");
    assert!(errchain::is(&outer, &inner));
    assert!(errchain::is(&outer, &outer.clone()));
    assert!(!errchain::is(&outer, &ERR_NO_DOCUMENT_WAS_UPDATED.error(&[])));
}

#[test]
fn test_has_template_membership() {
    let (_, outer) = login_chain();
    assert!(errchain::has_error_code(&outer, &ERR_INTERNAL_SERVER_ERROR));
    assert!(!errchain::has_error_code(&outer, &ERR_UNAUTHORIZED));
    assert!(errchain::has_definition(&outer, &ERR_UPDATE_ONE_FAILED));
    assert!(!errchain::has_definition(&outer, &ERR_NO_DOCUMENT_WAS_UPDATED));
    assert!(!errchain::has_definition(&outer, &ERR_UPDATE_ONE_FAILED_TWIN));
}

#[test]
fn test_has_definition_on_foreign_error() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "common error");
    assert!(!errchain::has_definition(&err, &ERR_UPDATE_ONE_FAILED));
}

#[test]
fn test_find_typed_nodes_along_chain() {
    let (_, outer) = login_chain();

    let code = errchain::find::<CodeNode>(&outer).expect("outer layer carries a code");
    assert_eq!(code.error_code(), &ERR_INTERNAL_SERVER_ERROR);

    let definition =
        errchain::find::<DefinitionNode>(&outer).expect("inner layer carries a definition");
    assert_eq!(definition.message(), "SaveUser failed, uid: 123");

    let root = errchain::find::<MockMongoError>(&outer).expect("root is reachable");
    assert_eq!(root.to_string(), "mock mongodb error");

    assert!(errchain::find::<Leaf>(&outer).is_none());
}

#[test]
fn test_find_on_the_layer_itself() {
    let err = Error::msg("leaf");
    let leaf = errchain::find::<Leaf>(&err).expect("the error itself is a leaf");
    assert_eq!(leaf.message(), "leaf");
    let same = errchain::find::<Error>(&err).expect("the error itself is an Error");
    assert!(Error::ptr_eq(same, &err));
}

#[test]
fn test_layer_answers_for_its_upper_node_only() {
    let (_, outer) = login_chain();
    assert!(outer.node::<CodeNode>().is_some());
    assert!(outer.node::<DefinitionNode>().is_none());
    assert!(outer.definition().is_none());

    let below = outer
        .cause()
        .and_then(|cause| cause.downcast_ref::<Error>())
        .expect("one hop reaches the inner layer");
    assert!(below.node::<DefinitionNode>().is_some());
}

#[test]
fn test_has_definition_reports_first_definition_only() {
    let inner = ERR_NO_DOCUMENT_WAS_UPDATED.error(&[]);
    let outer = ERR_UPDATE_ONE_FAILED.wrap(inner, &[]);
    assert!(errchain::has_definition(&outer, &ERR_UPDATE_ONE_FAILED));
    assert!(!errchain::has_definition(&outer, &ERR_NO_DOCUMENT_WAS_UPDATED));
    assert_eq!(
        errchain::find_definition(&outer),
        Some(&ERR_UPDATE_ONE_FAILED)
    );
}

#[test]
fn test_chain_walks_foreign_sources() {
    let err = errchain::wrap(DriverFailure(ConnectionReset), "query failed");
    let hops: Vec<String> = errchain::chain(&err).map(|hop| hop.to_string()).collect();
    assert_eq!(
        hops,
        vec![
            "query failed <= driver failure".to_string(),
            "driver failure".to_string(),
            "connection reset".to_string(),
        ]
    );

    let root = errchain::root_cause(&err);
    assert!(root.downcast_ref::<ConnectionReset>().is_some());
}

#[test]
fn test_find_error_code_for_boundary() {
    let (_, outer) = login_chain();
    let wrapped_again = errchain::wrap(outer, "handler");
    let code = errchain::find_error_code(&wrapped_again).expect("a code is exposed below");
    assert_eq!(code.code(), 500);
}

#[test]
fn test_is_rejects_other_zero_sized_statics() {
    let err = errchain::wrap(QueryDriver, "query failed");
    assert!(errchain::find::<Timeout>(&err).is_some());
    assert!(!errchain::is(&err, &NOT_FOUND));
}

#[test]
fn test_is_tells_zero_sized_allocations_apart() {
    let shared: Arc<dyn StdError + Send + Sync> = Arc::new(Timeout);
    let other: Arc<dyn StdError + Send + Sync> = Arc::new(Timeout);
    let err = errchain::wrap(shared.clone(), "query failed");
    assert!(errchain::is(&err, &*shared));
    assert!(!errchain::is(&err, &*other));
}

#[test]
fn test_shared_concrete_cause_keeps_identity() {
    let root = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    let err = errchain::wrap(Cause::shared(root.clone()), "flush failed");
    assert_eq!(err.to_string(), "flush failed <= disk full");
    assert!(errchain::is(&err, &*root));

    let found = errchain::find::<std::io::Error>(&err).expect("io error is reachable");
    assert!(std::ptr::eq(found, &*root));
}

#[test]
fn test_boxed_causes_convert() {
    let boxed: Box<dyn StdError + Send + Sync> = "disk full".into();
    let err = ERR_UPDATE_ONE_FAILED.wrap(Cause::from(boxed), &[]);
    assert_eq!(err.to_string(), "ErrUpdateOneFailed, db.UpdateOne failed <= disk full");

    let inner = Error::msg("inner");
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(inner.clone());
    let err = errchain::wrap(Cause::from(boxed), "outer");
    let linked = err
        .cause()
        .and_then(|cause| cause.downcast_ref::<Error>())
        .expect("boxed chains are linked as chains");
    assert!(Error::ptr_eq(linked, &inner));
}
