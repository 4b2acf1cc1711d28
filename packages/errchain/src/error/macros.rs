//! Macros for early returns with a template-built error

/// Return early with an error built from a [`Definition`](crate::Definition) or
/// [`ErrorCode`](crate::ErrorCode)
///
/// The optional trailing arguments are formatted into the extra message. The
/// call site recorded (when enabled) is the macro invocation.
///
/// ```
/// use errchain::{bail, Definition};
///
/// static ERR_NIL_USER: Definition = Definition::new("ErrNilUser", "User information is empty");
///
/// fn load(uid: u64) -> errchain::Result<()> {
///     bail!(ERR_NIL_USER, "uid: {}", uid);
/// }
///
/// let err = load(7).unwrap_err();
/// assert_eq!(err.to_string(), "ErrNilUser, User information is empty, uid: 7");
/// ```
#[macro_export]
macro_rules! bail {
    ($template:expr $(,)?) => {
        return ::core::result::Result::Err($template.error(&[]).into())
    };
    ($template:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err(
            $template.error(&[::std::format!($($arg)+).as_str()]).into(),
        )
    };
}

/// Return early with a template-built error unless `cond` holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !$cond {
            $crate::bail!($($rest)+);
        }
    };
}
