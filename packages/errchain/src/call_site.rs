//! Call-site tokens and the capture primitive
//!
//! A [`CallSite`] is either absent or a single captured [`Frame`]. It is stored
//! by a chain node at construction time and only ever read back for rendering.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// One resolved source position: enclosing function (when known), file and line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    function: Option<Cow<'static, str>>,
    file: Cow<'static, str>,
    line: u32,
    column: u32,
}

impl Frame {
    /// Create a frame for `file:line:column` with no function name
    #[must_use]
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32, column: u32) -> Self {
        Self {
            function: None,
            file: file.into(),
            line,
            column,
        }
    }

    /// Create a frame from a `#[track_caller]` location
    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    /// Attach the enclosing function name
    #[must_use]
    pub fn with_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Enclosing function, if the capturer could resolve it
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Source file path as reported by the compiler
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Source line
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source column
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(f, "{function}\n        {}:{}", self.file, self.line),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

/// Opaque call-site token carried by a chain node
///
/// The default value is the absent token. Cloning is a reference-count bump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite(Option<Arc<Frame>>);

impl CallSite {
    /// The "no call site" token
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// A token pointing at `frame`
    #[must_use]
    pub fn at(frame: Frame) -> Self {
        Self(Some(Arc::new(frame)))
    }

    /// Whether this token carries no site
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The captured frame, if any
    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.0.as_deref()
    }

    /// Write the verbose call-site section; writes nothing for the absent token
    pub(crate) fn write_section(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        match self.frame() {
            Some(frame) => write!(f, "\n    at {frame}"),
            None => Ok(()),
        }
    }
}

/// Host capability that turns a caller location into a [`CallSite`]
///
/// Implementations may return [`CallSite::absent`] when nothing can be resolved;
/// rendering then silently omits the call-site section.
pub trait Capture: fmt::Debug + Send + Sync {
    /// Capture the site identified by `location`
    fn capture(&self, location: &'static Location<'static>) -> CallSite;
}

/// Capturer that records file, line and column only
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCapture;

impl Capture for LocationCapture {
    fn capture(&self, location: &'static Location<'static>) -> CallSite {
        CallSite::at(Frame::from_location(location))
    }
}

/// Capturer that also resolves the enclosing function name from debug info
///
/// Walks the current stack and picks the first symbol whose file and line match
/// the caller location. Falls back to a location-only frame when no symbol
/// matches (stripped binaries, aggressive inlining).
#[cfg(feature = "symbolize")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

#[cfg(feature = "symbolize")]
impl Capture for BacktraceCapture {
    fn capture(&self, location: &'static Location<'static>) -> CallSite {
        let mut function: Option<String> = None;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if function.is_some() || symbol.lineno() != Some(location.line()) {
                    return;
                }
                let same_file = symbol
                    .filename()
                    .is_some_and(|path| path.ends_with(location.file()));
                if same_file {
                    // `{:#}` drops the trailing `::h<hash>` disambiguator
                    function = symbol.name().map(|name| format!("{name:#}"));
                }
            });
            function.is_none()
        });

        let frame = Frame::from_location(location);
        CallSite::at(match function {
            Some(function) => frame.with_function(function),
            None => frame,
        })
    }
}

/// Deterministic capturer that always reports the same frame
///
/// Meant for tests and for hosts that want a fixed marker instead of real
/// positions. `FixedCapture::absent()` models a host that cannot resolve sites.
#[derive(Debug, Clone, Default)]
pub struct FixedCapture(CallSite);

impl FixedCapture {
    /// Always capture `frame`
    #[must_use]
    pub fn new(frame: Frame) -> Self {
        Self(CallSite::at(frame))
    }

    /// Always capture the absent token
    #[must_use]
    pub fn absent() -> Self {
        Self(CallSite::absent())
    }
}

impl Capture for FixedCapture {
    fn capture(&self, _location: &'static Location<'static>) -> CallSite {
        self.0.clone()
    }
}

/// Capturer installed by [`Config::default`](crate::Config::default)
#[must_use]
pub fn default_capturer() -> Arc<dyn Capture> {
    #[cfg(feature = "symbolize")]
    {
        Arc::new(BacktraceCapture)
    }
    #[cfg(not(feature = "symbolize"))]
    {
        Arc::new(LocationCapture)
    }
}
