use core::fmt;

/// Internal representation of the clock error.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ErrorKind {
    OutOfRange,
    SystemTimeBeforeEpoch,
    #[cfg(unix)]
    MissingLocalTime,
}

/// The error raised when a [`Clock`](crate::clock::Clock) cannot produce
/// today's date.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Internal constructor for a clock error.
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::OutOfRange => write!(f, "date out of range"),
            ErrorKind::SystemTimeBeforeEpoch => write!(f, "system time before Unix epoch"),
            #[cfg(unix)]
            ErrorKind::MissingLocalTime => write!(f, "missing local time"),
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Implementation used in many test cases.
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

#[cfg(test)]
impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
