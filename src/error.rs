use std::fmt::{Debug, Display};

/// Broad category of a failed resize, so that callers can tell
/// an unreadable input apart from a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The input could not be opened or its contents could not be decoded
    Decode,
    /// The format was recognized, but this build cannot read or write it
    UnsupportedFormat,
    /// Zero-sized target, zero-sized source, or a fit that collapses to zero pixels
    InvalidGeometry,
    Resample,
    Encode,
    Write,
}

pub struct ResizeError {
    kind: ErrorKind,
    message: String,
}

impl ResizeError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! rz_err {
    ($kind:expr, $($arg:tt)+) => {
        $crate::error::ResizeError::new(
            $kind,
            format!(
                "canvasfit: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! rz_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::rz_err!($kind, "{}", err));
            }
        }
    };
}
