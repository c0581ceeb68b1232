//! Error type shared by the buffer, the rasterizers and the tessellators

use std::fmt;
use std::io;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum Error {
    /// Pixel coordinate outside the buffer
    OutOfBounds { x: i32, y: i32 },
    /// Cross product or matrix product could not be computed
    DegenerateGeometry(String),
    /// File creation, write, or viewer spawn failure
    Io(io::Error),
    /// Viewer ran but did not exit successfully
    Viewer { program: String, status: ExitStatus },
    /// Rejected configuration or scene description
    Config(String),
}

impl Error {
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "coordinate ({}, {}) out of bounds", x, y),
            Self::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {}", msg),
            Self::Io(e) => write!(f, "io error: {}", e),
            Self::Viewer { program, status } => {
                write!(f, "viewer '{}' exited with {}", program, status)
            },
            Self::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Io => Self::Io(e.into()),
            _ => Self::Config(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
