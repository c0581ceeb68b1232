//! Preview through an external image viewer

use std::fs;
use std::path::Path;
use std::process::Command;

use super::PixelBuffer;
use crate::error::{Error, Result};

/// ImageMagick's `display`, which reads plain PPM
pub const DEFAULT_VIEWER: &str = "display";

/// Write `buffer` to `path`, open it with `viewer`, then delete the file.
///
/// Blocks until the viewer exits. The file is removed whether or not the viewer
/// ran successfully; a viewer failure takes precedence over a cleanup failure.
pub fn display(buffer: &PixelBuffer, viewer: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    buffer.save_ppm(path)?;

    let outcome = match Command::new(viewer).arg(path).output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(Error::Viewer {
            program: viewer.to_string(),
            status: output.status,
        }),
        Err(e) => Err(Error::Io(e)),
    };

    let cleanup = fs::remove_file(path);
    if let Err(ref e) = cleanup {
        log::warn!("could not remove preview file {}: {}", path.display(), e);
    }

    outcome?;
    cleanup.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wireframe_viewer_{}_{}.ppm", name, std::process::id()))
    }

    #[test]
    fn test_missing_viewer_still_removes_file() {
        let path = temp_path("missing");
        let buf = PixelBuffer::new(2, 2);
        let err = display(&buf, "wireframe-no-such-viewer-binary", &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_viewer_still_removes_file() {
        let path = temp_path("false");
        let buf = PixelBuffer::new(2, 2);
        let err = display(&buf, "false", &path).unwrap_err();
        assert!(matches!(err, Error::Viewer { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_viewer() {
        let path = temp_path("true");
        let buf = PixelBuffer::new(2, 2);
        display(&buf, "true", &path).unwrap();
        assert!(!path.exists());
    }
}
