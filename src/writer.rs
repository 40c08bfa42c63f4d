//! Frame-sequence output
//!
//! The driver collects one [`FrameRecord`] per animation frame and writes
//! the whole sequence at once. Two formats are supported: RON for
//! structured consumers and a raw byte dump for renderers that want to
//! read the segment buffers directly.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Serialize, Deserialize};
use wire4d_geom::Segment3D;

use crate::config::OutputFormat;

/// One animation frame: the angle it was computed at and its segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Rotation angle of this frame in degrees
    pub angle_degrees: f64,
    /// Wireframe segments, in builder output order
    pub segments: Vec<Segment3D>,
}

/// Error type for output writing
#[derive(Debug)]
pub enum WriteError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization failure
    Encode(String),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Io(err) => write!(f, "Output IO error: {}", err),
            WriteError::Encode(msg) => write!(f, "Output encode error: {}", msg),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(err) => Some(err),
            WriteError::Encode(_) => None,
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(err: io::Error) -> Self {
        WriteError::Io(err)
    }
}

impl From<ron::Error> for WriteError {
    fn from(err: ron::Error) -> Self {
        WriteError::Encode(err.to_string())
    }
}

/// Write a frame sequence to `path` in the requested format
///
/// RON output is a pretty-printed list of records. Raw output is the
/// per-frame segment buffers viewed as bytes (native-endian f64 triples,
/// start then end, 6 values per segment), concatenated in frame order with
/// no header; the consumer derives the layout from its own config.
pub fn write_frames(
    path: &Path,
    format: OutputFormat,
    frames: &[FrameRecord],
) -> Result<(), WriteError> {
    match format {
        OutputFormat::Ron => {
            let text = ron::ser::to_string_pretty(frames, ron::ser::PrettyConfig::default())?;
            fs::write(path, text)?;
        }
        OutputFormat::Raw => {
            let mut file = fs::File::create(path)?;
            for frame in frames {
                file.write_all(bytemuck::cast_slice(&frame.segments))?;
            }
        }
    }
    Ok(())
}
