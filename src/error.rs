//! Error type shared by mesh construction and device setup.
//!
//! Nothing in here escapes a frame: the renderer turns these into skipped
//! geometry and log lines. They surface only where a caller hands over data
//! up front (building a mesh, wrapping a pixel surface).

use std::fmt;

/// Errors reported while validating renderer input.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A face references a vertex index outside the mesh's vertex array.
    InvalidIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// A face index past the end of the mesh's face array.
    FaceOutOfRange { face: usize, face_count: usize },
    /// Geometry with no area or no direction where one was required.
    DegenerateGeometry(&'static str),
    /// A supplied pixel buffer does not hold `width * height` pixels.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidIndex {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {} references vertex {} but the mesh has {} vertices",
                face, index, vertex_count
            ),
            RenderError::FaceOutOfRange { face, face_count } => {
                write!(f, "face {} requested but the mesh has {} faces", face, face_count)
            }
            RenderError::DegenerateGeometry(what) => write!(f, "degenerate geometry: {}", what),
            RenderError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {} pixels, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for RenderError {}

pub type Result<T> = std::result::Result<T, RenderError>;
