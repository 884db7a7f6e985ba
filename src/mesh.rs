//! Indexed triangle meshes in model space.
//!
//! A [`Mesh`] is handed over already loaded (vertex positions, colors and
//! face index triples). Construction validates the indices and computes face
//! and vertex normals; after that only the mesh's [`Transform`] changes from
//! frame to frame.

use log::{debug, warn};

use crate::colors::Color;
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// A mesh vertex in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    /// Smoothed normal, filled in by [`Mesh::compute_normals`].
    pub normal: Vec3,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
            color,
        }
    }
}

impl From<Vec3> for Vertex {
    fn from(position: Vec3) -> Self {
        Self::new(position, Color::WHITE)
    }
}

/// A triangle given by three indices into the mesh's vertex array.
///
/// The winding a -> b -> c decides which way the face normal points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    /// Unit face normal, filled in by [`Mesh::compute_normals`].
    pub normal: Vec3,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a,
            b,
            c,
            normal: Vec3::ZERO,
        }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Unit normal of the triangle v1 -> v2 -> v3: `(v2 - v1) x (v3 - v1)`.
///
/// Zero-area triangles yield the zero vector.
pub fn triangle_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1).normalize()
}

#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    transform: Transform,
}

impl Mesh {
    /// Builds a mesh, rejecting out-of-range face indices, and computes its
    /// normals.
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<Self> {
        let mut mesh = Self {
            name: name.into(),
            vertices,
            faces,
            transform: Transform::default(),
        };
        mesh.validate()?;
        mesh.compute_normals();
        debug!(
            "mesh '{}' ready: {} vertices, {} faces",
            mesh.name,
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Axis-aligned cube from -1 to 1 with outward-facing triangles and a
    /// distinct color per corner.
    pub fn cube() -> Self {
        const CORNERS: [(f32, f32, f32, u32); 8] = [
            (-1.0, -1.0, 1.0, 0xFFFF0000),
            (1.0, -1.0, 1.0, 0xFF00FF00),
            (1.0, 1.0, 1.0, 0xFF0000FF),
            (-1.0, 1.0, 1.0, 0xFFFFFF00),
            (-1.0, -1.0, -1.0, 0xFFFF00FF),
            (1.0, -1.0, -1.0, 0xFF00FFFF),
            (1.0, 1.0, -1.0, 0xFFFFFFFF),
            (-1.0, 1.0, -1.0, 0xFF808080),
        ];
        // Counter-clockwise seen from outside.
        const FACES: [[usize; 3]; 12] = [
            // Front (+Z)
            [0, 1, 2],
            [0, 2, 3],
            // Right (+X)
            [1, 5, 6],
            [1, 6, 2],
            // Back (-Z)
            [5, 4, 7],
            [5, 7, 6],
            // Left (-X)
            [4, 0, 3],
            [4, 3, 7],
            // Top (+Y)
            [3, 2, 6],
            [3, 6, 7],
            // Bottom (-Y)
            [4, 5, 1],
            [4, 1, 0],
        ];

        let vertices = CORNERS
            .iter()
            .map(|&(x, y, z, argb)| Vertex::new(Vec3::new(x, y, z), Color::from_argb(argb)))
            .collect();
        let faces = FACES.iter().map(|&[a, b, c]| Face::new(a, b, c)).collect();

        let mut mesh = Self {
            name: "cube".to_string(),
            vertices,
            faces,
            transform: Transform::default(),
        };
        mesh.compute_normals();
        mesh
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to the faces. Indices are not re-validated; call
    /// [`Mesh::compute_normals`] after editing.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the three vertices of `face`, or `InvalidIndex` if any index
    /// is out of range. `FaceOutOfRange` if the mesh has no such face.
    pub fn face_vertices(&self, face_index: usize) -> Result<[Vertex; 3]> {
        let face = *self
            .faces
            .get(face_index)
            .ok_or(RenderError::FaceOutOfRange {
                face: face_index,
                face_count: self.faces.len(),
            })?;
        let fetch = |index: usize| {
            self.vertices
                .get(index)
                .copied()
                .ok_or(RenderError::InvalidIndex {
                    face: face_index,
                    index,
                    vertex_count: self.vertices.len(),
                })
        };
        Ok([fetch(face.a)?, fetch(face.b)?, fetch(face.c)?])
    }

    /// Checks every face index against the vertex array.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(RenderError::InvalidIndex {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Computes unit face normals and smooth vertex normals.
    ///
    /// Each vertex normal is the normalized sum of the normals of the faces
    /// that use it. Faces with an out-of-range index are left out. A vertex
    /// touched only by zero-area faces keeps a zero normal and is reported.
    pub fn compute_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.normal = Vec3::ZERO;
        }

        let vertex_count = self.vertices.len();
        for face in &mut self.faces {
            if face.indices().iter().any(|&i| i >= vertex_count) {
                continue;
            }
            face.normal = triangle_normal(
                self.vertices[face.a].position,
                self.vertices[face.b].position,
                self.vertices[face.c].position,
            );
            for index in face.indices() {
                self.vertices[index].normal += face.normal;
            }
        }

        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            match vertex.normal.try_normalize() {
                Some(normal) => vertex.normal = normal,
                None => warn!(
                    "mesh '{}': vertex {} has no usable normal (unused or only on degenerate faces)",
                    self.name, index
                ),
            }
        }
    }

    // ============ Transform Accessors ============

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// Euler rotation in radians: x=pitch, y=yaw, z=roll.
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation()
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        self.transform.rotation_matrix()
    }
}
