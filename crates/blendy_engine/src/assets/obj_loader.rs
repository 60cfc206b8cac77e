//! OBJ file loader for vertex-coloured meshes
//!
//! Reads the subset of Wavefront OBJ that the game's assets use: `v` lines
//! with an optional trailing RGB colour and `f` lines. Everything else is
//! ignored. Positions are normalized into the -0.5..0.5 box so an entity's
//! scale alone sets its world size.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::mesh::{ColoredVertex, Mesh, MeshError};
use crate::foundation::logging::debug;
use crate::foundation::math::{Vec2, Vec3};

/// Errors produced while loading an OBJ file
#[derive(Error, Debug)]
pub enum ObjError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A token could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// Structurally invalid file
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// More vertices than a 16-bit index buffer can address
    #[error("Mesh has {0} vertices, more than a 16-bit index buffer can address")]
    TooManyVertices(usize),
    /// The assembled mesh failed validation
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Loader for coloured OBJ meshes
pub struct ObjLoader;

impl ObjLoader {
    /// Load and normalize an OBJ file
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let mesh = Self::parse_obj(&source)?;
        debug!(
            "Loaded mesh {} ({} vertices, {} triangles)",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Parse and normalize OBJ source text
    pub fn parse_obj(source: &str) -> Result<Mesh, ObjError> {
        let mut vertices = Vec::new();
        let mut indices: Vec<usize> = Vec::new();

        for (line_index, line) in source.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let values = parts
                        .map(|token| parse_float(token, line_number))
                        .collect::<Result<Vec<f32>, _>>()?;
                    if values.len() < 3 {
                        return Err(ObjError::Parse {
                            line: line_number,
                            message: "Vertex needs at least 3 coordinates".to_string(),
                        });
                    }
                    let color = if values.len() >= 6 {
                        Vec3::new(values[3], values[4], values[5])
                    } else {
                        Vec3::new(1.0, 1.0, 1.0)
                    };
                    vertices.push(ColoredVertex::new(
                        Vec3::new(values[0], values[1], values[2]),
                        color,
                    ));
                }
                Some("f") => {
                    let face = parts
                        .map(|token| parse_face_index(token, line_number))
                        .collect::<Result<Vec<usize>, _>>()?;
                    if face.len() < 3 {
                        return Err(ObjError::Parse {
                            line: line_number,
                            message: "Face needs at least 3 vertices".to_string(),
                        });
                    }
                    // Fan triangulation
                    for i in 1..face.len() - 1 {
                        indices.extend_from_slice(&[face[0], face[i], face[i + 1]]);
                    }
                }
                _ => {}
            }
        }

        if vertices.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices".to_string()));
        }
        if vertices.len() > usize::from(u16::MAX) + 1 {
            return Err(ObjError::TooManyVertices(vertices.len()));
        }

        let vertex_indices = indices
            .into_iter()
            .map(|index| {
                u16::try_from(index).map_err(|_| {
                    ObjError::InvalidFormat(format!("Face index {} out of range", index + 1))
                })
            })
            .collect::<Result<Vec<u16>, _>>()?;

        let original_size = normalize(&mut vertices);
        let mesh = Mesh {
            original_size,
            vertices,
            vertex_indices,
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

fn parse_float(token: &str, line: usize) -> Result<f32, ObjError> {
    token.parse().map_err(|_| ObjError::Parse {
        line,
        message: format!("Invalid number '{token}'"),
    })
}

/// Position index of a face token (`7`, `7/2`, `7//3`, `7/2/3`), converted to 0-based
fn parse_face_index(token: &str, line: usize) -> Result<usize, ObjError> {
    let position = token.split('/').next().unwrap_or_default();
    match position.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(ObjError::Parse {
            line,
            message: format!("Invalid face index '{token}'"),
        }),
    }
}

/// Map positions into -0.5..0.5 and return the xy size before normalization
fn normalize(vertices: &mut [ColoredVertex]) -> Vec2 {
    let mut min = Vec3::repeat(f32::MAX);
    let mut max = Vec3::repeat(f32::MIN);
    for vertex in vertices.iter() {
        min = min.inf(&vertex.position);
        max = max.sup(&vertex.position);
    }

    // A flat mesh keeps its z untouched instead of dividing by zero
    if (max.z - min.z).abs() < 0.001 {
        max.z = min.z + 1.0;
    }
    let mut size = max - min;
    for extent in size.iter_mut() {
        if *extent == 0.0 {
            *extent = 1.0;
        }
    }

    let half = Vec3::repeat(0.5);
    for vertex in vertices.iter_mut() {
        vertex.position = (vertex.position - min).component_div(&size) - half;
    }
    size.xy()
}
