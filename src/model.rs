use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::point3d::Point3F;

/// Triangle mesh read from a Wavefront OBJ file. Only positions and faces
/// are kept; texture coordinates and normals are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Point3F>,
    faces: Vec<[usize; 3]>,
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse { line, message: message.into() }
}

impl Model {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut model = Model::default();

        for (n, line) in reader.lines().enumerate() {
            let line_no = n + 1;
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens[0].starts_with('#') {
                continue;
            }

            match tokens[0] {
                "v" => {
                    if tokens.len() < 4 {
                        return Err(parse_error(line_no, "vertex needs three coordinates"));
                    }
                    let mut coords = [0.0f32; 3];
                    for (c, token) in coords.iter_mut().zip(&tokens[1..4]) {
                        *c = token
                            .parse()
                            .map_err(|e| parse_error(line_no, format!("bad coordinate {token:?}: {e}")))?;
                    }
                    model.vertices.push(Point3F::new(coords[0], coords[1], coords[2]));
                }
                "f" => {
                    let indices = tokens[1..]
                        .iter()
                        .map(|part| model.resolve_index(part, line_no))
                        .collect::<Result<Vec<usize>>>()?;
                    if indices.len() < 3 {
                        warn!("line {line_no}: skipping face with {} vertices", indices.len());
                        continue;
                    }
                    // fan triangulation around the first vertex
                    for i in 1..indices.len() - 1 {
                        model.faces.push([indices[0], indices[i], indices[i + 1]]);
                    }
                }
                _ => {}
            }
        }

        Ok(model)
    }

    /// Position index of one `f` entry (`v`, `v/vt`, `v/vt/vn` or `v//vn`).
    /// OBJ indices are 1-based; negative ones count back from the last vertex.
    fn resolve_index(&self, part: &str, line_no: usize) -> Result<usize> {
        let v = part.split('/').next().unwrap_or_default();
        let index: i64 = v
            .parse()
            .map_err(|e| parse_error(line_no, format!("bad face index {part:?}: {e}")))?;
        let count = self.vertices.len() as i64;
        let resolved = match index {
            i if i > 0 => i - 1,
            i if i < 0 => count + i,
            _ => return Err(parse_error(line_no, "face index 0 is not valid")),
        };
        if resolved < 0 || resolved >= count {
            return Err(parse_error(line_no, format!("face index {index} out of range ({count} vertices)")));
        }
        Ok(resolved as usize)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex(&self, i: usize) -> Point3F {
        self.vertices[i]
    }

    pub fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }

    pub fn faces(&self) -> impl Iterator<Item = [Point3F; 3]> + '_ {
        self.faces.iter().map(|f| f.map(|i| self.vertices[i]))
    }
}
