//! Scene description parser.
//!
//! The format is a flat stream of whitespace separated tokens. Each entry is a
//! keyword followed by `key:` value pairs:
//!
//! ```text
//! camera pos: 0 0 5  fov: 60  f: 1  a: 1.333
//! sphere pos: 0 0 0  rad: 1  amb: 0.1 0 0  dif: 1 0 0  spe: 1 1 1  shi: 32
//! plane  pos: 0 -1 0  nor: 0 1 0  dif: 0.5 0.5 0.5
//! light  pos: 0 5 5  dif: 1 1 1  spe: 1 1 1
//! mesh   file: bunny.obj  dif: 0.8 0.8 0.8
//! ```
//!
//! Vector keys take three numbers. An entry ends at the first token that is
//! not a `key:`. `fov:` is in degrees. Material keys that are left out default
//! to zero. `#` comments run to the end of the line.

use std::iter::Peekable;
use std::path::PathBuf;
use std::vec::IntoIter;

use lux_math::{Color, Vec3};
use thiserror::Error;

use crate::error::GeometryError;
use crate::{Camera, Light, Material, Plane, Primitive, Sphere};

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unexpected end of input inside `{keyword}` at line {line}")]
    UnexpectedEof { line: usize, keyword: &'static str },

    #[error("Invalid number `{token}` at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Unknown keyword `{keyword}` at line {line}")]
    UnknownKeyword { line: usize, keyword: String },

    #[error("Key `{key}` is not valid for `{keyword}` at line {line}")]
    UnexpectedKey {
        line: usize,
        keyword: &'static str,
        key: String,
    },

    #[error("`{keyword}` at line {line} is missing `{key}`")]
    MissingField {
        line: usize,
        keyword: &'static str,
        key: &'static str,
    },

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Invalid `{keyword}` at line {line}: {source}")]
    Geometry {
        line: usize,
        keyword: &'static str,
        #[source]
        source: GeometryError,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A mesh entry whose file has not been read yet.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshRef {
    /// Line of the `mesh` keyword
    pub line: usize,
    /// OBJ path exactly as written
    pub file: PathBuf,
    /// Material shared by every triangle of the mesh
    pub material: Material,
}

/// One renderable entry, in file order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem {
    Primitive(Primitive),
    Mesh(MeshRef),
}

/// Everything a description file declares, before external meshes are read.
#[derive(Clone, Debug)]
pub struct SceneDescription {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub items: Vec<SceneItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    Pos,
    Fov,
    Focal,
    Aspect,
    Radius,
    Normal,
    Ambient,
    Diffuse,
    Specular,
    Shininess,
    File,
}

impl Key {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "pos:" => Key::Pos,
            "fov:" => Key::Fov,
            "f:" => Key::Focal,
            "a:" => Key::Aspect,
            "rad:" => Key::Radius,
            "nor:" => Key::Normal,
            "amb:" => Key::Ambient,
            "dif:" => Key::Diffuse,
            "spe:" => Key::Specular,
            "shi:" => Key::Shininess,
            "file:" => Key::File,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Key::Pos => "pos:",
            Key::Fov => "fov:",
            Key::Focal => "f:",
            Key::Aspect => "a:",
            Key::Radius => "rad:",
            Key::Normal => "nor:",
            Key::Ambient => "amb:",
            Key::Diffuse => "dif:",
            Key::Specular => "spe:",
            Key::Shininess => "shi:",
            Key::File => "file:",
        }
    }
}

const CAMERA_KEYS: [Key; 4] = [Key::Pos, Key::Fov, Key::Focal, Key::Aspect];
const SPHERE_KEYS: [Key; 6] = [
    Key::Pos,
    Key::Radius,
    Key::Ambient,
    Key::Diffuse,
    Key::Specular,
    Key::Shininess,
];
const PLANE_KEYS: [Key; 6] = [
    Key::Pos,
    Key::Normal,
    Key::Ambient,
    Key::Diffuse,
    Key::Specular,
    Key::Shininess,
];
const LIGHT_KEYS: [Key; 3] = [Key::Pos, Key::Diffuse, Key::Specular];
const MESH_KEYS: [Key; 5] = [
    Key::File,
    Key::Ambient,
    Key::Diffuse,
    Key::Specular,
    Key::Shininess,
];

/// Values collected for one entry.
#[derive(Default)]
struct Fields {
    keyword: &'static str,
    line: usize,
    pos: Option<Vec3>,
    normal: Option<Vec3>,
    ambient: Option<Color>,
    diffuse: Option<Color>,
    specular: Option<Color>,
    fov: Option<f32>,
    focal: Option<f32>,
    aspect: Option<f32>,
    radius: Option<f32>,
    shininess: Option<f32>,
    file: Option<String>,
}

impl Fields {
    fn require<T>(&self, value: Option<T>, key: Key) -> ParseResult<T> {
        value.ok_or(ParseError::MissingField {
            line: self.line,
            keyword: self.keyword,
            key: key.name(),
        })
    }

    fn material(&self) -> ParseResult<Material> {
        let shininess = self.shininess.unwrap_or(0.0);
        if shininess < 0.0 || shininess.is_nan() {
            return Err(self.geometry(GeometryError::Shininess(shininess)));
        }

        Ok(Material::new(
            self.ambient.unwrap_or(Color::ZERO),
            self.diffuse.unwrap_or(Color::ZERO),
            self.specular.unwrap_or(Color::ZERO),
            shininess,
        ))
    }

    fn geometry(&self, source: GeometryError) -> ParseError {
        ParseError::Geometry {
            line: self.line,
            keyword: self.keyword,
            source,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Token<'a> {
    line: usize,
    text: &'a str,
}

/// Scene description parser.
pub struct SceneParser<'a> {
    tokens: Peekable<IntoIter<Token<'a>>>,
    last_line: usize,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        let tokens: Vec<_> = content
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                let code = line.split_once('#').map_or(line, |(code, _)| code);
                code.split_whitespace()
                    .map(move |text| Token { line: i + 1, text })
            })
            .collect();

        Self {
            tokens: tokens.into_iter().peekable(),
            last_line: 0,
        }
    }

    /// Parse every entry.
    ///
    /// A later `camera` replaces an earlier one.
    pub fn parse(mut self) -> ParseResult<SceneDescription> {
        let mut camera = None;
        let mut lights = Vec::new();
        let mut items = Vec::new();

        while let Some(token) = self.tokens.next() {
            self.last_line = token.line;
            let line = token.line;

            match token.text {
                "camera" => {
                    let f = self.fields("camera", line, &CAMERA_KEYS)?;
                    let parsed = Camera::from_degrees(
                        f.require(f.pos, Key::Pos)?,
                        f.require(f.fov, Key::Fov)?,
                        f.require(f.focal, Key::Focal)?,
                        f.require(f.aspect, Key::Aspect)?,
                    )
                    .map_err(|e| f.geometry(e))?;

                    if camera.replace(parsed).is_some() {
                        log::warn!("Line {}: replacing previously declared camera", line);
                    }
                }
                "sphere" => {
                    let f = self.fields("sphere", line, &SPHERE_KEYS)?;
                    let sphere = Sphere::new(
                        f.require(f.pos, Key::Pos)?,
                        f.require(f.radius, Key::Radius)?,
                        f.material()?,
                    );
                    items.push(SceneItem::Primitive(sphere.into()));
                }
                "plane" => {
                    let f = self.fields("plane", line, &PLANE_KEYS)?;
                    let plane = Plane::new(
                        f.require(f.pos, Key::Pos)?,
                        f.require(f.normal, Key::Normal)?,
                        f.material()?,
                    )
                    .map_err(|e| f.geometry(e))?;
                    items.push(SceneItem::Primitive(plane.into()));
                }
                "light" => {
                    let f = self.fields("light", line, &LIGHT_KEYS)?;
                    lights.push(Light::new(
                        f.require(f.pos, Key::Pos)?,
                        f.diffuse.unwrap_or(Color::ZERO),
                        f.specular.unwrap_or(Color::ZERO),
                    ));
                }
                "mesh" => {
                    let f = self.fields("mesh", line, &MESH_KEYS)?;
                    let file = f.require(f.file.clone(), Key::File)?;
                    items.push(SceneItem::Mesh(MeshRef {
                        line,
                        file: PathBuf::from(file),
                        material: f.material()?,
                    }));
                }
                other => {
                    return Err(ParseError::UnknownKeyword {
                        line,
                        keyword: other.to_string(),
                    })
                }
            }
        }

        let camera = camera.ok_or(ParseError::MissingCamera)?;
        log::debug!(
            "Parsed {} lights and {} renderable entries",
            lights.len(),
            items.len()
        );

        Ok(SceneDescription {
            camera,
            lights,
            items,
        })
    }

    /// Consume the `key:` value run following a keyword.
    fn fields(
        &mut self,
        keyword: &'static str,
        line: usize,
        allowed: &[Key],
    ) -> ParseResult<Fields> {
        let mut fields = Fields {
            keyword,
            line,
            ..Default::default()
        };

        while let Some(token) = self.tokens.next_if(|t| t.text.ends_with(':')) {
            self.last_line = token.line;

            let key = Key::from_token(token.text)
                .filter(|key| allowed.contains(key))
                .ok_or_else(|| ParseError::UnexpectedKey {
                    line: token.line,
                    keyword,
                    key: token.text.to_string(),
                })?;

            match key {
                Key::Pos => fields.pos = Some(self.vec3(keyword)?),
                Key::Normal => fields.normal = Some(self.vec3(keyword)?),
                Key::Ambient => fields.ambient = Some(self.vec3(keyword)?),
                Key::Diffuse => fields.diffuse = Some(self.vec3(keyword)?),
                Key::Specular => fields.specular = Some(self.vec3(keyword)?),
                Key::Fov => fields.fov = Some(self.number(keyword)?),
                Key::Focal => fields.focal = Some(self.number(keyword)?),
                Key::Aspect => fields.aspect = Some(self.number(keyword)?),
                Key::Radius => fields.radius = Some(self.number(keyword)?),
                Key::Shininess => fields.shininess = Some(self.number(keyword)?),
                Key::File => fields.file = Some(self.next_token(keyword)?.text.to_string()),
            }
        }

        Ok(fields)
    }

    fn next_token(&mut self, keyword: &'static str) -> ParseResult<Token<'a>> {
        let token = self.tokens.next().ok_or(ParseError::UnexpectedEof {
            line: self.last_line,
            keyword,
        })?;
        self.last_line = token.line;
        Ok(token)
    }

    fn number(&mut self, keyword: &'static str) -> ParseResult<f32> {
        let token = self.next_token(keyword)?;
        token
            .text
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidNumber {
                line: token.line,
                token: token.text.to_string(),
            })
    }

    fn vec3(&mut self, keyword: &'static str) -> ParseResult<Vec3> {
        Ok(Vec3::new(
            self.number(keyword)?,
            self.number(keyword)?,
            self.number(keyword)?,
        ))
    }
}

/// Parse a scene description held in memory.
pub fn parse_scene(content: &str) -> ParseResult<SceneDescription> {
    SceneParser::new(content).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;

    const CAMERA: &str = "camera pos: 0 0 5 fov: 60 f: 1 a: 1\n";

    #[test]
    fn test_parse_camera_converts_degrees() {
        let desc = parse_scene(CAMERA).unwrap();

        assert_eq!(desc.camera.position(), Vec3::new(0.0, 0.0, 5.0));
        assert!((desc.camera.fov() - 60f32.to_radians()).abs() < 1e-6);
        assert_eq!(desc.camera.focal_length(), 1.0);
        assert_eq!(desc.camera.aspect_ratio(), 1.0);
        assert!(desc.lights.is_empty());
        assert!(desc.items.is_empty());
    }

    #[test]
    fn test_parse_full_scene() {
        let content = format!(
            "{CAMERA}
            # a red ball on a grey floor
            sphere pos: 0 0 0 rad: 1 amb: 0.1 0 0 dif: 1 0 0 spe: 1 1 1 shi: 32
            plane pos: 0 -1 0 nor: 0 2 0 dif: 0.5 0.5 0.5
            light pos: 0 5 5 dif: 1 1 1 spe: 0.5 0.5 0.5
            mesh file: models/tri.obj dif: 0 0 1
            "
        );
        let desc = parse_scene(&content).unwrap();

        assert_eq!(desc.lights.len(), 1);
        assert_eq!(desc.lights[0].specular, Color::splat(0.5));
        assert_eq!(desc.items.len(), 3);

        let SceneItem::Primitive(Primitive::Sphere(sphere)) = &desc.items[0] else {
            panic!("expected a sphere, got {:?}", desc.items[0]);
        };
        assert_eq!(sphere.radius(), 1.0);
        assert_eq!(
            *sphere.material(),
            Material::new(Color::new(0.1, 0.0, 0.0), Color::X, Color::ONE, 32.0)
        );

        let SceneItem::Primitive(Primitive::Plane(plane)) = &desc.items[1] else {
            panic!("expected a plane, got {:?}", desc.items[1]);
        };
        assert_eq!(plane.normal(), Vec3::Y);
        assert_eq!(plane.material().ambient, Color::ZERO);
        assert_eq!(plane.material().shininess, 0.0);

        let SceneItem::Mesh(mesh) = &desc.items[2] else {
            panic!("expected a mesh, got {:?}", desc.items[2]);
        };
        assert_eq!(mesh.file, PathBuf::from("models/tri.obj"));
        assert_eq!(mesh.material.diffuse, Color::Z);
        assert_eq!(mesh.line, 7);
    }

    #[test]
    fn test_missing_material_defaults_to_zero() {
        let desc = parse_scene(&format!("{CAMERA} sphere pos: 1 2 3 rad: 0.5")).unwrap();

        let SceneItem::Primitive(sphere) = &desc.items[0] else {
            panic!("expected a primitive");
        };
        assert_eq!(*sphere.material(), Material::default());
        assert_eq!(sphere.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_later_camera_wins() {
        let content = format!("{CAMERA} camera pos: 1 1 1 fov: 90 f: 2 a: 2");
        let desc = parse_scene(&content).unwrap();

        assert_eq!(desc.camera.position(), Vec3::ONE);
        assert_eq!(desc.camera.focal_length(), 2.0);
    }

    #[test]
    fn test_missing_camera() {
        let err = parse_scene("sphere pos: 0 0 0 rad: 1").unwrap_err();
        assert!(matches!(err, ParseError::MissingCamera));
    }

    #[test]
    fn test_unknown_keyword() {
        let err = parse_scene(&format!("{CAMERA}cube pos: 0 0 0")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownKeyword { line: 2, ref keyword } if keyword == "cube"
        ));
    }

    #[test]
    fn test_key_not_valid_for_keyword() {
        let err = parse_scene(&format!("{CAMERA} light pos: 0 0 0 rad: 2")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedKey { keyword: "light", ref key, .. } if key == "rad:"
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_scene("camera pos: 0 zero 5 fov: 60 f: 1 a: 1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { line: 1, ref token } if token == "zero"
        ));
    }

    #[test]
    fn test_truncated_vector() {
        let err = parse_scene(&format!("{CAMERA} sphere pos: 0 0")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { keyword: "sphere", .. }));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse_scene(&format!("{CAMERA} sphere pos: 0 0 0 dif: 1 0 0")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { keyword: "sphere", key: "rad:", .. }
        ));
    }

    #[test]
    fn test_invalid_geometry_reported() {
        let err = parse_scene("camera pos: 0 0 0 fov: 180 f: 1 a: 1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry { keyword: "camera", source: GeometryError::FieldOfView(_), .. }
        ));

        let err = parse_scene(&format!("{CAMERA} plane pos: 0 0 0 nor: 0 0 0")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry { keyword: "plane", source: GeometryError::ZeroNormal(_), .. }
        ));
    }

    #[test]
    fn test_negative_shininess_rejected() {
        let err = parse_scene(&format!("{CAMERA} sphere pos: 0 0 0 rad: 1 shi: -1")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry { keyword: "sphere", source: GeometryError::Shininess(s), .. }
                if s == -1.0
        ));

        let err = parse_scene(&format!("{CAMERA} mesh file: a.obj shi: -0.5")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry { keyword: "mesh", source: GeometryError::Shininess(_), .. }
        ));
    }
}
