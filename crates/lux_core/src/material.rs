//! Phong surface material.

use lux_math::Color;

/// Reflectance terms for the Phong model.
///
/// Every field defaults to zero, so a scene entry that omits a term simply
/// contributes nothing for it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    /// Color added once per hit, independent of lights
    pub ambient: Color,

    /// Lambertian reflectance, scaled by each light's diffuse color
    pub diffuse: Color,

    /// Mirror-lobe reflectance, scaled by each light's specular color
    pub specular: Color,

    /// Specular exponent, non-negative. The renderer treats a negative value
    /// as zero.
    pub shininess: f32,
}

impl Material {
    /// Create a material from all four terms.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// A purely diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse: color,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_specular(mut self, specular: Color, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }
}
