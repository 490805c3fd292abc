use lux_math::{Color, Vec3};

/// A point light. Intensity does not fall off with distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Vec3, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }

    /// White diffuse and specular light.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Color::ONE, Color::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_light() {
        let light = Light::white(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.diffuse, Color::ONE);
        assert_eq!(light.specular, Color::ONE);
    }
}
