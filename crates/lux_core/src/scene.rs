//! Scene aggregate.
//!
//! A scene owns everything the renderer needs: one camera, the lights and the
//! primitives. It is assembled once (by the loader or by hand) and then only
//! ever borrowed immutably, which is what lets pixels render in parallel.

use lux_math::{Interval, Ray};

use crate::camera::Camera;
use crate::light::Light;
use crate::primitive::{Hit, Hittable, Primitive};

/// A complete scene: camera, lights and renderable primitives.
///
/// Primitive order is the tie-break order for the nearest-hit search and has
/// no other meaning.
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Camera,
    lights: Vec<Light>,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            primitives: Vec::new(),
        }
    }

    /// Append a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Append a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> usize {
        self.primitives.push(primitive.into());
        self.primitives.len() - 1
    }

    /// Append several primitives in order.
    pub fn extend_primitives<I, P>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Primitive>,
    {
        self.primitives.extend(primitives.into_iter().map(Into::into));
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// True if there is nothing to hit.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest surface along `ray`, by linear scan.
    ///
    /// On equal distances the earlier primitive wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<(usize, f32)> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(t) = primitive.intersect(ray) {
                if closest.map_or(true, |(_, best)| t < best) {
                    closest = Some((index, t));
                }
            }
        }

        closest.map(|(index, t)| Hit::new(ray, t, index, &self.primitives[index]))
    }

    /// True if any primitive is hit at a distance inside `range`.
    pub fn is_occluded(&self, ray: &Ray, range: Interval) -> bool {
        self.primitives
            .iter()
            .filter_map(|primitive| primitive.intersect(ray))
            .any(|t| range.surrounds(t))
    }
}
