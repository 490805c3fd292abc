use std::fmt;
use std::ops::AddAssign;

/// Ray counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub primary_rays: u64,
    /// Primary rays that hit a primitive
    pub hits: u64,
    pub shadow_rays: u64,
    /// Shadow rays that found an occluder
    pub occluded_shadow_rays: u64,
}

impl RenderStats {
    /// Fraction of primary rays that hit something.
    pub fn hit_ratio(&self) -> f64 {
        if self.primary_rays == 0 {
            0.0
        } else {
            self.hits as f64 / self.primary_rays as f64
        }
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, other: Self) {
        self.primary_rays += other.primary_rays;
        self.hits += other.hits;
        self.shadow_rays += other.shadow_rays;
        self.occluded_shadow_rays += other.occluded_shadow_rays;
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} primary rays ({:.1}% hit), {} shadow rays ({} occluded)",
            self.primary_rays,
            self.hit_ratio() * 100.0,
            self.shadow_rays,
            self.occluded_shadow_rays
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut total = RenderStats::default();
        total += RenderStats {
            primary_rays: 4,
            hits: 1,
            shadow_rays: 2,
            occluded_shadow_rays: 1,
        };
        total += RenderStats {
            primary_rays: 4,
            hits: 3,
            shadow_rays: 6,
            occluded_shadow_rays: 0,
        };

        assert_eq!(total.primary_rays, 8);
        assert_eq!(total.shadow_rays, 8);
        assert_eq!(total.hit_ratio(), 0.5);
    }

    #[test]
    fn test_hit_ratio_empty() {
        assert_eq!(RenderStats::default().hit_ratio(), 0.0);
    }
}
