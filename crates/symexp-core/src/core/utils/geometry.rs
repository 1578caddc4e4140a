use nalgebra::{Matrix4, Point3};

/// A bounding sphere: every point it stands for lies within `radius` of
/// `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 0.0,
        }
    }
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Moves the sphere by a rigid transform. The radius is kept as is.
    pub fn transformed(&self, transform: &Matrix4<f64>) -> Self {
        Self {
            center: transform.transform_point(&self.center),
            radius: self.radius,
        }
    }

    /// Gap between the two surfaces; negative when the spheres overlap.
    pub fn surface_distance(&self, other: &Sphere) -> f64 {
        nalgebra::distance(&self.center, &other.center) - (self.radius + other.radius)
    }

    /// Whether the surfaces come closer than `cutoff`.
    pub fn is_within(&self, other: &Sphere, cutoff: f64) -> bool {
        self.surface_distance(other) < cutoff
    }
}

/// Largest distance from `center` to any of `points` (zero when empty).
pub fn max_distance<'a>(
    center: &Point3<f64>,
    points: impl IntoIterator<Item = &'a Point3<f64>>,
) -> f64 {
    points
        .into_iter()
        .map(|p| nalgebra::distance(center, p))
        .fold(0.0, f64::max)
}
