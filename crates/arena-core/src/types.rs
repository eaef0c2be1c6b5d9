//! Fundamental geometric and simulation types.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position (arena units). y = Up, the ground is the XZ plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// RGB colour in linear `[0, 1]` components.
pub type Rgb = Vec3;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation sub-steps run so far.
    pub tick: u64,
    /// Elapsed simulated seconds (does not advance while paused).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Distance on the XZ plane, ignoring height.
    pub fn horizontal_range_to(&self, other: &Position) -> f32 {
        let dx = other.0.x - self.0.x;
        let dz = other.0.z - self.0.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }

    /// Speed on the XZ plane.
    pub fn horizontal_speed(&self) -> f32 {
        (self.0.x * self.0.x + self.0.z * self.0.z).sqrt()
    }
}

impl SimTime {
    /// Advance by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

/// Axis-aligned bounding box in some local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight bounds around a vertex cloud. `None` for an empty cloud.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Bounds are well formed when no axis is inverted.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test a world-space point against these bounds placed by `model`.
    ///
    /// The point is brought into model space with the inverse transform, so the
    /// box rotates and scales with the model instead of staying world-aligned.
    pub fn contains_world_point(&self, model: &Mat4, point: Vec3) -> bool {
        let local = model.inverse().transform_point3(point);
        self.contains(local)
    }
}
