use glam::Vec2;

use crate::types::{EntityId, Layer};

/// Boundary tag of a collider shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Triangle,
}

/// Axis-aligned box centred on its owner. Extents are full sizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Right-triangle ramp whose hypotenuse passes through its owner's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleCollider {
    /// Side length of the ramp tile.
    pub size: f32,
    /// Outward unit normal of the sloped face.
    pub normal: Vec2,
    /// Converts box height and ramp size into the perpendicular and parallel limits.
    pub scale: f32,
}

impl TriangleCollider {
    /// Scale for a 45 degree ramp: half the hypotenuse per unit of tile size.
    pub const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

    /// 45 degree ramp with the given outward normal (normalized here).
    pub fn new(size: f32, normal: Vec2) -> Self {
        Self {
            size,
            normal: normal.normalize_or_zero(),
            scale: Self::DIAGONAL_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Whether `point` lies over the ramp tile whose centre is `origin`.
    ///
    /// Floor-like ramps (normal mostly vertical) span the tile horizontally, wall-like
    /// ramps span it vertically. Points past either end are outside the wedge no matter
    /// how close they are to the extended slope.
    pub fn is_point_in_wedge(&self, point: Vec2, origin: Vec2) -> bool {
        let offset = point - origin;
        let half_span = self.size * 0.5;
        if self.normal.y.abs() >= self.normal.x.abs() {
            offset.x.abs() <= half_span
        } else {
            offset.y.abs() <= half_span
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColliderShape {
    Box(BoxCollider),
    Triangle(TriangleCollider),
}

impl ColliderShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ColliderShape::Box(_) => ShapeKind::Box,
            ColliderShape::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

/// Collision component attached to an entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    /// Owning entity. [`crate::world::Level::spawn`] fills it in; moves always address
    /// contacts by the ids the level reports.
    pub owner: EntityId,
    pub layer: Layer,
    pub shape: ColliderShape,
}

impl Collider {
    pub fn new(layer: Layer, shape: ColliderShape) -> Self {
        Self {
            owner: EntityId::default(),
            layer,
            shape,
        }
    }

    /// Convenience: box collider on `layer`.
    pub fn boxed(layer: Layer, width: f32, height: f32) -> Self {
        Self::new(layer, ColliderShape::Box(BoxCollider::new(width, height)))
    }

    /// Convenience: 45 degree ramp on `layer`.
    pub fn ramp(layer: Layer, size: f32, normal: Vec2) -> Self {
        Self::new(layer, ColliderShape::Triangle(TriangleCollider::new(size, normal)))
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}
