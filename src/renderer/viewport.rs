use crate::level::{Level, Vertex};

/// Axis-aligned bounds of everything drawn, in level units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Viewport {
    fn around(v: Vertex, margin: f64) -> Self {
        Self {
            min_x: v.x - margin,
            min_y: v.y - margin,
            max_x: v.x + margin,
            max_y: v.y + margin,
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Bounds of the solid polygons, widened to fit every object marker of
    /// radius `margin`, or `None` when there is nothing to bound.
    pub fn bounds(level: &Level, margin: f64) -> Option<Self> {
        let vertices = level
            .solid_polygons()
            .flat_map(|p| p.vertices.iter().copied())
            .map(|v| Self::around(v, 0.0));
        let markers = level.objects.iter().map(|o| Self::around(o.position(), margin));

        vertices.chain(markers).reduce(Self::union)
    }

    /// Like [`Viewport::bounds`], with the zero viewport for an empty level
    pub fn of(level: &Level, margin: f64) -> Self {
        Self::bounds(level, margin).unwrap_or_default()
    }

    /// Square with corner `v` and side `size`
    pub fn square(v: Vertex, size: f64) -> Self {
        Self {
            min_x: v.x,
            min_y: v.y,
            max_x: v.x + size,
            max_y: v.y + size,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, v: Vertex, margin: f64) -> bool {
        v.x - margin >= self.min_x
            && v.x + margin <= self.max_x
            && v.y - margin >= self.min_y
            && v.y + margin <= self.max_y
    }
}
