//! Polygon regions and the even-odd membership test
//!
//! A region is the closed boundary of an actor in world space. Membership
//! uses the even-odd fill rule: cast a ray from the point toward +x and count
//! how many boundary edges it crosses. An odd count means inside.

use glam::Vec2;

/// A closed polygon boundary in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    points: Vec<Vec2>,
}

impl Region {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Boundary points in path order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Check if a point is inside the region (even-odd rule)
    pub fn contains(&self, point: Vec2) -> bool {
        contains_point(&self.points, point)
    }

    /// Check if any of the given points is inside the region
    pub fn contains_any(&self, points: &[Vec2]) -> bool {
        points.iter().any(|&p| self.contains(p))
    }
}

/// Even-odd ray cast against a closed polygon.
///
/// Degenerate polygons (fewer than 3 points) have no interior.
pub fn contains_point(polygon: &[Vec2], point: Vec2) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        // Half-open rule: an edge counts when it straddles the ray's y
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
