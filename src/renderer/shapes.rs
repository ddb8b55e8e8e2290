//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Triangle fan for a convex polygon.
///
/// A closing point equal to the first is ignored.
pub fn polygon_fill(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let points = match points {
        [first, rest @ .., last] if rest.len() >= 2 && first == last => &points[..points.len() - 1],
        _ => points,
    };
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Two triangles covering a segment of the given width
fn segment_quad(p1: Vec2, p2: Vec2, width: f32, color1: [f32; 4], color2: [f32; 4]) -> [Vertex; 6] {
    let dir = (p2 - p1).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = p1 + perp;
    let v1b = p1 - perp;
    let v2a = p2 + perp;
    let v2b = p2 - perp;

    [
        Vertex::new(v1a.x, v1a.y, color1),
        Vertex::new(v1b.x, v1b.y, color1),
        Vertex::new(v2a.x, v2a.y, color2),
        Vertex::new(v2a.x, v2a.y, color2),
        Vertex::new(v1b.x, v1b.y, color1),
        Vertex::new(v2b.x, v2b.y, color2),
    ]
}

/// Outline of an axis-aligned rectangle
pub fn rect_outline(min: Vec2, max: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
    let mut vertices = Vec::with_capacity(24);
    for i in 0..4 {
        vertices.extend(segment_quad(corners[i], corners[(i + 1) % 4], width, color, color));
    }
    vertices
}

/// Polyline for a trail, fading out toward the oldest point
pub fn trail(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);
    let len = points.len() as f32;
    let faded = |t: f32| [color[0], color[1], color[2], color[3] * (1.0 - t)];

    for (i, pair) in points.windows(2).enumerate() {
        let color1 = faded(i as f32 / len);
        let color2 = faded((i + 1) as f32 / len);
        vertices.extend(segment_quad(pair[0], pair[1], width, color1, color2));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_polygon_fill_fan() {
        let tri = [Vec2::ZERO, Vec2::X, Vec2::Y];
        assert_eq!(polygon_fill(&tri, RED).len(), 3);

        let closed = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y, Vec2::ZERO];
        assert_eq!(polygon_fill(&closed, RED).len(), 6);

        assert!(polygon_fill(&[Vec2::ZERO, Vec2::X], RED).is_empty());
    }

    #[test]
    fn test_rect_outline() {
        let vertices = rect_outline(Vec2::ZERO, Vec2::new(10.0, 5.0), 2.0, RED);
        assert_eq!(vertices.len(), 24);
        // Top edge is offset by half the stroke width
        assert_eq!(vertices[0].position, [0.0, 1.0]);
    }

    #[test]
    fn test_trail_fades() {
        let points = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let vertices = trail(&points, 1.0, RED);
        assert_eq!(vertices.len(), 12);
        assert_eq!(vertices[0].color[3], 1.0);
        assert!(vertices[11].color[3] < vertices[0].color[3]);
        assert!(trail(&points[..1], 1.0, RED).is_empty());
    }
}
