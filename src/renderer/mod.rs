//! Rendering contract
//!
//! The simulation never draws. After a frame has been advanced, the driver
//! hands each actor to `render_actor` with some `Surface`. `DrawList` is the
//! built-in surface: it records commands and can turn them into triangle
//! vertices for a GPU backend.

pub mod draw_list;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use vertex::Vertex;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{Actor, Scene};

/// Something actors can be drawn onto
pub trait Surface {
    /// Fill a closed path with a solid color
    fn fill_polygon(&mut self, points: &[Vec2], color: [f32; 4]);
    /// Stroke an axis-aligned rectangle
    fn stroke_rect(&mut self, min: Vec2, max: Vec2);
    /// Stroke a 1x1 marker with its top-left corner at `point`
    fn stroke_dot(&mut self, point: Vec2);
    /// Stroke an open polyline
    fn stroke_polyline(&mut self, points: &[Vec2]);
}

/// Draw one actor: body, then optional outline, then trail
pub fn render_actor(actor: &Actor, surface: &mut impl Surface, settings: &Settings) {
    surface.fill_polygon(&actor.outline_path(), actor.color);

    if settings.show_outlines {
        let extents = actor.extents();
        surface.stroke_rect(extents.min(), extents.max());
        surface.stroke_dot(actor.pos);
    }

    if !actor.trail.is_empty() {
        let mut path = Vec::with_capacity(actor.trail.len() + 1);
        path.push(actor.pos);
        path.extend_from_slice(&actor.trail);
        surface.stroke_polyline(&path);
    }
}

/// Draw every actor in advance order
pub fn render_scene(scene: &Scene, surface: &mut impl Surface, settings: &Settings) {
    for actor in &scene.actors {
        render_actor(actor, surface, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rectangle;

    fn actor() -> Actor {
        Actor::polygon(Vec2::new(10.0, 10.0), 0.0, 1.0, rectangle(4.0, 4.0))
            .unwrap()
            .with_color([1.0, 0.0, 0.0, 1.0])
    }

    #[test]
    fn test_render_fill_only() {
        let mut list = DrawList::default();
        render_actor(&actor(), &mut list, &Settings::default());

        assert_eq!(list.commands.len(), 1);
        match &list.commands[0] {
            DrawCommand::FillPolygon { points, color } => {
                assert_eq!(points.len(), 5);
                assert_eq!(*color, [1.0, 0.0, 0.0, 1.0]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_outline_and_trail() {
        let settings = Settings {
            show_outlines: true,
            ..Default::default()
        };
        let mut a = actor();
        a.record_trail(5);
        a.pos.x += 1.0;
        a.record_trail(5);

        let mut list = DrawList::default();
        render_actor(&a, &mut list, &settings);

        assert_eq!(list.commands.len(), 4);
        assert_eq!(
            list.commands[1],
            DrawCommand::StrokeRect {
                min: Vec2::new(11.0, 10.0),
                max: Vec2::new(15.0, 14.0),
            }
        );
        assert_eq!(list.commands[2], DrawCommand::StrokeDot { point: a.pos });
        match &list.commands[3] {
            DrawCommand::StrokePolyline { points } => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[0], a.pos);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_scene_order() {
        let mut scene = Scene::new(100.0, 100.0, 0);
        scene.add(actor());
        scene.add(actor().with_color([0.0, 0.0, 1.0, 1.0]));

        let mut list = DrawList::default();
        render_scene(&scene, &mut list, &Settings::default());

        assert_eq!(list.commands.len(), 2);
        match &list.commands[1] {
            DrawCommand::FillPolygon { color, .. } => assert_eq!(*color, [0.0, 0.0, 1.0, 1.0]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
