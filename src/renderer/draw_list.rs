//! Recording surface
//!
//! Useful for headless runs, debugging dumps and tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Surface;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::error::Result;

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillPolygon { points: Vec<Vec2>, color: [f32; 4] },
    StrokeRect { min: Vec2, max: Vec2 },
    StrokeDot { point: Vec2 },
    StrokePolyline { points: Vec<Vec2> },
}

/// Commands recorded for one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Triangulate every command into a vertex buffer
    pub fn to_vertices(&self, stroke_width: f32) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::FillPolygon { points, color } => {
                    vertices.extend(shapes::polygon_fill(points, *color));
                }
                DrawCommand::StrokeRect { min, max } => {
                    vertices.extend(shapes::rect_outline(*min, *max, stroke_width, colors::OUTLINE));
                }
                DrawCommand::StrokeDot { point } => {
                    vertices.extend(shapes::rect_outline(
                        *point,
                        *point + Vec2::ONE,
                        stroke_width,
                        colors::OUTLINE,
                    ));
                }
                DrawCommand::StrokePolyline { points } => {
                    vertices.extend(shapes::trail(points, stroke_width, colors::TRAIL));
                }
            }
        }
        vertices
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Surface for DrawList {
    fn fill_polygon(&mut self, points: &[Vec2], color: [f32; 4]) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_rect(&mut self, min: Vec2, max: Vec2) {
        self.commands.push(DrawCommand::StrokeRect { min, max });
    }

    fn stroke_dot(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::StrokeDot { point });
    }

    fn stroke_polyline(&mut self, points: &[Vec2]) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
        });
    }
}
