//! Actors: moving shapes with a heading, a speed and a trail
//!
//! An actor's shape is a template of offsets relative to its anchor position.
//! World-space vertices are always derived from the current position, so
//! moving an actor never leaves stale geometry behind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::region::Region;
use crate::consts::CIRCLE_SEGMENTS;
use crate::error::{Error, Result};
use crate::{heading_to_velocity, normalize_degrees};

/// Direction of travel in degrees, always in [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Heading(f32);

impl Heading {
    pub fn new(degrees: f32) -> Self {
        Self(normalize_degrees(degrees))
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0
    }
}

impl From<f32> for Heading {
    fn from(degrees: f32) -> Self {
        Self::new(degrees)
    }
}

impl From<Heading> for f32 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

/// What sort of actor this is, and therefore how it is touched
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain convex polygon; contact is the even-odd vertex test
    #[default]
    Polygon,
    /// Static barrier: exempt from speed exchange, tests overlap both ways
    Obstacle,
    /// Round actor; the template approximates the outline for drawing
    Circle { radius: f32 },
}

/// Axis-aligned bounds of an actor's vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Extents {
    fn from_points(points: &[Vec2]) -> Self {
        points.iter().fold(
            Self {
                left: f32::INFINITY,
                right: f32::NEG_INFINITY,
                top: f32::INFINITY,
                bottom: f32::NEG_INFINITY,
            },
            |e, p| Self {
                left: e.left.min(p.x),
                right: e.right.max(p.x),
                top: e.top.min(p.y),
                bottom: e.bottom.max(p.y),
            },
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }
}

/// A moving shape in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ActorRepr")]
pub struct Actor {
    /// Assigned by the scene; 0 until added
    pub id: u32,
    pub kind: ActorKind,
    /// World-space anchor point
    pub pos: Vec2,
    /// Arena units per frame; negative means immobile
    pub speed: f32,
    pub color: [f32; 4],
    /// `None` is the undirected sentinel: the actor never translates
    heading: Option<Heading>,
    /// Offsets from `pos`, in path order (never empty)
    shape: Vec<Vec2>,
    /// Past positions for rendering (newest first)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

/// Wire form of [`Actor`]; loading goes back through [`Actor::new`]
#[derive(Deserialize)]
struct ActorRepr {
    id: u32,
    kind: ActorKind,
    pos: Vec2,
    speed: f32,
    color: [f32; 4],
    heading: Option<Heading>,
    shape: Vec<Vec2>,
}

impl TryFrom<ActorRepr> for Actor {
    type Error = Error;

    fn try_from(repr: ActorRepr) -> Result<Self> {
        let heading = repr.heading.map(|h| h.degrees());
        let actor = Actor::new(repr.kind, repr.pos, heading, repr.speed, repr.shape)?;
        Ok(Actor {
            id: repr.id,
            color: repr.color,
            ..actor
        })
    }
}

impl Actor {
    /// Build an actor, rejecting empty shapes and non-finite inputs
    pub fn new(
        kind: ActorKind,
        pos: Vec2,
        heading: Option<f32>,
        speed: f32,
        shape: Vec<Vec2>,
    ) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::EmptyShape);
        }
        if !pos.is_finite() {
            return Err(Error::NonFinite("position"));
        }
        if !speed.is_finite() {
            return Err(Error::NonFinite("speed"));
        }
        if heading.is_some_and(|h| !h.is_finite()) {
            return Err(Error::NonFinite("heading"));
        }
        if matches!(kind, ActorKind::Circle { radius } if !radius.is_finite()) {
            return Err(Error::NonFinite("radius"));
        }
        if shape.iter().any(|p| !p.is_finite()) {
            return Err(Error::NonFinite("shape offset"));
        }

        Ok(Self {
            id: 0,
            kind,
            pos,
            speed,
            color: [1.0, 1.0, 1.0, 1.0],
            heading: heading.map(Heading::new),
            shape,
            trail: Vec::new(),
        })
    }

    /// A plain polygon actor
    pub fn polygon(pos: Vec2, heading: f32, speed: f32, shape: Vec<Vec2>) -> Result<Self> {
        Self::new(ActorKind::Polygon, pos, Some(heading), speed, shape)
    }

    /// An immobile obstacle
    pub fn obstacle(pos: Vec2, shape: Vec<Vec2>) -> Result<Self> {
        Self::new(ActorKind::Obstacle, pos, None, -1.0, shape)
    }

    /// A round actor centred on `pos`
    pub fn circle(pos: Vec2, heading: f32, speed: f32, radius: f32) -> Result<Self> {
        let shape = regular_polygon(CIRCLE_SEGMENTS, radius, 0.0);
        Self::new(ActorKind::Circle { radius }, pos, Some(heading), speed, shape)
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    // === Motion state ===

    #[inline]
    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    /// Set the heading (normalized to [0, 360))
    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = Some(Heading::new(degrees));
    }

    /// Make the actor undirected; it stops translating but stays collidable
    pub fn clear_heading(&mut self) {
        self.heading = None;
    }

    /// Whether `advance` will translate this actor
    pub fn is_mobile(&self) -> bool {
        self.speed >= 0.0 && self.heading.is_some()
    }

    /// Per-frame displacement (zero when undirected)
    pub fn velocity(&self) -> Vec2 {
        match self.heading {
            Some(h) => heading_to_velocity(h.degrees(), self.speed),
            None => Vec2::ZERO,
        }
    }

    /// Mirror across a vertical surface: h -> 180 - h
    pub fn reflect_horizontal(&mut self) {
        if let Some(h) = self.heading {
            self.set_heading(180.0 - h.degrees());
        }
    }

    /// Mirror across a horizontal surface: h -> 360 - h
    pub fn reflect_vertical(&mut self) {
        if let Some(h) = self.heading {
            self.set_heading(360.0 - h.degrees());
        }
    }

    /// Turn around: h -> h + 180
    pub fn reverse(&mut self) {
        if let Some(h) = self.heading {
            self.set_heading(h.degrees() + 180.0);
        }
    }

    /// Record current position to trail, keeping at most `capacity` points
    pub fn record_trail(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        self.trail.insert(0, self.pos);
        self.trail.truncate(capacity);
    }

    // === Geometry ===

    /// Shape template (offsets from the anchor)
    #[inline]
    pub fn shape(&self) -> &[Vec2] {
        &self.shape
    }

    /// World-space vertices, in template order
    pub fn vertices(&self) -> Vec<Vec2> {
        self.shape.iter().map(|&offset| offset + self.pos).collect()
    }

    pub fn extents(&self) -> Extents {
        Extents::from_points(&self.vertices())
    }

    #[inline]
    pub fn top_border(&self) -> f32 {
        self.extents().top
    }

    #[inline]
    pub fn bottom_border(&self) -> f32 {
        self.extents().bottom
    }

    #[inline]
    pub fn left_border(&self) -> f32 {
        self.extents().left
    }

    #[inline]
    pub fn right_border(&self) -> f32 {
        self.extents().right
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.extents().width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.extents().height()
    }

    /// Boundary used for contact tests
    pub fn region(&self) -> Region {
        Region::new(self.vertices())
    }

    /// Outline path: first vertex, then the rest walked backwards
    pub fn outline_path(&self) -> Vec<Vec2> {
        let vertices = self.vertices();
        let Some(&first) = vertices.first() else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(vertices.len() + 1);
        path.push(first);
        path.extend(vertices.iter().rev());
        path
    }

    // === Contact ===

    /// Obstacles do not trade speed with actors that hit them
    pub fn is_momentum_exempt(&self) -> bool {
        matches!(self.kind, ActorKind::Obstacle)
    }

    /// This actor's own predicate for being touched by `mover`
    pub fn supports_contact_with(&self, mover: &Actor) -> bool {
        match self.kind {
            ActorKind::Polygon => self.region().contains_any(&mover.vertices()),
            ActorKind::Obstacle => {
                self.region().contains_any(&mover.vertices())
                    || mover.region().contains_any(&self.vertices())
            }
            ActorKind::Circle { radius } => {
                let r2 = radius * radius;
                mover
                    .vertices()
                    .iter()
                    .any(|v| v.distance_squared(self.pos) < r2)
            }
        }
    }

    /// Whether this actor currently touches `other`.
    ///
    /// The test is delegated to `other`, which knows its own shape.
    pub fn has_contact(&self, other: &Actor) -> bool {
        other.supports_contact_with(self)
    }
}

/// Offsets for a regular polygon centred on the origin
pub fn regular_polygon(sides: usize, radius: f32, rotation: f32) -> Vec<Vec2> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| {
            let theta = rotation + i as f32 * std::f32::consts::TAU / sides as f32;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Offsets for an axis-aligned rectangle with its anchor at the top-left corner
pub fn rectangle(width: f32, height: f32) -> Vec<Vec2> {
    vec![
        Vec2::ZERO,
        Vec2::new(width, 0.0),
        Vec2::new(width, height),
        Vec2::new(0.0, height),
    ]
}
