//! Scene: the arena and the actors registered in it
//!
//! Everything needed to resume a simulation lives here and serializes to
//! JSON. Trails are transient and skipped.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, regular_polygon};
use super::tick::ArenaBounds;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Smallest and largest radius for randomly spawned shapes
const SPAWN_RADIUS: (f32, f32) = (8.0, 24.0);
/// Integer speed range for randomly spawned shapes
const SPAWN_SPEED: (u32, u32) = (1, 5);

/// RNG state wrapper for serialization.
///
/// Each spawn batch draws from its own PCG stream so batches are
/// reproducible from the seed alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Take the next stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// The arena and its actors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Frames advanced so far
    pub frame: u64,
    /// Actors in advance order (sorted by id)
    pub actors: Vec<Actor>,
    pub rng_state: RngState,
    next_id: u32,
}

impl Scene {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            frame: 0,
            actors: Vec::new(),
            rng_state: RngState::new(seed),
            next_id: 1,
        }
    }

    /// Empty scene sized from settings, populated with random actors
    pub fn from_settings(settings: &Settings) -> Self {
        let mut scene = Self::new(settings.arena_width, settings.arena_height, settings.seed);
        scene.spawn_random(settings.actor_count);
        scene
    }

    #[inline]
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds {
            width: self.width,
            height: self.height,
        }
    }

    /// Register an actor, assigning it the next id
    pub fn add(&mut self, mut actor: Actor) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        actor.id = id;
        self.actors.push(actor);
        id
    }

    pub fn get(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Ensure actors are sorted by id for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.actors.sort_by_key(|a| a.id);
    }

    /// Spawn `count` regular polygons with random size, speed, heading and color.
    ///
    /// Returns the ids of the new actors.
    pub fn spawn_random(&mut self, count: usize) -> Vec<u32> {
        let mut rng = self.rng_state.next_rng();
        let mut ids = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = rng
                .random_range(SPAWN_RADIUS.0..=SPAWN_RADIUS.1)
                .min(self.width / 4.0)
                .min(self.height / 4.0);
            let sides = rng.random_range(3..=8);
            let rotation = rng.random_range(0.0..std::f32::consts::TAU);
            let pos = Vec2::new(
                rng.random_range(radius..=(self.width - radius).max(radius)),
                rng.random_range(radius..=(self.height - radius).max(radius)),
            );
            let heading = rng.random_range(0.0..360.0);
            let speed = rng.random_range(SPAWN_SPEED.0..=SPAWN_SPEED.1) as f32;
            let color = [
                rng.random_range(0.2..=1.0),
                rng.random_range(0.2..=1.0),
                rng.random_range(0.2..=1.0),
                1.0,
            ];

            match Actor::polygon(pos, heading, speed, regular_polygon(sides, radius, rotation)) {
                Ok(actor) => ids.push(self.add(actor.with_color(color))),
                Err(e) => log::warn!("Skipping random actor: {e}"),
            }
        }

        log::info!(
            "Spawned {} actors (stream {})",
            ids.len(),
            self.rng_state.stream - 1
        );
        ids
    }

    /// Serialize the scene (without trails)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot. Actors are rebuilt through [`Actor::new`], so a bad
    /// shape or a non-finite value fails here rather than mid-frame.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut scene: Self = serde_json::from_str(json)?;
        for (name, value) in [("width", scene.width), ("height", scene.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidScene(format!("{name} must be positive, got {value}")));
            }
        }
        scene.normalize_order();
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::rectangle;

    #[test]
    fn test_add_assigns_ids() {
        let mut scene = Scene::new(100.0, 100.0, 1);
        let a = scene.add(Actor::polygon(Vec2::ZERO, 0.0, 1.0, rectangle(1.0, 1.0)).unwrap());
        let b = scene.add(Actor::polygon(Vec2::ONE, 0.0, 1.0, rectangle(1.0, 1.0)).unwrap());

        assert_eq!((a, b), (1, 2));
        assert_eq!(scene.get(b).unwrap().pos, Vec2::ONE);
        assert!(scene.get(3).is_none());
    }

    #[test]
    fn test_spawn_random_is_deterministic() {
        let mut a = Scene::new(400.0, 300.0, 42);
        let mut b = Scene::new(400.0, 300.0, 42);
        a.spawn_random(10);
        b.spawn_random(10);

        assert_eq!(a.actors.len(), 10);
        for (x, y) in a.actors.iter().zip(&b.actors) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.speed, y.speed);
            assert_eq!(x.heading(), y.heading());
        }
    }

    #[test]
    fn test_spawn_random_within_arena() {
        let mut scene = Scene::new(400.0, 300.0, 9);
        scene.spawn_random(50);

        for actor in &scene.actors {
            assert!(actor.left_border() >= -1e-3);
            assert!(actor.right_border() <= 400.0 + 1e-3);
            assert!(actor.top_border() >= -1e-3);
            assert!(actor.bottom_border() <= 300.0 + 1e-3);
            assert!((1.0..=5.0).contains(&actor.speed));
        }
    }

    #[test]
    fn test_batches_use_new_streams() {
        let mut scene = Scene::new(400.0, 300.0, 3);
        scene.spawn_random(1);
        scene.spawn_random(1);
        assert_eq!(scene.rng_state.stream, 2);
        assert_ne!(scene.actors[0].pos, scene.actors[1].pos);
    }

    #[test]
    fn test_json_snapshot() {
        let mut scene = Scene::new(200.0, 100.0, 5);
        scene.spawn_random(3);
        scene.actors[0].record_trail(4);
        scene.actors.reverse();

        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();

        assert_eq!(restored.actors.len(), 3);
        assert_eq!(restored.actors[0].id, 1);
        assert!(restored.actors.iter().all(|a| a.trail.is_empty()));
        assert_eq!(restored.width, 200.0);
    }

    #[test]
    fn test_from_json_rejects_empty_shape() {
        let mut scene = Scene::new(200.0, 100.0, 5);
        scene.spawn_random(2);
        let mut value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        value["actors"][0]["shape"] = serde_json::json!([]);

        let err = Scene::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("at least one point"));
    }

    #[test]
    fn test_from_json_rejects_bad_arena() {
        let scene = Scene::new(200.0, 100.0, 5);
        let mut value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        value["width"] = serde_json::json!(0.0);
        assert!(matches!(
            Scene::from_json(&value.to_string()),
            Err(Error::InvalidScene(_))
        ));

        value["width"] = serde_json::json!(200.0);
        value["height"] = serde_json::json!(-5.0);
        assert!(matches!(
            Scene::from_json(&value.to_string()),
            Err(Error::InvalidScene(_))
        ));
    }
}
