//! Per-frame motion and contact resolution
//!
//! Each frame, every actor is advanced once in collection order. Advancing an
//! actor may also change the speed of siblings it runs into, so the outcome of
//! a collision depends on which actor of the pair is advanced first. That
//! ordering dependence is part of the contract: the driver must iterate in a
//! stable order (see `Scene::normalize_order`) and never in parallel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Heading};
use super::scene::Scene;
use crate::consts::{MAX_BACKTRACK_STEPS, SPEED_EXCHANGE, TRAIL_LENGTH};
use crate::heading_to_velocity;
use crate::settings::Settings;

/// Arena dimensions as seen by a single advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

/// Tunables for one advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    /// Trail capacity (0 disables tracking)
    pub trail_length: usize,
    /// Cap on half-step backtracks per contact
    pub max_backtrack_steps: u32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            trail_length: TRAIL_LENGTH,
            max_backtrack_steps: MAX_BACKTRACK_STEPS,
        }
    }
}

/// Arena edge an actor bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// A resolved contact with a sibling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub other_id: u32,
    /// Half-steps taken to clear the overlap
    pub backtrack_steps: u32,
    /// Overlap was still present when backtracking stopped
    pub unresolved: bool,
    /// Neither axis flip applied, so the heading was reversed
    pub reversed: bool,
    /// Speeds were nudged toward each other
    pub speed_exchanged: bool,
}

/// What happened to one actor during one advance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvanceReport {
    pub moved: bool,
    pub walls: Vec<Wall>,
    pub contacts: Vec<ContactEvent>,
}

/// Reports for a full frame, in advance order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    pub actors: Vec<(u32, AdvanceReport)>,
}

impl FrameReport {
    pub fn wall_bounces(&self) -> usize {
        self.actors.iter().map(|(_, r)| r.walls.len()).sum()
    }

    pub fn contacts(&self) -> usize {
        self.actors.iter().map(|(_, r)| r.contacts.len()).sum()
    }
}

/// Advance every actor in the scene by one frame
pub fn tick(scene: &mut Scene, settings: &Settings) -> FrameReport {
    let bounds = scene.bounds();
    let config = settings.step_config();
    let mut report = FrameReport {
        frame: scene.frame,
        actors: Vec::with_capacity(scene.actors.len()),
    };

    for index in 0..scene.actors.len() {
        let id = scene.actors[index].id;
        let actor_report = advance(&mut scene.actors, index, bounds, &config);
        report.actors.push((id, actor_report));
    }

    log::trace!(
        "frame {}: {} wall bounces, {} contacts",
        scene.frame,
        report.wall_bounces(),
        report.contacts()
    );

    scene.frame += 1;
    report
}

/// Advance the actor at `index` by one frame.
///
/// Order of operations: translate, reflect off each arena wall, resolve
/// contacts with every sibling in collection order, record the trail.
/// Immobile actors (negative speed or no heading) are left untouched.
pub fn advance(
    actors: &mut [Actor],
    index: usize,
    bounds: ArenaBounds,
    config: &StepConfig,
) -> AdvanceReport {
    let mut report = AdvanceReport::default();

    let actor = &mut actors[index];
    let Some(heading) = actor.heading() else {
        return report;
    };
    if actor.speed < 0.0 {
        return report;
    }

    let velocity = heading_to_velocity(heading.degrees(), actor.speed);
    actor.pos += velocity;
    report.moved = true;

    reflect_walls(actor, bounds, &mut report.walls);

    for other in 0..actors.len() {
        if other == index {
            continue;
        }
        let (actor, sibling) = pair_mut(actors, index, other);
        if let Some(event) = resolve_contact(actor, sibling, velocity, config.max_backtrack_steps) {
            report.contacts.push(event);
        }
    }

    actors[index].record_trail(config.trail_length);
    report
}

/// Push the actor back inside the arena and mirror its heading.
///
/// Each wall is checked independently against freshly computed extents, so a
/// corner hit reflects on both axes in the same frame.
fn reflect_walls(actor: &mut Actor, bounds: ArenaBounds, walls: &mut Vec<Wall>) {
    let left = actor.left_border();
    if left <= 0.0 {
        actor.pos.x -= left;
        actor.reflect_horizontal();
        walls.push(Wall::Left);
    }

    let right = actor.right_border();
    if right >= bounds.width {
        actor.pos.x -= right - bounds.width;
        actor.reflect_horizontal();
        walls.push(Wall::Right);
    }

    let top = actor.top_border();
    if top <= 0.0 {
        actor.pos.y -= top;
        actor.reflect_vertical();
        walls.push(Wall::Top);
    }

    let bottom = actor.bottom_border();
    if bottom >= bounds.height {
        actor.pos.y -= bottom - bounds.height;
        actor.reflect_vertical();
        walls.push(Wall::Bottom);
    }
}

/// Back the actor out of `other`, pick a new heading and trade speed.
///
/// Returns `None` when the two are not touching.
fn resolve_contact(
    actor: &mut Actor,
    other: &mut Actor,
    velocity: Vec2,
    max_steps: u32,
) -> Option<ContactEvent> {
    if !actor.has_contact(other) {
        return None;
    }

    let (backtrack_steps, unresolved) = backtrack(actor, other, velocity, max_steps);
    if unresolved {
        log::warn!(
            "actor {} still overlaps actor {} after {} backtrack steps",
            actor.id,
            other.id,
            backtrack_steps
        );
    }

    let reversed = redirect(actor, other);
    let speed_exchanged = !other.is_momentum_exempt() && exchange_speed(actor, other);

    log::debug!(
        "actor {} hit actor {}: {} steps back, heading {:?}, speeds {} / {}",
        actor.id,
        other.id,
        backtrack_steps,
        actor.heading().map(Heading::degrees),
        actor.speed,
        other.speed
    );

    Some(ContactEvent {
        other_id: other.id,
        backtrack_steps,
        unresolved,
        reversed,
        speed_exchanged,
    })
}

/// Step back by half the frame's displacement until contact clears.
///
/// Returns the number of steps taken and whether contact remains.
fn backtrack(actor: &mut Actor, other: &Actor, velocity: Vec2, max_steps: u32) -> (u32, bool) {
    let half_step = velocity / 2.0;
    if half_step == Vec2::ZERO {
        return (0, actor.has_contact(other));
    }

    let mut steps = 0;
    while actor.has_contact(other) {
        if steps >= max_steps {
            return (steps, true);
        }
        actor.pos -= half_step;
        steps += 1;
    }
    (steps, false)
}

/// Recompute heading from the actor's position relative to `other`'s extents.
///
/// Returns true when no axis flip changed the heading and it was reversed.
fn redirect(actor: &mut Actor, other: &Actor) -> bool {
    let old_heading = actor.heading();
    let extents = other.extents();

    if actor.pos.x < extents.left {
        actor.reflect_horizontal();
    }
    if actor.pos.x > extents.right {
        actor.reflect_horizontal();
    }
    if actor.pos.y < extents.top {
        actor.reflect_vertical();
    }
    if actor.pos.y > extents.bottom {
        actor.reflect_vertical();
    }

    if actor.heading() == old_heading {
        actor.reverse();
        return true;
    }
    false
}

/// Nudge the faster actor down and the slower one up.
///
/// Returns false when speeds were already equal.
fn exchange_speed(actor: &mut Actor, other: &mut Actor) -> bool {
    if actor.speed > other.speed {
        actor.speed -= SPEED_EXCHANGE;
        other.speed += SPEED_EXCHANGE;
        true
    } else if actor.speed != other.speed {
        actor.speed += SPEED_EXCHANGE;
        other.speed -= SPEED_EXCHANGE;
        true
    } else {
        false
    }
}

/// Mutable references to two distinct elements
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
