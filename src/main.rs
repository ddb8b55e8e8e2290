//! Polyarena headless driver
//!
//! Builds a scene, advances it for a number of frames and reports what
//! happened. The final frame can be dumped as a JSON draw list.

use std::path::PathBuf;

use clap::Parser;

use polyarena::renderer::{DrawList, render_scene};
use polyarena::sim::{Scene, tick};
use polyarena::{Settings, logging};

/// Bouncing convex polygons in a rectangular arena
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Override the spawn seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of random actors
    #[arg(short, long)]
    actors: Option<usize>,

    /// Write the last frame's draw list to this file
    #[arg(long)]
    dump_frame: Option<PathBuf>,

    /// Write the final scene snapshot to this file
    #[arg(long)]
    dump_scene: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> polyarena::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(actors) = args.actors {
        settings.actor_count = actors;
    }
    settings.validate()?;

    let mut scene = Scene::from_settings(&settings);
    log::info!(
        "Arena {}x{} with {} actors, running {} frames",
        scene.width,
        scene.height,
        scene.actors.len(),
        args.frames
    );

    let mut wall_bounces = 0;
    let mut contacts = 0;
    for _ in 0..args.frames {
        let report = tick(&mut scene, &settings);
        wall_bounces += report.wall_bounces();
        contacts += report.contacts();
    }

    log::info!(
        "Done after {} frames: {} wall bounces, {} contacts",
        scene.frame,
        wall_bounces,
        contacts
    );
    for actor in &scene.actors {
        log::debug!(
            "actor {}: pos ({:.1}, {:.1}) heading {:?} speed {}",
            actor.id,
            actor.pos.x,
            actor.pos.y,
            actor.heading().map(|h| h.degrees()),
            actor.speed
        );
    }

    if let Some(path) = &args.dump_frame {
        let mut list = DrawList::default();
        render_scene(&scene, &mut list, &settings);
        std::fs::write(path, list.to_json()?)?;
        log::info!("Draw list written to {}", path.display());
    }

    if let Some(path) = &args.dump_scene {
        std::fs::write(path, scene.to_json()?)?;
        log::info!("Scene written to {}", path.display());
    }

    Ok(())
}
