use anyhow::{bail, Result};
use clap::Parser;
use glam::Vec3;
use log::info;
use std::time::Instant;

use scene_state::cli::Cli;
use scene_state::demo::create_building_scene;
use scene_state::loaders::load_scene_file;
use scene_state::traits::{Renderable, SceneGraph, ViewCamera};
use scene_state::{Ortho, Projection, Scene, StateSnapshot};

/// Mutate the live scene the way interactive tools do between checkpoints
fn perturb(scene: &mut Scene, cycle: usize) -> Option<String> {
    // Fly toward the target, then strafe
    let dolly = scene.camera.forward() * 2.0;
    scene.camera.pan(dolly + Vec3::new(1.5, 0.0, 0.0));
    scene.camera.apply_projection(Projection::Ortho(Ortho {
        scale: 25.0 + cycle as f32,
        near: 0.5,
        far: 500.0,
    }));

    for (i, object) in scene.iter_mut().enumerate() {
        match i % 4 {
            0 => object.set_visible(!object.visible()),
            1 => object.set_highlighted(true),
            2 => {
                object.set_xrayed(true);
                object.set_opacity(0.3);
            }
            _ => object.set_colorize(Vec3::new(1.0, 0.2, 0.2)),
        }
        object.set_selected(i % 3 == 0);
    }

    // Simulate an unload between checkpoint and rollback
    if cycle == 0 {
        let victim = scene.ids().last().map(str::to_owned)?;
        scene.remove_object(&victim);
        return Some(victim);
    }
    None
}

/// Count fields of the live scene that differ from the snapshot
fn count_mismatches(snapshot: &StateSnapshot, scene: &Scene) -> usize {
    let live = scene.camera();
    let mut mismatches = match snapshot.camera() {
        Some(camera) => [
            camera.eye != live.eye(),
            camera.look != live.look(),
            camera.up != live.up(),
            camera.projection != Some(scene.camera.active_projection()),
        ]
        .iter()
        .filter(|&&m| m)
        .count(),
        None => 0,
    };

    for record in snapshot.objects() {
        let Some(object) = scene.object(&record.object_id) else {
            continue;
        };
        let same = record.visible == object.visible()
            && record.edges == object.edges()
            && record.xrayed == object.xrayed()
            && record.highlighted == object.highlighted()
            && record.selected == object.selected()
            && record.clippable == object.clippable()
            && record.pickable == object.pickable()
            && record.colorize == object.colorize()
            && record.opacity == object.opacity();
        if !same {
            mismatches += 1;
        }
    }
    mismatches
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = match &cli.scene {
        Some(path) => load_scene_file(path)?,
        None => create_building_scene(cli.walls)?,
    };
    info!("scene ready with {} objects", scene.len());

    let mut snapshot = StateSnapshot::new();
    let start = Instant::now();

    for cycle in 0..cli.cycles {
        snapshot.save(&scene);
        let removed = perturb(&mut scene, cycle);
        let report = snapshot.restore(&mut scene);

        let mismatches = count_mismatches(&snapshot, &scene);
        if mismatches > 0 {
            bail!("Cycle {}: {} fields differ after restore", cycle, mismatches);
        }

        if !cli.quiet {
            println!(
                "cycle {}: saved {}, restored {}, missing {}{}",
                cycle,
                snapshot.len(),
                report.restored,
                report.missing,
                removed.map(|id| format!(" (removed '{}')", id)).unwrap_or_default()
            );
        }
    }

    if !cli.quiet {
        println!(
            "{} cycles over {} objects in {:.3} ms",
            cli.cycles,
            scene.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
