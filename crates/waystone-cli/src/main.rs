//! `generate <output-dir> [<chunk-x> <chunk-y>]`
//!
//! Generates every chunk of the declarative world (or just one) into
//! `<output-dir>/chunks/`, plus the `world.json` manifest on full runs.
//! A chunk that fails is logged and skipped; the rest of the world still
//! generates.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use waystone_core::constants::CHUNK_SIZE;
use waystone_core::palette::Palette;
use waystone_gen::ChunkGenerator;
use waystone_world::manifest::{tile_definitions, WorldManifest};
use waystone_world::save::{save_chunk, save_manifest};

mod world_config;

use world_config::{default_world, SPAWN_CHUNK, SPAWN_LOCAL};

fn usage() -> ! {
    eprintln!("Usage: generate <output-dir>");
    eprintln!("       generate <output-dir> <chunk-x> <chunk-y>  (generate single chunk)");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let output_dir = match args.get(1) {
        Some(dir) => PathBuf::from(dir),
        None => usage(),
    };

    let only: Option<(i32, i32)> = match args.len() {
        2 => None,
        4 => {
            let x = args[2].parse().unwrap_or_else(|_| usage());
            let y = args[3].parse().unwrap_or_else(|_| usage());
            Some((x, y))
        }
        _ => usage(),
    };

    let world = default_world();
    if let Some((x, y)) = only {
        if !world
            .iter()
            .any(|e| e.config.chunk_x == x && e.config.chunk_y == y)
        {
            eprintln!("No chunk configured at ({x}, {y})");
            process::exit(1);
        }
    }

    let mut manifest = WorldManifest {
        chunk_size: CHUNK_SIZE,
        spawn_chunk: SPAWN_CHUNK,
        spawn_local: SPAWN_LOCAL,
        tile_definitions: tile_definitions(&Palette::default()),
        chunks: BTreeMap::new(),
    };

    for entry in world {
        let (x, y) = (entry.config.chunk_x, entry.config.chunk_y);
        if only.is_some_and(|(ox, oy)| (ox, oy) != (x, y)) {
            continue;
        }

        log::info!(
            "Generating chunk ({x}, {y}) - {} biome...",
            entry.config.biome.name()
        );

        let chunk = match ChunkGenerator::new(entry.config).generate() {
            Ok(chunk) => chunk,
            Err(err) => {
                log::error!("chunk ({x}, {y}): {err}");
                continue;
            }
        };

        match save_chunk(&output_dir, x, y, &chunk) {
            Ok(path) => {
                log::info!("Created {} ({} zones)", path.display(), chunk.zones.len());
                manifest.insert_chunk(x, y, entry.name);
            }
            Err(err) => {
                log::error!("chunk ({x}, {y}): {err}");
            }
        }
    }

    // The manifest must list exactly the files on disk, so single-chunk
    // runs leave it alone.
    if only.is_none() {
        match save_manifest(&output_dir, &manifest) {
            Ok(path) => log::info!("Created {}", path.display()),
            Err(err) => log::error!("world manifest: {err}"),
        }
    }

    log::info!("Done!");
}
