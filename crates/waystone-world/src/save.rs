//! Pretty-printed JSON writers. Parent directories are created on demand;
//! the files themselves are immutable once written, which is what lets
//! the serving layer cache them without locks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chunk_def::ChunkDefinition;
use crate::error::WorldError;
use crate::manifest::WorldManifest;

/// Write one chunk to `<output_dir>/chunks/<x>_<y>.json` and return the
/// path written.
pub fn save_chunk(
    output_dir: &Path,
    x: i32,
    y: i32,
    chunk: &ChunkDefinition,
) -> Result<PathBuf, WorldError> {
    let path = output_dir.join("chunks").join(format!("{x}_{y}.json"));
    write_json(&path, chunk)
}

/// Write the world manifest to `<output_dir>/world.json`.
pub fn save_manifest(output_dir: &Path, manifest: &WorldManifest) -> Result<PathBuf, WorldError> {
    let path = output_dir.join("world.json");
    write_json(&path, manifest)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<PathBuf, WorldError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| WorldError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| WorldError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk_def::ZoneDef;
    use crate::manifest::tile_definitions;
    use std::collections::BTreeMap;
    use waystone_core::palette::Palette;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("waystone-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_chunk_creates_directories_and_round_trips() {
        let dir = temp_dir("chunk");
        let chunk = ChunkDefinition {
            tiles: vec![vec!['^', '+'], vec!['~', '@']],
            zones: vec![ZoneDef {
                name: "Signpost".into(),
                description: "hint".into(),
                bounds: crate::chunk_def::BoundsDef {
                    min_x: 0,
                    max_x: 2,
                    min_y: 0,
                    max_y: 2,
                },
                project_id: None,
            }],
        };

        let path = save_chunk(&dir, -1, 1, &chunk).expect("writes");
        assert!(path.ends_with("chunks/-1_1.json"));

        let contents = fs::read_to_string(&path).unwrap();
        let back: ChunkDefinition = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, chunk);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_manifest() {
        let dir = temp_dir("manifest");
        let mut manifest = WorldManifest {
            chunk_size: 50,
            spawn_chunk: [0, 0],
            spawn_local: [25, 25],
            tile_definitions: tile_definitions(&Palette::default()),
            chunks: BTreeMap::new(),
        };
        manifest.insert_chunk(0, 0, "Meadow Isle");

        let path = save_manifest(&dir, &manifest).expect("writes");
        let contents = fs::read_to_string(&path).unwrap();
        let back: WorldManifest = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, manifest);

        fs::remove_dir_all(&dir).unwrap();
    }
}
