//! The per-chunk output format, one JSON file per chunk.

use serde::{Deserialize, Serialize};

use waystone_core::bounds::Bounds;
use waystone_core::zone::Zone;

/// A generated chunk: `CHUNK_SIZE` rows of single-character glyphs plus
/// the interactive zones inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDefinition {
    pub tiles: Vec<Vec<char>>,
    pub zones: Vec<ZoneDef>,
}

/// Wire form of a zone. `project_id` is omitted entirely when the zone
/// carries none, matching what the serving layer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDef {
    pub name: String,
    pub description: String,
    pub bounds: BoundsDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Wire form of an inclusive rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsDef {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl From<Bounds> for BoundsDef {
    fn from(b: Bounds) -> Self {
        Self {
            min_x: b.min_x,
            max_x: b.max_x,
            min_y: b.min_y,
            max_y: b.max_y,
        }
    }
}

impl From<BoundsDef> for Bounds {
    fn from(b: BoundsDef) -> Self {
        Bounds::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

impl From<&Zone> for ZoneDef {
    fn from(zone: &Zone) -> Self {
        Self {
            name: zone.name.clone(),
            description: zone.description.clone(),
            bounds: zone.bounds.into(),
            project_id: zone.project_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChunkDefinition {
        ChunkDefinition {
            tiles: vec![
                vec!['^', '^', '+'],
                vec!['^', '@', '+'],
                vec!['≈', '░', '+'],
            ],
            zones: vec![
                ZoneDef {
                    name: "Portfolio Shrine".into(),
                    description: "A mystical monument.".into(),
                    bounds: BoundsDef {
                        min_x: 23,
                        max_x: 27,
                        min_y: 23,
                        max_y: 27,
                    },
                    project_id: Some("portfolio".into()),
                },
                ZoneDef {
                    name: "Signpost".into(),
                    description: "A path leads onward...".into(),
                    bounds: BoundsDef {
                        min_x: 24,
                        max_x: 26,
                        min_y: 44,
                        max_y: 46,
                    },
                    project_id: None,
                },
            ],
        }
    }

    #[test]
    fn test_round_trip_preserves_glyphs_and_zones() {
        let chunk = sample();
        let json = serde_json::to_string_pretty(&chunk).expect("serializes");
        let back: ChunkDefinition = serde_json::from_str(&json).expect("parses back");
        assert_eq!(back, chunk);
    }

    #[test]
    fn test_multibyte_glyphs_serialize_as_single_characters() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"≈\""));
        assert!(json.contains("\"░\""));
    }

    #[test]
    fn test_empty_project_id_is_omitted() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json.matches("project_id").count(),
            1,
            "only the project zone carries the field"
        );
    }

    #[test]
    fn test_bounds_conversion_round_trip() {
        let bounds = Bounds::new(1, 2, 3, 4);
        let def: BoundsDef = bounds.into();
        assert_eq!(Bounds::from(def), bounds);
    }

    #[test]
    fn test_zone_conversion() {
        let zone = Zone {
            name: "n".into(),
            description: "d".into(),
            bounds: Bounds::new(0, 0, 5, 5),
            project_id: None,
        };
        let def = ZoneDef::from(&zone);
        assert_eq!(def.name, "n");
        assert!(def.project_id.is_none());
        assert_eq!(def.bounds.max_x, 5);
    }
}
