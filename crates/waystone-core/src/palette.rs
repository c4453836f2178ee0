//! Semantic tile slots and their single-character glyphs.

/// Mapping from semantic tile slot to the glyph written into chunk files.
/// Biomes and components refer to slots, never to raw characters.
#[derive(Debug, Clone)]
pub struct Palette {
    // Terrain
    pub grass: char,
    pub sand: char,
    pub water: char,
    pub deep_water: char,
    pub snow: char,
    pub mountain: char,
    pub peak: char,

    // Vegetation
    pub tree: char,
    pub pine_tree: char,
    pub bush: char,

    // Structures
    pub building: char,
    pub white_building: char,
    pub wood_wall: char,
    pub door: char,
    pub pillar: char,

    // Infrastructure
    pub path: char,
    pub cobblestone: char,
    pub dock: char,
    pub bridge: char,

    // Special
    pub star: char,
    pub marker: char,
    pub empty: char,

    // Details
    pub window: char,
    pub wood_floor: char,
    pub chimney: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grass: '^',
            sand: '.',
            water: '~',
            deep_water: '≈',
            snow: 's',
            mountain: 'M',
            peak: 'A',
            tree: 'T',
            pine_tree: 't',
            bush: ';',
            building: '#',
            white_building: 'B',
            wood_wall: 'W',
            door: 'D',
            pillar: '|',
            path: '+',
            cobblestone: 'o',
            dock: '=',
            bridge: 'n',
            star: '*',
            marker: '@',
            empty: ' ',
            window: '%',
            wood_floor: '░',
            chimney: 'H',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EMPTY_TILE;

    #[test]
    fn test_glyphs_are_unique() {
        let p = Palette::default();
        let glyphs = [
            p.grass,
            p.sand,
            p.water,
            p.deep_water,
            p.snow,
            p.mountain,
            p.peak,
            p.tree,
            p.pine_tree,
            p.bush,
            p.building,
            p.white_building,
            p.wood_wall,
            p.door,
            p.pillar,
            p.path,
            p.cobblestone,
            p.dock,
            p.bridge,
            p.star,
            p.marker,
            p.empty,
            p.window,
            p.wood_floor,
            p.chimney,
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for (j, b) in glyphs.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "slots {i} and {j} share glyph {a:?}");
                }
            }
        }
    }

    #[test]
    fn test_empty_slot_matches_oob_glyph() {
        assert_eq!(Palette::default().empty, EMPTY_TILE);
    }
}
