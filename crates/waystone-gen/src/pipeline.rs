//! The chunk generator: one `ChunkConfig` in, one `ChunkDefinition` out.
//!
//! Stages run in a fixed order and every random draw comes from the one
//! seeded stream, so the output is a pure function of the configuration.
//! Structural components are queued first and rendered before routing;
//! terrain features render after routing so they cannot sever a path.

use std::collections::{HashSet, VecDeque};

use waystone_core::bounds::Bounds;
use waystone_core::constants::{
    CHUNK_SIZE, HUB_RADIUS, SAFE_MARGIN, SHORELINE_SAND_DEPTH, SHORELINE_WATER_DEPTH,
    SHORE_MARGIN, SIGNPOST_INSET,
};
use waystone_core::error::GenError;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::point::{manhattan, neighbours, Direction, Point};
use waystone_core::rng::ChunkRng;
use waystone_core::zone::{Anchor, Zone};
use waystone_world::chunk_def::{ChunkDefinition, ZoneDef};

use crate::biome::{Biome, BiomeKind};
use crate::components::{
    Building, Cabin, Component, Courtyard, Dock, Garden, Grove, MountainRange, Plaza, PlazaShape,
    Pond, Ruins, Shoreline, Shrine, Signpost, Tower, WallStyle,
};
use crate::config::{ChunkConfig, StructureKind};
use crate::graph::{Graph, Node, NodeKind};
use crate::pathfind;

const DEFAULT_SIGNPOST_HINT: &str = "A path leads onward...";

/// Owns all state for one chunk's generation. Created per chunk and
/// consumed by `generate`; chunks share nothing, so a batch driver can
/// run many generators in parallel.
pub struct ChunkGenerator {
    config: ChunkConfig,
    palette: Palette,
    biome: Biome,
    rng: ChunkRng,
    grid: Grid,
    graph: Graph,
    /// Structural components, rendered before paths.
    components: Vec<Component>,
    /// Terrain features, rendered after paths.
    terrain_features: Vec<Component>,
    zones: Vec<Zone>,
}

impl ChunkGenerator {
    pub fn new(config: ChunkConfig) -> Self {
        let biome = Biome::get(config.biome);
        let grid = Grid::new(CHUNK_SIZE, CHUNK_SIZE, biome.base_tile, biome.base_walkable);
        let rng = ChunkRng::new(config.seed);
        Self {
            config,
            palette: Palette::default(),
            biome,
            rng,
            grid,
            graph: Graph::new(),
            components: Vec::new(),
            terrain_features: Vec::new(),
            zones: Vec::new(),
        }
    }

    /// Run the full pipeline. Stage order is load-bearing.
    pub fn generate(mut self) -> Result<ChunkDefinition, GenError> {
        self.build_graph();
        self.queue_edge_terrain();
        self.place_projects()?;
        self.place_hub()?;
        self.place_signposts();
        self.render_components();
        self.route_paths()?;
        self.queue_terrain_features();
        self.render_terrain_features();
        self.add_decoration();
        self.validate()?;
        Ok(self.build_output())
    }

    /// One edge-port node per configured connection, at the midpoint of
    /// its side.
    fn build_graph(&mut self) {
        for &dir in &self.config.connections {
            self.graph.add_node(edge_port(dir));
        }
    }

    /// Queue shorelines for shorelined sides, and the mountain wall for
    /// the mountain biome.
    fn queue_edge_terrain(&mut self) {
        for &dir in &self.config.shorelines {
            self.components.push(Component::Shoreline(Shoreline::new(
                dir,
                SHORELINE_WATER_DEPTH,
                SHORELINE_SAND_DEPTH,
                CHUNK_SIZE,
            )));
        }

        if self.config.biome == BiomeKind::Mountain {
            // The range occupies the upper portion; one pass keeps the
            // north traversable.
            self.components.push(Component::MountainRange(MountainRange::new(
                Bounds::new(3, 3, 25, 12),
                vec![Point::new(15, 10)],
                2,
            )));
        }
    }

    fn place_projects(&mut self) -> Result<(), GenError> {
        if self.config.projects.is_empty() {
            return Ok(());
        }

        let positions = self.project_positions(self.config.projects.len());
        let projects = self.config.projects.clone();

        for (i, proj) in projects.iter().enumerate() {
            let pos = *positions.get(i).ok_or_else(|| GenError::PlacementFailure {
                project_id: proj.project_id.clone(),
            })?;

            let make_zone = |bounds: Bounds| Zone {
                name: proj.name.clone(),
                description: proj.description.clone(),
                bounds,
                project_id: Some(proj.project_id.clone()),
            };

            let comp = match proj.structure {
                StructureKind::Tower => {
                    let radius = 3 + proj.size;
                    let entrance = self.pick_entrance(pos);
                    let zone = make_zone(Bounds::around(pos, radius));
                    Component::Tower(Tower::new(pos, radius, entrance, zone))
                }
                StructureKind::Shrine => {
                    let zone = make_zone(Bounds::around(pos, proj.size));
                    Component::Shrine(Shrine::new(pos, proj.size, zone))
                }
                StructureKind::Courtyard => {
                    let half = 4 + proj.size * 2;
                    let bounds = Bounds::around(pos, half);
                    let zone = make_zone(bounds);
                    Component::Courtyard(Courtyard::new(
                        bounds,
                        WallStyle::Stone,
                        vec![Direction::South],
                        zone,
                    ))
                }
                StructureKind::Cabin => {
                    let size = 3 + proj.size;
                    let bounds =
                        Bounds::new(pos.x - size, pos.y - size / 2, pos.x + size, pos.y + size / 2);
                    let entrance = self.pick_entrance(pos);
                    let zone = make_zone(bounds);
                    Component::Cabin(Cabin::new(bounds, entrance, zone))
                }
                StructureKind::Building => {
                    let size = 3 + proj.size;
                    let bounds =
                        Bounds::new(pos.x - size, pos.y - size / 2, pos.x + size, pos.y + size / 2);
                    let entrance = self.pick_entrance(pos);
                    let zone = make_zone(bounds);
                    Component::Building(Building::new(bounds, WallStyle::Stone, entrance, zone))
                }
            };

            let zone = comp
                .zone()
                .cloned()
                .ok_or_else(|| GenError::PlacementFailure {
                    project_id: proj.project_id.clone(),
                })?;
            self.zones.push(zone.clone());

            self.graph.add_node(Node {
                id: format!("project_{}", proj.project_id),
                kind: NodeKind::Component,
                position: pos,
                anchors: comp.anchors(),
                bounds: comp.bounds(),
                zone: Some(zone),
            });
            self.components.push(comp);
        }

        Ok(())
    }

    /// Deterministic placement patterns per project count, inside the
    /// safe interior area.
    fn project_positions(&self, count: usize) -> Vec<Point> {
        let (mut min_x, mut min_y) = (SAFE_MARGIN, SAFE_MARGIN);
        let (mut max_x, mut max_y) = (CHUNK_SIZE - SAFE_MARGIN, CHUNK_SIZE - SAFE_MARGIN);

        for &dir in &self.config.shorelines {
            match dir {
                Direction::North => min_y = SHORE_MARGIN,
                Direction::South => max_y = CHUNK_SIZE - SHORE_MARGIN,
                Direction::East => max_x = CHUNK_SIZE - SHORE_MARGIN,
                Direction::West => min_x = SHORE_MARGIN,
            }
        }

        // The mountain wall claims the upper rows
        if self.config.biome == BiomeKind::Mountain {
            min_y = min_y.max(20);
        }

        let center_x = (min_x + max_x) / 2;
        let center_y = (min_y + max_y) / 2;
        let safe_width = max_x - min_x;
        let safe_height = max_y - min_y;

        match count {
            1 => vec![Point::new(center_x, center_y)],
            2 => {
                let dx = safe_width / 4;
                let dy = safe_height / 4;
                vec![
                    Point::new(center_x - dx, center_y - dy),
                    Point::new(center_x + dx, center_y + dy),
                ]
            }
            3 => {
                let dx = safe_width / 3;
                let dy = safe_height / 3;
                vec![
                    Point::new(center_x, center_y - dy),
                    Point::new(center_x - dx, center_y + dy / 2),
                    Point::new(center_x + dx, center_y + dy / 2),
                ]
            }
            4 => {
                let dx = safe_width / 3;
                let dy = safe_height / 3;
                vec![
                    Point::new(center_x - dx, center_y - dy),
                    Point::new(center_x + dx, center_y - dy),
                    Point::new(center_x - dx, center_y + dy),
                    Point::new(center_x + dx, center_y + dy),
                ]
            }
            _ => {
                // Ring placement. Positions are integerized, so platform
                // sin/cos precision cannot move a tile at these radii.
                let radius = (safe_width.min(safe_height) / 3) as f64;
                (0..count)
                    .map(|i| {
                        let angle = i as f64 * (std::f64::consts::TAU / count as f64);
                        Point::new(
                            center_x + (radius * angle.cos()) as i32,
                            center_y + (radius * angle.sin()) as i32,
                        )
                    })
                    .collect()
            }
        }
    }

    /// Entrance faces the chunk center; ties prefer east/west.
    fn pick_entrance(&self, pos: Point) -> Direction {
        let center = Point::new(CHUNK_SIZE / 2, CHUNK_SIZE / 2);
        let dx = center.x - pos.x;
        let dy = center.y - pos.y;

        if dx.abs() >= dy.abs() {
            if dx > 0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if dy > 0 {
            Direction::South
        } else {
            Direction::North
        }
    }

    /// A central plaza joins everything in a star whenever there is more
    /// than one way out or anything to visit.
    fn place_hub(&mut self) -> Result<(), GenError> {
        if self.config.connections.len() <= 1 && self.config.projects.is_empty() {
            return Ok(());
        }

        let center = Point::new(CHUNK_SIZE / 2, CHUNK_SIZE / 2);
        let plaza = Plaza::new(center, HUB_RADIUS, PlazaShape::Square);
        self.graph.add_node(Node {
            id: "hub".to_string(),
            kind: NodeKind::Hub,
            position: center,
            anchors: plaza.anchors(),
            bounds: plaza.bounds(),
            zone: None,
        });
        self.components.push(Component::Plaza(plaza));

        for &dir in &self.config.connections {
            self.graph.add_edge("hub", &port_id(dir), true)?;
        }
        let project_ids: Vec<String> = self
            .config
            .projects
            .iter()
            .map(|p| format!("project_{}", p.project_id))
            .collect();
        for project_id in &project_ids {
            self.graph.add_edge("hub", project_id, true)?;
        }
        Ok(())
    }

    /// A marker a few tiles inside each outbound side, on the midline the
    /// port path will follow.
    fn place_signposts(&mut self) {
        let mid = CHUNK_SIZE / 2;
        for &dir in &self.config.connections {
            let hint = self
                .config
                .signpost_hints
                .get(&dir)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SIGNPOST_HINT.to_string());

            let pos = match dir {
                Direction::North => Point::new(mid, SIGNPOST_INSET),
                Direction::South => Point::new(mid, CHUNK_SIZE - 1 - SIGNPOST_INSET),
                Direction::East => Point::new(CHUNK_SIZE - 1 - SIGNPOST_INSET, mid),
                Direction::West => Point::new(SIGNPOST_INSET, mid),
            };

            let signpost = Signpost::new(pos, dir, hint);
            self.zones.push(signpost.zone().clone());
            self.components.push(Component::Signpost(signpost));
        }
    }

    fn render_components(&mut self) {
        for comp in &self.components {
            comp.render(&mut self.grid, &self.palette, &mut self.rng);
        }
    }

    fn render_terrain_features(&mut self) {
        for feat in &self.terrain_features {
            feat.render(&mut self.grid, &self.palette, &mut self.rng);
        }
    }

    /// Route every graph edge between the closest pair of anchors.
    /// Structural interiors go into an avoid set so paths hug walls
    /// instead of tunneling; a required edge that cannot be routed around
    /// them retries without avoidance before failing.
    fn route_paths(&mut self) -> Result<(), GenError> {
        let mut avoid: HashSet<Point> = HashSet::new();
        for comp in &self.components {
            let anchor_cells: HashSet<Point> =
                comp.anchors().iter().map(|a| a.position).collect();
            for p in comp.bounds().cells() {
                if !anchor_cells.contains(&p) && !self.grid.is_walkable(p) {
                    avoid.insert(p);
                }
            }
        }

        for i in 0..self.graph.edges().len() {
            let edge = &self.graph.edges()[i];
            let (from_id, to_id, required) = (edge.from.clone(), edge.to.clone(), edge.required);

            let from_node = self.graph.node(&from_id).expect("edge endpoints exist");
            let to_node = self.graph.node(&to_id).expect("edge endpoints exist");
            let from_anchor = closest_anchor(from_node, to_node.position);
            let to_anchor = closest_anchor(to_node, from_node.position);

            let mut path = pathfind::find_path_avoid(&self.grid, from_anchor, to_anchor, &avoid);
            if path.is_none() && required {
                path = pathfind::find_path(&self.grid, from_anchor, to_anchor, None);
            }

            match path {
                Some(path) => {
                    for &p in &path {
                        let tile = self.grid.get(p);
                        // Merge onto existing cobble, docks, and bridges
                        if tile == self.palette.grass || tile == self.palette.sand {
                            self.grid.set(p, self.palette.path, true);
                        }
                    }
                    if let Some(edge) = self.graph.edge_mut(i) {
                        edge.path = path;
                    }
                }
                None if required => {
                    return Err(GenError::RoutingFailure {
                        from: from_id,
                        to: to_id,
                    });
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Biome flavor placed after routing, so water and walls cannot cut
    /// an already-painted path.
    fn queue_terrain_features(&mut self) {
        match self.config.biome {
            BiomeKind::Grassland => {
                if self.rng.next_f64() < 0.5 {
                    let pos = Point::new(
                        10 + self.rng.int_in(8) as i32,
                        38 + self.rng.int_in(5) as i32,
                    );
                    self.terrain_features.push(Component::Pond(Pond::new(pos, 3)));
                }
            }
            BiomeKind::Forest => {
                self.terrain_features.push(Component::Grove(Grove::new(
                    Bounds::new(5, 5, 12, 12),
                    0.35,
                    self.palette.tree,
                )));
                self.terrain_features.push(Component::Grove(Grove::new(
                    Bounds::new(38, 38, 45, 45),
                    0.35,
                    self.palette.tree,
                )));
            }
            BiomeKind::Coastal => {
                if self.config.shorelines.contains(&Direction::East) {
                    self.terrain_features.push(Component::Dock(Dock::new(
                        Point::new(CHUNK_SIZE - 8, CHUNK_SIZE / 2),
                        Direction::East,
                        5,
                        3,
                        None,
                    )));
                }
            }
            BiomeKind::Urban => {
                self.terrain_features
                    .push(Component::Garden(Garden::new(Bounds::new(8, 38, 15, 45))));
            }
            BiomeKind::Castle => {
                self.terrain_features
                    .push(Component::Ruins(Ruins::new(Bounds::new(38, 5, 44, 10), 0.4)));
            }
            BiomeKind::Mountain => {
                self.terrain_features.push(Component::Grove(Grove::new(
                    Bounds::new(35, 38, 42, 45),
                    0.2,
                    self.palette.pine_tree,
                )));
            }
        }
    }

    /// Scatter the biome's trees and bushes over whatever is still plain
    /// grass.
    fn add_decoration(&mut self) {
        let mut avoid: HashSet<Point> = HashSet::new();
        for y in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let p = Point::new(x, y);
                if self.grid.get(p) != self.palette.grass {
                    avoid.insert(p);
                }
            }
        }

        let full = Bounds::new(0, 0, CHUNK_SIZE - 1, CHUNK_SIZE - 1);
        if self.biome.tree_density > 0.0 {
            self.grid.scatter(
                full,
                self.biome.tree_type,
                false,
                self.biome.tree_density,
                &mut self.rng,
                Some(&avoid),
            );
        }
        if self.biome.bush_density > 0.0 {
            self.grid.scatter(
                full,
                self.palette.bush,
                false,
                self.biome.bush_density,
                &mut self.rng,
                Some(&avoid),
            );
        }
    }

    /// Every zone must be walkable from every edge port: first over the
    /// graph, then over actual tiles by flood fill.
    fn validate(&self) -> Result<(), GenError> {
        let ports = self.graph.edge_ports();
        if ports.is_empty() {
            return Err(GenError::InvalidConfig(
                "chunk has no edge connections".to_string(),
            ));
        }

        let start_id = &ports[0].id;
        if !self.graph.is_connected(start_id) {
            return Err(GenError::GraphDisconnected {
                nodes: self.graph.find_unreachable(start_id),
            });
        }

        for port in &ports {
            let reachable = self.flood_reachable(port.position);

            for zone in &self.zones {
                let anchor_reachable = self
                    .components
                    .iter()
                    .filter(|comp| comp.zone() == Some(zone))
                    .flat_map(|comp| comp.anchors())
                    .any(|anchor| reachable.contains(&anchor.position));

                if anchor_reachable || reachable.contains(&zone.bounds.center()) {
                    continue;
                }

                return Err(GenError::UnreachableZone {
                    zone_name: zone.name.clone(),
                    port_id: port.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// All walkable tiles 4-connected to `start`.
    fn flood_reachable(&self, start: Point) -> HashSet<Point> {
        let mut reachable = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(p) = queue.pop_front() {
            if reachable.contains(&p) || !self.grid.is_walkable(p) {
                continue;
            }
            reachable.insert(p);
            for adj in neighbours(p) {
                if !reachable.contains(&adj) {
                    queue.push_back(adj);
                }
            }
        }

        reachable
    }

    fn build_output(&self) -> ChunkDefinition {
        ChunkDefinition {
            tiles: self.grid.tiles().to_vec(),
            zones: self.zones.iter().map(ZoneDef::from).collect(),
        }
    }
}

fn port_id(dir: Direction) -> String {
    format!("port_{}", dir.name())
}

fn edge_port(dir: Direction) -> Node {
    let mid = CHUNK_SIZE / 2;
    let pos = match dir {
        Direction::North => Point::new(mid, 0),
        Direction::South => Point::new(mid, CHUNK_SIZE - 1),
        Direction::East => Point::new(CHUNK_SIZE - 1, mid),
        Direction::West => Point::new(0, mid),
    };

    Node {
        id: port_id(dir),
        kind: NodeKind::EdgePort,
        position: pos,
        anchors: vec![Anchor {
            position: pos,
            facing: dir.opposite(),
        }],
        bounds: Bounds::at(pos),
        zone: None,
    }
}

/// The anchor of `node` closest to `target` by Manhattan distance; ties
/// keep the earliest anchor. Nodes without anchors fall back to their
/// position.
fn closest_anchor(node: &Node, target: Point) -> Point {
    node.anchors
        .iter()
        .map(|a| a.position)
        .min_by_key(|&p| manhattan(p, target))
        .unwrap_or(node.position)
}
