use thiserror::Error;

/// Failures the chunk pipeline can surface.
///
/// None of these are retried with a different seed: a failing chunk is a
/// configuration bug and is reported as such.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid chunk configuration: {0}")]
    InvalidConfig(String),

    #[error("project {project_id} cannot be placed within safe bounds")]
    PlacementFailure { project_id: String },

    #[error("could not route required path from {from} to {to}")]
    RoutingFailure { from: String, to: String },

    #[error("zone {zone_name:?} not reachable from port {port_id}")]
    UnreachableZone { zone_name: String, port_id: String },

    #[error("nodes unreachable in connectivity graph: {nodes:?}")]
    GraphDisconnected { nodes: Vec<String> },
}
