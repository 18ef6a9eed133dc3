//! Random-walk driver: moves a spawned particle neighbour-to-neighbour
//! until it sticks to the cluster or is respawned after escaping.

use crate::boundary::SpawnBoundary;
use crate::cluster::Cluster;
use crate::config::Config;
use crate::error::GrowError;
use crate::geometry;
use crate::types::Cell;
use rand::Rng;

/// Uniformly samples the walker's next position from its neighbour
/// candidates. `adj` must be non-empty.
pub fn move_point(adj: &[Cell], rng: &mut impl Rng) -> Cell {
    adj[rng.random_range(0..adj.len())]
}

/// True if `cell` has strayed past the escape threshold `radius + dr`.
fn escaped(cell: Cell, radius: f32, dr: i32) -> bool {
    let reach = radius + dr as f32;
    (geometry::norm_sq(cell) as f32) > reach * reach
}

/// One walker move: pick a uniform neighbour; if it escapes past
/// `radius + dr`, discard it and respawn from the boundary instead.
fn advance(adj: &[Cell], boundary: &SpawnBoundary, dr: i32, rng: &mut impl Rng) -> Cell {
    let next = move_point(adj, rng);
    if escaped(next, boundary.radius(), dr) {
        boundary.sample(rng)
    } else {
        next
    }
}

/// Runs one particle from spawn to stick.
///
/// Spawns a walker uniformly from `boundary`, then repeatedly:
/// 1. Computes the walker's in-radius Moore neighbours.
/// 2. If any neighbour is a cluster cell, the walk terminates and the
///    walker's **current** position (not the neighbour) is returned as
///    the cell to append.
/// 3. Otherwise moves to a uniform neighbour, respawning from the
///    boundary if that move escapes past `radius + dr`.
///
/// Termination is not provably bounded but almost sure for a finite
/// boundary and positive `dr`; `Config::max_walk_steps` optionally
/// caps the move count.
///
/// ### Parameters
/// - `cluster` - The existing aggregate; read-only here.
/// - `boundary` - Spawn cells and the current radius.
/// - `cfg` - Growth parameters (`dr`, optional step cap).
/// - `rng` - Random source for spawn and move draws. The draw sequence
///   is one `0..boundary.len()` draw per (re)spawn and one
///   `0..adj.len()` draw per move, so seeded runs are reproducible.
///
/// ### Returns
/// The cell where the walker stuck, or:
/// - [`GrowError::EmptyNeighbourhood`] if the walker has no in-radius
///   neighbours to move to.
/// - [`GrowError::WalkTimeout`] if the step cap is exceeded.
pub fn walk_until_stick(
    cluster: &Cluster,
    boundary: &SpawnBoundary,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Result<Cell, GrowError> {
    let mut spawn = boundary.sample(rng);
    let mut adj = geometry::neighbours_within(boundary.radius(), spawn);
    let mut steps: u64 = 0;

    while !cluster.touches(&adj) {
        if adj.is_empty() {
            return Err(GrowError::EmptyNeighbourhood {
                cell: spawn,
                radius: boundary.radius(),
            });
        }
        if let Some(cap) = cfg.max_walk_steps
            && steps >= cap
        {
            return Err(GrowError::WalkTimeout { steps });
        }

        spawn = advance(&adj, boundary, cfg.dr, rng);
        adj = geometry::neighbours_within(boundary.radius(), spawn);
        steps += 1;
    }

    Ok(spawn)
}
