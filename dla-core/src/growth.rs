//! High-level growth loop for the aggregate.
//!
//! The controller cycles through: spawn a walker, walk it until it
//! sticks ([`crate::walk::walk_until_stick`]), append the stuck cell to
//! the [`Cluster`], and re-expand the [`SpawnBoundary`] when the new
//! cell comes within `dr` of it.

use crate::boundary::SpawnBoundary;
use crate::cluster::Cluster;
use crate::config::Config;
use crate::error::GrowError;
use crate::geometry;
use crate::types::Cell;
use rand::Rng;

/// Builds the state for a fresh simulation: a cluster seeded at the
/// origin and the matching spawn boundary of radius `1 + dr`.
///
/// ### Parameters
/// - `cfg` - Growth parameters; validated here.
///
/// ### Returns
/// The `(cluster, boundary)` pair, or [`GrowError::InvalidConfig`].
pub fn seeded_state(cfg: &Config) -> Result<(Cluster, SpawnBoundary), GrowError> {
    let boundary = SpawnBoundary::initial(cfg)?;
    Ok((Cluster::seeded(), boundary))
}

/// Grows the cluster by `no_points` particles.
///
/// For each particle:
///
/// 1. Runs [`crate::walk::walk_until_stick`] to produce a stuck cell.
/// 2. Appends it to `cluster`.
/// 3. If `distance(cell) + dr > radius`, re-expands the boundary to
///    `⌊distance⌋ + dr`. The radius never shrinks.
///
/// On error the call commits partially: cells appended before the
/// failure stay in the cluster, so callers observing `Err` may see
/// fewer than `no_points` new cells.
///
/// ### Parameters
/// - `cluster` - The aggregate to be mutated; stuck cells are appended.
/// - `boundary` - Spawn boundary; re-expanded in place as needed.
/// - `cfg` - Growth parameters, validated on entry.
/// - `no_points` - Number of particles to add.
/// - `rng` - Random source; with a fixed seed the produced cell
///   sequence is fully deterministic.
///
/// ### Returns
/// The newly stuck cells in the order they were appended.
pub fn grow(
    cluster: &mut Cluster,
    boundary: &mut SpawnBoundary,
    cfg: &Config,
    no_points: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Cell>, GrowError> {
    cfg.validate()?;

    let mut added = Vec::with_capacity(no_points);
    for _ in 0..no_points {
        let stuck = crate::walk::walk_until_stick(cluster, boundary, cfg, rng)?;
        cluster.push(stuck);
        added.push(stuck);

        let dist = geometry::distance_from_origin(stuck);
        if dist + cfg.dr as f32 > boundary.radius() {
            boundary.rebuild(dist.floor() + cfg.dr as f32);
        }
    }
    Ok(added)
}
