//! The spawn boundary: the disk of lattice cells particles launch from.

use crate::config::Config;
use crate::error::GrowError;
use crate::types::Cell;
use rand::Rng;
use std::f32::consts::PI;

/// Enumerates the integer cells of the disk `x² + y² ≤ radius²`,
/// excluding the origin (the seed always occupies it).
///
/// Cells are produced column-major in a fixed order (x ascending, y
/// ascending within each column), so a given radius always yields the
/// same sequence and uniform index draws are reproducible under a
/// fixed seed.
///
/// Cost is O(radius²); callers are expected to re-enumerate only when
/// the cluster's effective radius actually grows.
pub fn disk_cells(radius: f32) -> Vec<Cell> {
    let r = radius as i32;
    let r2 = radius * radius;
    let mut cells = Vec::with_capacity((PI * r2) as usize + 8);
    for x in -r..=r {
        let y_max = (r2 - (x * x) as f32).sqrt() as i32;
        for y in -y_max..=y_max {
            if x == 0 && y == 0 {
                continue;
            }
            cells.push(Cell::new(x, y));
        }
    }
    cells
}

/// The current spawn boundary: a radius and the disk of cells derived
/// from it.
///
/// Invariants:
/// - `cells` always equals [`disk_cells`] of the current radius — the
///   struct is rebuilt atomically by [`SpawnBoundary::rebuild`], never
///   patched.
/// - The radius only increases over the boundary's lifetime.
#[derive(Debug, Clone)]
pub struct SpawnBoundary {
    radius: f32,
    cells: Vec<Cell>,
}

impl SpawnBoundary {
    /// Builds the boundary for a freshly seeded cluster: the disk of
    /// radius `1 + dr` minus the origin.
    ///
    /// ### Parameters
    /// - `cfg` - Growth parameters; validated here.
    ///
    /// ### Returns
    /// The initial boundary, or [`GrowError::InvalidConfig`] if `cfg`
    /// is unusable.
    pub fn initial(cfg: &Config) -> Result<Self, GrowError> {
        cfg.validate()?;
        Ok(Self::with_radius(cfg.initial_radius()))
    }

    fn with_radius(radius: f32) -> Self {
        Self {
            radius,
            cells: disk_cells(radius),
        }
    }

    /// Current spawn radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Spawn cells for the current radius.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Re-expands the boundary to a larger radius, re-enumerating the
    /// disk. The radius must not shrink.
    pub fn rebuild(&mut self, radius: f32) {
        debug_assert!(radius >= self.radius, "spawn radius must not shrink");
        self.radius = radius;
        self.cells = disk_cells(radius);
    }

    /// Uniformly samples one spawn cell.
    pub fn sample(&self, rng: &mut impl Rng) -> Cell {
        debug_assert!(!self.cells.is_empty());
        self.cells[rng.random_range(0..self.cells.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn unit_disk_is_the_four_axis_cells() {
        let mut cells = disk_cells(1.0);
        cells.sort_by_key(|c| (c.x, c.y));
        assert_eq!(
            cells,
            vec![
                Cell::new(-1, 0),
                Cell::new(0, -1),
                Cell::new(0, 1),
                Cell::new(1, 0),
            ]
        );
    }

    #[test]
    fn disk_includes_topmost_row() {
        // The full inclusive disk keeps y == y_max, e.g. (0, 2) at radius 2.
        let cells = disk_cells(2.0);
        assert!(cells.contains(&Cell::new(0, 2)));
        assert!(cells.contains(&Cell::new(0, -2)));
        assert!(cells.contains(&Cell::new(2, 0)));
    }

    #[test]
    fn initial_boundary_matches_config_radius() {
        let cfg = Config::default();
        let boundary = SpawnBoundary::initial(&cfg).unwrap();
        assert_eq!(boundary.radius(), 16.0);
        assert_eq!(boundary.cells(), disk_cells(16.0).as_slice());
        assert!(!boundary.is_empty());
    }

    #[test]
    fn initial_rejects_bad_config() {
        let cfg = Config {
            dr: 0,
            ..Config::default()
        };
        assert!(matches!(
            SpawnBoundary::initial(&cfg),
            Err(GrowError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rebuild_grows_radius_and_cells() {
        let mut boundary = SpawnBoundary::initial(&Config { dr: 2, ..Config::default() }).unwrap();
        let before = boundary.len();
        boundary.rebuild(10.0);
        assert_eq!(boundary.radius(), 10.0);
        assert!(boundary.len() > before);
        assert_eq!(boundary.cells(), disk_cells(10.0).as_slice());
    }

    #[test]
    fn sample_is_reproducible_under_a_fixed_seed() {
        let boundary = SpawnBoundary::initial(&Config::default()).unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(boundary.sample(&mut a), boundary.sample(&mut b));
        }
    }

    proptest! {
        #[test]
        fn disk_cells_lie_within_radius_and_exclude_origin(r in 1i32..40) {
            let radius = r as f32;
            let cells = disk_cells(radius);
            prop_assert!(!cells.is_empty());
            for c in &cells {
                prop_assert!(
                    (geometry::norm_sq(*c) as f32) <= radius * radius,
                    "{c:?} outside radius {radius}"
                );
                prop_assert_ne!(*c, Cell::ZERO);
            }
        }

        #[test]
        fn disk_cells_are_unique(r in 1i32..25) {
            let cells = disk_cells(r as f32);
            let mut sorted: Vec<_> = cells.iter().map(|c| (c.x, c.y)).collect();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), cells.len());
        }
    }
}
