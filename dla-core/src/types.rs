/// A cell on the 2D integer lattice.
///
/// Backed by [`glam::IVec2`], which is `Copy` and compares/hashes by
/// component value — the property stick-testing and set membership
/// rely on.
pub type Cell = glam::IVec2;
