//! Primitive data types.

/// Data type for grid dimensions and cell coordinates.
pub type Coord = usize;
/// Data type for pair indices.
pub type PairIndex = usize;
/// Data type for cell ownership marks: 0 is unclaimed, pair index + 1 otherwise.
pub type PairId = u8;
/// Data type for path costs, both accumulated (g) and estimated (f).
pub type Cost = usize;
