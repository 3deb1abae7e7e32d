//! A single requested journey.

use lift_core::Floor;

/// One passenger's demand: board at `start`, leave at `target`.
///
/// Arrival models produce trips; the engine turns each into a `Passenger`
/// with a fresh id.  A valid trip has `start != target`, both within the
/// building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub start:  Floor,
    pub target: Floor,
}
