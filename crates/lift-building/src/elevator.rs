//! Elevators: fixed-capacity conveyances with an ordered passenger list.

use lift_core::Floor;

use crate::Passenger;

/// One elevator in the fleet.
///
/// Created at the ground floor at simulation start and never destroyed
/// mid-run.  The passenger list is ordered by boarding time — the head is the
/// passenger who boarded first, which the pushy-passenger policy cares about.
///
/// Invariants: `capacity >= 1`; `passengers.len() <= capacity`; the floor is
/// only changed by the engine's apply step, never by a policy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    floor: Floor,
    capacity: usize,
    passengers: Vec<Passenger>,
}

impl Elevator {
    /// A new, empty elevator at the ground floor.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "an elevator must hold at least one passenger");
        Self {
            floor: Floor::GROUND,
            capacity,
            passengers: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Move the car to `floor`.  Called only by the engine's apply step.
    #[inline]
    pub fn set_floor(&mut self, floor: Floor) {
        self.floor = floor;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Onboard passengers in boarding order (head boarded first).
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Mutable access for the engine's wait-time update.
    #[inline]
    pub fn passengers_mut(&mut self) -> &mut [Passenger] {
        &mut self.passengers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Fraction of capacity occupied, in `[0.0, 1.0]`.
    #[inline]
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    /// Append `passenger` to the back of the list.
    ///
    /// The caller checks `is_full()` first; boarding a full elevator is a
    /// logic error in the round loop.
    pub fn board(&mut self, passenger: Passenger) {
        debug_assert!(!self.is_full(), "boarding a full elevator");
        self.passengers.push(passenger);
    }

    /// Remove and return the passenger at `idx`, preserving the order of the
    /// rest.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds — the engine only removes indices it
    /// just collected from this list.
    pub fn remove(&mut self, idx: usize) -> Passenger {
        self.passengers.remove(idx)
    }
}
