//! `WaitingRegistry` — per-floor queues of passengers waiting for an elevator.
//!
//! # Shape
//!
//! A `BTreeMap<Floor, VecDeque<Passenger>>`.  Ordered floor iteration is
//! exactly what the movement policies ask of this structure ("lowest occupied
//! floor", "nearest occupied floor with ties toward the lower one"), and the
//! queue per floor preserves arrival order for boarding.
//!
//! Floors whose queue empties are removed from the map immediately, so the
//! occupancy queries never see stale empty entries.

use std::collections::{BTreeMap, VecDeque};

use lift_core::Floor;

use crate::Passenger;

/// Passengers currently waiting, keyed by floor, in arrival order per floor.
#[derive(Default)]
pub struct WaitingRegistry {
    inner: BTreeMap<Floor, VecDeque<Passenger>>,
    /// Cached total passenger count for O(1) `len()`.
    total: usize,
}

impl WaitingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `passenger` to the back of the queue at `floor`.
    pub fn push(&mut self, floor: Floor, passenger: Passenger) {
        debug_assert_eq!(passenger.start, floor, "passengers wait on their start floor");
        self.inner.entry(floor).or_default().push_back(passenger);
        self.total += 1;
    }

    /// Remove and return the longest-waiting passenger at `floor`, if any.
    pub fn pop_front(&mut self, floor: Floor) -> Option<Passenger> {
        let queue = self.inner.get_mut(&floor)?;
        let passenger = queue.pop_front()?;
        if queue.is_empty() {
            self.inner.remove(&floor);
        }
        self.total -= 1;
        Some(passenger)
    }

    /// Number of passengers waiting at `floor`.
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.inner.get(&floor).map_or(0, VecDeque::len)
    }

    /// `true` if at least one passenger waits at `floor`.
    pub fn has_waiting_at(&self, floor: Floor) -> bool {
        self.inner.contains_key(&floor)
    }

    /// Total number of waiting passengers across all floors.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Floors with at least one waiting passenger, ascending.
    pub fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.inner.keys().copied()
    }

    /// The lowest floor with at least one waiting passenger.
    pub fn lowest_occupied_floor(&self) -> Option<Floor> {
        self.inner.keys().next().copied()
    }

    /// The occupied floor nearest to `from` by absolute distance.
    ///
    /// Ties break toward the lower floor: iteration is ascending and only a
    /// strictly smaller distance displaces the current best.
    pub fn nearest_occupied_floor(&self, from: Floor) -> Option<Floor> {
        let mut best: Option<(u32, Floor)> = None;
        for &floor in self.inner.keys() {
            let d = from.distance_to(floor);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, floor)),
            }
        }
        best.map(|(_, floor)| floor)
    }

    /// Add one round of waiting to every queued passenger.
    pub fn bump_all_waits(&mut self) {
        for queue in self.inner.values_mut() {
            for passenger in queue {
                passenger.bump_wait();
            }
        }
    }
}
