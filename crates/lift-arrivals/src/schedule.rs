//! Precomputed arrival schedules, replayed by round number.
//!
//! The schedule itself is an injected data source: whatever produced it
//! (a test fixture, an embedded table, an external tool) is not this crate's
//! concern.  Two ingestion forms are supported:
//!
//! - explicit [`ArrivalSchedule::insert`] calls, one trip at a time;
//! - [`ArrivalSchedule::from_flat_rows`], the external source's native shape —
//!   per round, a flat sequence of alternating `start, target` floor numbers.
//!
//! All ingestion validates floors against the building before the schedule
//! ever reaches a simulation; rounds with no entry replay as empty.

use std::collections::BTreeMap;

use lift_core::{Floor, Round, SimRng};

use crate::{ArrivalModel, ScheduleError, ScheduleResult, Trip};

// ── ArrivalSchedule ───────────────────────────────────────────────────────────

/// A validated mapping from round number to that round's trips.
#[derive(Debug)]
pub struct ArrivalSchedule {
    top_floor: Floor,
    rounds: BTreeMap<Round, Vec<Trip>>,
}

impl ArrivalSchedule {
    /// An empty schedule for a building whose highest floor is `top_floor`.
    pub fn new(top_floor: Floor) -> Self {
        Self { top_floor, rounds: BTreeMap::new() }
    }

    /// Append `trip` to `round`'s entry.
    ///
    /// Rejects trips outside the building or with `start == target`.
    pub fn insert(&mut self, round: Round, trip: Trip) -> ScheduleResult<()> {
        self.check(round, trip)?;
        self.rounds.entry(round).or_default().push(trip);
        Ok(())
    }

    /// Build a schedule from rows of the external data source's flat form:
    /// `(round, [start, target, start, target, …])`.
    pub fn from_flat_rows<I>(top_floor: Floor, rows: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = (u64, Vec<u32>)>,
    {
        let mut schedule = Self::new(top_floor);
        for (round, values) in rows {
            if values.len() % 2 != 0 {
                return Err(ScheduleError::OddPairCount { round, len: values.len() });
            }
            for pair in values.chunks_exact(2) {
                schedule.insert(
                    Round(round),
                    Trip { start: Floor(pair[0]), target: Floor(pair[1]) },
                )?;
            }
        }
        Ok(schedule)
    }

    /// This round's trips, in insertion order; empty for rounds with no entry.
    pub fn trips_for(&self, round: Round) -> &[Trip] {
        self.rounds.get(&round).map_or(&[], Vec::as_slice)
    }

    /// Total trips across all rounds.
    pub fn trip_count(&self) -> usize {
        self.rounds.values().map(Vec::len).sum()
    }

    fn check(&self, round: Round, trip: Trip) -> ScheduleResult<()> {
        for floor in [trip.start, trip.target] {
            if floor < Floor::GROUND || floor > self.top_floor {
                return Err(ScheduleError::FloorOutOfRange {
                    round: round.0,
                    floor: floor.0,
                    top:   self.top_floor.0,
                });
            }
        }
        if trip.start == trip.target {
            return Err(ScheduleError::SameStartAndTarget {
                round: round.0,
                floor: trip.start.0,
            });
        }
        Ok(())
    }
}

// ── ScheduledArrivals ─────────────────────────────────────────────────────────

/// An [`ArrivalModel`] that replays an [`ArrivalSchedule`].
///
/// Consumes no randomness; two runs over the same schedule are identical
/// regardless of seed.
pub struct ScheduledArrivals {
    schedule: ArrivalSchedule,
}

impl ScheduledArrivals {
    pub fn new(schedule: ArrivalSchedule) -> Self {
        Self { schedule }
    }
}

impl ArrivalModel for ScheduledArrivals {
    fn arrivals(&self, round: Round, _rng: &mut SimRng) -> Vec<Trip> {
        self.schedule.trips_for(round).to_vec()
    }
}
