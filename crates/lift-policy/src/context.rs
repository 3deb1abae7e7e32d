//! Read-only simulation state passed to every movement decision.

use lift_building::WaitingRegistry;
use lift_core::Floor;

/// A read-only snapshot handed to [`MovementPolicy::decide`][crate::MovementPolicy::decide].
///
/// Built once per round by the engine's move stage and shared across the
/// whole fleet's decisions.  The engine never mutates the registry while a
/// context is live, so every elevator decides against the same picture of
/// who is waiting where.
pub struct PolicyContext<'a> {
    /// Who is waiting on which floor.
    pub waiting: &'a WaitingRegistry,

    /// The building's highest floor — the ceiling for `Up` decisions.
    pub top_floor: Floor,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(waiting: &'a WaitingRegistry, top_floor: Floor) -> Self {
        Self { waiting, top_floor }
    }
}
