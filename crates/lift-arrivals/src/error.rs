use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("round {round}: odd number of floor values ({len}) — arrivals come in (start, target) pairs")]
    OddPairCount { round: u64, len: usize },

    #[error("round {round}: floor {floor} outside building range [1, {top}]")]
    FloorOutOfRange { round: u64, floor: u32, top: u32 },

    #[error("round {round}: trip starting and ending on floor {floor}")]
    SameStartAndTarget { round: u64, floor: u32 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
