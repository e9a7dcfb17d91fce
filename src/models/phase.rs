use chrono::NaiveDate;
use serde::Serialize;

/// Which half of the rotating shift a day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CyclePhase {
    Off,
    On,
}

impl CyclePhase {
    pub fn label(&self) -> &'static str {
        match self {
            CyclePhase::Off => "Off",
            CyclePhase::On => "On",
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, CyclePhase::Off)
    }
}

/// One day of a lookahead list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleDay {
    pub date: NaiveDate,
    pub phase: CyclePhase,
    /// 1-based position inside the current off or on block.
    pub day_in_phase: u32,
    /// 0-based position inside the whole cycle.
    pub position: u32,
}
