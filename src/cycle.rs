//! Day counter for a budgeting cycle.

/// A budgeting period of `duration` days.
///
/// `current_day` runs from 1 to `duration`; reaching `duration + 1` marks the
/// cycle as finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    duration: u32,
    current_day: u32,
}

impl Cycle {
    /// Creates a cycle positioned on day 1.
    pub fn new(duration: u32) -> Self {
        Cycle {
            duration,
            current_day: 1,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn advance_day(&mut self) {
        self.current_day = self.current_day.saturating_add(1);
    }

    pub fn is_finished(&self) -> bool {
        self.current_day > self.duration
    }

    /// Rewinds to day 1.
    pub fn reset(&mut self) {
        self.current_day = 1;
    }
}
