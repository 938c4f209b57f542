/// State of a [`OneShot`] latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LatchState {
    /// Not triggered yet.
    #[default]
    Running,
    /// Triggered; every later trigger is a no-op.
    Completed,
}

/// Guard that lets an event notification through at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    state: LatchState,
}

impl OneShot {
    /// Create an armed latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition `Running -> Completed`.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn trigger(&mut self) -> bool {
        match self.state {
            LatchState::Running => {
                self.state = LatchState::Completed;
                true
            }
            LatchState::Completed => false,
        }
    }

    /// Current state.
    pub fn state(&self) -> LatchState {
        self.state
    }

    /// Return `true` once the latch has fired.
    pub fn is_completed(&self) -> bool {
        self.state == LatchState::Completed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/latch.rs"]
mod tests;
