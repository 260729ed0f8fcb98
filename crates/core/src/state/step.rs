//! Two-step controller.
//!
//! Transitions:
//! - `Personal -> Address` on next, only when step 1 is valid
//! - `Address -> Personal` on previous, unconditionally
//! - `Address -> Personal` on a successful submit (see [`StepController::restart`])

use sf_protocol::Step;

/// Outcome of a step transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active step changed to the contained step.
    Moved(Step),
    /// The transition was refused; the active step is unchanged.
    Blocked,
    /// There is nowhere to go in that direction.
    Stayed,
}

/// Tracks which of the two steps is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    current: Step,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: Step::Personal,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Advance to step 2.
    ///
    /// `current_step_valid` is the validity of the active step's fields.
    pub fn next(&mut self, current_step_valid: bool) -> Transition {
        match self.current {
            Step::Address => Transition::Stayed,
            Step::Personal if !current_step_valid => Transition::Blocked,
            Step::Personal => {
                self.current = Step::Address;
                Transition::Moved(self.current)
            }
        }
    }

    /// Go back to step 1.
    pub fn previous(&mut self) -> Transition {
        match self.current {
            Step::Personal => Transition::Stayed,
            Step::Address => {
                self.current = Step::Personal;
                Transition::Moved(self.current)
            }
        }
    }

    /// Return to step 1 after a submission or reset.
    pub fn restart(&mut self) -> Transition {
        if self.current == Step::Personal {
            return Transition::Stayed;
        }
        self.current = Step::Personal;
        Transition::Moved(self.current)
    }
}
