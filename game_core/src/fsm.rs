//! Loop State Machine
//!
//! Decides whether the frame loop should keep running.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
    Paused,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Start,
    Pause,
    Resume,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

/// Run/pause state machine
#[derive(Debug, Clone)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Stopped, LoopAction::Start) => Some(LoopState::Running),
            (LoopState::Running, LoopAction::Pause) => Some(LoopState::Paused),
            (LoopState::Paused, LoopAction::Resume) => Some(LoopState::Running),
            _ => None,
        }
    }

    /// Only a running loop re-schedules itself
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = LoopFsm::new();
        assert_eq!(fsm.state(), LoopState::Stopped);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = LoopFsm::new();
        let result = fsm.transition(LoopAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, LoopState::Stopped);
        assert_eq!(result.to_state, LoopState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = LoopFsm::new();
        let result = fsm.transition(LoopAction::Resume);
        assert!(!result.success);
        assert_eq!(fsm.state(), LoopState::Stopped);
        assert!(!fsm.can_transition(LoopAction::Pause));
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::Start);
        fsm.transition(LoopAction::Pause);
        assert!(fsm.is_paused());
        assert!(!fsm.transition(LoopAction::Start).success);
        fsm.transition(LoopAction::Resume);
        assert_eq!(fsm.state(), LoopState::Running);
        assert_eq!(fsm.state_string(), "Running");
    }
}
