//! Discrete pointer interaction states that gate continuous trail spawning.
//!
//! ```text
//! Default --hover_enter--> Hovering --hover_leave--> Default
//! Default|Hovering --press--> Pressing --release--> Released --settle--> Hovering|Default
//! ```
//!
//! What counts as an interactive target is the host's business; this machine
//! only sees enter/leave and press/release signals.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Default,
    Hovering,
    Pressing,
    Released,
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
    state: InteractionState,
    over_target: bool,
}

impl Interaction {
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn over_target(&self) -> bool {
        self.over_target
    }

    /// Continuous trail spawning is off while hovering or pressing.
    pub fn suppresses_trail(&self) -> bool {
        matches!(
            self.state,
            InteractionState::Hovering | InteractionState::Pressing
        )
    }

    pub fn hover_enter(&mut self) {
        self.over_target = true;
        if self.state == InteractionState::Default {
            self.state = InteractionState::Hovering;
        }
    }

    pub fn hover_leave(&mut self) {
        self.over_target = false;
        if self.state == InteractionState::Hovering {
            self.state = InteractionState::Default;
        }
    }

    /// Returns true only when this call entered `Pressing`.
    pub fn press(&mut self) -> bool {
        match self.state {
            InteractionState::Pressing => false,
            _ => {
                self.state = InteractionState::Pressing;
                true
            }
        }
    }

    pub fn release(&mut self) {
        if self.state == InteractionState::Pressing {
            self.state = InteractionState::Released;
        }
    }

    /// Resolve a pending `Released` against the current hover flag.
    pub fn settle(&mut self) {
        if self.state == InteractionState::Released {
            self.state = if self.over_target {
                InteractionState::Hovering
            } else {
                InteractionState::Default
            };
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
