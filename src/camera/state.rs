//! Pan state machine: states, triggers and the host-facing side effects a
//! transition produces.

/// Cursor shapes the host is asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// At rest: the view can be grabbed.
    OpenHand,
    /// A drag is in progress.
    ClosedHand,
}

/// A side effect the host must carry out after a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEffect {
    /// Start the periodic animation callback.
    StartTicking,
    /// Stop the periodic animation callback.
    StopTicking,
    /// Repaint the viewport (may be coalesced by the host).
    Redraw,
    /// Change the pointer cursor.
    SetCursor(CursorShape),
}

/// Ordered list of effects produced by one controller call.
pub type Effects = Vec<HostEffect>;

/// Animation state of the pan controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanState {
    /// No residual motion. Nothing is scheduled.
    #[default]
    Idle,
    /// Post-release momentum decay in progress.
    PanningInertially,
}

/// Events that can move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Tracked button pressed: a new drag begins.
    Press,
    /// Tracked button released.
    Release {
        /// Whether the drag ended with nonzero measured velocity.
        moving: bool,
    },
    /// Decayed velocity fell below the stop threshold.
    Settled,
    /// The viewport is closing.
    Close,
}

/// Result of applying a [`Trigger`] to a [`PanState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the trigger.
    pub next: PanState,
    /// Effects the host must apply, in order.
    pub effects: Effects,
}

impl PanState {
    /// Whether a decay animation is running.
    #[must_use]
    pub fn is_animating(self) -> bool {
        self == Self::PanningInertially
    }

    /// Compute the next state and the scheduling/cursor effects for a
    /// trigger. Redraw requests are added by the controller, which knows
    /// whether the camera actually moved.
    #[must_use]
    pub fn transition(self, trigger: Trigger) -> Transition {
        let mut effects = Effects::new();
        let next = match (self, trigger) {
            (state, Trigger::Press) => {
                if state.is_animating() {
                    effects.push(HostEffect::StopTicking);
                }
                effects.push(HostEffect::SetCursor(CursorShape::ClosedHand));
                Self::Idle
            }
            (_, Trigger::Release { moving }) => {
                effects.push(HostEffect::SetCursor(CursorShape::OpenHand));
                if moving {
                    effects.push(HostEffect::StartTicking);
                    Self::PanningInertially
                } else {
                    Self::Idle
                }
            }
            (Self::PanningInertially, Trigger::Settled) => {
                effects.push(HostEffect::StopTicking);
                Self::Idle
            }
            (Self::Idle, Trigger::Settled) => Self::Idle,
            (_, Trigger::Close) => {
                effects.push(HostEffect::StopTicking);
                Self::Idle
            }
        };
        Transition { next, effects }
    }
}
