//! Non-blocking button debounce
//!
//! A press counts once the switch has been held for the debounce time, and
//! the click is reported when it has then been released for the same time.

/// Debounce states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum DebounceState {
    Idle,
    /// Switch closed since `since_ms`
    Pressed { since_ms: u32 },
    /// Qualified press, switch open since `since_ms`
    Released { since_ms: u32 },
}

/// Polled debouncer for one momentary switch
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    state: DebounceState,
    debounce_ms: u32,
}

impl Debouncer {
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            state: DebounceState::Idle,
            debounce_ms,
        }
    }

    /// Feed the current switch level
    ///
    /// Returns true exactly once per click, after the release settles.
    pub fn update(&mut self, active: bool, now_ms: u32) -> bool {
        match self.state {
            DebounceState::Idle => {
                if active {
                    self.state = DebounceState::Pressed { since_ms: now_ms };
                }
                false
            }

            DebounceState::Pressed { since_ms } => {
                if !active {
                    self.state = if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
                        DebounceState::Released { since_ms: now_ms }
                    } else {
                        // Contact bounce shorter than the debounce time
                        DebounceState::Idle
                    };
                }
                false
            }

            DebounceState::Released { since_ms } => {
                if active {
                    // Release bounce; the press is already qualified
                    self.state = DebounceState::Pressed {
                        since_ms: now_ms.wrapping_sub(self.debounce_ms),
                    };
                    false
                } else if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
                    self.state = DebounceState::Idle;
                    true
                } else {
                    false
                }
            }
        }
    }
}
