//! Background music autoplay policy.
//!
//! Browsers refuse audible autoplay until the user interacts with the page.
//! The gate tracks where we are in that dance; the DOM wiring in
//! `page::audio` turns its decisions into `play()` / `muted` calls.

/// How playback is started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayMode {
    /// Try audible playback right away; log if the browser refuses.
    Audible,
    /// Start muted (always allowed) and unmute on the first gesture.
    MutedUntilGesture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioState {
    Idle,
    /// `play()` issued, promise not settled yet.
    Pending,
    Playing { muted: bool },
    /// The browser rejected playback; waiting for a user gesture.
    Blocked,
}

/// What the DOM layer should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioAction {
    /// Set `muted` and call `play()`; report the outcome back with `request`.
    Play { muted: bool, request: u32 },
    Nothing,
}

/// Window events that count as a qualifying user gesture.
pub const GESTURE_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];

#[derive(Clone, Debug)]
pub struct AudioGate {
    mode: AutoplayMode,
    state: AudioState,
    interacted: bool,
    /// Id of the latest `play()` request; older promises are stale.
    request: u32,
    requested_muted: bool,
}

impl AudioGate {
    pub fn new(mode: AutoplayMode) -> Self {
        Self {
            mode,
            state: AudioState::Idle,
            interacted: false,
            request: 0,
            requested_muted: false,
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    /// True once a gesture has unmuted playback.
    pub fn interacted(&self) -> bool {
        self.interacted
    }

    /// Initial attempt at mount.
    pub fn start(&mut self) -> AudioAction {
        if self.state != AudioState::Idle {
            return AudioAction::Nothing;
        }
        self.request_play(self.mode == AutoplayMode::MutedUntilGesture)
    }

    /// A user gesture happened (or "Yes" was clicked). Unmute and retry.
    /// Repeated calls after the first are no-ops.
    pub fn activate(&mut self) -> AudioAction {
        if self.interacted {
            return AudioAction::Nothing;
        }
        self.interacted = true;
        self.request_play(false)
    }

    fn request_play(&mut self, muted: bool) -> AudioAction {
        self.request = self.request.wrapping_add(1);
        self.requested_muted = muted;
        self.state = AudioState::Pending;
        AudioAction::Play {
            muted,
            request: self.request,
        }
    }

    /// Outcome of the `play()` promise issued for `request`. Promises settle
    /// in any order; only the latest request may change the state. Returns
    /// false when the result was stale and ignored.
    pub fn on_play_result(&mut self, request: u32, ok: bool) -> bool {
        if request != self.request {
            return false;
        }
        self.state = if ok {
            AudioState::Playing {
                muted: self.requested_muted,
            }
        } else {
            AudioState::Blocked
        };
        true
    }

    /// The "tap anywhere" hint is shown until the first gesture, and only
    /// while the question is still open: always in muted mode, and in
    /// audible mode once the browser has blocked playback.
    pub fn show_prompt(&self, accepted: bool) -> bool {
        let waiting = match self.mode {
            AutoplayMode::MutedUntilGesture => true,
            AutoplayMode::Audible => self.state == AudioState::Blocked,
        };
        waiting && !self.interacted && !accepted
    }
}
