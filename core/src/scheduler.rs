//! Frame scheduler state machine. The wasm layer feeds it visibility,
//! asset-load results, and animation-frame timestamps; it decides when the
//! physics/render tick is allowed to run.

/// Frames arriving faster than this are skipped on high-refresh displays.
pub const MIN_FRAME_INTERVAL_MS: f64 = 16.0;
pub const ICON_LOAD_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

#[derive(Debug)]
pub struct FrameScheduler {
    phase: Phase,
    visible: bool,
    loaded_icons: Option<usize>,
    last_tick_ms: Option<f64>,
    shut_down: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            visible: false,
            loaded_icons: None,
            last_tick_ms: None,
            shut_down: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.update_phase();
    }

    /// Record the outcome of icon loading. Zero loaded icons keeps the
    /// scheduler idle for good; the surface stays blank.
    pub fn assets_ready(&mut self, loaded_icons: usize) {
        self.loaded_icons = Some(loaded_icons);
        self.update_phase();
    }

    /// One animation-frame callback. Returns the elapsed milliseconds the
    /// tick should advance by, or None when no work is due (idle, or the
    /// frame arrived under the rate ceiling).
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<f64> {
        if self.phase != Phase::Running {
            return None;
        }
        match self.last_tick_ms {
            None => {
                self.last_tick_ms = Some(timestamp_ms);
                Some(0.0)
            }
            Some(prev) => {
                let elapsed = (timestamp_ms - prev).max(0.0);
                if elapsed < MIN_FRAME_INTERVAL_MS {
                    return None;
                }
                self.last_tick_ms = Some(timestamp_ms);
                Some(elapsed)
            }
        }
    }

    /// Idempotent; once shut down the scheduler never runs again.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.phase = Phase::Idle;
        self.last_tick_ms = None;
    }

    fn update_phase(&mut self) {
        let ready = !self.shut_down
            && self.visible
            && self.loaded_icons.map_or(false, |count| count > 0);
        let next = if ready { Phase::Running } else { Phase::Idle };
        if next != self.phase {
            self.phase = next;
            self.last_tick_ms = None;
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
