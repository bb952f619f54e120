//! Cosmetic upload progress. The value advances on a timer and has no
//! relation to the bytes actually sent.

pub const PROGRESS_TICK_MS: u32 = 200;
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadProgress {
    percent: u8,
    running: bool,
}

impl UploadProgress {
    pub fn started() -> Self {
        Self {
            percent: 0,
            running: true,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances by one step. Returns `false` once the cap is reached so the
    /// caller can drop its timer.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.percent = self.percent.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
        self.percent < PROGRESS_MAX
    }

    /// The request settled: show a full bar and stop ticking.
    pub fn complete(&mut self) {
        self.percent = PROGRESS_MAX;
        self.running = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn label(&self) -> String {
        format!("{}% загружено", self.percent)
    }
}
