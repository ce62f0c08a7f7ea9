//! Tap counter for the home screen.

/// A milestone banner is shown every this many taps.
pub const MILESTONE_INTERVAL: u32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct TapCounter {
    count: u32,
}

impl TapCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(self) -> u32 {
        self.count
    }

    /// Register one tap. Returns the new count when it lands on a
    /// milestone, so the caller can raise the banner.
    pub fn tap(&mut self) -> Option<u32> {
        self.count += 1;
        if self.count % MILESTONE_INTERVAL == 0 {
            Some(self.count)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
