use std::time::Duration;

pub const BOOT_LINES: &[&str] = &[
    "Bypassing the cloud...",
    "Initializing local memory...",
    "Connecting hardware acceleration...",
    "Securing private context...",
    "Synapse Core Online.",
];

pub const BOOT_STEP: Duration = Duration::from_millis(800);
pub const BOOT_FINAL_HOLD: Duration = Duration::from_millis(1000);

/// Landing-page preloader: one status line per step, then a short hold on the
/// last line before the overlay goes away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootSequence {
    index: usize,
    visible: bool,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self {
            index: 0,
            visible: true,
        }
    }
}

impl BootSequence {
    pub fn current_line(&self) -> &'static str {
        BOOT_LINES[self.index]
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_final(&self) -> bool {
        self.index + 1 >= BOOT_LINES.len()
    }

    /// Move to the next line. Returns false once the final line is showing.
    pub fn advance(&mut self) -> bool {
        if self.is_final() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
