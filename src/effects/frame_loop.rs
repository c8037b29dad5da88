//! Fixed-rate frame driver for the landing-page animations.
//!
//! [`start`] splits the loop in two: a [`FrameHandle`] that views keep to
//! pause, resume or stop it, and a [`FrameLoop`] that the animation task
//! polls with [`FrameLoop::next_frame`]. Nothing is delivered while the loop
//! is hidden, and the first frame after resuming reports one period instead
//! of the whole hidden interval.
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Running,
    Hidden,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct FrameHandle {
    control: Arc<watch::Sender<LoopState>>,
}

impl FrameHandle {
    pub fn set_visible(&self, visible: bool) {
        self.control.send_if_modified(|state| {
            let next = match (*state, visible) {
                (LoopState::Stopped, _) => return false,
                (_, true) => LoopState::Running,
                (_, false) => LoopState::Hidden,
            };
            let changed = *state != next;
            *state = next;
            changed
        });
    }

    pub fn stop(&self) {
        self.control.send_replace(LoopState::Stopped);
    }

    pub fn is_stopped(&self) -> bool {
        *self.control.borrow() == LoopState::Stopped
    }
}

pub struct FrameLoop {
    ticker: Interval,
    control: watch::Receiver<LoopState>,
    last: Instant,
    resumed: bool,
}

pub fn start(period: Duration) -> (FrameHandle, FrameLoop) {
    let (tx, rx) = watch::channel(LoopState::Running);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::debug!(period_ms = period.as_millis() as u64, "frame loop started");
    (
        FrameHandle {
            control: Arc::new(tx),
        },
        FrameLoop {
            ticker,
            control: rx,
            last: Instant::now(),
            resumed: false,
        },
    )
}

impl FrameLoop {
    /// Wait for the next visible frame and return the time since the previous
    /// one. `None` once the loop was stopped or every handle was dropped.
    pub async fn next_frame(&mut self) -> Option<Duration> {
        loop {
            let state = *self.control.borrow_and_update();
            match state {
                LoopState::Stopped => return None,
                LoopState::Hidden => {
                    self.resumed = true;
                    if self.control.changed().await.is_err() {
                        return None;
                    }
                }
                LoopState::Running => {
                    if self.resumed {
                        self.resumed = false;
                        self.ticker.reset();
                        self.last = Instant::now();
                    }
                    tokio::select! {
                        _ = self.ticker.tick() => {
                            let now = Instant::now();
                            let delta = now - self.last;
                            self.last = now;
                            return Some(delta);
                        }
                        changed = self.control.changed() => {
                            if changed.is_err() {
                                return None;
                            }
                        }
                    }
                }
            }
        }
    }
}
