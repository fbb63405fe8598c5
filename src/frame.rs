use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Fixed time advance per frame. Time is counted in frame units, not
/// wall-clock seconds, so animation speed follows the display refresh rate.
pub const TIME_STEP: f32 = 0.05;

/// Frame metadata - carries frame number and accumulated time
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32) -> Self {
        Self { number, time }
    }
}

/// Fixed-step frame counter. Each tick advances accumulated time by
/// `TIME_STEP`; the accumulator never resets within one sketch lifetime.
#[derive(Debug, Default)]
pub struct FrameTicker {
    frame_number: u64,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self { frame_number: 0 }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Accumulated time for the frames ticked so far.
    pub fn time(&self) -> f32 {
        self.frame_number as f32 * TIME_STEP
    }

    /// Advance one frame and return its info.
    pub fn tick(&mut self) -> FrameInfo {
        self.frame_number += 1;
        FrameInfo::new(self.frame_number, self.frame_number as f32 * TIME_STEP)
    }
}

/// Handle that stops a running frame loop before its next iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Drive `f` once per frame until the token is cancelled.
///
/// The windowed app performs the same tick from its redraw handler; this
/// form exists for headless runs where the loop must terminate
/// deterministically.
pub fn run_frames<F>(ticker: &mut FrameTicker, token: &CancelToken, mut f: F)
where
    F: FnMut(FrameInfo),
{
    while !token.is_cancelled() {
        f(ticker.tick());
    }
}
