//! Single animation-frame chain with explicit start/stop.

/// Something that can schedule and cancel one-shot frame callbacks
/// (`requestAnimationFrame` in the browser).
pub trait FrameHost {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// Scheduler state: running flag plus the at-most-one outstanding request.
pub struct FrameScheduler<H: FrameHost> {
    host: H,
    state: SchedulerState,
    pending: Option<H::Handle>,
    frames: u64,
}

impl<H: FrameHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: SchedulerState::Stopped,
            pending: None,
            frames: 0,
        }
    }

    /// Begin the frame chain. No-op when already running.
    pub fn start(&mut self) {
        if self.state == SchedulerState::Running {
            return;
        }
        self.state = SchedulerState::Running;
        self.request_next();
        log::debug!("[scheduler] started");
    }

    /// Cancel the pending frame and stop. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.state = SchedulerState::Stopped;
        log::debug!("[scheduler] stopped after {} frames", self.frames);
    }

    /// Called when the outstanding request fires. Returns whether a pass
    /// should run; the caller then runs it and calls [`Self::end_frame`].
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.state == SchedulerState::Running
    }

    /// Request the next frame if still running.
    pub fn end_frame(&mut self) {
        self.frames += 1;
        if self.state == SchedulerState::Running && self.pending.is_none() {
            self.request_next();
        }
    }

    // A failed request leaves the scheduler stopped so a later start retries.
    fn request_next(&mut self) {
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("[scheduler] frame request failed; stopping");
            self.state = SchedulerState::Stopped;
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn pending(&self) -> Option<H::Handle> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
