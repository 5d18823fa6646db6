/// Whether a handle still owns its canvas. Once detached it never comes back;
/// a fresh `attach` creates a new handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandleState {
    #[default]
    Attached,
    Detached,
}

impl HandleState {
    #[inline]
    pub fn can_start(self) -> bool {
        self == HandleState::Attached
    }

    /// Returns true only on the first call, when cleanup should run.
    pub fn detach(&mut self) -> bool {
        let first = *self == HandleState::Attached;
        *self = HandleState::Detached;
        first
    }
}

/// Bookkeeping for the `requestAnimationFrame` chain: at most one pending
/// request, and nothing scheduled after shutdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSchedule {
    pending: Option<i32>,
    shut_down: bool,
}

impl FrameSchedule {
    /// A new request may be issued.
    #[inline]
    pub fn should_request(&self) -> bool {
        !self.shut_down && self.pending.is_none()
    }

    pub fn requested(&mut self, id: i32) {
        self.pending = Some(id);
    }

    /// The pending callback is running; it is no longer cancellable.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Stop for good. Returns the request id that still needs cancelling.
    pub fn shutdown(&mut self) -> Option<i32> {
        self.shut_down = true;
        self.pending.take()
    }
}
