use std::collections::BTreeMap;

/// Identifier of a mounted component within one [`crate::host::frame_loop::FrameLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) u64);

/// Cancellable request for the next frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Pending next-frame requests, one callback per handle.
///
/// Requests are delivered in the order they were made. A cancelled handle is never delivered;
/// cancelling twice or after delivery is a no-op.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next: u64,
    pending: BTreeMap<FrameHandle, ComponentId>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `component` to receive the next frame.
    pub fn request(&mut self, component: ComponentId) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.insert(handle, component);
        handle
    }

    /// Cancel a pending request. Returns `true` if it was still pending.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take every request due this frame. Requests made while they run wait for the next frame.
    pub fn take_due(&mut self) -> Vec<(FrameHandle, ComponentId)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/scheduler.rs"]
mod tests;
