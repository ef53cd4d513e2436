use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Opaque id of one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Refresh-synchronized "call me on the next frame" primitive.
///
/// In a browser this wraps `requestAnimationFrame` / `cancelAnimationFrame`; headless hosts use
/// [`ManualTickScheduler`]. A scheduled tick is one-shot: after it fires, the owner must schedule
/// again to keep the loop going.
pub trait TickScheduler {
    /// Request one tick on the next display refresh.
    fn schedule(&mut self) -> TickHandle;

    /// Cancel a tick that has not fired yet. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

#[derive(Debug, Default)]
struct ManualState {
    next_id: u64,
    pending: VecDeque<TickHandle>,
    canceled: Vec<TickHandle>,
}

/// Scheduler whose ticks fire only when the host says so.
///
/// Clones share state, so a host can keep one clone to drive ticks while the animator owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct ManualTickScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualTickScheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the oldest pending tick, removing it from the queue.
    pub fn take_due(&self) -> Option<TickHandle> {
        self.state.borrow_mut().pending.pop_front()
    }

    /// Ticks scheduled but neither fired nor canceled.
    pub fn pending(&self) -> Vec<TickHandle> {
        self.state.borrow().pending.iter().copied().collect()
    }

    /// Every handle that was canceled while still pending, in cancel order.
    pub fn canceled(&self) -> Vec<TickHandle> {
        self.state.borrow().canceled.clone()
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule(&mut self) -> TickHandle {
        let mut st = self.state.borrow_mut();
        let handle = TickHandle(st.next_id);
        st.next_id += 1;
        st.pending.push_back(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let mut st = self.state.borrow_mut();
        if let Some(pos) = st.pending.iter().position(|h| *h == handle) {
            st.pending.remove(pos);
            st.canceled.push(handle);
        }
    }
}
