use super::{Dialogs, Workbench};
use crate::kernel::Action;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

impl<D: Dialogs> Workbench<D> {
    /// Called by the main loop: applies host replies, folds in user edits, fires a due
    /// auto-save.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_host();
        changed |= self.pump_surface(now);
        changed |= self.dispatch_kernel(Action::Tick { now });
        changed
    }

    pub(super) fn pump_surface(&mut self, now: Instant) -> bool {
        match self.store.surface_mut().take_changes() {
            Some(content) => self.dispatch_kernel(Action::Edit { content, now }),
            None => false,
        }
    }

    fn poll_host(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        loop {
            if drained >= super::MAX_HOST_DRAIN_PER_TICK {
                break;
            }
            match self.host_rx.try_recv() {
                Ok(reply) => {
                    drained += 1;
                    self.in_flight = self.in_flight.saturating_sub(1);
                    changed |= self.dispatch_kernel(Action::Host(reply));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("host runtime disconnected");
                    break;
                }
            }
        }
        changed
    }

    /// Blocks until every submitted request has been answered, applying replies as
    /// they arrive. Replies may submit follow-up requests; those are waited for too.
    /// Returns false on timeout.
    pub fn wait_for_host(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.host_rx.recv_timeout(remaining) {
                Ok(reply) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.dispatch_kernel(Action::Host(reply));
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(in_flight = self.in_flight, "timed out waiting for host");
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::error!("host runtime disconnected");
                    return false;
                }
            }
        }
        true
    }
}
