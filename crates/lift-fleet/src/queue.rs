//! Per-lift pending-call queues.

use std::collections::VecDeque;

use lift_core::{CallRequest, LiftId};

/// One FIFO of pending calls per lift.
///
/// Calls land here only when every lift is busy.  Each queued call belongs
/// to exactly one lift and is never reassigned: the drain at door-close pops
/// the front of that lift's own queue and dispatches it to that same lift.
#[derive(Debug, Clone)]
pub struct CallQueues {
    queues: Vec<VecDeque<CallRequest>>,
}

impl CallQueues {
    /// Empty queues for `lift_count` lifts.
    pub fn new(lift_count: usize) -> Self {
        Self { queues: vec![VecDeque::new(); lift_count] }
    }

    /// Append `call` to the queue of the lift with the fewest pending calls,
    /// lowest `LiftId` on ties ("first found").  Returns the chosen lift.
    pub fn enqueue(&mut self, call: CallRequest) -> LiftId {
        let shortest = self
            .queues
            .iter()
            .enumerate()
            .min_by_key(|(_, q)| q.len())
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.queues[shortest].push_back(call);
        LiftId(shortest as u16)
    }

    /// Pop the oldest pending call for `lift`, if any.
    pub fn pop_front(&mut self, lift: LiftId) -> Option<CallRequest> {
        self.queues[lift.index()].pop_front()
    }

    /// Number of calls pending for `lift`.
    #[inline]
    pub fn len(&self, lift: LiftId) -> usize {
        self.queues[lift.index()].len()
    }

    /// Calls pending across all lifts.
    pub fn total_pending(&self) -> usize {
        self.queues.iter().map(|q| q.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(|q| q.is_empty())
    }
}
