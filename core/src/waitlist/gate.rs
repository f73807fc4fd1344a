//! One-submission-at-a-time guard for a form instance.
//!
//! The submit button is disabled while a [`SubmissionTicket`] is alive.
//! Dropping the ticket re-enables it, so success, failure and a dropped
//! future all release the form the same way.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared "a submission is pending" flag. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    busy: Rc<Cell<bool>>,
}

/// Proof that the holder owns the pending submission.
#[derive(Debug)]
pub struct SubmissionTicket {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Take the gate, or `None` when a submission is already pending.
    pub fn try_begin(&self) -> Option<SubmissionTicket> {
        if self.busy.replace(true) {
            log::warn!("waitlist: submit ignored, previous submission still pending");
            return None;
        }
        Some(SubmissionTicket {
            busy: Rc::clone(&self.busy),
        })
    }

    /// Take the gate now and release it once `fut` settles.
    ///
    /// Returns `None` without touching `fut` when the gate is taken.
    pub fn submit<F>(&self, fut: F) -> Option<impl Future<Output = F::Output>>
    where
        F: Future,
    {
        let ticket = self.try_begin()?;
        Some(async move {
            let output = fut.await;
            drop(ticket);
            output
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[test]
    fn test_ticket_blocks_until_dropped() {
        let gate = SubmissionGate::new();
        let ticket = gate.try_begin().unwrap();
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());
        assert!(gate.clone().try_begin().is_none());
        drop(ticket);
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_second_submit_ignored_while_pending() {
        let gate = SubmissionGate::new();
        let (tx, rx) = oneshot::channel::<Result<(), String>>();

        let pending = gate
            .submit(async move { rx.await.unwrap_or_else(|_| Err("dropped".into())) })
            .unwrap();
        assert!(gate.is_busy());

        let second_ran = Cell::new(false);
        assert!(gate.submit(async { second_ran.set(true) }).is_none());

        tx.send(Err("server error".into())).unwrap();
        assert_eq!(pending.await, Err("server error".to_string()));
        assert!(!second_ran.get());
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn test_gate_reopens_after_success() {
        let gate = SubmissionGate::new();
        let result = gate.submit(async { Ok::<_, String>(7) }).unwrap().await;
        assert_eq!(result, Ok(7));
        assert!(!gate.is_busy());
        assert!(gate.submit(async {}).is_some());
    }

    #[test]
    fn test_dropped_future_releases_gate() {
        let gate = SubmissionGate::new();
        let fut = gate.submit(async {}).unwrap();
        assert!(gate.is_busy());
        drop(fut);
        assert!(!gate.is_busy());
    }
}
