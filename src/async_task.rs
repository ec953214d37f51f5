//! Background delivery of contact messages
//!
//! A relay call can block for seconds, so it runs on its own thread and
//! reports back over a channel that the UI loop drains every tick.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use folio::async_task::TaskManager;
//! use folio::relay::SimulatedRelay;
//! use folio::state::ContactForm;
//!
//! let mut form = ContactForm::new();
//! let mut tm = TaskManager::new();
//! let relay = Arc::new(SimulatedRelay::new(Duration::from_secs(1)));
//!
//! if let Some(submission) = form.submit("owner@example.com") {
//!     tm.spawn_delivery(relay, submission);
//! }
//!
//! // Later, in the event loop
//! if let Some(outcome) = tm.try_recv() {
//!     form.complete(outcome.id, outcome.result, std::time::Instant::now());
//! }
//! ```

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::relay::{MessageRelay, RelayError};
use crate::state::{Submission, SubmissionId};

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .unwrap_or_else(|| "unknown panic".to_owned()),
    }
}

/// Result of one delivery attempt
#[derive(Debug)]
pub struct DeliveryOutcome {
    pub id: SubmissionId,
    pub result: Result<(), RelayError>,
}

/// Spawns deliveries and collects their outcomes
pub struct TaskManager {
    sender: Sender<DeliveryOutcome>,
    receiver: Receiver<DeliveryOutcome>,
    pending: usize,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }

    /// Delivers `submission` through `relay` on a background thread
    ///
    /// Returns immediately; the outcome can be polled with `try_recv()`
    pub fn spawn_delivery(&mut self, relay: Arc<dyn MessageRelay>, submission: Submission) {
        self.pending += 1;
        let sender = self.sender.clone();

        thread::spawn(move || {
            let Submission { id, message } = submission;
            debug!(submission = %id, mode = %relay.mode(), "delivering contact message");
            let result = panic::catch_unwind(AssertUnwindSafe(|| relay.deliver(&message)))
                .unwrap_or_else(|payload| Err(RelayError::Panicked(panic_message(payload))));

            // The receiver only goes away when the app is shutting down
            let _ = sender.send(DeliveryOutcome { id, result });
        });
    }

    /// Returns a finished delivery if there is one, without blocking
    pub fn try_recv(&mut self) -> Option<DeliveryOutcome> {
        if self.pending == 0 {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.pending -= 1;
                Some(outcome)
            }
            Err(_) => None,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
