//! Form state container.
//!
//! The store is the single owner of [`FormState`]. Every change arrives as a
//! [`FormEvent`] on one channel and is applied in arrival order, so no locks
//! are needed and overlapping dispatches resolve as last write wins.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};

use crate::application::dto::FormEvent;
use crate::domain::entities::{AuthenticatedUser, FormKey};

/// Snapshot of every form's error slot and the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    errors: HashMap<FormKey, String>,
    user: Option<AuthenticatedUser>,
    in_flight: HashMap<FormKey, usize>,
    revision: u64,
}

impl FormState {
    /// Creates empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event.
    ///
    /// Only `Failed` sets an error; only `Succeeded` and `Reset` clear one.
    pub fn reduce(&mut self, event: FormEvent) {
        match event {
            FormEvent::Started { form, .. } => {
                *self.in_flight.entry(form).or_default() += 1;
            }
            FormEvent::Succeeded { form, user, .. } => {
                self.finish(&form);
                self.errors.remove(&form);
                self.user = Some(user);
            }
            FormEvent::Failed { form, message, .. } => {
                self.finish(&form);
                self.errors.insert(form, message);
            }
            FormEvent::Reset { form } => {
                self.errors.remove(&form);
            }
            FormEvent::LoggedOut => {
                self.user = None;
            }
        }
    }

    fn finish(&mut self, form: &FormKey) {
        if let Some(count) = self.in_flight.get_mut(form) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_flight.remove(form);
            }
        }
    }

    /// Returns the error shown for a form.
    #[must_use]
    pub fn form_error(&self, form: &FormKey) -> Option<&str> {
        self.errors.get(form).map(String::as_str)
    }

    /// Returns whether any form currently shows an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// Returns number of events the owning store has applied.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns whether a submission for the form is awaiting its result.
    #[must_use]
    pub fn is_submitting(&self, form: &FormKey) -> bool {
        self.in_flight.contains_key(form)
    }
}

/// Returns the error shown for a form.
#[must_use]
pub fn get_form_error<'a>(state: &'a FormState, form: &FormKey) -> Option<&'a str> {
    state.form_error(form)
}

/// Cloneable access to a running [`FormStore`].
///
/// Writes go through the event channel; reads come from the latest
/// published snapshot.
#[derive(Clone)]
pub struct StoreHandle {
    events_tx: mpsc::UnboundedSender<FormEvent>,
    snapshot_rx: watch::Receiver<Arc<FormState>>,
    queued: Arc<AtomicU64>,
}

impl StoreHandle {
    /// Queues an event for the store.
    ///
    /// Returns `false` if the store has shut down.
    pub fn dispatch(&self, event: FormEvent) -> bool {
        trace!(event = event.name(), "Queueing form event");
        // Counted before sending so `settled` never undercounts.
        self.queued.fetch_add(1, Ordering::SeqCst);
        if self.events_tx.send(event).is_err() {
            warn!("Form store is gone, event dropped");
            return false;
        }
        true
    }

    /// Clears the error shown for a form. Safe to call when none is set.
    pub fn reset_form_error(&self, form: FormKey) -> bool {
        self.dispatch(FormEvent::Reset { form })
    }

    /// Returns the most recently published state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FormState> {
        self.snapshot_rx.borrow().clone()
    }

    /// Waits until the store has applied every event queued so far through
    /// any handle.
    ///
    /// Returns `false` if the store shut down first.
    pub async fn settled(&self) -> bool {
        let target = self.queued.load(Ordering::SeqCst);
        let mut snapshots = self.snapshot_rx.clone();
        snapshots
            .wait_for(|state| state.revision >= target)
            .await
            .is_ok()
    }

    /// Returns a receiver notified on every applied event.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<FormState>> {
        self.snapshot_rx.clone()
    }
}

/// Single-owner state container fed by [`FormEvent`]s.
pub struct FormStore {
    state: FormState,
    events_rx: mpsc::UnboundedReceiver<FormEvent>,
    snapshot_tx: watch::Sender<Arc<FormState>>,
}

impl FormStore {
    /// Creates an empty store and the handle used to reach it.
    #[must_use]
    pub fn new() -> (Self, StoreHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(FormState::default()));

        let store = Self {
            state: FormState::default(),
            events_rx,
            snapshot_tx,
        };
        let handle = StoreHandle {
            events_tx,
            snapshot_rx,
            queued: Arc::new(AtomicU64::new(0)),
        };
        (store, handle)
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies one event and publishes the new snapshot.
    pub fn apply(&mut self, event: FormEvent) {
        debug!(
            event = event.name(),
            form = event.form().map(FormKey::as_str),
            "Applying form event"
        );
        self.state.reduce(event);
        self.state.revision += 1;
        self.snapshot_tx.send_replace(Arc::new(self.state.clone()));
    }

    /// Applies every event already queued without waiting for more.
    ///
    /// Returns number of events applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    #[cfg(test)]
    pub(crate) fn try_next_event(&mut self) -> Option<FormEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Applies events until every handle is dropped, then returns final state.
    pub async fn run(mut self) -> FormState {
        debug!("Form store started");
        while let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
        debug!("Form store stopped");
        self.state
    }
}
