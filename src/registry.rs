//! Callback storage: an ordered callback list per event name.
//!
//! The registry is pure storage. It knows nothing about invocation or result
//! merging; the [`Mediator`](crate::Mediator) owns one and layers the
//! dispatch logic on top. Insertion order is preserved per event and is both
//! the invocation order and the merge tie-break order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::outcome::Outcome;

/// Boxed error type a callback may fail with.
///
/// Any error type converts into this via `?`, so callbacks are free to use
/// whatever error type suits them.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a callback invocation produces: a return vector, or a failure that
/// aborts the whole dispatch.
pub type CallbackResult<V> = Result<Outcome<V>, CallbackError>;

/// The stored callback shape: shared arguments in, slots out.
///
/// `A` is the caller-chosen argument type (typically a tuple or a small
/// struct) and `V` the slot value type. Every callback registered for an
/// event receives the same `&A` during a dispatch.
pub type Callback<A, V> = dyn Fn(&A) -> CallbackResult<V> + Send + Sync;

/// Ordered, per-event callback storage.
///
/// Duplicates are permitted and there is no identity deduplication: the same
/// underlying function may be registered several times under one event, or
/// under several events, and each registration counts and fires separately.
///
/// All operations serialize on an internal mutex and recover from lock
/// poisoning, so they are total: none of them can fail.
pub struct Registry<A, V> {
    events: Mutex<HashMap<String, Vec<Arc<Callback<A, V>>>>>,
}

impl<A, V> Registry<A, V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
        }
    }

    /// Appends `callback` to the ordered list for `event`, creating the list
    /// if absent. Always succeeds; state grows until a clear.
    pub fn register(
        &self,
        event: impl Into<String>,
        callback: impl Fn(&A) -> CallbackResult<V> + Send + Sync + 'static,
    ) {
        self.register_arc(event, Arc::new(callback));
    }

    /// Appends an `Arc`-wrapped callback, avoiding an extra allocation when
    /// the caller already holds one (e.g. to register it under several
    /// events).
    pub fn register_arc(&self, event: impl Into<String>, callback: Arc<Callback<A, V>>) {
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.entry(event.into()).or_default().push(callback);
    }

    /// Removes the entire callback list for `event`.
    ///
    /// Idempotent: clearing an absent or already-empty event is a no-op.
    /// Subsequent lookups behave as "no callbacks registered".
    pub fn clear(&self, event: &str) {
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.remove(event);
    }

    /// Removes every event's callback list.
    pub fn clear_all(&self) {
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.clear();
    }

    /// Number of callbacks registered for one event. Pure read.
    pub fn callback_count(&self, event: &str) -> usize {
        let events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.get(event).map_or(0, Vec::len)
    }

    /// Total number of callbacks across all events. Pure read.
    pub fn total_count(&self) -> usize {
        let events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.values().map(Vec::len).sum()
    }

    /// Clones the callback list for `event` under the lock.
    ///
    /// Dispatch iterates this snapshot, never the live list, so a callback
    /// that registers or clears during its own invocation cannot change the
    /// in-flight dispatch.
    pub fn snapshot(&self, event: &str) -> Vec<Arc<Callback<A, V>>> {
        let events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.get(event).cloned().unwrap_or_default()
    }
}

impl<A, V> Default for Registry<A, V> {
    fn default() -> Self {
        Self::new()
    }
}
