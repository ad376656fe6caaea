//! The mediator: registry plumbing plus the result-merging dispatch engine.
//!
//! A [`Mediator`] lets independent components subscribe callbacks to named
//! events and lets callers invoke all callbacks for an event, collecting
//! their positional results into a single merged vector. Producers of
//! behavior and the code that triggers it never need to know about each
//! other.
//!
//! # Examples
//!
//! ```
//! use event_mediator::{Mediator, Outcome};
//!
//! let mediator: Mediator<(i64, bool), i64> = Mediator::new();
//!
//! // One callback decides position 0, another position 1. Neither needs to
//! // know about the other's positions.
//! mediator.register("attack", |&(base, _)| Ok(Outcome::single(base)));
//! mediator.register("attack", |&(_, crit)| {
//!     Ok(Outcome::from_slots([None, crit.then_some(50)]))
//! });
//!
//! let merged = mediator.invoke("attack", &(100, true), &[Some(0), Some(0)]).unwrap();
//! assert_eq!(merged, vec![Some(100), Some(50)]);
//! ```

use std::sync::{Arc, Mutex};

use crate::error::DispatchError;
use crate::events::{MediatorEvent, TraceCallback};
use crate::outcome::Outcome;
use crate::registry::{Callback, CallbackResult, Registry};

/// Process-wide event mediator: callback registration plus merged dispatch.
///
/// `A` is the argument type every callback for an event receives (shared,
/// read-only); `V` is the slot value type of callback results and defaults.
///
/// Construct instances explicitly and control their lifetime; tests get
/// isolated mediators for free. For a process-wide singleton behind free
/// functions, see [`define_mediator!`](crate::define_mediator).
pub struct Mediator<A, V> {
    registry: Registry<A, V>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl<A, V> Mediator<A, V> {
    /// Creates a mediator with no registered callbacks.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            trace: Mutex::new(None),
        }
    }

    // ---------------------------------------------------------------------
    // Registry plumbing
    // ---------------------------------------------------------------------

    /// Appends `callback` to the ordered list for `event`.
    ///
    /// Registration order is invocation order and merge tie-break order.
    /// Duplicates are permitted; there are no error conditions.
    pub fn register(
        &self,
        event: impl Into<String>,
        callback: impl Fn(&A) -> CallbackResult<V> + Send + Sync + 'static,
    ) {
        self.register_arc(event, Arc::new(callback));
    }

    /// Appends an `Arc`-wrapped callback, useful when registering the same
    /// callback under several events.
    pub fn register_arc(&self, event: impl Into<String>, callback: Arc<Callback<A, V>>) {
        let event = event.into();
        self.emit_event(&MediatorEvent::Register { event: &event });
        log::debug!("registering callback for event '{event}'");
        self.registry.register_arc(event, callback);
    }

    /// Removes the entire callback list for `event`. Idempotent.
    pub fn clear(&self, event: &str) {
        self.emit_event(&MediatorEvent::Clear { event });
        log::debug!("clearing event '{event}'");
        self.registry.clear(event);
    }

    /// Removes every event's callback list.
    pub fn clear_all(&self) {
        self.emit_event(&MediatorEvent::ClearAll);
        log::debug!("clearing all events");
        self.registry.clear_all();
    }

    /// Number of callbacks registered for `event`.
    pub fn callback_count(&self, event: &str) -> usize {
        let count = self.registry.callback_count(event);
        self.emit_event(&MediatorEvent::Count {
            event: Some(event),
            count,
        });
        count
    }

    /// Total number of callbacks across all events.
    pub fn total_count(&self) -> usize {
        let count = self.registry.total_count();
        self.emit_event(&MediatorEvent::Count { event: None, count });
        count
    }

    /// The underlying callback storage.
    pub fn registry(&self) -> &Registry<A, V> {
        &self.registry
    }

    // ---------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------

    /// Sets a tracing callback invoked on every mediator interaction.
    ///
    /// The callback must not call back into the same mediator's tracing
    /// setters, as it runs while the trace lock is held.
    pub fn set_trace_callback(&self, callback: impl Fn(&MediatorEvent<'_>) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clears the tracing callback (disables tracing).
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    fn emit_event(&self, event: &MediatorEvent<'_>) {
        let guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }
}

impl<A, V: Clone> Mediator<A, V> {
    /// Invokes every callback registered for `event` and merges their return
    /// vectors against `defaults`.
    ///
    /// Every callback receives the same `args` reference; callbacks do not
    /// see each other's results. This is a fan-out, not a pipeline. The
    /// merge is positional with first-writer-wins semantics:
    ///
    /// - output length is `max(defaults.len(), longest return vector)`;
    /// - at each position the first callback (in registration order) that
    ///   supplied a value wins, later suppliers are ignored;
    /// - positions no callback filled fall back to `defaults`, and stay
    ///   `None` when the default is also absent.
    ///
    /// With no callbacks registered the defaults are returned verbatim, so
    /// an unknown event name is not an error. A caller passing no defaults
    /// to an event with no callbacks gets the empty vector.
    ///
    /// # Errors
    ///
    /// Fail-fast: the first callback returning `Err` aborts the dispatch.
    /// Remaining callbacks are never invoked and no merged result is
    /// produced; the error names the event and chains the cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use event_mediator::{Mediator, Outcome};
    ///
    /// let mediator: Mediator<(), i32> = Mediator::new();
    /// mediator.register("pick", |_| Ok(Outcome::from_slots([Some(100), None, None])));
    /// mediator.register("pick", |_| Ok(Outcome::from_slots([None, Some(50), None])));
    /// mediator.register("pick", |_| Ok(Outcome::from_slots([None, None, Some(25)])));
    ///
    /// let merged = mediator
    ///     .invoke("pick", &(), &[Some(0), Some(0), Some(0)])
    ///     .unwrap();
    /// assert_eq!(merged, vec![Some(100), Some(50), Some(25)]);
    /// ```
    pub fn invoke(
        &self,
        event: &str,
        args: &A,
        defaults: &[Option<V>],
    ) -> Result<Vec<Option<V>>, DispatchError> {
        // Snapshot before iterating: a callback mutating the registry during
        // its own invocation must not change this dispatch.
        let callbacks = self.registry.snapshot(event);
        self.emit_event(&MediatorEvent::Invoke {
            event,
            callbacks: callbacks.len(),
        });

        if callbacks.is_empty() {
            log::debug!(
                "no callbacks for event '{event}', returning {} default slot(s)",
                defaults.len()
            );
            return Ok(defaults.to_vec());
        }

        let mut collected = Vec::with_capacity(callbacks.len());
        for (index, callback) in callbacks.iter().enumerate() {
            let outcome = callback(args).map_err(|source| {
                log::warn!("callback {index} for event '{event}' failed, aborting dispatch");
                DispatchError::CallbackFailed {
                    event: event.to_string(),
                    index,
                    source,
                }
            })?;
            log::trace!(
                "callback {index} for event '{event}' supplied {} slot(s)",
                outcome.len()
            );
            collected.push(outcome);
        }

        let width = collected
            .iter()
            .map(Outcome::len)
            .max()
            .unwrap_or(0)
            .max(defaults.len());

        let mut merged = Vec::with_capacity(width);
        for position in 0..width {
            // First registered callback with a value at this position wins;
            // defaults never override a callback-supplied value.
            let value = collected
                .iter()
                .find_map(|outcome| outcome.get(position).cloned())
                .or_else(|| defaults.get(position).cloned().flatten());
            merged.push(value);
        }

        log::debug!(
            "dispatched event '{event}' to {} callback(s), merged width {width}",
            callbacks.len()
        );
        Ok(merged)
    }
}

impl<A, V> Default for Mediator<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_callbacks_returns_defaults_verbatim() {
        let mediator: Mediator<(), i32> = Mediator::new();
        let merged = mediator
            .invoke("missing", &(), &[Some(1), None, Some(3)])
            .unwrap();
        assert_eq!(merged, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn test_no_callbacks_no_defaults_returns_empty() {
        let mediator: Mediator<(), i32> = Mediator::new();
        let merged = mediator.invoke("missing", &(), &[]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_single_callback_values_win_over_defaults() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::from_slots([Some(9), None])));

        let merged = mediator.invoke("e", &(), &[Some(1), Some(2)]).unwrap();
        assert_eq!(merged, vec![Some(9), Some(2)]);
    }

    #[test]
    fn test_first_non_empty_wins_per_position() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::from_slots([Some(100), None, None])));
        mediator.register("e", |_| Ok(Outcome::from_slots([None, Some(50), None])));
        mediator.register("e", |_| Ok(Outcome::from_slots([None, None, Some(25)])));

        let merged = mediator
            .invoke("e", &(), &[Some(0), Some(0), Some(0)])
            .unwrap();
        assert_eq!(merged, vec![Some(100), Some(50), Some(25)]);
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::single(1)));
        mediator.register("e", |_| Ok(Outcome::single(2)));

        let merged = mediator.invoke("e", &(), &[Some(0)]).unwrap();
        assert_eq!(merged, vec![Some(1)]);
    }

    #[test]
    fn test_width_is_max_of_defaults_and_outcomes() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::values([7, 8])));

        // Defaults shorter than the longest outcome.
        let merged = mediator.invoke("e", &(), &[Some(0)]).unwrap();
        assert_eq!(merged, vec![Some(7), Some(8)]);

        // Defaults equal in length.
        let merged = mediator.invoke("e", &(), &[Some(0), Some(0)]).unwrap();
        assert_eq!(merged, vec![Some(7), Some(8)]);

        // Defaults longer than the longest outcome.
        let merged = mediator
            .invoke("e", &(), &[Some(0), Some(0), Some(3)])
            .unwrap();
        assert_eq!(merged, vec![Some(7), Some(8), Some(3)]);
    }

    #[test]
    fn test_all_nothing_outcomes_and_empty_defaults_give_empty_result() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::nothing()));
        mediator.register("e", |_| Ok(Outcome::nothing()));

        let merged = mediator.invoke("e", &(), &[]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_unfilled_positions_without_defaults_stay_none() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Ok(Outcome::from_slots([None, Some(5), None])));

        let merged = mediator.invoke("e", &(), &[Some(1)]).unwrap();
        assert_eq!(merged, vec![Some(1), Some(5), None]);
    }

    #[test]
    fn test_arguments_are_shared_with_every_callback() {
        let mediator: Mediator<(i32, i32), i32> = Mediator::new();
        mediator.register("sum", |&(a, b)| Ok(Outcome::single(a + b)));
        mediator.register("sum", |&(a, _)| Ok(Outcome::from_slots([None, Some(a)])));

        let merged = mediator.invoke("sum", &(3, 4), &[]).unwrap();
        assert_eq!(merged, vec![Some(7), Some(3)]);
    }

    #[test]
    fn test_failing_callback_aborts_dispatch() {
        let mediator: Mediator<(), i32> = Mediator::new();
        mediator.register("e", |_| Err("boom".into()));

        let err = mediator.invoke("e", &(), &[Some(0)]).unwrap_err();
        assert_eq!(err.event(), "e");
        assert!(err.to_string().contains("boom"));
    }
}
