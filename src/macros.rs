//! Macro for creating process-wide mediator facades.
//!
//! Core semantics never depend on global state: a [`Mediator`](crate::Mediator)
//! is an ordinary value with caller-controlled lifetime. The macro below is
//! the optional convenience layer for programs that want one shared mediator
//! behind free functions, without every call site holding a handle.

/// Creates a module wrapping one process-wide mediator with free functions.
///
/// The generated module holds a lazily-initialized static
/// [`Mediator`](crate::Mediator) and forwards every operation to it. The
/// slot value type must be `Clone` (merging hands each winning value to the
/// caller by clone).
///
/// # Examples
///
/// ```rust
/// use event_mediator::{define_mediator, Outcome};
///
/// // One shared mediator: callbacks take (attacker_level, base) and answer
/// // with i64 slots.
/// define_mediator!(combat, (u32, i64), i64);
///
/// combat::register("Calculate_Damage", |&(_, base)| Ok(Outcome::single(base)));
/// combat::register("Calculate_Damage", |_| Ok(Outcome::nothing()));
///
/// let merged = combat::invoke("Calculate_Damage", &(3, 100), &[Some(100)]).unwrap();
/// assert_eq!(merged, vec![Some(100)]);
/// assert_eq!(combat::callback_count("Calculate_Damage"), 2);
/// ```
///
/// # Multiple mediators
///
/// Each invocation creates a completely isolated mediator:
///
/// ```rust
/// use event_mediator::{define_mediator, Outcome};
///
/// define_mediator!(ui_hooks, String, String);
/// define_mediator!(audio_hooks, String, String);
///
/// ui_hooks::register("redraw", |_| Ok(Outcome::nothing()));
///
/// assert_eq!(ui_hooks::total_count(), 1);
/// assert_eq!(audio_hooks::total_count(), 0);
/// ```
///
/// # Direct access
///
/// The backing instance is reachable when the free functions are not enough:
///
/// ```rust
/// use event_mediator::define_mediator;
///
/// define_mediator!(app, (), u8);
///
/// let mediator = app::mediator();
/// assert_eq!(mediator.total_count(), 0);
/// ```
#[macro_export]
macro_rules! define_mediator {
    ($name:ident, $args:ty, $value:ty) => {
        pub mod $name {
            // Bring the caller's scope in so `$args`/`$value` paths resolve
            // inside the generated module.
            #[allow(unused_imports)]
            use super::*;

            use std::sync::{Arc, LazyLock};

            static MEDIATOR: LazyLock<$crate::Mediator<$args, $value>> =
                LazyLock::new($crate::Mediator::new);

            /// The shared mediator instance backing this module.
            pub fn mediator() -> &'static $crate::Mediator<$args, $value> {
                &MEDIATOR
            }

            /// Register a callback for an event.
            pub fn register(
                event: impl Into<String>,
                callback: impl Fn(&$args) -> $crate::CallbackResult<$value>
                    + Send
                    + Sync
                    + 'static,
            ) {
                MEDIATOR.register(event, callback)
            }

            /// Register an `Arc`-wrapped callback for an event.
            pub fn register_arc(
                event: impl Into<String>,
                callback: Arc<$crate::Callback<$args, $value>>,
            ) {
                MEDIATOR.register_arc(event, callback)
            }

            /// Invoke every callback for an event and merge the results
            /// against `defaults`.
            pub fn invoke(
                event: &str,
                args: &$args,
                defaults: &[Option<$value>],
            ) -> Result<Vec<Option<$value>>, $crate::DispatchError> {
                MEDIATOR.invoke(event, args, defaults)
            }

            /// Remove one event's callback list. Idempotent.
            pub fn clear(event: &str) {
                MEDIATOR.clear(event)
            }

            /// Remove every event's callback list.
            pub fn clear_all() {
                MEDIATOR.clear_all()
            }

            /// Number of callbacks registered for one event.
            pub fn callback_count(event: &str) -> usize {
                MEDIATOR.callback_count(event)
            }

            /// Total number of callbacks across all events.
            pub fn total_count() -> usize {
                MEDIATOR.total_count()
            }

            /// Set a tracing callback for mediator operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::MediatorEvent<'_>) + Send + Sync + 'static,
            ) {
                MEDIATOR.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                MEDIATOR.clear_trace_callback()
            }
        }
    };
}
