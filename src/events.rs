/// Events emitted by the mediator during operations.
///
/// These events are passed to the tracing callback set via
/// [`Mediator::set_trace_callback`](crate::Mediator::set_trace_callback).
/// They borrow the event name, so callbacks that want to keep one around
/// should convert the fields they need to owned values.
///
/// # Examples
///
/// ```rust
/// use event_mediator::MediatorEvent;
///
/// let event = MediatorEvent::Register { event: "Calculate_Damage" };
/// println!("{}", event);
/// ```
#[derive(Debug, Clone)]
pub enum MediatorEvent<'a> {
    /// A callback was registered for an event.
    Register {
        /// The event name the callback was registered under.
        event: &'a str,
    },

    /// A dispatch started for an event.
    Invoke {
        /// The event name being dispatched.
        event: &'a str,
        /// Number of callbacks in the snapshot about to run.
        callbacks: usize,
    },

    /// One event's callback list was removed.
    Clear {
        /// The cleared event name.
        event: &'a str,
    },

    /// Every event's callback list was removed.
    ClearAll,

    /// A callback count was read.
    Count {
        /// The queried event name, or `None` for the sum across all events.
        event: Option<&'a str>,
        /// The returned count.
        count: usize,
    },
}

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a [`MediatorEvent`] every time the
/// mediator is interacted with. It must be thread-safe because the mediator
/// may be shared across threads.
pub type TraceCallback = dyn Fn(&MediatorEvent<'_>) + Send + Sync + 'static;

impl std::fmt::Display for MediatorEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediatorEvent::Register { event } => {
                write!(f, "register {{ event: {event} }}")
            }
            MediatorEvent::Invoke { event, callbacks } => {
                write!(f, "invoke {{ event: {event}, callbacks: {callbacks} }}")
            }
            MediatorEvent::Clear { event } => write!(f, "clear {{ event: {event} }}"),
            MediatorEvent::ClearAll => write!(f, "clear_all {{}}"),
            MediatorEvent::Count { event, count } => {
                write!(f, "count {{ event: {}, count: {count} }}", event.unwrap_or("*"))
            }
        }
    }
}
