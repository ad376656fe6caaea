//! # Event Mediator
//!
//! A thread-safe, process-wide event mediator: independent components
//! subscribe callbacks to named events, and callers invoke all callbacks for
//! an event, collecting their results into a single merged response. Neither
//! side needs to know about the other.
//!
//! The distinguishing feature over plain pub/sub is the positional merge:
//! every callback returns an ordered vector of present/absent slots, and the
//! dispatch reduces all of them plus a caller-supplied default vector into
//! one result, first registered writer winning at each position. Handlers
//! compose a response across independent concerns without any handler owning
//! the whole shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_mediator::{Mediator, Outcome};
//!
//! let mediator: Mediator<(u32, i64), i64> = Mediator::new();
//!
//! // Base damage comes from one module...
//! mediator.register("Calculate_Damage", |&(_, base)| Ok(Outcome::single(base)));
//! // ...a crit module stays silent when there is no crit.
//! mediator.register("Calculate_Damage", |_| Ok(Outcome::nothing()));
//!
//! let merged = mediator
//!     .invoke("Calculate_Damage", &(3, 100), &[Some(100)])
//!     .unwrap();
//! assert_eq!(merged, vec![Some(100)]);
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: registration, clearing, and dispatch serialize on an
//!   internal mutex; dispatch iterates a snapshot of the callback list
//! - **First-writer-wins merge**: positional reduction across every
//!   callback's return vector, with caller defaults as gap filler
//! - **Fail-fast dispatch**: one failing callback aborts the whole dispatch
//!   with a structured [`DispatchError`], never a partial result
//! - **Tracing support**: optional callback system for monitoring mediator
//!   operations, plus `log` records for diagnostics
//!
//! ## Main Types
//!
//! - [`Mediator`] - registration plus the merging dispatch engine
//! - [`Registry`] - the underlying ordered callback storage
//! - [`Outcome`] - a callback's return vector of present/absent slots
//! - [`DispatchError`] - the fail-fast dispatch failure
//! - [`define_mediator!`] - facade macro wrapping one process-wide instance

mod error;
mod events;
mod macros;
mod mediator;
mod outcome;
mod registry;

// Re-export the main public API
pub use error::DispatchError;
pub use events::{MediatorEvent, TraceCallback};
pub use mediator::Mediator;
pub use outcome::Outcome;
pub use registry::{Callback, CallbackError, CallbackResult, Registry};
