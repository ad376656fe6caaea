//! Integration tests for fail-fast dispatch: a failing callback aborts the
//! whole dispatch, later callbacks never run, and no merged result leaks out.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use event_mediator::{DispatchError, Mediator, Outcome};

#[derive(Debug)]
struct CritRollError;

impl fmt::Display for CritRollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crit roll out of range")
    }
}

impl Error for CritRollError {}

#[test]
fn test_failing_callback_propagates_a_dispatch_error() {
    let mediator: Mediator<(), i32> = Mediator::new();
    mediator.register("e", |_| Err(CritRollError.into()));

    let err = mediator.invoke("e", &(), &[Some(0)]).unwrap_err();
    let DispatchError::CallbackFailed { event, index, .. } = &err;
    assert_eq!(event, "e");
    assert_eq!(*index, 0);
}

#[test]
fn test_error_names_the_event_and_chains_the_cause() {
    let mediator: Mediator<(), i32> = Mediator::new();
    mediator.register("Calculate_Damage", |_| Ok(Outcome::single(1)));
    mediator.register("Calculate_Damage", |_| Err(CritRollError.into()));

    let err = mediator
        .invoke("Calculate_Damage", &(), &[Some(0)])
        .unwrap_err();

    assert_eq!(err.event(), "Calculate_Damage");
    assert!(err.to_string().contains("Calculate_Damage"));
    assert_eq!(
        err.source().map(|s| s.to_string()),
        Some("crit roll out of range".to_string())
    );
}

#[test]
fn test_callbacks_after_the_failing_one_are_never_invoked() {
    let mediator: Mediator<(), i32> = Mediator::new();
    let probe = Arc::new(AtomicUsize::new(0));

    let p = probe.clone();
    mediator.register("e", move |_| {
        p.fetch_add(1, Ordering::SeqCst);
        Ok(Outcome::single(1))
    });
    mediator.register("e", |_| Err("midway failure".into()));
    let p = probe.clone();
    mediator.register("e", move |_| {
        p.fetch_add(100, Ordering::SeqCst);
        Ok(Outcome::single(3))
    });

    let err = mediator.invoke("e", &(), &[Some(0)]).unwrap_err();
    let DispatchError::CallbackFailed { index, .. } = &err;
    assert_eq!(*index, 1);

    // Only the first callback ran.
    assert_eq!(probe.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_dispatch_leaves_registrations_intact() {
    let mediator: Mediator<(), i32> = Mediator::new();
    mediator.register("e", |_| Err("boom".into()));

    assert!(mediator.invoke("e", &(), &[]).is_err());
    assert_eq!(mediator.callback_count("e"), 1);

    // A later dispatch fails the same way; failures are surfaced, not
    // retried or unregistered.
    assert!(mediator.invoke("e", &(), &[]).is_err());
}

#[test]
fn test_string_errors_convert_via_question_mark_friendly_boxing() {
    let mediator: Mediator<i32, i32> = Mediator::new();
    mediator.register("parse", |&n| {
        if n < 0 {
            return Err(format!("negative input: {n}").into());
        }
        Ok(Outcome::single(n * 2))
    });

    assert_eq!(mediator.invoke("parse", &4, &[]).unwrap(), vec![Some(8)]);

    let err = mediator.invoke("parse", &-1, &[]).unwrap_err();
    assert!(err.to_string().contains("negative input: -1"));
}
