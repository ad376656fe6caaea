//! Basic usage example for event-mediator.
//!
//! Demonstrates:
//! - Registering callbacks for named events
//! - Invoking an event and merging positional results against defaults
//! - Count introspection and clearing
//!
//! Run with: `cargo run --example basic_usage`

use event_mediator::{Mediator, Outcome};

fn main() {
    env_logger::init();

    println!("=== event-mediator: Basic Usage ===\n");

    // Arguments are a (user, action) pair; result slots are strings.
    let mediator: Mediator<(String, String), String> = Mediator::new();

    // -------------------------------------------------------------------------
    // 1. Register validation callbacks
    // -------------------------------------------------------------------------
    println!("1. Registering validation callbacks...");

    // The permission module decides position 0 (verdict).
    mediator.register("validate_action", |(user, _action): &(String, String)| {
        let verdict = if user == "admin" { "allow" } else { "deny" };
        Ok(Outcome::from_slots([Some(verdict.to_string()), None]))
    });

    // The audit module decides position 1 (message) and has no opinion on
    // the verdict.
    mediator.register("validate_action", |(user, action): &(String, String)| {
        Ok(Outcome::from_slots([
            None,
            Some(format!("{user} attempted '{action}'")),
        ]))
    });

    println!("   Registered: 2 callbacks for 'validate_action'");

    // -------------------------------------------------------------------------
    // 2. Invoke the event
    // -------------------------------------------------------------------------
    println!("\n2. Invoking 'validate_action'...");

    let args = ("admin".to_string(), "deploy".to_string());
    let defaults = [Some("deny".to_string()), Some("no details".to_string())];
    let merged = mediator
        .invoke("validate_action", &args, &defaults)
        .expect("no callback fails in this example");

    println!("   Verdict: {:?}", merged[0]);
    println!("   Message: {:?}", merged[1]);

    // -------------------------------------------------------------------------
    // 3. Defaults fill positions nobody answered
    // -------------------------------------------------------------------------
    println!("\n3. Invoking an event with no callbacks...");

    let merged = mediator
        .invoke("unknown_event", &args, &defaults)
        .expect("zero callbacks cannot fail");

    println!("   Merged result is the default vector: {merged:?}");

    // -------------------------------------------------------------------------
    // 4. Introspection and clearing
    // -------------------------------------------------------------------------
    println!("\n4. Counting and clearing...");

    println!(
        "   callback_count(\"validate_action\") = {}",
        mediator.callback_count("validate_action")
    );
    println!("   total_count() = {}", mediator.total_count());

    mediator.clear("validate_action");
    println!(
        "   after clear: total_count() = {}",
        mediator.total_count()
    );

    println!("\nDone.");
}
