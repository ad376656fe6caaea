//! Damage calculation example: the first-responder-wins merge in a game
//! setting, with a process-wide facade.
//!
//! Three independent modules register against the same event. None of them
//! knows about the others; the merge picks the first supplied value per
//! position and falls back to the caller's defaults.
//!
//! Run with: `cargo run --example damage_calculation`

use event_mediator::{define_mediator, Outcome};

/// Attack context shared with every callback.
struct Attack {
    base_damage: i64,
    crit_chance: f64,
    target_armor: i64,
}

// One process-wide mediator for combat hooks.
define_mediator!(combat, Attack, i64);

fn main() {
    env_logger::init();

    println!("=== event-mediator: Damage Calculation ===\n");

    // The base-damage module answers position 0.
    combat::register("Calculate_Damage", |attack: &Attack| {
        Ok(Outcome::single(attack.base_damage))
    });

    // The crit module stays silent unless the attack crits.
    combat::register("Calculate_Damage", |attack: &Attack| {
        if attack.crit_chance >= 1.0 {
            Ok(Outcome::single(attack.base_damage * 2))
        } else {
            Ok(Outcome::nothing())
        }
    });

    // The armor module also targets position 0, but it registered last:
    // its value only surfaces when the earlier modules stay silent.
    combat::register("Calculate_Damage", |attack: &Attack| {
        Ok(Outcome::single(attack.base_damage - attack.target_armor))
    });

    let attack = Attack {
        base_damage: 100,
        crit_chance: 0.05,
        target_armor: 5,
    };

    let merged = combat::invoke("Calculate_Damage", &attack, &[Some(100)])
        .expect("no combat callback fails");

    // First registered wins: base damage, not the armor-reduced value.
    println!("Registered callbacks: {}", combat::callback_count("Calculate_Damage"));
    println!("Merged damage: {:?}", merged[0]);
    assert_eq!(merged, vec![Some(100)]);

    println!("\nDone.");
}
