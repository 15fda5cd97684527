//! Door Walkthrough
//!
//! This demo walks a single door through a working day.
//!
//! Key concepts:
//! - Transitions legal only from certain states
//! - Counters updated together with the state change
//! - Illegal attempts rejected without touching the door
//! - DOT rendering of the state diagram
//!
//! Run with: RUST_LOG=doorstate=debug cargo run --example door_walkthrough

use doorstate::{Door, DoorError, DoorState};
use tracing_subscriber::EnvFilter;

fn report(door: &Door) {
    println!(
        "  state: {:<6}  visitors: {}  locks: {}",
        door.state(),
        door.visitor_count(),
        door.lock_count()
    );
}

fn main() -> Result<(), DoorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Door Walkthrough ===\n");

    let mut door = Door::new(DoorState::Locked);
    println!("Morning, the door is locked:");
    report(&door);

    door.unlock()?;
    for _ in 0..3 {
        door.open()?;
        door.close()?;
    }
    println!("\nAfter three visitors:");
    report(&door);

    door.open()?;
    println!("\nLeft open, trying to lock it:");
    match door.lock() {
        Ok(()) => println!("  locked"),
        Err(err) => println!("  {err}"),
    }
    report(&door);

    door.close()?;
    door.lock()?;
    println!("\nEvening, closed and locked:");
    report(&door);

    println!("\nState diagram:\n");
    print!("{}", door.to_dot());

    println!("\n=== Example Complete ===");
    Ok(())
}
