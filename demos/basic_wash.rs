//! A plain wash with no extras, driven to completion.
//!
//! Run with: cargo run --example basic_wash

use washbay::driver::{run_full_cycle, DEFAULT_STEP_CAP};
use washbay::{describe_code, WashOptions, WashStateMachine};

fn main() {
    println!("=== Basic Wash ===\n");

    let mut bay = WashStateMachine::new();
    let run = run_full_cycle(&mut bay, WashOptions::basic(), DEFAULT_STEP_CAP)
        .expect("a basic wash runs to completion");

    println!("Phases visited:");
    for phase in &run.phases {
        println!("  {}", describe_code(phase.code()));
    }

    println!("\nCharged: {:.2}", run.receipt.amount);
    println!("Occupied: {}", bay.occupied());
    println!("Total revenue: {:.2}", bay.total_revenue());
}
