//! A full-service wash advanced one phase at a time, with a status block
//! after every step.
//!
//! Run with: cargo run --example full_service

use washbay::{describe_code, StepOutcome, WashOptions, WashStateMachine};

fn print_status(bay: &WashStateMachine) {
    let options = bay.options();
    println!("----------------------------------------");
    println!("Total revenue: {:.2}", bay.total_revenue());
    println!("Occupied: {}", bay.occupied());
    println!("Prewash by hand: {}", options.prewash_by_hand);
    println!("Dry by hand: {}", options.dry_by_hand);
    println!("Wax: {}", options.wax);
    println!("Phase: {}", describe_code(bay.phase().code()));
    println!("----------------------------------------");
}

fn main() {
    println!("=== Full Service Wash ===\n");

    let mut bay = WashStateMachine::new();
    bay.start_wash(WashOptions::full_service())
        .expect("the bay starts out free");
    print_status(&bay);

    loop {
        match bay
            .advance_phase()
            .expect("the cycle only visits defined phases")
        {
            StepOutcome::Charged(receipt) => println!("charged {:.2}", receipt.amount),
            StepOutcome::Advanced { from, to } => println!("{from} -> {to}"),
            StepOutcome::Completed { from } => {
                println!("{from} -> done, the bay is free again");
                break;
            }
            StepOutcome::Ignored => break,
        }
    }

    print_status(&bay);
}
