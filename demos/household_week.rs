//! A Week of Dishes
//!
//! This example simulates two households for a week and prints their reports.
//!
//! Key concepts:
//! - Validated household construction
//! - Lazily stepping the state machine one meal at a time
//! - Folding a bounded run into a report
//!
//! Run with: cargo run --example household_week

use dishflow::core::State;
use dishflow::household::{HouseholdBuilder, HouseholdConstants, WaterUsage};
use dishflow::simulation::{simulate, Simulation};

fn main() {
    println!("=== A Week of Dishes ===\n");

    let couple = HouseholdConstants::default();
    let family = match HouseholdBuilder::new()
        .dishes_per_meal(6)
        .capacity(20)
        .utilization(0.9)
        .hours_per_cycle(7.5)
        .water_usage(WaterUsage::EnergyStar)
        .build()
    {
        Ok(household) => household,
        Err(error) => {
            eprintln!("{error}");
            return;
        }
    };

    println!("First day for the family, meal by meal:");
    for (statistics, state) in Simulation::new(&family).within_days(1) {
        println!(
            "  {:<9} -> {:<8} queued: {:>3}  cycles started: {}",
            state.meal(),
            state.name(),
            state.dishes_queued(),
            statistics.cycles
        );
    }
    println!();

    println!("Couple:\n{}\n", simulate(&couple, 7));
    println!("Family:\n{}\n", simulate(&family, 7));

    println!("Rejected household:");
    let rejected = HouseholdBuilder::new()
        .capacity(0)
        .utilization(1.5)
        .build();
    if let Err(error) = rejected {
        println!("  {error}");
    }

    println!("\n=== Example Complete ===");
}
