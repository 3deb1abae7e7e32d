//! smallrun — smallest example for the rust_lift elevator simulation.
//!
//! Runs the classic small configuration: a 6-floor building, 2 elevators of
//! capacity 3, one random arrival per round, short-sighted movement.  Prints
//! per-round events through an observer and dumps the run statistics as JSON.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the engine's own round logging.

use anyhow::Result;

use lift_arrivals::RandomArrivals;
use lift_building::Passenger;
use lift_core::{Direction, ElevatorId, Floor, Round, SimConfig};
use lift_policy::ShortSighted;
use lift_sim::{RunStats, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:         u32 = 6;
const NUM_ELEVATORS:      u32 = 2;
const ELEVATOR_CAPACITY:  u32 = 3;
const ARRIVALS_PER_ROUND: u32 = 1;
const NUM_ROUNDS:         u64 = 15;
const SEED:               u64 = 42;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every passenger event and each round's fleet movement.
struct EventPrinter;

impl SimObserver for EventPrinter {
    fn on_arrivals(&mut self, round: Round, arrivals: &[(Floor, Passenger)]) {
        for (floor, passenger) in arrivals {
            println!(
                "{round}: {} arrives at {floor} heading for {}",
                passenger.id, passenger.target
            );
        }
    }

    fn on_board(&mut self, round: Round, elevator: ElevatorId, passenger: &Passenger) {
        println!("{round}: {} boards {elevator}", passenger.id);
    }

    fn on_disembark(&mut self, round: Round, elevator: ElevatorId, passenger: &Passenger) {
        println!(
            "{round}: {} leaves {elevator} after {} rounds (anger {})",
            passenger.id,
            passenger.wait_rounds(),
            passenger.anger_level(),
        );
    }

    fn on_moves(&mut self, round: Round, directions: &[Direction]) {
        let moves: Vec<String> = directions.iter().map(|d| d.to_string()).collect();
        println!("{round}: fleet moves [{}]", moves.join(", "));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== smallrun — rust_lift elevator simulation ===");
    println!(
        "Floors: {NUM_FLOORS}  |  Elevators: {NUM_ELEVATORS}  |  Rounds: {NUM_ROUNDS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Assemble the configuration.
    let config = SimConfig {
        num_floors:        NUM_FLOORS,
        num_elevators:     NUM_ELEVATORS,
        elevator_capacity: ELEVATOR_CAPACITY,
        num_rounds:        NUM_ROUNDS,
        seed:              SEED,
    };

    // 2. Pick the demand source and the movement policy.
    let arrivals = RandomArrivals::new(config.top_floor(), Some(ARRIVALS_PER_ROUND));

    // 3. Build and run.
    let mut sim = SimBuilder::new(config, arrivals, ShortSighted).build()?;
    let stats = sim.run(&mut EventPrinter)?;

    // 4. Summary.
    println!();
    print_summary(&stats);
    println!();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn print_summary(stats: &RunStats) {
    println!("{:<22} {}", "Rounds", stats.rounds);
    println!("{:<22} {}", "Passengers generated", stats.total_passengers);
    println!("{:<22} {}", "Trips completed", stats.completed);
    match &stats.wait {
        Some(wait) => {
            println!("{:<22} {}", "Min wait", wait.min);
            println!("{:<22} {}", "Max wait", wait.max);
            println!("{:<22} {:.2}", "Avg wait", wait.avg);
        }
        None => println!("{:<22} (no completed trips)", "Wait summary"),
    }
}
