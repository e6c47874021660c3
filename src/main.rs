//! Headless demo driver: load a module, hatch a pet and run it for a
//! number of simulated days with a simple caretaker loop.

use std::path::PathBuf;

use clap::Parser;

use vpet_core::core::clock::{Clock, FixedClock};
use vpet_core::core::config::SimConfig;
use vpet_core::core::error::PetError;
use vpet_core::core::types::FoodKind;
use vpet_core::modules::Module;
use vpet_core::pet::{Pet, PetEvent};
use vpet_core::registry::GlobalRegistry;
use vpet_core::simulation::Roster;

#[derive(Parser, Debug)]
#[command(name = "vpet", about = "Run a virtual pet headlessly")]
struct Args {
    /// Module TOML file to load
    #[arg(default_value = "modules/dmc.toml")]
    module: PathBuf,

    /// Species to hatch (defaults to the module's first egg)
    #[arg(long)]
    species: Option<String>,

    /// Simulated days to run
    #[arg(long, default_value_t = 3)]
    days: u32,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frames per simulated second
    #[arg(long, default_value_t = 30)]
    ticks_per_second: u32,

    /// Let the pet fend for itself (no caretaker loop)
    #[arg(long)]
    neglect: bool,
}

fn main() -> vpet_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let module = Module::load(&args.module)?;

    let species = match &args.species {
        Some(name) => name.clone(),
        None => module
            .species
            .iter()
            .find(|s| s.stage == 0)
            .map(|s| s.name.clone())
            .ok_or_else(|| PetError::InvalidModule("module has no egg species".into()))?,
    };

    let sim = SimConfig {
        ticks_per_second: args.ticks_per_second,
        ticks_per_day: 24 * 3600 * args.ticks_per_second as u64,
        ..SimConfig::default()
    };
    sim.validate().map_err(PetError::InvalidModule)?;

    let mut registry = GlobalRegistry::new();
    let mut roster = Roster::new();
    roster.add(Pet::hatchling(module, &species, sim.clone(), args.seed)?);

    let clock = FixedClock::at(8, 0);
    let ticks_per_minute = sim.ticks_per_minute();
    let total_minutes = args.days as u64 * 24 * 60;

    for minute in 0..total_minutes {
        for _ in 0..ticks_per_minute {
            for event in roster.update(&clock, &mut registry) {
                report(&event);
            }
        }
        clock.advance_minutes(1);

        if !args.neglect {
            for pet in roster.pets_mut() {
                caretake(pet, &clock);
            }
        }
        if roster.is_empty() {
            tracing::info!(minute, "roster empty, stopping");
            break;
        }
    }

    for pet in roster.pets() {
        tracing::info!(
            species = %pet.species.name,
            stage = pet.species.stage,
            age_days = pet.age_days,
            mistakes = pet.mistakes,
            battles = pet.battles,
            wins = pet.wins,
            "final state"
        );
    }
    tracing::info!(discovered = registry.discovered_count(), "run complete");
    Ok(())
}

/// Minimal caretaker: feed, medicate, clean and respect bedtime
fn caretake(pet: &mut Pet, clock: &dyn Clock) {
    let mut events = Vec::new();
    if pet.hunger == 0 {
        pet.set_eating(FoodKind::Meat, pet.species.stomach, &mut events);
    }
    if pet.strength == 0 {
        pet.set_eating(FoodKind::Protein, 2, &mut events);
    }
    if pet.sick_doses > 0 {
        pet.set_eating(FoodKind::Medicine, 1, &mut events);
    }
    if pet.poops > 0 {
        pet.clean_poop();
    }
    if pet.should_sleep(clock) {
        pet.nap(clock);
    }
    if pet.dying {
        pet.death_save_press();
    }
    for event in events {
        report(&event);
    }
}

fn report(event: &PetEvent) {
    match event {
        PetEvent::Evolved { from, to } => tracing::info!(%from, %to, "evolved"),
        PetEvent::Died { cause } => tracing::warn!(?cause, "pet died"),
        PetEvent::DeathSaveStarted { save } => tracing::warn!(?save, "death save armed"),
        other => tracing::debug!(?other, "event"),
    }
}
