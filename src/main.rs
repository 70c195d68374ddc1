use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use cipher_expedition::game::{
    letter_index, DayClock, Feedback, GameConfig, GameSession, UNKNOWN_GLYPH,
};

#[derive(Parser)]
#[command(name = "cipher_expedition")]
#[command(about = "Substitution-cipher puzzle with scout expeditions, played headless")]
struct Cli {
    /// Number of in-game days to play
    #[arg(long, default_value = "5")]
    days: u32,

    /// Time delta per frame in seconds
    #[arg(long, default_value = "0.1")]
    delta: f32,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game config (phrases, pins, economy)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,cipher_expedition=info"),
    )
    .init();

    let cli = Cli::parse();
    if !(cli.delta.is_finite() && cli.delta > 0.0) {
        bail!("--delta must be positive, got {}", cli.delta);
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let session = match cli.seed {
        Some(seed) => GameSession::from_config_with_seed(config, seed),
        None => GameSession::from_config(config),
    };

    run_headless(session, cli.days, cli.delta)
}

/// Play the game without a UI: send every team out, then let an
/// auto-player crack one letter per day.
fn run_headless(mut session: GameSession, days: u32, delta: f32) -> Result<()> {
    println!("Running cipher expedition in headless mode...");
    println!("Days: {}, Delta: {}s", days, delta);
    println!();

    println!("Initial state:");
    session.print_summary();
    println!();

    session.start_clock();
    send_teams(&mut session)?;

    let mut map_clock = DayClock::mirror();
    let mut frames: u64 = 0;
    while session.clock().day() < days {
        frames += 1;
        let report = session.tick(delta);
        map_clock.mirror_from(session.clock());

        let Some(report) = report else {
            continue;
        };

        println!(
            "--- Day {} ({} frames, upkeep {}) ---",
            report.day, frames, report.upkeep_paid
        );
        for reward in &report.rewards {
            println!("  {}", reward);
        }

        autoplay_day(&mut session)?;
        if !report.returned.is_empty() {
            send_teams(&mut session)?;
        }
        session.print_summary();
        println!();
    }

    info!("=== SESSION COMPLETE ===");
    info!("Days played: {}", map_clock.day());
    info!("Phrases solved: {}", session.phrases_solved());
    info!("Letters filled: {}", session.guesses().filled_count());
    info!("{}", session.ledger().summary());

    println!("=== Final State ===");
    session.print_summary();
    Ok(())
}

/// Split the scouts at home across every free pin, one shovel each
fn send_teams(session: &mut GameSession) -> Result<()> {
    let free: Vec<_> = session
        .scheduler()
        .pins()
        .iter()
        .filter(|pin| pin.is_available())
        .map(|pin| pin.id)
        .collect();

    for pin in free {
        if session.ledger().scouts == 0 {
            break;
        }
        if !session.open_pin(pin)? {
            continue;
        }
        session.adjust_scouts(true);
        session.adjust_shovels(true);
        if let Some(feedback) = session.send_team()? {
            println!("  {}", feedback);
        }
    }
    Ok(())
}

/// Fill in one hidden letter of the current phrase, and check the answer
/// once nothing is hidden
fn autoplay_day(session: &mut GameSession) -> Result<()> {
    let hidden = session
        .ciphertext()
        .chars()
        .zip(session.partial_text().chars())
        .find(|&(_, shown)| shown == UNKNOWN_GLYPH)
        .map(|(scrambled, _)| scrambled);

    if let Some(scrambled) = hidden {
        let plain = session.cipher().decrypt_letter(scrambled);
        if let Some(slot) = letter_index(scrambled) {
            session.record_guess(slot, &plain.to_string())?;
        }
    }

    if !session.queue().is_complete() && !session.partial_text().contains(UNKNOWN_GLYPH) {
        let feedback = session.check_solution();
        println!("  {}", feedback);
        if feedback == Feedback::Solved && session.guesses().is_fully_resolved() {
            println!("  {}", session.request_new_cipher());
        }
    }
    Ok(())
}
