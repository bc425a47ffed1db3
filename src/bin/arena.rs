use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use minimax_connect_four::ai::AgentKind;
use minimax_connect_four::arena::run_series;
use minimax_connect_four::config::AppConfig;

/// Pit two automated agents against each other over many games.
#[derive(Parser)]
#[command(name = "arena", about = "Run a Connect Four series between two agents")]
struct Cli {
    /// First agent
    #[arg(long, value_enum, default_value = "alpha-beta")]
    a: AgentKind,

    /// Second agent
    #[arg(long, value_enum, default_value = "minimax")]
    b: AgentKind,

    /// Number of games; seats alternate every game
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.a.is_interactive() || cli.b.is_interactive() {
        bail!("arena only runs automated agents (got {:?} vs {:?})", cli.a, cli.b);
    }
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let seed = cli.seed.or(config.game.seed);

    let mut a = cli.a.build(&config.search, seed);
    let mut b = cli.b.build(&config.search, seed.map(|s| s.wrapping_add(1)));

    println!(
        "Running {} games: {} vs {}",
        cli.games,
        a.name(),
        b.name()
    );
    println!("-------------------------------------------");

    let stats = run_series(a.as_mut(), b.as_mut(), cli.games).context("running series")?;

    println!("-------------------------------------------");
    println!(
        "{}: {} wins ({:.1}%) | {}: {} wins ({:.1}%) | draws: {} ({:.1}%) | avg_len: {:.1}",
        a.name(),
        stats.a_wins,
        stats.a_win_rate() * 100.0,
        b.name(),
        stats.b_wins,
        stats.b_win_rate() * 100.0,
        stats.draws,
        stats.draw_rate() * 100.0,
        stats.average_game_length(),
    );

    Ok(())
}
