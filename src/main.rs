use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_connect_four::ai::AgentKind;
use minimax_connect_four::arena::play_game;
use minimax_connect_four::config::{AppConfig, FirstPlayer};
use minimax_connect_four::game::{Board, GameOutcome, Player};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against search agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Agent playing Red (X)
    #[arg(long, value_enum)]
    red: Option<AgentKind>,

    /// Agent playing Yellow (O)
    #[arg(long, value_enum)]
    yellow: Option<AgentKind>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Seed for random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Override the minimax depth cap
    #[arg(long)]
    minimax_depth: Option<usize>,

    /// Override the alpha-beta depth cap
    #[arg(long)]
    alpha_beta_depth: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.red {
        config.game.red = kind;
    }
    if let Some(kind) = cli.yellow {
        config.game.yellow = kind;
    }
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(depth) = cli.minimax_depth {
        config.search.minimax_depth = depth;
    }
    if let Some(depth) = cli.alpha_beta_depth {
        config.search.alpha_beta_depth = depth;
    }
    config.validate().context("validating configuration")?;

    let mut rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let first = config.game.first_player.resolve(&mut rng);
    let yellow_seed = config.game.seed.map(|s| s.wrapping_add(1));

    let mut red = config.game.red.build(&config.search, config.game.seed);
    let mut yellow = config.game.yellow.build(&config.search, yellow_seed);

    println!(
        "{} (X) vs {} (O). {} moves first.\n",
        red.name(),
        yellow.name(),
        first.name()
    );
    println!("{}\n", Board::new());

    let record = play_game(red.as_mut(), yellow.as_mut(), first, |state, player, column| {
        println!("{} plays column {}\n", player.name(), column + 1);
        println!("{}\n", state.board());
    })
    .context("playing game")?;

    match record.outcome {
        GameOutcome::Winner(Player::Red) => println!("{} (X) wins!", red.name()),
        GameOutcome::Winner(Player::Yellow) => println!("{} (O) wins!", yellow.name()),
        GameOutcome::Draw => println!("Draw."),
    }
    println!("Game over after {} moves.", record.len());

    Ok(())
}
