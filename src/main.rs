#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    init_logging,
    ui::{Console, ConsoleDisplay},
    AiPlayer, Battleships, Delay, GameConfig, HumanPlayer, Player, PlayerManager, Session,
    ShipSpec, DEFAULT_AI_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_TURNS_PER_PLAYER, DEFAULT_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, default_value = "Player")]
        name: String,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, default_value_t = 1, help = "Number of rounds to play")]
        rounds: usize,
    },
}

#[derive(Args)]
#[cfg(feature = "std")]
struct Setup {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    #[arg(
        long = "ship",
        help = "Ship to place, <length>[:one|:full]; repeat for more ships (default: 2 2)"
    )]
    ships: Vec<ShipSpec>,
    #[arg(long, default_value_t = DEFAULT_TURNS_PER_PLAYER, help = "Turns per player before a draw")]
    turns: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS)]
    ai_delay_ms: u64,
}

#[cfg(feature = "std")]
impl Setup {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig {
            width: self.width,
            height: self.height,
            max_turns_per_player: self.turns,
            ai_delay_ms: self.ai_delay_ms,
            ..GameConfig::default()
        };
        if !self.ships.is_empty() {
            config.ships = self.ships.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { setup, name } => {
            let config = setup.config()?;
            let mut console = ConsoleDisplay::stdio();
            console.display_title()?;
            let players: Vec<Box<dyn Player>> = vec![
                Box::new(HumanPlayer::new(
                    config.battlefield(name)?,
                    Box::new(console),
                )),
                Box::new(AiPlayer::new(config.battlefield("Computer")?)),
            ];
            let manager = PlayerManager::new(players, config.max_turns_per_player)?;
            let mut session = Session::new(
                Battleships::new(manager),
                setup.rng(),
                Delay::from_millis(config.ai_delay_ms),
            );
            session.run().await?;
            println!("Thanks for playing!");
        }
        Commands::Watch { setup, rounds } => {
            let config = setup.config()?;
            let players: Vec<Box<dyn Player>> = vec![
                Box::new(AiPlayer::new(config.battlefield("Alpha")?)),
                Box::new(AiPlayer::new(config.battlefield("Bravo")?)),
            ];
            let manager = PlayerManager::new(players, config.max_turns_per_player)?;
            let mut session = Session::new(
                Battleships::new(manager),
                setup.rng(),
                Delay::from_millis(config.ai_delay_ms),
            )
            .with_max_rounds(rounds);
            for (round, outcome) in session.run().await?.iter().enumerate() {
                println!("Round {}: {:?}", round + 1, outcome);
            }
        }
    }
    Ok(())
}
