use battleships::{AiPlayer, Battleships, GameConfig, NoDelay, Outcome, Player, PlayerManager, Session};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <seed> [turns-per-player]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig::default();
    if let Some(turns) = args.get(2) {
        config.max_turns_per_player = turns.parse()?;
    }
    config.validate()?;

    let players: Vec<Box<dyn Player>> = vec![
        Box::new(AiPlayer::new(config.battlefield("player1")?)),
        Box::new(AiPlayer::new(config.battlefield("player2")?)),
    ];
    let manager = PlayerManager::new(players, config.max_turns_per_player)?;
    let mut session = Session::new(
        Battleships::new(manager),
        SmallRng::seed_from_u64(seed),
        NoDelay,
    );
    let outcome = session.play_round().await?;

    let winner = match &outcome {
        Outcome::Winner(id) => Some(id.clone()),
        Outcome::Draw => None,
    };
    let result = json!({
        "seed": seed,
        "turns": session.game().manager().turns(),
        "winner": winner,
        "outcome": outcome,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
