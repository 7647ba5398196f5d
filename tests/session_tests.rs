use std::io::Cursor;
use std::time::Duration;

use battleships::{
    ui::ConsoleDisplay, AiPlayer, Battleships, Delay, GameConfig, GameState, HumanPlayer, NoDelay,
    Outcome, Pacer, Player, PlayerManager, Session, ShipSpec,
};
use rand::{rngs::SmallRng, SeedableRng};

#[tokio::test]
async fn ai_session_stops_at_round_limit() {
    let config = GameConfig::default();
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(AiPlayer::new(config.battlefield("alpha").unwrap())),
        Box::new(AiPlayer::new(config.battlefield("bravo").unwrap())),
    ];
    let manager = PlayerManager::new(players, config.max_turns_per_player).unwrap();
    let mut session = Session::new(Battleships::new(manager), SmallRng::seed_from_u64(4), NoDelay)
        .with_max_rounds(2);

    let outcomes = session.run().await.unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(session.game().state(), GameState::Exit);
}

#[tokio::test]
async fn human_declining_ends_the_session() {
    // On a single cell whoever shoots first wins. If the computer goes
    // first the stray "a0" is rejected by the play-again prompt.
    let config = GameConfig {
        width: 1,
        height: 1,
        ..GameConfig::default()
    }
    .with_uniform_ships(1, ShipSpec::new(1, true));
    let console = ConsoleDisplay::new(Cursor::new(b"a0\nn\n".to_vec()), Vec::new());
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(HumanPlayer::new(config.battlefield("you").unwrap(), Box::new(console))),
        Box::new(AiPlayer::new(config.battlefield("computer").unwrap())),
    ];
    let manager = PlayerManager::new(players, config.max_turns_per_player).unwrap();
    let mut session = Session::new(Battleships::new(manager), SmallRng::seed_from_u64(8), NoDelay);

    let outcomes = session.run().await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(&outcomes[0], Outcome::Winner(_)));
    assert_eq!(session.game().state(), GameState::Exit);
}

#[tokio::test]
async fn delay_pacer_sleeps() {
    let start = tokio::time::Instant::now();
    Delay(Duration::from_millis(5)).pause().await;
    assert!(start.elapsed() >= Duration::from_millis(5));
    NoDelay.pause().await;
}
