use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use battleships::{
    Battlefield, Battleships, ConfigError, GameConfig, GameError, GameState, Outcome, Player,
    PlayerManager, ShipSpec, ShootResponse, Vector,
};
use rand::{rngs::SmallRng, SeedableRng};

type Log = Rc<RefCell<Vec<String>>>;

/// Fires at a fixed list of coordinates and records what it is told.
struct Scripted {
    battlefield: Battlefield,
    targets: VecDeque<Vector>,
    log: Log,
    dead: bool,
    again: bool,
}

impl Scripted {
    fn new(battlefield: Battlefield, targets: &[Vector]) -> (Self, Log) {
        let log = Log::default();
        let player = Self {
            battlefield,
            targets: targets.iter().copied().collect(),
            log: log.clone(),
            dead: false,
            again: true,
        };
        (player, log)
    }
}

impl Player for Scripted {
    fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _target: &Battlefield) -> anyhow::Result<Vector> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("out of targets"))
    }

    fn handle_shooter_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        self.log.borrow_mut().push(format!("shot {}", response.distance()));
        Ok(())
    }

    fn handle_targeted_response(&mut self, response: &ShootResponse) -> anyhow::Result<()> {
        if response.is_hit() {
            self.dead = self.battlefield.all_sunk();
        }
        self.log.borrow_mut().push(format!("targeted {}", response.distance()));
        Ok(())
    }

    fn reset(&mut self) {
        self.battlefield.reset();
        self.dead = false;
        self.log.borrow_mut().push("reset".into());
    }

    fn display_message(&mut self, message: &str) -> anyhow::Result<()> {
        self.log.borrow_mut().push(message.into());
        Ok(())
    }

    fn display_battlefields(&mut self, targeted: &Battlefield, reveal: bool) -> anyhow::Result<()> {
        self.log
            .borrow_mut()
            .push(format!("board {} reveal={}", targeted.id(), reveal));
        Ok(())
    }

    fn prompt_play_again(&mut self) -> anyhow::Result<bool> {
        Ok(self.again)
    }
}

fn config(width: usize, height: usize) -> GameConfig {
    GameConfig {
        width,
        height,
        ..GameConfig::default()
    }
    .with_uniform_ships(1, ShipSpec::new(1, true))
}

fn scripted_players(
    config: &GameConfig,
    count: usize,
    targets: &[Vector],
) -> (Vec<Box<dyn Player>>, Vec<Log>) {
    let mut players: Vec<Box<dyn Player>> = Vec::new();
    let mut logs = Vec::new();
    for i in 0..count {
        let (player, log) = Scripted::new(config.battlefield(format!("p{}", i)).unwrap(), targets);
        players.push(Box::new(player));
        logs.push(log);
    }
    (players, logs)
}

fn far_miss() -> ShootResponse {
    ShootResponse::new(Vector::new(0, 0), 3, false, Some(0))
}

#[test]
fn manager_needs_two_players_and_turns() {
    let config = config(3, 3);
    let (players, _) = scripted_players(&config, 1, &[]);
    assert!(matches!(
        PlayerManager::new(players, 5),
        Err(ConfigError::TooFewPlayers(1))
    ));
    let (players, _) = scripted_players(&config, 2, &[]);
    assert!(matches!(
        PlayerManager::new(players, 0),
        Err(ConfigError::ZeroTurns)
    ));
}

#[test]
fn turn_limit_ends_in_draw() {
    let config = config(3, 3);
    let (players, logs) = scripted_players(&config, 2, &[]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut manager = PlayerManager::new(players, 1).unwrap();
    manager.init(&mut rng).unwrap();
    manager.select_roles(&mut rng);

    assert_eq!(manager.end_turn(&far_miss()).unwrap(), GameState::Playing);
    assert_eq!(manager.end_turn(&far_miss()).unwrap(), GameState::GameOver);
    assert_eq!(manager.outcome(), Some(&Outcome::Draw));
    for log in &logs {
        let log = log.borrow();
        assert!(log.contains(&"No winners!".to_string()));
        assert!(log.iter().any(|line| line.ends_with("reveal=true")));
    }
}

#[test]
fn shooter_cycles_round_robin() {
    let config = config(3, 3);
    let (players, _) = scripted_players(&config, 3, &[]);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut manager = PlayerManager::new(players, 10).unwrap();
    manager.init(&mut rng).unwrap();

    let (first, target) = manager.select_roles(&mut rng);
    assert_eq!(target, (first + 1) % 3);
    for turn in 1..=6 {
        assert_eq!(manager.end_turn(&far_miss()).unwrap(), GameState::Playing);
        assert_eq!(
            manager.select_roles(&mut rng),
            ((first + turn) % 3, (first + turn + 1) % 3)
        );
    }
    assert_eq!(manager.turns(), 6);
}

#[test]
fn end_turn_without_roles_is_an_error() {
    let config = config(3, 3);
    let (players, _) = scripted_players(&config, 2, &[]);
    let mut manager = PlayerManager::new(players, 3).unwrap();
    let err = manager.end_turn(&far_miss()).unwrap_err();
    assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::NotPlaying));
}

#[test]
fn sinking_the_last_ship_wins() {
    // one cell, one ship: the first shot always wins
    let config = config(1, 1);
    let (players, logs) = scripted_players(&config, 2, &[Vector::new(0, 0)]);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Battleships::new(PlayerManager::new(players, 5).unwrap());
    game.begin_round(&mut rng).unwrap();
    assert_eq!(game.state(), GameState::Playing);

    let report = game.take_turn(&mut rng).unwrap();
    assert_eq!(report.state, GameState::GameOver);
    assert!(report.response.sunk());
    assert_eq!(game.outcome(), Some(&Outcome::Winner(report.shooter.clone())));

    let winner: usize = report.shooter[1..].parse().unwrap();
    let loser: usize = report.target[1..].parse().unwrap();
    assert_eq!(logs[winner].borrow()[0], "Your turn!");
    assert_eq!(logs[loser].borrow()[0], format!("{}'s turn", report.shooter));
    assert!(logs[winner].borrow().contains(&"You Win!".to_string()));
    assert!(logs[loser].borrow().contains(&"You Lose!".to_string()));
    assert!(game.manager().players()[loser].is_dead());
}

#[test]
fn invalid_target_is_rejected() {
    let config = config(3, 3);
    let (players, _) = scripted_players(&config, 2, &[Vector::new(5, 5)]);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Battleships::new(PlayerManager::new(players, 5).unwrap());
    game.begin_round(&mut rng).unwrap();

    let err = game.take_turn(&mut rng).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GameError>(),
        Some(GameError::InvalidTarget { coordinate, .. }) if *coordinate == Vector::new(5, 5)
    ));
    assert_eq!(game.manager().turns(), 0);
}

#[test]
fn turn_before_round_is_rejected() {
    let config = config(3, 3);
    let (players, _) = scripted_players(&config, 2, &[Vector::new(0, 0)]);
    let mut game = Battleships::new(PlayerManager::new(players, 5).unwrap());
    let err = game.take_turn(&mut SmallRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::NotPlaying));
}

#[test]
fn play_again_resets_everything() {
    let config = config(1, 1);
    let (players, logs) = scripted_players(&config, 2, &[Vector::new(0, 0)]);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Battleships::new(PlayerManager::new(players, 5).unwrap());
    game.play_round(&mut rng).unwrap();

    assert!(game.prompt_play_again().unwrap());
    assert_eq!(game.finish_round(true), GameState::Idle);
    assert_eq!(game.manager().turns(), 0);
    assert_eq!(game.outcome(), None);
    for (player, log) in game.manager().players().iter().zip(&logs) {
        assert!(player.battlefield().ships().is_empty());
        assert!(player.battlefield().enemy_coordinates().is_empty());
        assert!(!player.is_dead());
        assert_eq!(log.borrow().last().map(String::as_str), Some("reset"));
    }
    assert_eq!(game.finish_round(false), GameState::Exit);
}

#[test]
fn replay_needs_finish_round() {
    let config = config(1, 1);
    let (players, _) = scripted_players(&config, 2, &[Vector::new(0, 0), Vector::new(0, 0)]);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Battleships::new(PlayerManager::new(players, 5).unwrap());
    assert!(matches!(game.play_round(&mut rng).unwrap(), Outcome::Winner(_)));

    let err = game.play_round(&mut rng).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GameError>(),
        Some(&GameError::RoundNotFinished)
    );
    assert_eq!(game.state(), GameState::GameOver);

    game.finish_round(true);
    for player in game.manager().players() {
        assert!(player.battlefield().enemy_coordinates().is_empty());
    }
    assert!(matches!(game.play_round(&mut rng).unwrap(), Outcome::Winner(_)));
    assert_eq!(game.manager().turns(), 1);
}
