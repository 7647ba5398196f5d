use battleships::{
    Battlefield, GameConfig, MissileLauncher, Shape, Ship, ShipSpec, ShootMessage,
    StandardMissileLauncher, Vector,
};
use rand::{rngs::SmallRng, SeedableRng};

fn hand_built(width: usize, height: usize, ships: Vec<Ship>) -> Battlefield {
    let mut battlefield = Battlefield::new("target", Shape::new(width, height).unwrap(), Vec::new());
    for ship in ships {
        battlefield.add_ship(ship).unwrap();
    }
    battlefield
}

fn ship(coords: &[(usize, usize)], sink_in_one_hit: bool) -> Ship {
    Ship::new(coords.iter().copied().map(Vector::from), sink_in_one_hit).unwrap()
}

#[test]
fn shoot_message_thresholds() {
    let expected = [
        (0, ShootMessage::Hit),
        (1, ShootMessage::Hot),
        (2, ShootMessage::Hot),
        (3, ShootMessage::Warm),
        (4, ShootMessage::Warm),
        (5, ShootMessage::Cold),
        (40, ShootMessage::Cold),
    ];
    for (distance, message) in expected {
        assert_eq!(ShootMessage::from_distance(distance), message, "distance {}", distance);
    }
    assert_eq!(ShootMessage::Hit.to_string(), "Hit!");
    assert_eq!(ShootMessage::Cold.to_string(), "Cold");
}

#[test]
fn single_cell_ship_sinks_on_first_hit() {
    let config = GameConfig {
        width: 3,
        height: 3,
        ..GameConfig::default()
    }
    .with_uniform_ships(1, ShipSpec::new(1, true));
    let mut battlefield = config.battlefield("p").unwrap();
    battlefield.create_ships(&mut SmallRng::seed_from_u64(5)).unwrap();
    let position = battlefield.ships()[0].positions().next().unwrap();

    let response = StandardMissileLauncher.shoot_at(&mut battlefield, position);
    assert_eq!(response.distance(), 0);
    assert!(response.sunk());
    assert_eq!(response.ship(), Some(0));
    assert_eq!(response.message(), ShootMessage::Hit);
    assert_eq!(battlefield.enemy_coordinates(), &[position]);
    assert!(battlefield.all_sunk());
}

#[test]
fn two_part_ship_needs_both_hits() {
    let mut battlefield = hand_built(4, 4, vec![ship(&[(1, 1), (1, 2)], false)]);
    let first = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(1, 1));
    assert_eq!((first.distance(), first.sunk()), (0, false));
    let second = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(1, 2));
    assert_eq!((second.distance(), second.sunk()), (0, true));
    assert!(battlefield.all_sunk());
}

#[test]
fn miss_reports_closest_ship() {
    let mut battlefield = hand_built(
        5,
        5,
        vec![ship(&[(0, 0), (0, 1)], false), ship(&[(2, 0)], true)],
    );
    let response = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(3, 3));
    assert_eq!(response.distance(), 4);
    assert_eq!(response.ship(), Some(1));
    assert!(!response.sunk());
    assert_eq!(response.message(), ShootMessage::Warm);
}

#[test]
fn sunk_ships_are_ignored() {
    let mut battlefield = hand_built(
        5,
        5,
        vec![ship(&[(0, 0), (0, 1)], false), ship(&[(2, 0)], true)],
    );
    let sink = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(2, 0));
    assert!(sink.sunk());

    let response = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(3, 0));
    assert_eq!(response.distance(), 3);
    assert_eq!(response.ship(), Some(0));
}

#[test]
fn ties_report_first_ship() {
    let mut battlefield = hand_built(5, 1, vec![ship(&[(0, 0)], true), ship(&[(4, 0)], true)]);
    let response = StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(2, 0));
    assert_eq!(response.distance(), 2);
    assert_eq!(response.ship(), Some(0));
}

#[test]
#[should_panic(expected = "no surviving ships")]
fn shooting_a_dead_battlefield_panics() {
    let mut battlefield = hand_built(3, 3, Vec::new());
    StandardMissileLauncher.shoot_at(&mut battlefield, Vector::new(0, 0));
}
