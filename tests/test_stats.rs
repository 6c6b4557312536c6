use alien_invasion::settings::Settings;
use alien_invasion::stats::GameStats;

#[test]
fn new_stats_start_at_level_one() {
    let stats = GameStats::new(&Settings::default(), 900);
    assert_eq!(stats.ships_left, 3);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.max_score, 0);
    assert_eq!(stats.hi_score, 900);
}

#[test]
fn kills_score_points_per_enemy() {
    let settings = Settings::default();
    let mut stats = GameStats::new(&settings, 0);

    assert!(stats.record_kills(2, &settings));
    assert_eq!(stats.score, 100);
    assert_eq!(stats.max_score, 100);
    assert_eq!(stats.hi_score, 100);
}

#[test]
fn high_score_only_moves_when_beaten() {
    let settings = Settings::default();
    let mut stats = GameStats::new(&settings, 1000);

    assert!(!stats.record_kills(1, &settings));
    assert_eq!(stats.hi_score, 1000);
}

#[test]
fn losing_the_last_ship_ends_the_game() {
    let mut stats = GameStats::new(&Settings::default(), 0);
    assert!(!stats.lose_ship());
    assert!(!stats.lose_ship());
    assert!(stats.lose_ship());
    assert_eq!(stats.ships_left, 0);
    // Never underflows
    assert!(stats.lose_ship());
    assert_eq!(stats.ships_left, 0);
}

#[test]
fn reset_keeps_max_and_high_scores() {
    let settings = Settings::default();
    let mut stats = GameStats::new(&settings, 0);
    stats.record_kills(4, &settings);
    stats.advance_level();
    stats.lose_ship();

    stats.reset(&settings);

    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, 3);
    assert_eq!(stats.max_score, 200);
    assert_eq!(stats.hi_score, 200);
}
