use alien_invasion::settings::Settings;
use alien_invasion::ship::Ship;

#[test]
fn ship_spawns_mid_left() {
    let settings = Settings::default();
    let ship = Ship::new(&settings);
    assert_eq!(ship.rect.left(), 0.0);
    assert_eq!(ship.rect.center_y(), settings.screen_h / 2.0);
    assert_eq!(ship.y, 380.0);
    assert!(ship.arsenal.is_empty());
}

#[test]
fn intent_flags_move_the_ship() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);

    ship.moving_down = true;
    ship.update(&settings);
    assert_eq!(ship.y, 385.0);

    ship.moving_down = false;
    ship.moving_up = true;
    ship.update(&settings);
    ship.update(&settings);
    assert_eq!(ship.y, 375.0);
    assert_eq!(ship.rect.y, 375.0);
}

#[test]
fn both_flags_cancel_out() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);
    ship.moving_down = true;
    ship.moving_up = true;
    ship.update(&settings);
    assert_eq!(ship.y, 380.0);
}

#[test]
fn step_past_bottom_is_refused() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);
    ship.y = 758.0; // bottom at 798, one more step would reach 803
    ship.moving_down = true;
    ship.update(&settings);
    assert_eq!(ship.y, 758.0);
}

#[test]
fn step_past_top_is_refused() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);
    ship.y = 3.0;
    ship.moving_up = true;
    ship.update(&settings);
    assert_eq!(ship.y, 3.0);
}

#[test]
fn ship_never_leaves_the_screen() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);

    ship.moving_down = true;
    for _ in 0..500 {
        ship.update(&settings);
        assert!(ship.rect.bottom() <= settings.screen_h);
    }
    ship.moving_down = false;
    ship.moving_up = true;
    for _ in 0..500 {
        ship.update(&settings);
        assert!(ship.rect.top() >= 0.0);
    }
}

#[test]
fn center_returns_to_spawn() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);
    ship.moving_down = true;
    for _ in 0..20 {
        ship.update(&settings);
    }
    ship.center(&settings);
    assert_eq!(ship.y, 380.0);
    assert_eq!(ship.rect.y, 380.0);
    assert!(ship.moving_down);
}

#[test]
fn fire_launches_from_right_edge_and_update_advances_it() {
    let settings = Settings::default();
    let mut ship = Ship::new(&settings);
    assert!(ship.fire(&settings));

    let launched = ship.arsenal.projectiles()[0].rect;
    assert_eq!(launched.right(), ship.rect.right());

    ship.update(&settings);
    let moved = ship.arsenal.projectiles()[0].rect;
    assert_eq!(moved.x, launched.x + settings.bullet_speed);
}
