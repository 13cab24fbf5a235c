use approx::assert_relative_eq;
use cupping_brew::{BrewError, BrewRatio, Phase, Stopwatch, coffee_for, format, water_for};

/// Drives the stopwatch the way a one-second UI interval would.
fn run(timer: &mut Stopwatch, seconds: u64) {
    for _ in 0..seconds {
        timer.tick();
    }
}

#[test]
fn pour_over_session() {
    let brew = BrewRatio::from_coffee(18.0, 16.0).unwrap();
    assert_relative_eq!(brew.water_ml(), 288.0);
    assert!(brew.is_recommended());

    let mut timer = Stopwatch::new();
    timer.start();
    run(&mut timer, 45);
    assert_eq!(timer.to_string(), "00:45");

    // Pause while pouring the second stage; the interval keeps firing.
    timer.pause();
    run(&mut timer, 10);
    assert_eq!(timer.elapsed_seconds(), 45);
    assert_eq!(timer.phase(), Phase::Paused);

    timer.start();
    run(&mut timer, 150);
    assert_eq!(format(timer.elapsed_seconds()), "03:15");

    timer.reset();
    assert_eq!(timer.state().elapsed_seconds, 0);
    assert!(!timer.state().running);
}

#[test]
fn calculator_round_trips_between_views() {
    let water = water_for(20.0, 15.0).unwrap();
    assert_relative_eq!(water, 300.0);
    assert_relative_eq!(coffee_for(water, 15.0).unwrap(), 20.0);

    let brew = BrewRatio::from_amounts(20.0, 300.0).unwrap();
    assert_eq!(brew.to_string(), "1:15");

    let resized = brew.with_water(500.0).unwrap();
    assert_relative_eq!(resized.coffee_g(), 500.0 / 15.0);
    assert_eq!(resized.to_string(), "1:15");
}

#[test]
fn calculator_rejects_bad_input() {
    assert!(matches!(
        coffee_for(300.0, 0.0),
        Err(BrewError::InvalidInput { name: "ratio", .. })
    ));
    assert!(water_for(-1.0, 15.0).is_err());
    assert!(water_for(f64::NAN, 15.0).is_err());
}
