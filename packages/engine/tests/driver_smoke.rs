use grainfall_engine::{Coordinate, SandSimulation, SimulationConfig, StepDriver, StepEvent};

fn floor_sim() -> SandSimulation {
    let config = SimulationConfig::default().with_spawn_point(Coordinate::new(5, 0));
    SandSimulation::from_input("0,10 -> 10,10", config).unwrap()
}

#[test]
fn driver_steps_only_after_the_interval_elapses() {
    let mut sim = floor_sim();
    let mut driver = StepDriver::new(0.5);

    assert_eq!(driver.tick(&mut sim, 0.2), None);
    assert_eq!(driver.tick(&mut sim, 0.5), None);
    assert_eq!(driver.tick(&mut sim, 0.6), Some(StepEvent::Moved(Coordinate::new(5, 1))));
    assert_eq!(driver.tick(&mut sim, 1.0), None);
    assert_eq!(driver.tick(&mut sim, 1.2), Some(StepEvent::Moved(Coordinate::new(5, 2))));

    assert_eq!(sim.stats().steps(), 2);
}

#[test]
fn driver_reads_interval_from_config() {
    let sim = floor_sim();
    let driver = StepDriver::from_config(sim.config());
    assert_eq!(driver.interval_secs(), 0.0001);
}

#[test]
fn zero_interval_steps_on_every_advancing_tick() {
    let mut sim = floor_sim();
    let mut driver = StepDriver::new(0.0);
    let mut stepped = 0;
    for i in 1..=10 {
        if driver.tick(&mut sim, i as f64 * 0.01).is_some() {
            stepped += 1;
        }
    }
    assert_eq!(stepped, 10);
    assert_eq!(sim.current_grain_position(), Some(Coordinate::new(5, 0)));
    assert_eq!(sim.stats().grains_settled(), 1);
}

#[test]
fn restart_resets_the_time_base() {
    let mut sim = floor_sim();
    let mut driver = StepDriver::new(1.0);
    assert!(driver.tick(&mut sim, 5.0).is_some());
    assert!(driver.tick(&mut sim, 5.5).is_none());
    driver.restart();
    assert!(driver.tick(&mut sim, 1.5).is_some());
}
