use frame_physics::*;
use std::thread;

#[test]
fn simulations_are_sync_and_send() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<BouncingBall>();
    assert_sync_send::<ParticleFountain>();
    assert_sync_send::<SharedConfig>();
    assert_sync_send::<FrameDriver<BouncingBall>>();
}

#[test]
fn host_thread_updates_speed_for_the_frame_loop() {
    let config = SharedConfig::new(SimulationConfig::bouncing_ball());
    let mut ball = BouncingBall::new(config.clone(), Container::new(400.0));

    let host = {
        let config = config.clone();
        thread::spawn(move || config.set_speed(3.0))
    };
    host.join().unwrap();

    ball.advance_tick();
    assert_eq!(ball.velocity(), 1.5);
}

#[test]
fn many_writers_leave_a_valid_config() {
    let config = SharedConfig::new(SimulationConfig::bouncing_ball());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let config = config.clone();
            thread::spawn(move || {
                for step in 0..100 {
                    let speed = if (i + step) % 3 == 0 { -1.0 } else { 0.5 + i as f64 };
                    config.set_speed(speed);
                    let snapshot = config.current();
                    assert!(snapshot.speed_multiplier > 0.0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(config.current().speed_multiplier > 0.0);
}

#[test]
fn fountains_can_run_on_worker_threads() {
    let bounds = Bounds::new(360.0, 640.0);
    let config = SharedConfig::new(SimulationConfig::particle_fountain());

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let config = config.clone();
            thread::spawn(move || {
                let emitter = EmitterConfig::centered(bounds);
                let mut fountain = ParticleFountain::seeded(64, config, bounds, emitter, seed);
                for _ in 0..200 {
                    fountain.advance_tick();
                }
                fountain.stats().ticks
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 200);
    }
}
