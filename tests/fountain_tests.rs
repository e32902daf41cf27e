use frame_physics::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const BOUNDS: Bounds = Bounds {
    width: 360.0,
    height: 640.0,
};

fn seeded_fountain(count: usize, seed: u64) -> ParticleFountain {
    ParticleFountain::seeded(
        count,
        SharedConfig::new(SimulationConfig::particle_fountain()),
        BOUNDS,
        EmitterConfig::centered(BOUNDS),
        seed,
    )
}

#[test]
fn out_of_bounds_particle_is_relaunched_from_the_emitter() {
    let config = SimulationConfig::particle_fountain();
    let emitter = EmitterConfig::centered(BOUNDS);
    let mut rng = SmallRng::seed_from_u64(2024);

    for _ in 0..500 {
        let particle = Particle::new(
            DVec2::new(17.0, BOUNDS.height - emitter.respawn_margin + 1.0),
            DVec2::new(-2.0, 9.0),
        );

        let next = step_particle(&particle, &config, &BOUNDS, &emitter, &mut rng);

        assert_eq!(next.position, emitter.spawn_point);
        assert!(next.velocity.y <= -emitter.vy_max);
        assert!(next.velocity.y >= -emitter.vy_max - emitter.jitter);
        assert!(next.velocity.x >= -emitter.vx_max && next.velocity.x <= emitter.vx_max);
    }
}

#[test]
fn fountain_keeps_recycling_particles() {
    let mut fountain = seeded_fountain(15, 7);
    let spawn_point = fountain.emitter().spawn_point;
    let line = fountain.emitter().respawn_line(&BOUNDS);

    for p in fountain.particles() {
        assert_eq!(p.position, spawn_point);
        assert!(p.velocity.y < 0.0);
    }

    for _ in 0..2_000 {
        fountain.advance_tick();
        for p in fountain.particles() {
            assert!(p.position.y.is_finite() && p.position.x.is_finite());
            // A particle may overshoot the line by at most one tick of fall.
            assert!(p.position.y <= line + 64.0);
        }
    }

    assert_eq!(fountain.stats().ticks, 2_000);
    assert!(fountain.stats().respawns >= 15);
}

#[test]
fn same_seed_gives_the_same_fountain() {
    let mut a = seeded_fountain(32, 99);
    let mut b = seeded_fountain(32, 99);

    for _ in 0..600 {
        a.advance_tick();
        b.advance_tick();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn parallel_pass_matches_sequential_pass() {
    let mut sequential = seeded_fountain(256, 5);
    let mut parallel = seeded_fountain(256, 5);
    parallel.set_parallel_enabled(true);
    assert_eq!(parallel.parallel_enabled(), cfg!(feature = "parallel"));

    for _ in 0..800 {
        sequential.advance_tick();
        parallel.advance_tick();
    }

    assert_eq!(sequential.particles(), parallel.particles());
    assert_eq!(sequential.stats().respawns, parallel.stats().respawns);
}

#[test]
fn speed_scales_launch_velocity() {
    let config = SharedConfig::new(SimulationConfig::particle_fountain());
    config.set_speed(2.0);
    let emitter = EmitterConfig::centered(BOUNDS);
    let mut fountain = ParticleFountain::seeded(50, config, BOUNDS, emitter, 3);

    for p in fountain.particles() {
        assert!(p.velocity.y <= -2.0 * emitter.vy_max);
        assert!(p.velocity.y >= -2.0 * (emitter.vy_max + emitter.jitter));
        assert!(p.velocity.x.abs() <= 2.0 * emitter.vx_max);
    }

    fountain.config().set_speed(1.0);
    fountain.reset();
    for p in fountain.particles() {
        assert!(p.velocity.y <= -emitter.vy_max);
        assert!(p.velocity.y >= -(emitter.vy_max + emitter.jitter));
    }
}

#[test]
fn paused_fountain_does_not_move() {
    let mut fountain = seeded_fountain(10, 11);
    for _ in 0..5 {
        fountain.advance_tick();
    }
    let before = fountain.particles().to_vec();

    fountain.pause();
    for _ in 0..5 {
        fountain.advance_tick();
    }
    assert_eq!(fountain.particles(), before.as_slice());
    assert_eq!(fountain.stats().ticks, 5);
}

#[test]
fn custom_random_source_is_used() {
    let emitter = EmitterConfig::centered(BOUNDS);
    let fountain = ParticleFountain::with_rng(
        4,
        SharedConfig::new(SimulationConfig::particle_fountain()),
        BOUNDS,
        emitter,
        rand::rngs::mock::StepRng::new(0, 0),
    );

    // A generator stuck at zero always draws the lower end of each range.
    for p in fountain.particles() {
        assert_eq!(p.velocity.x, -emitter.vx_max);
        assert_eq!(p.velocity.y, -emitter.vy_max);
    }
}

#[test]
fn positions_follow_the_particles() {
    let mut fountain = seeded_fountain(8, 1);
    fountain.advance_tick();

    let positions: Vec<DVec2> = fountain.positions().collect();
    assert_eq!(positions.len(), fountain.len());
    for (pos, p) in positions.iter().zip(fountain.particles()) {
        assert_eq!(*pos, p.position);
    }
}

#[test]
fn shrinking_the_bounds_moves_a_centred_emitter() {
    let mut fountain = seeded_fountain(15, 21);
    for _ in 0..30 {
        fountain.advance_tick();
    }

    let short = Bounds::new(360.0, 300.0);
    fountain.set_bounds(short);
    let emitter = *fountain.emitter();
    let line = emitter.respawn_line(&short);
    assert_eq!(emitter.spawn_point, DVec2::new(180.0, 200.0));
    assert!(emitter.spawn_point.y <= line);

    let respawns_before = fountain.stats().respawns;
    let mut left_the_emitter = 0;
    for _ in 0..100 {
        fountain.advance_tick();
        left_the_emitter += fountain
            .positions()
            .filter(|p| *p != emitter.spawn_point)
            .count();
        for p in fountain.particles() {
            assert!(p.position.y <= line + 64.0);
        }
    }

    // A stale spawn point below the line would recycle every particle on
    // every tick and none would ever leave the emitter.
    assert!(fountain.stats().respawns - respawns_before < 100);
    assert!(left_the_emitter > 1_000);
}

#[test]
fn placed_emitter_ignores_layout_changes() {
    let emitter = EmitterConfig {
        spawn_point: DVec2::new(40.0, 500.0),
        ..EmitterConfig::centered(BOUNDS)
    };
    let mut fountain = ParticleFountain::seeded(
        4,
        SharedConfig::new(SimulationConfig::particle_fountain()),
        BOUNDS,
        emitter,
        8,
    );

    fountain.set_bounds(Bounds::new(200.0, 700.0));
    assert_eq!(fountain.emitter().spawn_point, DVec2::new(40.0, 500.0));
}
