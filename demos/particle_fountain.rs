use frame_physics::*;

fn main() {
    let bounds = Bounds::new(360.0, 640.0);
    let mut fountain = ParticleFountain::new(bounds);
    fountain.set_parallel_enabled(true);
    let speed = fountain.config().clone();

    let mut driver = FrameDriver::new(fountain);
    driver.run(60, &mut NullSink);

    speed.set_speed(2.0);
    driver.run(60, &mut |fountain: &ParticleFountain| {
        let highest = fountain
            .positions()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        println!("highest particle at y = {highest:.1}");
    });

    let stats = driver.simulation().stats();
    println!("{stats}");
    stats.report();
}
