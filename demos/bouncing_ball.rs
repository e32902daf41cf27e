use frame_physics::*;

fn main() {
    let mut driver = FrameDriver::new(BouncingBall::with_height(400.0));

    // Two seconds at 60 Hz.
    driver.run(120, &mut |ball: &BouncingBall| {
        println!("y = {:7.2}  v = {:6.2}  {:?}", ball.position(), ball.velocity(), ball.state());
    });

    // Tap to restart.
    driver.simulation_mut().reset();
    driver.run(10, &mut NullSink);

    let ball = driver.simulation();
    println!("after reset: y = {:.2}", ball.position());
    println!("{}", ball.stats());
    ball.stats().report();
}
