/*
 * Fixed Timestep Driver
 *
 * The host calls advance() once per frame with the wall-clock time since the last
 * frame. The driver turns that into a whole number of fixed-size ticks and leaves
 * the remainder in an accumulator for the next frame. Ticks and drawing happen on
 * the same thread, so input applied before advance() is seen by every tick of that frame.
 *
 * A long stall (window drag, debugger) would otherwise queue up hundreds of ticks;
 * anything beyond max_steps_per_frame is dropped.
 */

use std::time::Duration;

pub struct FixedStepDriver {
    step: Duration,
    accumulator: Duration,
    max_steps_per_frame: usize,
    pub ticks_last_frame: usize,
    pub dropped_ticks: u64,
}

impl FixedStepDriver {
    pub fn new(tick_rate: f64, max_steps_per_frame: usize) -> Self {
        Self {
            step: Duration::from_secs_f64(1.0 / tick_rate).max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
            max_steps_per_frame: max_steps_per_frame.max(1),
            ticks_last_frame: 0,
            dropped_ticks: 0,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn dt(&self) -> f64 {
        self.step.as_secs_f64()
    }

    // Run as many whole ticks as the elapsed time allows; returns how many ran
    pub fn advance<F>(&mut self, elapsed: Duration, mut tick: F) -> usize
    where
        F: FnMut(f64),
    {
        self.accumulator += elapsed;

        let dt = self.dt();
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_steps_per_frame {
            tick(dt);
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop whatever backlog is left over a full step
        if self.accumulator >= self.step {
            let dropped = (self.accumulator.as_nanos() / self.step.as_nanos()) as u64;
            self.dropped_ticks += dropped;
            self.accumulator = Duration::from_nanos(
                (self.accumulator.as_nanos() % self.step.as_nanos()) as u64,
            );
            tracing::warn!(dropped, "simulation fell behind, dropping ticks");
        }

        self.ticks_last_frame = ticks;
        ticks
    }

    // Fraction of a step left in the accumulator, in [0, 1)
    pub fn interpolation_alpha(&self) -> f64 {
        (self.accumulator.as_secs_f64() / self.dt()).clamp(0.0, 1.0)
    }

    // Forget pending time, e.g. after unpausing
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
