use std::thread;
use std::time::Duration;

use super::clock::Clock;

/// A per-frame callback receiving the frame delta in seconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Something that calls registered callbacks once before every repaint.
pub trait FrameHost {
    /// Adds `callback` to the set called on every frame.
    fn register_frame_callback(&mut self, callback: FrameCallback);
}

/// Drives callbacks with a fixed delta; for headless runs and tests.
pub struct FixedStepHost {
    delta: f64,
    callbacks: Vec<FrameCallback>,
}

impl FixedStepHost {
    #[must_use]
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            callbacks: Vec::new(),
        }
    }

    /// Runs `frames` frames.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            for callback in &mut self.callbacks {
                callback(self.delta);
            }
        }
    }
}

impl FrameHost for FixedStepHost {
    fn register_frame_callback(&mut self, callback: FrameCallback) {
        self.callbacks.push(callback);
    }
}

/// Drives callbacks with wall-clock deltas at a target frame interval.
pub struct RealtimeHost {
    clock: Clock,
    frame_interval: Duration,
    callbacks: Vec<FrameCallback>,
}

impl RealtimeHost {
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            clock: Clock::new(),
            frame_interval,
            callbacks: Vec::new(),
        }
    }

    /// Runs `frames` frames, sleeping one interval before each.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            thread::sleep(self.frame_interval);
            let delta = self.clock.delta();
            for callback in &mut self.callbacks {
                callback(delta);
            }
        }
    }
}

impl FrameHost for RealtimeHost {
    fn register_frame_callback(&mut self, callback: FrameCallback) {
        self.callbacks.push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fixed_step_calls_every_callback_each_frame() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut host = FixedStepHost::new(0.5);
        for tag in 0..2 {
            let seen = Rc::clone(&seen);
            host.register_frame_callback(Box::new(move |dt| seen.borrow_mut().push((tag, dt))));
        }
        host.run(3);
        assert_eq!(seen.borrow().len(), 6);
        assert!(seen.borrow().iter().all(|&(_, dt)| (dt - 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn realtime_deltas_are_positive() {
        let total = Rc::new(RefCell::new(0.0));
        let mut host = RealtimeHost::new(Duration::from_millis(1));
        let sink = Rc::clone(&total);
        host.register_frame_callback(Box::new(move |dt| *sink.borrow_mut() += dt));
        host.run(3);
        assert!(*total.borrow() >= 0.003);
    }
}
