use std::thread;
use std::time::{Duration, Instant};

pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    thread_name: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(tick_rate_ms: u32, measure_fps: bool) -> IntervalTimer {
        let cur_thread = thread::current();
        let thread_name = cur_thread.name().unwrap_or("unnamed");

        IntervalTimer {
            interval: Self::interval_for(tick_rate_ms),
            last_tick: Instant::now(),
            thread_name: thread_name.to_string(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    fn interval_for(tick_rate_ms: u32) -> Duration {
        Duration::from_millis(tick_rate_ms.max(1).into())
    }

    #[cfg(test)]
    fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the tick rate, taking effect from the next tick on.
    pub fn set_tick_rate(&mut self, tick_rate_ms: u32) {
        let interval = Self::interval_for(tick_rate_ms);
        if interval != self.interval {
            log::debug!("{} tick rate now {} ms", self.thread_name, tick_rate_ms);
            self.interval = interval;
        }
    }

    pub fn sleep_until_next_tick(&mut self) {
        if self.measure_fps {
            self.update_fps();
        }

        let now = Instant::now();
        let next_tick = if self.last_tick + self.interval > now {
            self.last_tick + self.interval
        } else {
            log::debug!("{} skipped a frame", self.thread_name);
            now + self.interval
        };

        thread::sleep(next_tick.saturating_duration_since(Instant::now()));
        self.last_tick = next_tick
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::info!("{} FPS: {}", self.thread_name, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeps_roughly_one_interval() {
        let mut timer = IntervalTimer::new(20, false);
        let start = Instant::now();
        timer.sleep_until_next_tick();
        timer.sleep_until_next_tick();
        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[test]
    fn tick_rate_can_change() {
        let mut timer = IntervalTimer::new(20, false);
        assert_eq!(timer.interval(), Duration::from_millis(20));
        timer.set_tick_rate(200);
        assert_eq!(timer.interval(), Duration::from_millis(200));
        timer.set_tick_rate(0);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }

    #[test]
    fn fps_counts_frames_within_a_second() {
        let mut timer = IntervalTimer::new(20, true);
        timer.update_fps();
        timer.update_fps();
        assert_eq!(timer.frames, 2);
    }

    #[test]
    fn fps_counter_restarts_after_a_second() {
        let mut timer = IntervalTimer::new(1, true);
        timer.frames = 41;
        timer.last_fps_print = Instant::now() - Duration::from_millis(1500);
        timer.update_fps();
        assert_eq!(timer.frames, 0);
        assert!(timer.last_fps_print.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn measured_ticks_feed_the_fps_counter() {
        let mut timer = IntervalTimer::new(1, true);
        timer.sleep_until_next_tick();
        timer.sleep_until_next_tick();
        assert_eq!(timer.frames, 2);

        let mut quiet = IntervalTimer::new(1, false);
        quiet.sleep_until_next_tick();
        assert_eq!(quiet.frames, 0);
    }
}
