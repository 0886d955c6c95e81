use std::time::Instant;

/// Wall-clock state for the render loop: the continuously increasing elapsed
/// time that drives the pulse color, plus a rolling frametime average for
/// debug logging. No pacing; the loop runs as fast as presentation allows.
pub struct FrameClock {
    started: Instant,
    last_frame: Instant,
    frame_count: u32,
    accum_time: f32,
}

const REPORT_INTERVAL: u32 = 100;

impl FrameClock {
    pub fn start() -> Self {
        let now = Instant::now();
        FrameClock {
            started: now,
            last_frame: now,
            frame_count: 0,
            accum_time: 0.0,
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Records one frame; yields the average frametime in milliseconds once
    /// every `REPORT_INTERVAL` frames.
    pub fn tick(&mut self) -> Option<f32> {
        self.accum_time += self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
        self.frame_count += 1;

        (self.frame_count == REPORT_INTERVAL).then(|| {
            let average_frametime = self.accum_time * 1000.0 / self.frame_count as f32;
            self.accum_time = 0.0;
            self.frame_count = 0;
            average_frametime
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn tick_reports_every_interval() {
        let mut clock = FrameClock::start();
        for _ in 0..REPORT_INTERVAL - 1 {
            assert!(clock.tick().is_none());
        }
        let avg = clock.tick().expect("interval boundary must report");
        assert!(avg >= 0.0);
        // counter resets, next interval starts clean
        assert!(clock.tick().is_none());
    }
}
