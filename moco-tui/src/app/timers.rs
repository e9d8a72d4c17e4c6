use std::time::{Duration, Instant};

/// A periodic trigger driven by the event loop's clock readings.
///
/// Nothing fires once [`RepeatingTimer::stop`] has been called.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_fire: Option<Instant>,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_fire = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_fire = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Returns true once per elapsed period and re-arms relative to `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(due) if now >= due => {
                self.next_fire = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// A single deadline, cleared when it fires.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Arming again replaces the previous deadline.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_timer_fires_each_period() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::new(Duration::from_secs(10));
        timer.start(start);

        assert!(!timer.fire_if_due(start + Duration::from_secs(9)));
        assert!(timer.fire_if_due(start + Duration::from_secs(10)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(15)));
        assert!(timer.fire_if_due(start + Duration::from_secs(20)));
    }

    #[test]
    fn stopped_timer_never_fires() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::new(Duration::from_secs(10));
        timer.start(start);
        timer.stop();

        assert!(!timer.is_running());
        assert!(!timer.fire_if_due(start + Duration::from_secs(3600)));
    }

    #[test]
    fn one_shot_fires_once() {
        let start = Instant::now();
        let mut timer = OneShotTimer::default();
        timer.arm(start, Duration::from_secs(2));

        assert!(!timer.fire_if_due(start + Duration::from_millis(1999)));
        assert!(timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(3)));
    }

    #[test]
    fn rearming_one_shot_extends_deadline() {
        let start = Instant::now();
        let mut timer = OneShotTimer::default();
        timer.arm(start, Duration::from_secs(2));
        timer.arm(start + Duration::from_secs(1), Duration::from_secs(2));

        assert!(!timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(timer.fire_if_due(start + Duration::from_secs(3)));
    }
}
