/// Countdown for a single round, advanced one second per [`RoundTimer::update`].
///
/// The timer does not read the clock; the caller is expected to call
/// `update` from a fixed-rate tick source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTimer {
    initial_time: u32,
    time_left: u32,
    is_running: bool,
}

impl RoundTimer {
    pub fn new(initial_time: u32) -> Self {
        Self {
            initial_time,
            time_left: initial_time,
            is_running: false,
        }
    }

    pub fn update(&mut self) {
        if self.is_running && self.time_left > 0 {
            self.time_left -= 1;
        }
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Stops the timer and restores the initial time.
    pub fn reset(&mut self) {
        self.stop();
        self.time_left = self.initial_time;
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    pub fn is_time_up(&self) -> bool {
        self.time_left == 0
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}

/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_does_not_tick() {
        let mut timer = RoundTimer::new(10);
        timer.update();
        assert_eq!(timer.time_left(), 10);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_running_timer_counts_down_to_zero() {
        let mut timer = RoundTimer::new(2);
        timer.start();
        timer.update();
        assert_eq!(timer.time_left(), 1);
        assert!(!timer.is_time_up());
        timer.update();
        timer.update();
        assert_eq!(timer.time_left(), 0);
        assert!(timer.is_time_up());
        assert!(timer.is_running());
    }

    #[test]
    fn test_stop_pauses_countdown() {
        let mut timer = RoundTimer::new(5);
        timer.start();
        timer.update();
        timer.stop();
        timer.update();
        assert_eq!(timer.time_left(), 4);
    }

    #[test]
    fn test_reset_restores_and_stops() {
        let mut timer = RoundTimer::new(5);
        timer.start();
        timer.update();
        timer.reset();
        assert_eq!(timer.time_left(), 5);
        assert_eq!(timer.initial_time(), 5);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_zero_timer_is_up_immediately() {
        assert!(RoundTimer::new(0).is_time_up());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(361), "06:01");
        assert_eq!(format_time(6000), "100:00");
    }
}
