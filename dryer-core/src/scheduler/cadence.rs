//! Elapsed-time gates

use crate::config::CadenceConfig;

/// A gate that opens once per `period_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval {
    period_ms: u32,
    last_ms: u32,
}

impl Interval {
    /// Create a gate anchored at `now_ms`
    pub const fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: now_ms,
        }
    }

    /// Number of whole periods elapsed since the gate last opened
    ///
    /// The anchor advances by whole periods only, so a late poll does not
    /// lose the remainder. Wrapping-safe.
    pub fn poll(&mut self, now_ms: u32) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }
        let periods = now_ms.wrapping_sub(self.last_ms) / self.period_ms;
        self.last_ms = self
            .last_ms
            .wrapping_add(periods.wrapping_mul(self.period_ms));
        periods
    }
}

/// Which gates opened on one loop pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Due {
    /// Poll buttons and drain serial input
    pub input: bool,
    /// Apply presets and regulate
    pub control: bool,
    /// Whole seconds elapsed (dry timer, telemetry)
    pub seconds: u32,
    /// Poll the humidity sensor
    pub humidity: bool,
}

/// The four gates of the control loop
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    input: Interval,
    control: Interval,
    second: Interval,
    humidity: Interval,
}

impl Cadence {
    pub fn new(config: &CadenceConfig, now_ms: u32) -> Self {
        Self {
            input: Interval::new(config.input_ms, now_ms),
            control: Interval::new(config.control_ms, now_ms),
            second: Interval::new(config.second_ms, now_ms),
            humidity: Interval::new(config.humidity_ms, now_ms),
        }
    }

    /// Evaluate all gates at `now_ms`
    pub fn poll(&mut self, now_ms: u32) -> Due {
        Due {
            input: self.input.poll(now_ms) > 0,
            control: self.control.poll(now_ms) > 0,
            seconds: self.second.poll(now_ms),
            humidity: self.humidity.poll(now_ms) > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_counts_periods() {
        let mut gate = Interval::new(1000, 0);
        assert_eq!(gate.poll(999), 0);
        assert_eq!(gate.poll(1000), 1);
        assert_eq!(gate.poll(1500), 0);
        // Late poll keeps the remainder
        assert_eq!(gate.poll(3200), 2);
        assert_eq!(gate.poll(4000), 1);
    }

    #[test]
    fn test_interval_wraps() {
        let mut gate = Interval::new(100, u32::MAX - 50);
        assert_eq!(gate.poll(49), 1);
        assert_eq!(gate.poll(149), 1);
    }

    #[test]
    fn test_zero_period_never_opens() {
        let mut gate = Interval::new(0, 0);
        assert_eq!(gate.poll(10_000), 0);
    }

    #[test]
    fn test_cadence_gates() {
        let mut cadence = Cadence::new(&CadenceConfig::default(), 0);

        let due = cadence.poll(10);
        assert!(due.input);
        assert!(!due.control);

        let due = cadence.poll(100);
        assert!(due.control);
        assert_eq!(due.seconds, 0);

        let due = cadence.poll(2000);
        assert_eq!(due.seconds, 2);
        assert!(!due.humidity);

        let due = cadence.poll(30_000);
        assert!(due.humidity);
        assert_eq!(due.seconds, 28);
    }
}
