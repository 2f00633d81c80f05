//! Timer pre-configuration
//!
//! Constants consumed by timer drivers. Nothing in this module touches the
//! timer hardware.

/// CPU clock frequency in Hz
pub const F_CPU: u32 = 8_000_000;

/// Number of hardware timers in use
pub const NUMBER_OF_TIMERS_USED: u8 = 1;

/// Timer configuration handed to a timer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// CPU clock frequency in Hz
    pub cpu_hz: u32,
    /// Number of hardware timers in use
    pub timers_used: u8,
}

impl TimerConfig {
    /// Board defaults
    pub const DEFAULT: Self = Self {
        cpu_hz: F_CPU,
        timers_used: NUMBER_OF_TIMERS_USED,
    };

    /// Duration of one timer tick in nanoseconds for a given prescaler
    ///
    /// Returns `None` for a zero clock, or when the tick does not fit in a
    /// `u32`.
    pub fn tick_ns(&self, prescaler: u16) -> Option<u32> {
        let period = u64::from(prescaler) * 1_000_000_000;
        let ns = period.checked_div(u64::from(self.cpu_hz))?;
        u32::try_from(ns).ok()
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let config = TimerConfig::default();
        assert_eq!(config.cpu_hz, 8_000_000);
        assert_eq!(config.timers_used, 1);

        // 8 MHz: 125 ns per cycle
        assert_eq!(config.tick_ns(1), Some(125));
        assert_eq!(config.tick_ns(8), Some(1_000));
        assert_eq!(config.tick_ns(1024), Some(128_000));
    }

    #[test]
    fn test_tick_duration_out_of_range() {
        let stopped = TimerConfig {
            cpu_hz: 0,
            ..TimerConfig::DEFAULT
        };
        assert_eq!(stopped.tick_ns(8), None);

        // 1024 ticks of a 1 Hz clock overflow u32 nanoseconds
        let slow = TimerConfig {
            cpu_hz: 1,
            ..TimerConfig::DEFAULT
        };
        assert_eq!(slow.tick_ns(1), Some(1_000_000_000));
        assert_eq!(slow.tick_ns(1024), None);
    }
}
