//! Frame timing from host-supplied timestamps.

/// Converts host timestamps into elapsed seconds since construction.
///
/// The host supplies monotonic milliseconds (`performance.now()` in a
/// browser); the clock itself never reads a time source, so two ticks
/// with the same timestamp always report the same elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    origin_ms: f64,
}

impl FrameClock {
    /// Captures the clock origin: the timestamp at construction.
    pub fn new(origin_ms: f64) -> Self {
        Self { origin_ms }
    }

    /// Elapsed seconds between the origin and `now_ms`.
    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.origin_ms) / 1000.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_at_the_origin() {
        let clock = FrameClock::new(1_000.0);
        assert_eq!(clock.elapsed_secs(1_000.0), 0.0);
    }

    #[test]
    fn elapsed_counts_whole_seconds() {
        let clock = FrameClock::new(2_500.0);
        assert_eq!(clock.elapsed_secs(3_500.0), 1.0);
        assert_eq!(clock.elapsed_secs(12_500.0), 10.0);
    }

    #[test]
    fn ticks_one_second_apart_differ_by_exactly_one() {
        let clock = FrameClock::new(5_000.0);
        let first = clock.elapsed_secs(5_000.0);
        let second = clock.elapsed_secs(6_000.0);
        assert_eq!(
            second - first,
            1.0,
            "1000 ms between ticks must read as 1.0 s"
        );
    }

    #[test]
    fn elapsed_resolves_fractional_milliseconds() {
        let clock = FrameClock::new(0.0);
        let elapsed = clock.elapsed_secs(16.25);
        assert!(
            (elapsed - 0.016_25).abs() < 1e-9,
            "expected ~0.01625 s, got {elapsed}"
        );
    }

    #[test]
    fn origin_offset_does_not_leak_into_elapsed() {
        let early = FrameClock::new(0.0);
        let late = FrameClock::new(987_654.0);
        assert_eq!(early.elapsed_secs(250.0), late.elapsed_secs(987_904.0));
    }
}
