//! Fixed-interval pacing of request initiations

use std::time::Duration;

/// Paces request initiations at a fixed interval
///
/// The scheduler waits `1 / rate` seconds before starting each task of a
/// batch. The ceiling is approximate: pacing bounds initiations, while
/// earlier requests may still be in flight when the next one starts.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Option<Duration>,
}

impl Pacer {
    /// Create a pacer for the given rate in requests per second
    ///
    /// Non-positive rates disable pacing; configuration validation rejects
    /// them before a run starts.
    pub fn new(rate: f64) -> Self {
        let interval = (rate > 0.0).then(|| Duration::from_secs_f64(1.0 / rate));
        Self { interval }
    }

    /// Wait one pacing interval
    ///
    /// Returns immediately when pacing is disabled.
    pub async fn pause(&self) {
        if let Some(interval) = self.interval {
            tokio::time::sleep(interval).await;
        }
    }

    /// Whether pacing is active
    pub fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    /// The configured delay between initiations
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_pacer_zero_rate_disabled() {
        let pacer = Pacer::new(0.0);
        assert!(!pacer.is_enabled());
        assert!(pacer.interval().is_none());
    }

    #[test]
    fn test_pacer_negative_rate_disabled() {
        let pacer = Pacer::new(-5.0);
        assert!(!pacer.is_enabled());
    }

    #[test]
    fn test_pacer_interval() {
        let pacer = Pacer::new(10.0);
        assert!(pacer.is_enabled());
        assert_eq!(pacer.interval(), Some(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_pause_disabled_returns_immediately() {
        let pacer = Pacer::new(0.0);
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_pacing_lower_bound() {
        // N initiations at rate R take at least (N-1)/R wall-clock seconds.
        let pacer = Pacer::new(100.0);
        let start = Instant::now();
        for _ in 0..5 {
            pacer.pause().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
