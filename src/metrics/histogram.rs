use hdrhistogram::Histogram;
use serde::Serialize;

const MICROS_PER_MILLI: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyPercentiles {
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p99_ms: f64,
}

/// Latency distribution with microsecond resolution.
#[derive(Debug)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, String> {
        let hist = Histogram::<u64>::new(3)
            .map_err(|err| format!("Failed to create histogram: {}", err))?;
        Ok(Self { hist })
    }

    /// Build a histogram from millisecond latencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created or a value cannot be recorded.
    pub fn from_latencies(latencies_ms: &[f64]) -> Result<Self, String> {
        let mut histogram = Self::new()?;
        for latency in latencies_ms {
            histogram.record(*latency)?;
        }
        Ok(histogram)
    }

    /// Record a latency value in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record(&mut self, latency_ms: f64) -> Result<(), String> {
        let micros = (latency_ms * MICROS_PER_MILLI).round();
        // Saturating float-to-int cast; NaN lands on 0 and is lifted to 1.
        let value = (micros as u64).max(1);
        self.hist
            .record(value)
            .map_err(|err| format!("Failed to record latency: {}", err))
    }

    #[must_use]
    pub fn percentiles(&self) -> Option<LatencyPercentiles> {
        if self.count() == 0 {
            return None;
        }
        let at = |quantile: f64| self.hist.value_at_quantile(quantile) as f64 / MICROS_PER_MILLI;
        Some(LatencyPercentiles {
            p50_ms: at(0.5),
            p90_ms: at(0.9),
            p99_ms: at(0.99),
        })
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }
}
