use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::profile::report::{ProfileEntry, ProfileReport};

#[derive(Debug, Clone, Copy)]
struct CallStats {
    calls: u64,
    total: Duration,
    min: Duration,
    max: Duration,
}

/// Wall-clock call timer keyed by name.
///
/// Each `record` call runs the closure once and folds its duration into
/// the running stats for that name.
#[derive(Debug, Default)]
pub struct Profiler {
    stats: HashMap<String, CallStats>,
}

impl Profiler {
    pub fn new() -> Profiler {
        Profiler::default()
    }

    /// Times `f` under `name` and passes its return value through.
    pub fn record<T, F>(&mut self, name: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let t_start = Instant::now();
        let out = f();
        let elapsed = t_start.elapsed();
        debug!("{name}: {:.3} ms", elapsed.as_secs_f64() * 1e3);
        self.record_duration(name, elapsed);
        out
    }

    pub fn record_duration(&mut self, name: &str, elapsed: Duration) {
        self.stats
            .entry(name.to_string())
            .and_modify(|s| {
                s.calls += 1;
                s.total += elapsed;
                s.min = s.min.min(elapsed);
                s.max = s.max.max(elapsed);
            })
            .or_insert(CallStats { calls: 1, total: elapsed, min: elapsed, max: elapsed });
    }

    pub fn calls(&self, name: &str) -> u64 {
        self.stats.get(name).map_or(0, |s| s.calls)
    }

    /// Snapshot sorted by total time, largest first; ties by name.
    pub fn report(&self) -> ProfileReport {
        let total: Duration = self.stats.values().map(|s| s.total).sum();
        let total_ms = to_ms(total);

        let mut entries: Vec<ProfileEntry> = self.stats
            .iter()
            .map(|(name, s)| {
                let entry_ms = to_ms(s.total);
                ProfileEntry {
                    name: name.clone(),
                    calls: s.calls,
                    total_ms: entry_ms,
                    mean_ms: entry_ms / s.calls as f64,
                    min_ms: to_ms(s.min),
                    max_ms: to_ms(s.max),
                    percent: if total_ms > 0.0 { entry_ms / total_ms * 100.0 } else { 0.0 },
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.total_ms
                .partial_cmp(&a.total_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        ProfileReport { total_ms, entries }
    }
}

fn to_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}
