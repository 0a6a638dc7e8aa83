use std::env;
use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, Criterion};

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
use criterion_perf_events::Perf;
#[cfg(all(feature = "perf-counters", target_os = "linux"))]
use perfcnt::linux::{HardwareEventType as Hardware, PerfCounterBuilderLinux as Builder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

/// Brute force gets the light group; its largest sizes take seconds per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupWeight {
    Light,
    Heavy,
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub tier: BenchTier,
    pub seed: u64,
}

impl BenchConfig {
    pub fn from_env() -> Self {
        let tier = match env::var("NEARPAIR_BENCH_TIER").as_deref() {
            Ok("full") => BenchTier::Full,
            _ => BenchTier::Quick,
        };
        let seed = env::var("NEARPAIR_BENCH_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0xC0FFEE);
        Self { tier, seed }
    }

    /// Point counts to benchmark for the given weight.
    pub fn sizes(&self, weight: GroupWeight) -> &'static [usize] {
        match (self.tier, weight) {
            (BenchTier::Quick, GroupWeight::Light) => &[1_000, 4_000],
            (BenchTier::Full, GroupWeight::Light) => &[1_000, 4_000, 10_000],
            (BenchTier::Quick, GroupWeight::Heavy) => &[1_000, 10_000, 100_000],
            (BenchTier::Full, GroupWeight::Heavy) => &[1_000, 10_000, 100_000, 1_000_000],
        }
    }
}

pub fn configure_group<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    cfg: &BenchConfig,
    weight: GroupWeight,
) {
    let (sample_size, measurement) = match (cfg.tier, weight) {
        (BenchTier::Quick, GroupWeight::Light) => (10, Duration::from_secs(3)),
        (BenchTier::Full, GroupWeight::Light) => (20, Duration::from_secs(10)),
        (BenchTier::Quick, GroupWeight::Heavy) => (20, Duration::from_secs(3)),
        (BenchTier::Full, GroupWeight::Heavy) => (30, Duration::from_secs(5)),
    };
    group.sample_size(sample_size);
    group.measurement_time(measurement);
}

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
pub type BenchCriterion = Criterion<Perf>;

#[cfg(not(all(feature = "perf-counters", target_os = "linux")))]
pub type BenchCriterion = Criterion;

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
pub fn bench_criterion() -> BenchCriterion {
    let perf = Perf::new(Builder::from_hardware_event(Hardware::CpuCycles));
    Criterion::default()
        .with_measurement(perf)
        .configure_from_args()
}

#[cfg(not(all(feature = "perf-counters", target_os = "linux")))]
pub fn bench_criterion() -> BenchCriterion {
    Criterion::default().configure_from_args()
}
