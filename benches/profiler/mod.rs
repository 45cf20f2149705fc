// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion tuned from the environment.
///
/// Flamegraphs are only recorded when `BENCH_PROFILE=1`; set `PROFILE_FREQ` to change the
/// sampling rate.
pub fn criterion() -> Criterion {
    let sample_size = env_parse("BENCH_SAMPLE_SIZE", 50usize).clamp(10, 200);
    let warmup_secs = env_parse("BENCH_WARMUP_SECS", 2u64).clamp(1, 60);
    let measurement_secs = env_parse("BENCH_MEASUREMENT_SECS", 5u64).clamp(1, 120);

    let criterion = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs));

    if env_parse("BENCH_PROFILE", 0u8) == 0 {
        return criterion;
    }
    let frequency = env_parse("PROFILE_FREQ", 100i32).clamp(1, 1000);
    criterion.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
