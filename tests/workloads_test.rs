//! The profiled workloads and the JSON report they produce.

use profnet::profile::{ProfileReport, Profiler};
use profnet::train::TrainConfig;
use profnet::workloads::{matrix_chain, sqrt_sum, train_demo};

#[cfg(test)]
mod workload_tests {
    use super::*;

    #[test]
    fn default_matrix_chain_shape_and_determinism() {
        let a = matrix_chain(42).unwrap();
        assert_eq!(a.shape(), (100, 500));
        assert_eq!(a, matrix_chain(42).unwrap());
        assert_ne!(a, matrix_chain(43).unwrap());
    }

    #[test]
    fn train_demo_returns_final_loss() {
        let cfg = TrainConfig { samples: 64, ..TrainConfig::default() };
        let loss = train_demo(&cfg).unwrap().unwrap();
        assert!(loss.is_finite() && loss >= 0.0);

        let none = train_demo(&TrainConfig { epochs: 0, ..cfg }).unwrap();
        assert!(none.is_none());
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn profiled_run_saves_and_reloads() {
        let mut profiler = Profiler::new();
        for _ in 0..3 {
            profiler.record("sqrt_sum", || sqrt_sum(1_000));
        }
        profiler.record("train", || {
            train_demo(&TrainConfig { samples: 16, hidden: 4, ..TrainConfig::default() })
        })
        .unwrap();

        let report = profiler.report();
        assert_eq!(report.entry("sqrt_sum").unwrap().calls, 3);
        assert_eq!(report.entry("train").unwrap().calls, 1);
        if report.total_ms > 0.0 {
            let pct: f64 = report.entries.iter().map(|e| e.percent).sum();
            assert!((pct - 100.0).abs() < 1e-6);
        }

        let dir = std::env::temp_dir()
            .join(format!("profnet-report-{}", std::process::id()))
            .join("profiling_output");
        assert!(!dir.exists());
        let path = report.save_json(&dir, "profile.json").unwrap();
        assert!(dir.is_dir());
        let loaded = ProfileReport::load_json(&path).unwrap();
        let names = |r: &ProfileReport| -> Vec<(String, u64)> {
            r.entries.iter().map(|e| (e.name.clone(), e.calls)).collect()
        };
        assert_eq!(names(&loaded), names(&report));
        assert!((loaded.total_ms - report.total_ms).abs() < 1e-9);

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn report_renders_as_table() {
        let mut profiler = Profiler::new();
        profiler.record("matrix_chain", || ());
        let text = profiler.report().to_string();
        assert!(text.starts_with("Total time:"));
        assert!(text.contains("matrix_chain"));
    }
}
