use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Serialize, Deserialize};

use crate::errors::ReportError;

/// Timing summary for one profiled name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    pub calls: u64,
    pub total_ms: f64,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Share of the report's total time, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub total_ms: f64,
    pub entries: Vec<ProfileEntry>,
}

impl ProfileReport {
    pub fn entry(&self, name: &str) -> Option<&ProfileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Writes `dir/file_name` as pretty JSON, creating `dir` if needed.
    /// Returns the path written.
    pub fn save_json<P: AsRef<Path>>(&self, dir: P, file_name: &str) -> Result<PathBuf, ReportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|source| ReportError::Io { path: dir.to_path_buf(), source })?;

        let path = dir.join(file_name);
        let file = std::fs::File::create(&path)
            .map_err(|source| ReportError::Io { path: path.clone(), source })?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|source| ReportError::Json { path: path.clone(), source })?;
        writer
            .flush()
            .map_err(|source| ReportError::Io { path: path.clone(), source })?;

        info!("profile report written to {}", path.display());
        Ok(path)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ProfileReport, ReportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|source| ReportError::Json { path: path.to_path_buf(), source })
    }
}

impl std::fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total time: {:.3} ms", self.total_ms)?;
        writeln!(f, "{:>8} {:>12} {:>12} {:>8}  {}", "calls", "total ms", "per call", "% time", "name")?;
        for e in &self.entries {
            writeln!(
                f,
                "{:>8} {:>12.3} {:>12.3} {:>8.1}  {}",
                e.calls, e.total_ms, e.mean_ms, e.percent, e.name
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_is_reported() {
        let report = ProfileReport { total_ms: 0.0, entries: vec![] };
        let err = report.save_json("/dev", "full").unwrap_err();
        assert!(matches!(err, ReportError::Io { ref path, .. } if path.ends_with("full")));
    }
}
