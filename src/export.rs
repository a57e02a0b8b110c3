use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};
use crate::types::report::AnalysisResult;

/// Serializes the result to pretty JSON (two-space indent, UTF-8 kept as-is).
pub fn to_json(result: &AnalysisResult) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(result)?)
}

/// Writes the analysis result to `file_path`.
///
/// The document is serialized in full first, written to a sibling `.tmp` file
/// and renamed into place, so a reader never sees a partial file.
pub fn save_results(result: &AnalysisResult, file_path: &Path) -> Result<()> {
    let json = to_json(result)?;

    let write_err = |source: std::io::Error| AnalysisError::OutputWrite {
        path: file_path.to_path_buf(),
        source,
    };

    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = temp_path(file_path);
    if let Err(e) = fs::write(&tmp, &json) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp, file_path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    tracing::info!("Results saved to {}", file_path.display());
    Ok(())
}

/// Loads a previously exported result. Absent or malformed files are errors,
/// never panics.
pub fn load_results(file_path: &Path) -> Result<AnalysisResult> {
    let malformed = |reason: String| AnalysisError::MalformedArtifact {
        path: file_path.to_path_buf(),
        reason,
    };

    let contents = fs::read(file_path).map_err(|e| malformed(e.to_string()))?;
    serde_json::from_slice(&contents).map_err(|e| malformed(e.to_string()))
}

fn temp_path(file_path: &Path) -> PathBuf {
    let mut name = file_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    file_path.with_file_name(name)
}
