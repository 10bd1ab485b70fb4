use std::fs;
use std::path::Path;

use crate::model::HardwareMatrix;

use super::Result;

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_matrix(path: impl AsRef<Path>) -> Result<HardwareMatrix> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let matrix = if is_yaml(path) {
        serde_yaml::from_str::<HardwareMatrix>(&raw)?
    } else {
        serde_json::from_str::<HardwareMatrix>(&raw)?
    };
    matrix.validate()?;
    Ok(matrix)
}

pub fn save_matrix(path: impl AsRef<Path>, matrix: &HardwareMatrix) -> Result<()> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(matrix)?
    } else {
        serde_json::to_string_pretty(matrix)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
