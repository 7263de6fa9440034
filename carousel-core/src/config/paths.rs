use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem layout a run reads from and writes to.
///
/// Source photos are `input_dir/slide_{n}.png`, finished slides land in
/// `output_dir/slide_{n}_final.png`, and relative font/logo paths resolve against `assets_root`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Directory holding generated source photos.
    pub input_dir: PathBuf,
    /// Directory receiving finished slides.
    pub output_dir: PathBuf,
    /// Root for relative font and logo paths.
    pub assets_root: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("outputs"),
            output_dir: PathBuf::from("outputs/final"),
            assets_root: PathBuf::from("assets"),
        }
    }
}

impl AssetPaths {
    /// Source photo for slide `index`.
    pub fn source_photo(&self, index: u32) -> PathBuf {
        self.input_dir.join(format!("slide_{index}.png"))
    }

    /// Output file for slide `index`.
    pub fn output_file(&self, index: u32) -> PathBuf {
        self.output_dir.join(format!("slide_{index}_final.png"))
    }

    /// Resolve a configured asset path; absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.assets_root.join(path)
        }
    }
}
