use crate::filter::BlurOptions;
use crate::gaussian::SampleGrid;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `apply_filter` tool.
#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    /// Image to process. Optional only for `gaussian_map` with explicit size.
    #[serde(default)]
    pub input: Option<PathBuf>,
    pub operation: Operation,
    pub output: FilterOutputConfig,
}

/// Processing step applied to the decoded input.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Invert,
    Blur(BlurOptions),
    GaussianBlur(GaussianBlurConfig),
    GaussianMap(GaussianMapConfig),
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Invert => "invert",
            Operation::Blur(_) => "blur",
            Operation::GaussianBlur(_) => "gaussian_blur",
            Operation::GaussianMap(_) => "gaussian_map",
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GaussianBlurConfig {
    pub radius: usize,
    pub sigma: f64,
}

impl Default for GaussianBlurConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            sigma: 1.0,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GaussianMapConfig {
    /// Map size; falls back to the input image size when absent.
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub grid: SampleGrid,
}

#[derive(Debug, Deserialize)]
pub struct FilterOutputConfig {
    /// PNG written with the processed pixels.
    pub image: PathBuf,
    /// Optional JSON run summary.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    /// Optional JSON dump of the weight matrix (`gaussian_map` only).
    #[serde(default)]
    pub weights_json: Option<PathBuf>,
}

impl FilterToolConfig {
    /// Reject combinations that cannot run.
    pub fn validate(&self) -> Result<(), String> {
        match &self.operation {
            Operation::Blur(opts) if opts.radius == 0 => {
                return Err("blur radius must be at least 1".to_string());
            }
            Operation::GaussianBlur(cfg) if !(cfg.sigma.is_finite() && cfg.sigma > 0.0) => {
                return Err(format!("gaussian_blur sigma must be positive, got {}", cfg.sigma));
            }
            Operation::GaussianMap(map) => {
                let sized = map.width.is_some() && map.height.is_some();
                if !sized && self.input.is_none() {
                    return Err("gaussian_map needs width and height or an input image".to_string());
                }
                if map.width == Some(0) || map.height == Some(0) {
                    return Err("gaussian_map dimensions must be positive".to_string());
                }
                return Ok(());
            }
            _ => {}
        }
        if self.input.is_none() {
            return Err(format!("operation {} requires an input image", self.operation.label()));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Invalid config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<FilterToolConfig, String> {
    let config: FilterToolConfig =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))?;
    config.validate()?;
    Ok(config)
}
