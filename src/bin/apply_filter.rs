use pixel_filters::color::{grayscale_image, invert_image};
use pixel_filters::config::filter::{load_config, FilterToolConfig, Operation};
use pixel_filters::filter::{blur_with, gaussian_blur};
use pixel_filters::gaussian::{weight_matrix_sampled, weights_to_image};
use pixel_filters::image::io::{decode_rgba, save_rgba_png, write_json_file};
use pixel_filters::sniff::{locate_start_of_scan, sniff_format};
use pixel_filters::{PixelMatrix, RgbaImage, WeightMap};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = match &config.input {
        Some(path) => Some(read_input(path)?),
        None => None,
    };

    let t0 = Instant::now();
    let (output, weights) = process(&config, input.as_ref())?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    save_rgba_png(&output, &config.output.image)?;
    println!(
        "Saved {} output ({}x{}) to {}",
        config.operation.label(),
        output.width(),
        output.height(),
        config.output.image.display()
    );

    if let (Some(path), Some(map)) = (&config.output.weights_json, &weights) {
        write_json_file(path, &map.to_rows())?;
        println!("Saved weight matrix to {}", path.display());
    }

    if let Some(path) = &config.output.summary_json {
        let summary = RunSummary {
            operation: config.operation.label(),
            width: output.width(),
            height: output.height(),
            elapsed_ms,
        };
        write_json_file(path, &summary)?;
        println!("Saved run summary to {}", path.display());
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<RgbaImage, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let format = sniff_format(&bytes)
        .ok_or_else(|| format!("{} is neither a JPEG nor a PNG file", path.display()))?;
    log::debug!(
        "input {}: format={:?} bytes={} sos={}",
        path.display(),
        format,
        bytes.len(),
        locate_start_of_scan(&bytes)
    );
    decode_rgba(&bytes).map_err(|e| format!("{e} ({})", path.display()))
}

fn process(
    config: &FilterToolConfig,
    input: Option<&RgbaImage>,
) -> Result<(RgbaImage, Option<WeightMap>), String> {
    let require_input = || {
        input.ok_or_else(|| {
            format!(
                "operation {} requires an input image",
                config.operation.label()
            )
        })
    };
    let output = match &config.operation {
        Operation::Grayscale => grayscale_image(require_input()?),
        Operation::Invert => invert_image(require_input()?),
        Operation::Blur(opts) => blur_with(&PixelMatrix::from_image(require_input()?), opts),
        Operation::GaussianBlur(cfg) => gaussian_blur(
            &PixelMatrix::from_image(require_input()?),
            cfg.radius,
            cfg.sigma,
        ),
        Operation::GaussianMap(map_cfg) => {
            let width = map_cfg.width.or(input.map(RgbaImage::width));
            let height = map_cfg.height.or(input.map(RgbaImage::height));
            let (Some(width), Some(height)) = (width, height) else {
                return Err("gaussian_map size could not be determined".to_string());
            };
            let map = weight_matrix_sampled(width, height, map_cfg.grid);
            let image = weights_to_image(&map).map_err(|e| e.to_string())?;
            return Ok((image, Some(map)));
        }
    };
    Ok((output, None))
}

fn usage() -> String {
    "Usage: apply_filter <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    operation: &'static str,
    width: usize,
    height: usize,
    elapsed_ms: f64,
}
