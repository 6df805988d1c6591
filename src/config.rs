//! Binary configuration: command-line flags plus an optional JSON file.
//!
//! Every tuning value documented in the types crate can be overridden from a
//! JSON config file; the handful that matter interactively are also exposed
//! as flags. Flags and file entries are applied in command-line order, so a
//! later flag wins over an earlier `--config`.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use tui_bounce::term::Rgb;
use tui_bounce::types::{EdgeInsets, EngineConfig, MaskConfig};

const DEFAULT_HEADLESS_TICKS: u64 = 600;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: u32,
    pub quantity: u64,
    /// Rectangular mode: plain inset walls instead of a shape mask.
    pub walls: bool,
    /// Shape image file; the built-in vessel silhouette when absent.
    pub mask_path: Option<PathBuf>,
    pub engine: EngineConfig,
    pub mask: MaskConfig,
    pub glyph: char,
    pub glyph_color: Rgb,
    pub headless_ticks: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            quantity: 784,
            walls: false,
            mask_path: None,
            // Cell-scale rendition of the library's pixel-scale defaults: one
            // terminal cell plays one logical pixel, so sizes and insets
            // shrink accordingly.
            engine: EngineConfig {
                size_min: 1.0,
                size_max: 2.5,
                speed_min: 0.05,
                speed_max: 0.25,
                wall_inset: 1.0,
                ..EngineConfig::default()
            },
            mask: MaskConfig::default(),
            glyph: '●',
            glyph_color: Rgb::new(255, 102, 0),
            headless_ticks: None,
        }
    }
}

/// JSON config file contents. Every field is optional; absent fields keep
/// their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    seed: Option<u32>,
    quantity: Option<u64>,

    count_divisor: Option<u64>,
    min_sprites: Option<usize>,
    max_sprites: Option<usize>,
    size_min: Option<f32>,
    size_max: Option<f32>,
    speed_min: Option<f32>,
    speed_max: Option<f32>,
    wall_inset: Option<f32>,
    spawn_attempts: Option<u32>,

    viewbox_w: Option<f32>,
    viewbox_h: Option<f32>,
    inset_top: Option<f32>,
    inset_right: Option<f32>,
    inset_bottom: Option<f32>,
    inset_left: Option<f32>,
    alpha_threshold: Option<u8>,
    raster_scale: Option<f32>,

    sprite_glyph: Option<char>,
}

impl ConfigFile {
    fn apply(self, run: &mut RunConfig) {
        if let Some(v) = self.seed {
            run.seed = v;
        }
        if let Some(v) = self.quantity {
            run.quantity = v;
        }

        if let Some(v) = self.count_divisor {
            run.engine.count_divisor = v;
        }
        if let Some(v) = self.min_sprites {
            run.engine.min_sprites = v;
        }
        if let Some(v) = self.max_sprites {
            run.engine.max_sprites = v;
        }
        if let Some(v) = self.size_min {
            run.engine.size_min = v;
        }
        if let Some(v) = self.size_max {
            run.engine.size_max = v;
        }
        if let Some(v) = self.speed_min {
            run.engine.speed_min = v;
        }
        if let Some(v) = self.speed_max {
            run.engine.speed_max = v;
        }
        if let Some(v) = self.wall_inset {
            run.engine.wall_inset = v;
        }
        if let Some(v) = self.spawn_attempts {
            run.engine.spawn_attempts = v;
        }

        if let Some(v) = self.viewbox_w {
            run.mask.viewbox_w = v;
        }
        if let Some(v) = self.viewbox_h {
            run.mask.viewbox_h = v;
        }
        let insets = EdgeInsets {
            top: self.inset_top.unwrap_or(run.mask.insets.top),
            right: self.inset_right.unwrap_or(run.mask.insets.right),
            bottom: self.inset_bottom.unwrap_or(run.mask.insets.bottom),
            left: self.inset_left.unwrap_or(run.mask.insets.left),
        };
        run.mask.insets = insets;
        if let Some(v) = self.alpha_threshold {
            run.mask.alpha_threshold = v;
        }
        if let Some(v) = self.raster_scale {
            run.mask.raster_scale = v;
        }

        if let Some(v) = self.sprite_glyph {
            run.glyph = v;
        }
    }
}

fn load_config_file(path: &str, run: &mut RunConfig) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path))?;
    let file: ConfigFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path))?;
    file.apply(run);
    Ok(())
}

pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut run = RunConfig::default();

    let mut i = 0usize;
    if args.first().map(String::as_str) == Some("headless") {
        run.headless_ticks = Some(DEFAULT_HEADLESS_TICKS);
        i = 1;
    }

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                run.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--quantity" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --quantity"))?;
                run.quantity = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --quantity value: {}", v))?;
            }
            "--rect" => {
                run.walls = true;
            }
            "--mask" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --mask"))?;
                run.mask_path = Some(PathBuf::from(v));
            }
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                load_config_file(v, &mut run)?;
            }
            "--ticks" => {
                if run.headless_ticks.is_none() {
                    return Err(anyhow!("--ticks is only valid in headless mode"));
                }
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --ticks"))?;
                run.headless_ticks = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --ticks value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(run)
}
