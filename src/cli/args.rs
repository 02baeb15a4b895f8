//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::FeatureConfig;
use crate::core::visualization::{Colormap, DashboardConfig};
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "timbrecheckr")]
#[command(version, about = "Compare the timbre of two recordings with MFCC cosine similarity")]
pub struct Args {
    /// First audio file
    #[arg(env = "TIMBRECHECKR_FIRST", default_value = "first.wav")]
    pub first: PathBuf,

    /// Second audio file
    #[arg(env = "TIMBRECHECKR_SECOND", default_value = "second.wav")]
    pub second: PathBuf,

    /// Target sample rate both inputs are resampled to
    #[arg(short = 'r', long, env = "TIMBRECHECKR_SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// JSON file with feature-extraction parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// STFT frame length
    #[arg(long)]
    pub n_fft: Option<usize>,

    /// STFT hop length
    #[arg(long)]
    pub hop_length: Option<usize>,

    /// Dashboard image path
    #[arg(short, long, default_value = "similarity_dashboard.png")]
    pub output: PathBuf,

    /// Skip dashboard rendering (implies --no-show)
    #[arg(long)]
    pub no_dashboard: bool,

    /// Write the dashboard without opening it in the system image viewer
    #[arg(long)]
    pub no_show: bool,

    /// TrueType font for dashboard labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Heatmap colormap
    #[arg(long, value_enum, default_value_t = Colormap::Magma)]
    pub colormap: Colormap,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Feature config from `--config` (or defaults) with CLI overrides applied
    pub fn feature_config(&self) -> Result<FeatureConfig> {
        let mut config = match &self.config {
            Some(path) => FeatureConfig::from_json_file(path)?,
            None => FeatureConfig::default(),
        };
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(n_fft) = self.n_fft {
            config.n_fft = n_fft;
        }
        if let Some(hop) = self.hop_length {
            config.hop_length = hop;
        }
        config.validate()?;
        Ok(config)
    }

    /// Whether the rendered dashboard should be handed to the viewer
    pub fn show_dashboard(&self) -> bool {
        !self.no_dashboard && !self.no_show
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            colormap: self.colormap,
            font_path: self.font.clone(),
            ..Default::default()
        }
    }
}
