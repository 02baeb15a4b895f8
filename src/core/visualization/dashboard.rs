// src/core/visualization/dashboard.rs
//
// Four-panel comparison dashboard: waveforms, mean spectra with the score,
// and the two MFCC heatmaps on a shared color scale.

use image::RgbImage;
use log::info;
use std::path::{Path, PathBuf};

use super::canvas::{load_font, Area, Painter, BLACK, GRID, SERIES, WHITE};
use super::colormap::Colormap;
use crate::comparison::ComparisonResult;
use crate::core::dsp::FeatureMatrix;
use crate::error::{Error, Result};

const SUPTITLE: &str = "Advanced Audio Frequency & Voice Similarity Dashboard";
const WAVEFORM_ALPHA: f32 = 0.7;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub width: u32,
    pub height: u32,
    pub colormap: Colormap,
    /// TrueType font for labels; system locations are searched when unset
    pub font_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            colormap: Colormap::Magma,
            font_path: None,
        }
    }
}

impl DashboardConfig {
    fn validate(&self) -> Result<()> {
        if self.width < 640 || self.height < 480 {
            return Err(Error::Config(format!(
                "dashboard must be at least 640x480 (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Render the dashboard into an in-memory image
pub fn render_dashboard(result: &ComparisonResult, config: &DashboardConfig) -> Result<RgbImage> {
    config.validate()?;
    let font = load_font(config.font_path.as_deref())?;
    let mut painter = Painter::new(config.width, config.height, font);

    let (w, h) = (config.width, config.height);
    let header = h / 25;
    painter.text_centered((w / 2) as i32, (header / 4) as i32, SUPTITLE, 22.0, BLACK);

    let row_h = (h - header) / 3;
    let (left, right, top, bottom) = (90u32, 30u32, 40u32, 50u32);
    let row = |i: u32| header + i * row_h;

    let wave_area = Area::new(left, row(0) + top, w - left - right, row_h - top - bottom);
    draw_waveforms(&mut painter, wave_area, result);

    let spec_area = Area::new(left, row(1) + top, w - left - right, row_h - top - bottom);
    draw_spectra(&mut painter, spec_area, result);

    let half = w / 2;
    let colorbar_room = 100u32;
    let shared_range = shared_range(result.feature_matrices());
    for (i, matrix) in result.feature_matrices().into_iter().enumerate() {
        let x = i as u32 * half + left;
        let area = Area::new(x, row(2) + top, half - left - colorbar_room, row_h - top - bottom);
        draw_heatmap(
            &mut painter,
            area,
            matrix,
            shared_range,
            config.colormap,
            &format!("MFCC – Audio {}", i + 1),
            frame_seconds(result),
        );
    }

    Ok(painter.into_image())
}

/// Render and write the dashboard as PNG
pub fn save_dashboard(result: &ComparisonResult, config: &DashboardConfig, path: &Path) -> Result<()> {
    let img = render_dashboard(result, config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save(path)?;
    info!("Dashboard saved to {}", path.display());
    Ok(())
}

fn frame_seconds(result: &ComparisonResult) -> f32 {
    result.config.hop_length as f32 / result.config.sample_rate as f32
}

fn shared_range(matrices: [&FeatureMatrix; 2]) -> (f32, f32) {
    matrices
        .iter()
        .filter_map(|m| m.min_max())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
}

fn draw_waveforms(painter: &mut Painter, area: Area, result: &ComparisonResult) {
    let max_len = result.signals.iter().map(|s| s.len()).max().unwrap_or(1).max(1);
    let x_range = (0.0, max_len as f32);
    let y_range = (-1.1, 1.1);

    painter.axes(area, x_range, y_range, 8, |v| format!("{:.0}", v), |v| format!("{:.1}", v));

    for (signal, color) in result.signals.iter().zip(SERIES) {
        let samples = signal.samples();
        for px in 0..area.w {
            let start = px as usize * max_len / area.w as usize;
            let end = ((px as usize + 1) * max_len / area.w as usize).max(start + 1);
            if start >= samples.len() {
                break;
            }
            let chunk = &samples[start..end.min(samples.len())];
            let (lo, hi) = chunk
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &s| (lo.min(s), hi.max(s)));
            let (_, y_hi) = area.project(0.0, hi, x_range, y_range);
            let (_, y_lo) = area.project(0.0, lo, x_range, y_range);
            painter.blend_span(area.x + px, y_hi as u32, y_lo as u32, color, WAVEFORM_ALPHA);
        }
    }

    painter.labels(area, "Time Domain Comparison", "Samples", "Amplitude");
    painter.legend(area, &[("Audio 1", SERIES[0]), ("Audio 2", SERIES[1])]);
}

fn draw_spectra(painter: &mut Painter, area: Area, result: &ComparisonResult) {
    let spectra = result.spectra();
    let bins = spectra.iter().map(|s| s.len()).max().unwrap_or(1).max(2);
    let peak = spectra
        .iter()
        .flat_map(|s| s.iter())
        .fold(0.0f32, |m, &v| m.max(v))
        .max(f32::EPSILON);
    let x_range = (0.0, (bins - 1) as f32);
    let y_range = (0.0, peak * 1.05);

    painter.axes(area, x_range, y_range, 8, |v| format!("{:.0}", v), |v| format!("{:.1}", v));

    for (spectrum, color) in spectra.iter().zip(SERIES) {
        let points: Vec<(f32, f32)> = spectrum
            .iter()
            .enumerate()
            .map(|(bin, &mag)| area.project(bin as f32, mag, x_range, y_range))
            .collect();
        for pair in points.windows(2) {
            painter.line(pair[0], pair[1], color);
        }
    }

    painter.labels(area, "Frequency Domain Comparison", "Frequency Bins", "Magnitude");
    painter.legend(
        area,
        &[("Audio 1 Spectrum", SERIES[0]), ("Audio 2 Spectrum", SERIES[1])],
    );

    // Score annotation at 2% from the left, 10% from the top
    let label = format!("Similarity: {:.2}%", result.percentage());
    let (tw, th) = painter.text_size(&label, 17.0);
    let bx = area.x as i32 + (area.w as f32 * 0.02) as i32;
    let by = area.y as i32 + (area.h as f32 * 0.10) as i32;
    painter.fill_rect(bx, by, tw + 16, th + 12, WHITE);
    painter.stroke_rect(bx, by, tw + 16, th + 12, BLACK);
    painter.text(bx + 8, by + 5, &label, 17.0, BLACK);
}

fn draw_heatmap(
    painter: &mut Painter,
    area: Area,
    matrix: &FeatureMatrix,
    (lo, hi): (f32, f32),
    colormap: Colormap,
    title: &str,
    seconds_per_frame: f32,
) {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    let span = hi - lo;

    if rows > 0 && cols > 0 {
        for py in 0..area.h {
            // coefficient 0 at the bottom
            let row = rows - 1 - (py as usize * rows / area.h as usize).min(rows - 1);
            for px in 0..area.w {
                let col = (px as usize * cols / area.w as usize).min(cols - 1);
                let value = matrix.get(row, col);
                let t = if span > 0.0 { (value - lo) / span } else { 0.5 };
                painter.img.put_pixel(area.x + px, area.y + py, colormap.color(t));
            }
        }
    }
    painter.stroke_rect(area.x as i32, area.y as i32, area.w, area.h, BLACK);

    // Time axis
    let duration = cols as f32 * seconds_per_frame;
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        let x = area.x as f32 + t * (area.w - 1) as f32;
        painter.line((x, area.bottom() as f32), (x, area.bottom() as f32 + 4.0), BLACK);
        painter.text_centered(x as i32, area.bottom() as i32 + 6, &format!("{:.1}", t * duration), 13.0, BLACK);
    }
    painter.labels(area, title, "Time (s)", "");

    // Colorbar on the shared scale
    let bar = Area::new(area.right() + 12, area.y, 18, area.h);
    for py in 0..bar.h {
        let t = 1.0 - py as f32 / (bar.h - 1).max(1) as f32;
        let color = colormap.color(t);
        for px in 0..bar.w {
            painter.img.put_pixel(bar.x + px, bar.y + py, color);
        }
    }
    painter.stroke_rect(bar.x as i32, bar.y as i32, bar.w, bar.h, GRID);
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        let y = bar.bottom() as f32 - 1.0 - t * (bar.h - 1) as f32;
        let value = lo + t * span;
        painter.text(bar.right() as i32 + 4, y as i32 - 7, &format!("{:.0}", value), 12.0, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AudioSignal, SimilarityAnalyzer};
    use std::f32::consts::PI;

    fn result() -> ComparisonResult {
        let tone = |f: f32| {
            AudioSignal::from_samples(
                (0..11025).map(|i| (2.0 * PI * f * i as f32 / 22050.0).sin()).collect(),
                22050,
            )
        };
        SimilarityAnalyzer::new()
            .unwrap()
            .compare_signals(tone(440.0), tone(660.0))
            .unwrap()
    }

    #[test]
    fn test_render_dimensions() {
        let config = DashboardConfig { width: 800, height: 600, ..Default::default() };
        let img = render_dashboard(&result(), &config).unwrap();
        assert_eq!(img.dimensions(), (800, 600));
    }

    #[test]
    fn test_heatmap_uses_colormap() {
        let config = DashboardConfig::default();
        let img = render_dashboard(&result(), &config).unwrap();
        // The bottom-left heatmap interior must not be blank background
        let row_h = (1200 - 1200 / 25) / 3;
        let y = 1200 / 25 + 2 * row_h + 40 + 10;
        let px = img.get_pixel(90 + 20, y);
        assert_ne!(px, &WHITE);
    }

    #[test]
    fn test_too_small_rejected() {
        let config = DashboardConfig { width: 100, height: 100, ..Default::default() };
        assert!(matches!(render_dashboard(&result(), &config), Err(Error::Config(_))));
    }

    #[test]
    fn test_shared_range_spans_both() {
        let a = FeatureMatrix::from_vec(1, 2, vec![-5.0, 1.0]).unwrap();
        let b = FeatureMatrix::from_vec(1, 2, vec![0.0, 9.0]).unwrap();
        assert_eq!(shared_range([&a, &b]), (-5.0, 9.0));
    }
}
