// src/core/visualization/canvas.rs
//
// Drawing primitives on top of imageproc: text with an optional runtime
// font, blended spans, axes, grids and legends.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const GRID: Rgb<u8> = Rgb([220, 220, 220]);
/// Default series colors (blue, orange)
pub const SERIES: [Rgb<u8>; 2] = [Rgb([31, 119, 180]), Rgb([255, 127, 14])];

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Locate a TrueType font.
///
/// An explicit path must load. Otherwise well-known system locations are
/// tried and `None` is returned when none of them exist.
pub fn load_font(explicit: Option<&Path>) -> Result<Option<FontVec>> {
    if let Some(path) = explicit {
        return read_font(path)
            .map(Some)
            .ok_or_else(|| Error::Render(format!("cannot load font {}", path.display())));
    }

    let user_fonts = dirs::font_dir().map(|dir| dir.join("DejaVuSans.ttf"));
    let candidates = user_fonts
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        if let Some(font) = read_font(&path) {
            debug!("Using font {}", path.display());
            return Ok(Some(font));
        }
    }

    warn!("No TrueType font found; dashboard text will be omitted (use --font)");
    Ok(None)
}

fn read_font(path: &Path) -> Option<FontVec> {
    let data = std::fs::read(path).ok()?;
    FontVec::try_from_vec(data).ok()
}

/// Plot area in image pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Area {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Map data coordinates to pixels; y grows upwards in data space
    pub fn project(&self, x: f32, y: f32, x_range: (f32, f32), y_range: (f32, f32)) -> (f32, f32) {
        let fx = (x - x_range.0) / (x_range.1 - x_range.0).max(f32::EPSILON);
        let fy = (y - y_range.0) / (y_range.1 - y_range.0).max(f32::EPSILON);
        (
            self.x as f32 + fx * (self.w.saturating_sub(1)) as f32,
            self.bottom() as f32 - 1.0 - fy * (self.h.saturating_sub(1)) as f32,
        )
    }
}

/// Image plus the font used for labels
pub struct Painter {
    pub img: RgbImage,
    font: Option<FontVec>,
}

impl Painter {
    pub fn new(width: u32, height: u32, font: Option<FontVec>) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, WHITE),
            font,
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Width and height of `text` at `size` px
    pub fn text_size(&self, text: &str, size: f32) -> (u32, u32) {
        match &self.font {
            Some(font) => text_size(PxScale::from(size), font, text),
            None => ((text.chars().count() as f32 * size * 0.55) as u32, size as u32),
        }
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        if let Some(font) = &self.font {
            draw_text_mut(&mut self.img, color, x, y, PxScale::from(size), font, text);
        }
    }

    /// Text horizontally centred on `cx`
    pub fn text_centered(&mut self, cx: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        let (w, _) = self.text_size(text, size);
        self.text(cx - w as i32 / 2, y, text, size, color);
    }

    /// Text right-aligned at `right`
    pub fn text_right(&mut self, right: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        let (w, _) = self.text_size(text, size);
        self.text(right - w as i32, y, text, size, color);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
        draw_line_segment_mut(&mut self.img, from, to, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
        if w > 0 && h > 0 {
            draw_filled_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), color);
        }
    }

    pub fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
        if w > 0 && h > 0 {
            draw_hollow_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), color);
        }
    }

    /// Alpha-blend `color` over one pixel; out-of-bounds writes are ignored
    pub fn blend(&mut self, x: u32, y: u32, color: Rgb<u8>, alpha: f32) {
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let dst = self.img.get_pixel(x, y).0;
        let mix = |i: usize| (dst[i] as f32 * (1.0 - alpha) + color.0[i] as f32 * alpha).round() as u8;
        self.img.put_pixel(x, y, Rgb([mix(0), mix(1), mix(2)]));
    }

    /// Vertical blended span between two rows (inclusive)
    pub fn blend_span(&mut self, x: u32, y0: u32, y1: u32, color: Rgb<u8>, alpha: f32) {
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in top..=bottom {
            self.blend(x, y, color, alpha);
        }
    }

    /// Axis frame, light grid and numeric tick labels on both axes
    pub fn axes(
        &mut self,
        area: Area,
        x_range: (f32, f32),
        y_range: (f32, f32),
        ticks: usize,
        x_fmt: impl Fn(f32) -> String,
        y_fmt: impl Fn(f32) -> String,
    ) {
        for i in 0..=ticks {
            let t = i as f32 / ticks as f32;
            let gx = area.x as f32 + t * (area.w - 1) as f32;
            let gy = area.y as f32 + t * (area.h - 1) as f32;
            self.line((gx, area.y as f32), (gx, (area.bottom() - 1) as f32), GRID);
            self.line((area.x as f32, gy), ((area.right() - 1) as f32, gy), GRID);

            let xv = x_range.0 + t * (x_range.1 - x_range.0);
            self.text_centered(gx as i32, area.bottom() as i32 + 4, &x_fmt(xv), 13.0, BLACK);

            let yv = y_range.1 - t * (y_range.1 - y_range.0);
            self.text_right(area.x as i32 - 6, gy as i32 - 7, &y_fmt(yv), 13.0, BLACK);
        }
        self.stroke_rect(area.x as i32, area.y as i32, area.w, area.h, BLACK);
    }

    /// Title above the area and axis labels around it
    pub fn labels(&mut self, area: Area, title: &str, x_label: &str, y_label: &str) {
        let cx = (area.x + area.w / 2) as i32;
        self.text_centered(cx, area.y as i32 - 26, title, 18.0, BLACK);
        if !x_label.is_empty() {
            self.text_centered(cx, area.bottom() as i32 + 22, x_label, 14.0, BLACK);
        }
        if !y_label.is_empty() {
            self.text(area.x as i32 + 4, area.y as i32 - 2 - 14, y_label, 13.0, BLACK);
        }
    }

    /// Boxed legend in the top-right corner of `area`
    pub fn legend(&mut self, area: Area, entries: &[(&str, Rgb<u8>)]) {
        let row_h = 20u32;
        let text_w = entries
            .iter()
            .map(|(label, _)| self.text_size(label, 13.0).0)
            .max()
            .unwrap_or(0);
        let box_w = text_w + 46;
        let box_h = row_h * entries.len() as u32 + 8;
        let x = area.right().saturating_sub(box_w + 10) as i32;
        let y = area.y as i32 + 10;

        self.fill_rect(x, y, box_w, box_h, WHITE);
        self.stroke_rect(x, y, box_w, box_h, GRID);
        for (i, (label, color)) in entries.iter().enumerate() {
            let ly = y + 4 + (i as u32 * row_h) as i32;
            let mid = ly as f32 + row_h as f32 / 2.0;
            for dy in -1..=1 {
                self.line((x as f32 + 8.0, mid + dy as f32), (x as f32 + 32.0, mid + dy as f32), *color);
            }
            self.text(x + 38, ly + 3, label, 13.0, BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_corners() {
        let area = Area::new(10, 20, 101, 51);
        let (x0, y0) = area.project(0.0, 0.0, (0.0, 1.0), (0.0, 1.0));
        let (x1, y1) = area.project(1.0, 1.0, (0.0, 1.0), (0.0, 1.0));
        assert_eq!((x0, y0), (10.0, 70.0));
        assert_eq!((x1, y1), (110.0, 20.0));
    }

    #[test]
    fn test_blend() {
        let mut painter = Painter::new(4, 4, None);
        painter.blend(1, 1, BLACK, 0.5);
        assert_eq!(painter.img.get_pixel(1, 1), &Rgb([128, 128, 128]));
        painter.blend(10, 10, BLACK, 1.0); // ignored
    }

    #[test]
    fn test_text_without_font_is_noop() {
        let mut painter = Painter::new(50, 20, None);
        painter.text(0, 0, "hello", 14.0, BLACK);
        assert!(painter.img.pixels().all(|p| *p == WHITE));
        assert!(painter.text_size("hello", 10.0).0 > 0);
    }

    #[test]
    fn test_explicit_missing_font_fails() {
        assert!(load_font(Some(Path::new("/no/such/font.ttf"))).is_err());
    }
}
