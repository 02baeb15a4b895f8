//! Visualization tools for comparison results
//!
//! Renders the four-panel dashboard (waveforms, mean spectra, MFCC heatmaps)
//! to a PNG and optionally hands it to the desktop viewer. Nothing here is
//! called by the analysis pipeline itself.

mod canvas;
mod colormap;
mod dashboard;
mod display;

pub use canvas::load_font;
pub use colormap::Colormap;
pub use dashboard::{render_dashboard, save_dashboard, DashboardConfig};
pub use display::show_image;
