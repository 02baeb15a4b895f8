// src/core/visualization/display.rs
//
// Hands a rendered dashboard to the platform image viewer.

use log::debug;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Open `path` in the desktop's default viewer
pub fn show_image(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::Display(format!("{} does not exist", path.display())));
    }
    if !has_graphical_session() {
        return Err(Error::Display(
            "no graphical session (DISPLAY / WAYLAND_DISPLAY unset)".into(),
        ));
    }

    let mut cmd = viewer_command(path);
    debug!("Launching viewer: {:?}", cmd);
    let status = cmd
        .status()
        .map_err(|e| Error::Display(format!("failed to launch viewer: {}", e)))?;

    if !status.success() {
        return Err(Error::Display(format!("viewer exited with {}", status)));
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn has_graphical_session() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[cfg(not(target_os = "linux"))]
fn has_graphical_session() -> bool {
    true
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
