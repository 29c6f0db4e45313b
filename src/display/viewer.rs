use std::path::Path;
use std::process::Command;

use log::{debug, info};

use super::DisplayError;

/// Hand a rendered artifact to the platform's default viewer and wait for
/// the launcher to exit
pub fn open_in_viewer(path: &Path) -> Result<(), DisplayError> {
    let mut command = viewer_command(path);
    debug!("Launching viewer: {:?}", command);

    let status = command.status().map_err(|e| {
        DisplayError::Viewer(format!(
            "could not launch {:?}: {}",
            command.get_program(),
            e
        ))
    })?;

    if !status.success() {
        return Err(DisplayError::Viewer(format!(
            "{:?} exited with {}",
            command.get_program(),
            status
        )));
    }

    info!("Opened {} in the default viewer", path.display());
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", "/WAIT"]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
