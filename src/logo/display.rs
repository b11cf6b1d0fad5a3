//! Handing an exported image to the desktop viewer.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::common::error::{Error, Result};

/// Open `path` in the platform's default image viewer.
///
/// The viewer is spawned and left running; this returns as soon as the
/// launcher exits.
pub fn show(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }

    let mut command = viewer_command(path);
    debug!("display: running {command:?}");
    let status = command.status()?;
    if !status.success() {
        return Err(Error::Io(std::io::Error::other(format!(
            "image viewer exited with {status}"
        ))));
    }
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_missing_file() {
        assert!(matches!(
            show("/nonexistent/laliAx_best_logo.png"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_viewer_command_targets_file() {
        let command = viewer_command(Path::new("logo.png"));
        let args = command.get_args().collect::<Vec<_>>();
        assert_eq!(args.last().map(|a| a.to_string_lossy()), Some("logo.png".into()));
    }
}
