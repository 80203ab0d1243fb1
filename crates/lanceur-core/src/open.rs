//! Opening link targets with the platform's default handler.

use std::io;
use std::process::{Command, Stdio};

/// Something that can hand a link target to the outside world.
pub trait Opener {
    /// Start opening `target` without blocking.
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Opens targets with `open`, `xdg-open`, or `start`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(target: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(target);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            cmd
        }
    }
}

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> io::Result<()> {
        let mut child = Self::command(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        std::thread::spawn(move || child.wait());
        Ok(())
    }
}

/// Refuses every target. Used where nothing may leave the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpener;

impl Opener for NoOpener {
    fn open(&self, _target: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "opening links is disabled",
        ))
    }
}
