use crate::error::{Result, SnipError};
use crate::shell::Clipboard;
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::io::Write;
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::process::{Command, Stdio};

/// The OS clipboard, reached through the platform's copy command:
/// - macOS: `pbcopy`
/// - Linux: `xclip`, falling back to `xsel`
/// - Windows: `clip`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_into("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_into("xclip", &["-selection", "clipboard"], text).or_else(|first| {
            log::debug!("xclip unavailable ({}), trying xsel", first);
            pipe_into("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                SnipError::Clipboard(format!("{}. Install xclip or xsel.", e))
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_into("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(SnipError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SnipError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SnipError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SnipError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SnipError::Clipboard(format!("{} exited with error", program)))
    }
}
