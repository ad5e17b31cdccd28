use crate::error::{Result, StandupError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Somewhere exported text can be written to. Failure is reported, never fatal
/// to the entry being exported.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, through the platform's command line tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Keeps whatever was written last. For tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip, falling back to xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| StandupError::Clipboard(format!("{}. Install xclip or xsel.", e)))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(StandupError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| StandupError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            StandupError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child
        .wait()
        .map_err(|e| StandupError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(StandupError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}
