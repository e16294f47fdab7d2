use crate::ports::outbound::BrowserLauncher;
use crate::shared::Result;
use anyhow::Context;
use std::process::{Command, Stdio};

/// SystemBrowserLauncher adapter for the BrowserLauncher port
///
/// Spawns the platform opener as a detached child: stdio is not
/// inherited and the caller never waits on it, so the opened browser gets
/// no handle back to this process. The child is reaped on a background
/// thread.
pub struct SystemBrowserLauncher {
    program: String,
    args: Vec<String>,
}

impl SystemBrowserLauncher {
    /// Launcher using the platform's default opener
    pub fn new() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            // Avoids `cmd /C start`, which would interpret `&` in the URL
            ("rundll32", &["url.dll,FileProtocolHandler"])
        } else {
            ("xdg-open", &[])
        };

        Self::with_command(program, args)
    }

    /// Launcher running `program args... <url>`
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemBrowserLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserLauncher for SystemBrowserLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| {
                format!(
                    "Failed to launch '{}' to open {}\n\n💡 Hint: Open the URL manually in your browser",
                    self.program, url
                )
            })?;

        // Reap the opener off-thread so it never lingers as a zombie
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}
