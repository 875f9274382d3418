use std::process::Stdio;

use anyhow::{anyhow, ensure, Context as _};
use async_trait::async_trait;
use tokio::{io::AsyncWriteExt as _, process::Command};

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Copies by piping the text into a clipboard program's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `argv[0]` is the program. `None` if `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// Picks the usual clipboard program for the running desktop.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::<String>::new())
        } else if cfg!(windows) {
            Self::new("clip", Vec::<String>::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::<String>::new())
        } else {
            Self::new("xclip", ["-selection", "clipboard"])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", self.program))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow!("No stdin for '{}'", self.program))?;
            stdin
                .write_all(text.as_bytes())
                .await
                .with_context(|| format!("Failed to write to '{}'", self.program))?;
            // Dropping stdin closes the pipe so the program sees EOF.
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for '{}'", self.program))?;
        ensure!(status.success(), "'{}' exited with {}", self.program, status);
        Ok(())
    }
}
