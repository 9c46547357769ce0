//! Password sinks: terminal, file, clipboard.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use passforge::pass::Password;
use tracing::debug;
use zeroize::Zeroize;

use super::prompts;

const BUF_CAPACITY: usize = 8 * 1024;
const DEFAULT_FILE: &str = "passwords.txt";

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Resolve an `--output` argument to a file path.
/// `.` or a directory gets the default file name; a missing extension gets `.txt`.
pub fn resolve_path(path: &str) -> String {
    if path == "." {
        DEFAULT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_FILE)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}

pub enum Sink {
    Terminal(SecureBufWriter<io::Stdout>),
    File {
        writer: SecureBufWriter<File>,
        path: String,
        written: usize,
    },
    Clipboard {
        ctx: ClipboardContext,
        buf: String,
    },
}

impl Sink {
    pub fn terminal() -> Self {
        Sink::Terminal(SecureBufWriter::new(io::stdout()))
    }

    /// Open `path` for appending, creating parent directories.
    pub fn file(path: &str) -> io::Result<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!(path, "writing passwords to file");
        Ok(Sink::File {
            writer: SecureBufWriter::new(file),
            path: path.to_string(),
            written: 0,
        })
    }

    /// Clipboard sink, or terminal if the clipboard is unavailable and the
    /// user agrees. `None` means abort.
    pub fn clipboard() -> Option<Self> {
        match ClipboardContext::new() {
            Ok(ctx) => Some(Sink::Clipboard {
                ctx,
                buf: String::new(),
            }),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                prompts::clipboard_fallback_prompt().then(Sink::terminal)
            }
        }
    }

    pub fn push(&mut self, password: &Password) -> io::Result<()> {
        match self {
            Sink::Terminal(out) => {
                out.write_all(password.as_str().as_bytes())?;
                out.write_all(b"\n")
            }
            Sink::File { writer, written, .. } => {
                writer.write_all(password.as_str().as_bytes())?;
                writer.write_all(b"\n")?;
                *written += 1;
                Ok(())
            }
            Sink::Clipboard { buf, .. } => {
                if !buf.is_empty() {
                    buf.push('\n');
                }
                buf.push_str(password.as_str());
                Ok(())
            }
        }
    }

    /// Flush buffered output and report where it went.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Sink::Terminal(mut out) => out.flush(),
            Sink::File {
                mut writer,
                path,
                written,
            } => {
                writer.flush()?;
                let full_path = std::fs::canonicalize(&path)
                    .map(|p| p.display().to_string())
                    .unwrap_or(path);
                prompts::passwords_written(written, &full_path);
                Ok(())
            }
            Sink::Clipboard { mut ctx, mut buf } => {
                match ctx.set_contents(buf.clone()) {
                    Ok(()) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
                buf.zeroize();
                Ok(())
            }
        }
    }
}
