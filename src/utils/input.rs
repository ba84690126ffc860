//! Command-line input: a literal argument, a memory-mapped file, or stdin.

use anyhow::{Context, Result, bail};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// Input bytes, without one trailing line break
pub enum Input {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Input {
    /// `text` if given, else the contents of `file`, else all of stdin
    pub fn load(text: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(text) = text {
            return Ok(Input::Owned(text.as_bytes().to_vec()));
        }
        match file {
            Some(path) => Self::map(path),
            None => Self::stdin(),
        }
    }

    pub fn map(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(Input::Owned(Vec::new()));
        }
        let mmap = unsafe { Mmap::map(&file)? };
        log::debug!("mapped {} ({} bytes)", path.display(), len);
        Ok(Input::Mapped(mmap))
    }

    pub fn stdin() -> Result<Self> {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(Input::Owned(buf))
    }

    /// Whitespace-separated words of the input
    pub fn words(&self) -> impl Iterator<Item = &[u8]> {
        self.split(|b| b.is_ascii_whitespace()).filter(|w| !w.is_empty())
    }
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        let bytes: &[u8] = match self {
            Input::Mapped(mmap) => mmap,
            Input::Owned(buf) => buf,
        };
        trim_line_break(bytes)
    }
}

fn trim_line_break(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// Fail if `separator` occurs in any of `inputs`
pub fn ensure_absent(separator: u8, inputs: &[&[u8]]) -> Result<()> {
    for input in inputs {
        if let Some(pos) = memchr::memchr(separator, input) {
            bail!(
                "separator {:?} occurs in the input at byte {}; choose another with the config file",
                separator as char,
                pos
            );
        }
    }
    Ok(())
}
