//! Console and file I/O helpers shared by the commands.
//!
//! - Reading one prompt answer from stdin
//! - Reading round-history files, transparently decompressing `.zst`

use crate::error::CliError;
use std::io::{BufRead, ErrorKind};

const MAX_HISTORY_BYTES: usize = 64 * 1024 * 1024;

/// Reads one trimmed answer, or `None` on EOF.
///
/// An interrupted read (Ctrl+C at the prompt) becomes
/// [`CliError::Interrupted`]; other read failures are I/O errors.
///
/// ```rust
/// # use parlor_cli::io_utils::read_stdin_line;
/// let mut input = std::io::Cursor::new("  h \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("h".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => Ok(None), // EOF
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::Interrupted => {
            Err(CliError::Interrupted("input interrupted".to_string()))
        }
        Err(e) => Err(CliError::Io(e)),
    }
}

/// Read a whole text file; paths ending in `.zst` are Zstandard-decompressed
/// first and a leading UTF-8 BOM is dropped.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        // upper bound on the decompressed size
        let dec = zstd::bulk::decompress(&comp, MAX_HISTORY_BYTES).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
