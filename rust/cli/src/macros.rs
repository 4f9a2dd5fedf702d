//! Macros for repeated error-handling patterns in the CLI.

/// Write a line and return the error exit code if the stream is gone.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse one JSONL line, or warn about it on `$err` and `continue` the loop.
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, err, format!("line {}", n));
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ = $crate::ui::display_warning(
                    $err,
                    &format!("Failed to parse {}: {}", $context, e),
                );
                continue;
            }
        }
    };
}
