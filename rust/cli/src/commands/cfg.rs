//! Configuration command handler.
//!
//! Prints the resolved settings with the layer each one came from:
//!
//! ```json
//! {
//!   "starting_chips": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// # Errors
///
/// Returns `CliError::Config` if a config file or variable is invalid.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "scoring": {
            "value": config.scoring,
            "source": sources.scoring,
        },
        "dealer": {
            "value": config.dealer,
            "source": sources.dealer,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
