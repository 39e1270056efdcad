//! Configuration command handler.
//!
//! Displays every configuration value with its source (default, file or
//! environment) as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "depth_limit": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "point_system": {
//!     "value": "british",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "depth_limit": {
            "value": config.depth_limit,
            "source": sources.depth_limit,
        },
        "point_system": {
            "value": config.point_system,
            "source": sources.point_system,
        },
        "point_table": {
            "value": config.point_table,
            "source": sources.point_table,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "player": {
            "value": config.player,
            "source": sources.player,
        },
        "game_millis": {
            "value": config.game_millis,
            "source": sources.game_millis,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "POKERSQUARES_CONFIG",
            "POKERSQUARES_SEED",
            "POKERSQUARES_DEPTH",
            "POKERSQUARES_POINT_SYSTEM",
            "POKERSQUARES_PLAYER",
            "POKERSQUARES_GAME_MILLIS",
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_defaults_as_json() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["depth_limit"]["value"], 1);
        assert_eq!(json["depth_limit"]["source"], "default");
        assert_eq!(json["point_system"]["value"], "british");
        assert_eq!(json["player"]["value"], "expectimax");
        assert_eq!(json["game_millis"]["value"], 30_000);
        assert!(json["seed"]["value"].is_null());
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        clear_env();
        unsafe {
            std::env::set_var("POKERSQUARES_DEPTH", "2");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();
        result.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["depth_limit"]["value"], 2);
        assert_eq!(json["depth_limit"]["source"], "env");
    }

    #[test]
    #[serial]
    fn test_cfg_handles_config_error() {
        clear_env();
        unsafe {
            std::env::set_var("POKERSQUARES_PLAYER", "oracle");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("unknown player"));
    }
}
