//! Loading worksheet presets from TOML.
//!
//! A preset is a serialized [`WorksheetRequest`]: an optional `rng_seed` and an
//! `[exercise]` table tagged by `subject`. Fields left out take the same
//! defaults as the printable-sheet UI.
//!
//! ```toml
//! rng_seed = 42
//!
//! [exercise]
//! subject = "algebra"
//! difficulty = 3
//! count = 10
//! language = "en"
//! ```

use std::path::Path;
use tracing::{error, info};

use crate::worksheet_engine::{error::Result, WorksheetError, WorksheetRequest};

/// Environment variable naming a preset file.
pub const CONFIG_PATH_ENV: &str = "WORKSHEET_CONFIG_PATH";

pub fn parse_request(source: &str) -> Result<WorksheetRequest> {
    Ok(toml::from_str::<WorksheetRequest>(source)?)
}

pub fn load_request(path: impl AsRef<Path>) -> Result<WorksheetRequest> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| WorksheetError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let request = parse_request(&source)?;
    info!(
        target: "worksheet_drill_gen",
        path = %path.display(), subject = %request.exercise.subject(),
        "loaded worksheet preset (TOML)"
    );
    Ok(request)
}

/// Load the preset named by `WORKSHEET_CONFIG_PATH`; `Ok(None)` when unset.
pub fn load_request_from_env() -> Result<Option<WorksheetRequest>> {
    let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
        return Ok(None);
    };
    load_request(&path).map(Some).inspect_err(|e| {
        error!(target: "worksheet_drill_gen", %path, error = %e, "failed to load worksheet preset");
    })
}
