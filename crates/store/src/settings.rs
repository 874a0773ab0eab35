//! Toolkit settings, passed explicitly into store calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::StoreError;

/// A passively-read settings record.
///
/// There is no ambient global: whoever calls the store hands it the
/// settings to honor. The serde derives let a host embed this block in its
/// own config file; absent keys fall back field by field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dump encoded and decoded record trees to the debug log.
    pub debug: bool,
    /// Gzip-compress files on write. Reads always sniff the file, so
    /// either form loads no matter how this is set.
    pub compress: bool,
    /// Window size a host should open when a file does not say.
    pub default_window_size: WindowSize,
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub x: u32,
    pub y: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            compress: false,
            default_window_size: WindowSize::default(),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { x: 800, y: 800 }
    }
}

impl Settings {
    /// Look a setting up by name.
    ///
    /// The typed fields are the normal way in; this is for hosts that
    /// surface settings as key/value pairs. An unknown key is an error,
    /// not `None`, so a typo cannot read as "unset".
    pub fn get(&self, key: &str) -> Result<Value, StoreError> {
        match key {
            "debug" => Ok(Value::Bool(self.debug)),
            "compress" => Ok(Value::Bool(self.compress)),
            "default_window_size" => Ok(serde_json::json!({
                "x": self.default_window_size.x,
                "y": self.default_window_size.y,
            })),
            other => Err(StoreError::ConfigKey(other.to_string())),
        }
    }
}
