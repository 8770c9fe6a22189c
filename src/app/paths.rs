// SPDX-License-Identifier: MPL-2.0
//! Location of the configuration directory.
//!
//! The book list lives in memory only, so the config directory (holding
//! `settings.toml`) is the one place the application touches the disk.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to [`config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir`, registered once via [`init_cli_override`]
//! 3. **Environment variable** `ICED_BOOKS_CONFIG_DIR` (ignored when empty)
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform config directory.
pub const APP_NAME: &str = "IcedBooks";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BOOKS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` CLI value.
///
/// Only the first call has an effect; later calls are ignored and return
/// `false`.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, preferring `override_path` when given.
///
/// Without overrides this is the platform directory plus [`APP_NAME`]:
///
/// - Linux: `~/.config/IcedBooks/`
/// - macOS: `~/Library/Application Support/IcedBooks/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedBooks\`
///
/// Returns `None` if no directory can be determined.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
