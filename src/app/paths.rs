// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! Candidates are tried in order and the first one present wins:
//!
//! 1. an explicit override (tests, `App::new` with `--config-dir` flags)
//! 2. the `--config-dir` value registered with [`init_cli_overrides`]
//! 3. the `ANALYTICS_HUB_CONFIG_DIR` environment variable, if non-empty
//! 4. `<platform config dir>/AnalyticsHub` from the `dirs` crate

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "AnalyticsHub";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "ANALYTICS_HUB_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Where a resolved settings directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Override,
    CommandLine,
    Environment,
    Platform,
}

impl fmt::Display for ConfigDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigDirSource::Override => "override",
            ConfigDirSource::CommandLine => "--config-dir",
            ConfigDirSource::Environment => ENV_CONFIG_DIR,
            ConfigDirSource::Platform => "platform default",
        })
    }
}

/// Registers the `--config-dir` value. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Settings directory, or `None` when the platform has no config location.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Settings directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(override_path).map(|(path, _)| path)
}

/// Settings directory together with the candidate that produced it.
#[must_use]
pub fn resolve_config_dir(override_path: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    let env_dir = std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    pick(
        override_path,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        env_dir,
        dirs::config_dir().map(|base| base.join(APP_DIR_NAME)),
    )
}

fn pick(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    platform: Option<PathBuf>,
) -> Option<(PathBuf, ConfigDirSource)> {
    [
        (override_path, ConfigDirSource::Override),
        (cli, ConfigDirSource::CommandLine),
        (env, ConfigDirSource::Environment),
        (platform, ConfigDirSource::Platform),
    ]
    .into_iter()
    .find_map(|(path, source)| path.map(|path| (path, source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> Option<PathBuf> {
        Some(PathBuf::from(raw))
    }

    #[test]
    fn override_beats_every_other_candidate() {
        assert_eq!(
            pick(path("/o"), path("/c"), path("/e"), path("/p")),
            Some((PathBuf::from("/o"), ConfigDirSource::Override))
        );
    }

    #[test]
    fn candidates_fall_through_in_order() {
        assert_eq!(
            pick(None, path("/c"), path("/e"), path("/p")),
            Some((PathBuf::from("/c"), ConfigDirSource::CommandLine))
        );
        assert_eq!(
            pick(None, None, path("/e"), path("/p")),
            Some((PathBuf::from("/e"), ConfigDirSource::Environment))
        );
        assert_eq!(
            pick(None, None, None, path("/p")),
            Some((PathBuf::from("/p"), ConfigDirSource::Platform))
        );
        assert_eq!(pick(None, None, None, None), None);
    }

    #[test]
    fn explicit_override_is_returned_unchanged() {
        let dir = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_config_dir_with_override(Some(dir.clone())),
            Some(dir)
        );
    }

    #[test]
    fn platform_default_is_app_specific() {
        if let Some(base) = dirs::config_dir() {
            let (path, _) = pick(None, None, None, Some(base.join(APP_DIR_NAME)))
                .expect("platform candidate");
            assert!(path.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn sources_have_readable_names() {
        assert_eq!(ConfigDirSource::Environment.to_string(), ENV_CONFIG_DIR);
        assert_eq!(ConfigDirSource::CommandLine.to_string(), "--config-dir");
    }
}
