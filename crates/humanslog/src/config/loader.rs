//! Configuration file loading and environment variable parsing

use super::types::{
    HumanLogConfig,
    Output,
};
use crate::{
    error::ConfigError,
    severity::Severity,
};
use std::{
    env,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

pub(super) const CONFIG_PATH_VAR: &str = "HUMANSLOG_CONFIG";
pub(super) const LEVEL_VAR: &str = "HUMANSLOG_LEVEL";
pub(super) const ANSI_VAR: &str = "HUMANSLOG_ANSI";
pub(super) const OUTPUT_VAR: &str = "HUMANSLOG_OUTPUT";
pub(super) const NO_COLOR_VAR: &str = "NO_COLOR";

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl HumanLogConfig {
    /// Parse a TOML document
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents)
    }

    /// Try the config file search path, then apply environment overrides.
    ///
    /// Searches for config files in this order:
    /// 1. Path in the `HUMANSLOG_CONFIG` environment variable
    /// 2. ./config/humanslog.toml
    /// 3. ./humanslog.toml
    /// 4. ~/.config/humanslog.toml
    ///
    /// Problems are reported on stderr and never abort loading; the result
    /// falls back to defaults for whatever could not be read.
    pub fn load() -> Self {
        let config = Self::search_paths()
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::from_file(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!("humanslog: ignoring {}: {}", path.display(), e);
                    None
                },
            })
            .unwrap_or_default();

        let fallback = config.clone();
        config
            .apply_env_with(|name| env::var(name).ok())
            .unwrap_or_else(|e| {
                eprintln!("humanslog: {}", e);
                fallback
            })
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = env::var_os(CONFIG_PATH_VAR) {
            paths.push(PathBuf::from(explicit));
        }
        paths.push(PathBuf::from("config").join("humanslog.toml"));
        paths.push(PathBuf::from("humanslog.toml"));
        if let Some(home) =
            env::var_os("HOME").or_else(|| env::var_os("USERPROFILE"))
        {
            paths.push(
                PathBuf::from(home).join(".config").join("humanslog.toml"),
            );
        }
        paths
    }

    /// Apply overrides from environment variables looked up with `lookup`.
    ///
    /// - `HUMANSLOG_LEVEL`: trace, debug, info, warn or error
    /// - `HUMANSLOG_ANSI`: 1/0, true/false, yes/no, on/off
    /// - `HUMANSLOG_OUTPUT`: stdout or stderr
    /// - `NO_COLOR`: any non-empty value disables ANSI, after `HUMANSLOG_ANSI`
    pub fn apply_env_with<F>(
        mut self,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_VAR) {
            self.level = level.parse::<Severity>().map_err(|source| {
                ConfigError::Severity {
                    var: LEVEL_VAR,
                    source,
                }
            })?;
        }
        if let Some(value) = lookup(ANSI_VAR) {
            self.enable_ansi =
                parse_flag(&value).ok_or(ConfigError::Env {
                    var: ANSI_VAR,
                    value,
                })?;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            self.enable_ansi = false;
        }
        if let Some(value) = lookup(OUTPUT_VAR) {
            self.output = match value.trim().to_ascii_lowercase().as_str() {
                "stdout" => Output::Stdout,
                "stderr" => Output::Stderr,
                _ =>
                    return Err(ConfigError::Env {
                        var: OUTPUT_VAR,
                        value,
                    }),
            };
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{
        collections::HashMap,
        io::Write,
    };

    fn env_of(
        vars: &[(&str, &str)]
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_full_file() {
        let config = HumanLogConfig::parse(
            "level = \"debug\"\nenable_ansi = false\noutput = \"stderr\"\n",
        )
        .unwrap();
        assert_eq!(
            config,
            HumanLogConfig {
                level: Severity::Debug,
                enable_ansi: false,
                output: Output::Stderr,
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = HumanLogConfig::parse("level = \"warning\"").unwrap();
        assert_eq!(config, HumanLogConfig::default().with_level(Severity::Warn));
        assert_eq!(HumanLogConfig::parse("").unwrap(), HumanLogConfig::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = HumanLogConfig::parse("colour = true");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = \"error\"").unwrap();

        let config = HumanLogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.level, Severity::Error);
        assert!(config.enable_ansi);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HumanLogConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let config = HumanLogConfig::default()
            .apply_env_with(env_of(&[
                (LEVEL_VAR, "TRACE"),
                (ANSI_VAR, "off"),
                (OUTPUT_VAR, "stderr"),
            ]))
            .unwrap();
        assert_eq!(
            config,
            HumanLogConfig {
                level: Severity::Trace,
                enable_ansi: false,
                output: Output::Stderr,
            }
        );
    }

    #[test]
    fn test_no_color_wins_over_ansi_flag() {
        let config = HumanLogConfig::default()
            .apply_env_with(env_of(&[(ANSI_VAR, "1"), (NO_COLOR_VAR, "1")]))
            .unwrap();
        assert!(!config.enable_ansi);

        let config = HumanLogConfig::default()
            .apply_env_with(env_of(&[(NO_COLOR_VAR, "")]))
            .unwrap();
        assert!(config.enable_ansi);
    }

    #[test]
    fn test_invalid_env_values() {
        let result = HumanLogConfig::default()
            .apply_env_with(env_of(&[(LEVEL_VAR, "loud")]));
        assert!(matches!(
            result,
            Err(ConfigError::Severity { var: LEVEL_VAR, .. })
        ));

        let result = HumanLogConfig::default()
            .apply_env_with(env_of(&[(OUTPUT_VAR, "syslog")]));
        assert!(matches!(
            result,
            Err(ConfigError::Env { var: OUTPUT_VAR, .. })
        ));
    }
}
