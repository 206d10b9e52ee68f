use std::path::{Path, PathBuf};

use ini::{Ini, Properties};
use log::{debug, warn};

use crate::error::AboutError;

pub static ABOUT_SECTION: &str = "about";

/// Host-side overrides for the about dialog, read from an INI file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutConfig {
    pub version: Option<String>,
    pub logo: Option<PathBuf>,
    pub libraries: Option<Vec<String>>,
}

impl AboutConfig {
    pub fn load<P>(path: P) -> Result<AboutConfig, AboutError>
    where
        P: AsRef<Path>,
    {
        debug!("Reading about config {}", path.as_ref().display());
        let ini = Ini::load_from_file(path)?;
        Ok(AboutConfig::from_ini(&ini))
    }

    pub fn parse(text: &str) -> Result<AboutConfig, AboutError> {
        let ini = Ini::load_from_str(text).map_err(|e| AboutError::IniError(ini::Error::Parse(e)))?;
        Ok(AboutConfig::from_ini(&ini))
    }

    pub fn from_ini(ini: &Ini) -> AboutConfig {
        match ini.section(Some(ABOUT_SECTION)) {
            Some(section) => AboutConfig::from_section(section),
            None => {
                warn!("No [{}] section in config, using defaults", ABOUT_SECTION);
                AboutConfig::default()
            }
        }
    }

    fn from_section(section: &Properties) -> AboutConfig {
        for (key, _) in section.iter() {
            if !["version", "logo", "libraries"].contains(&key) {
                warn!("Ignoring unknown config key {:?}", key);
            }
        }
        AboutConfig {
            version: non_empty(section.get("version")).map(|s| s.to_string()),
            logo: non_empty(section.get("logo")).map(PathBuf::from),
            libraries: non_empty(section.get("libraries"))
                .map(|s| {
                    s.split(',')
                        .map(|l| l.trim())
                        .filter(|l| !l.is_empty())
                        .map(|l| l.to_string())
                        .collect::<Vec<String>>()
                })
                .filter(|l| !l.is_empty()),
        }
    }

    /// Values from `other` replace ours where set.
    pub fn merge(self, other: AboutConfig) -> AboutConfig {
        AboutConfig {
            version: other.version.or(self.version),
            logo: other.logo.or(self.logo),
            libraries: other.libraries.or(self.libraries),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_all_keys() {
        let config = AboutConfig::parse(
            "[about]\nversion = 2.0.1\nlogo = /tmp/logo.png\nlibraries = Rust, GTK ,GLib\n",
        )
        .unwrap();
        assert_eq!(config.version.as_deref(), Some("2.0.1"));
        assert_eq!(config.logo, Some(PathBuf::from("/tmp/logo.png")));
        assert_eq!(
            config.libraries,
            Some(vec!["Rust".to_string(), "GTK".to_string(), "GLib".to_string()])
        );
    }

    #[test]
    fn missing_section_and_empty_values_are_defaults() {
        assert_eq!(AboutConfig::parse("[other]\nx = 1\n").unwrap(), AboutConfig::default());
        assert_eq!(
            AboutConfig::parse("[about]\nversion =\n").unwrap(),
            AboutConfig::default()
        );
    }

    #[test]
    fn blank_library_list_keeps_default_set() {
        let config = AboutConfig::parse("[about]\nlibraries = , ,\n").unwrap();
        assert_eq!(config.libraries, None);
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[about]").unwrap();
        writeln!(file, "version = 1.2.3").unwrap();
        let config = AboutConfig::load(file.path()).unwrap();
        assert_eq!(config.version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AboutConfig::load(dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, AboutError::IniError(ini::Error::Io(_))));
    }

    #[test]
    fn later_values_override() {
        let file = AboutConfig {
            version: Some("1.0".to_string()),
            logo: Some(PathBuf::from("a.png")),
            libraries: None,
        };
        let cli = AboutConfig {
            version: Some("2.0".to_string()),
            ..AboutConfig::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.version.as_deref(), Some("2.0"));
        assert_eq!(merged.logo, Some(PathBuf::from("a.png")));
    }
}
