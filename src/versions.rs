//! Versions of the runtime and the libraries the dialog is shown with.

use log::warn;
use serde::Serialize;

use crate::error::AboutError;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryVersion {
    pub name: &'static str,
    pub version: String,
}

/// Queries one library for its version each time it is called.
#[derive(Clone, Copy)]
pub struct VersionProbe {
    pub name: &'static str,
    pub probe: fn() -> String,
}

impl VersionProbe {
    pub const fn new(name: &'static str, probe: fn() -> String) -> VersionProbe {
        VersionProbe { name, probe }
    }

    pub fn query(&self) -> LibraryVersion {
        let version = (self.probe)();
        let version = if version.trim().is_empty() {
            UNKNOWN.to_string()
        } else {
            version
        };
        LibraryVersion {
            name: self.name,
            version,
        }
    }
}

pub fn format_triple(major: u32, minor: u32, micro: u32) -> String {
    format!("{}.{}.{}", major, minor, micro)
}

fn rust_version() -> String {
    option_env!("MYPAINT_ABOUT_RUSTC_VERSION")
        .unwrap_or(UNKNOWN)
        .to_string()
}

pub const RUST: VersionProbe = VersionProbe::new("Rust", rust_version);

#[derive(Clone)]
pub struct LibraryVersions {
    probes: Vec<VersionProbe>,
}

impl LibraryVersions {
    pub fn new() -> LibraryVersions {
        LibraryVersions { probes: Vec::new() }
    }

    /// Just the language runtime.
    pub fn runtime() -> LibraryVersions {
        LibraryVersions { probes: vec![RUST] }
    }

    /// The runtime plus every toolkit library compiled in.
    pub fn default_stack() -> LibraryVersions {
        #[allow(unused_mut)]
        let mut versions = LibraryVersions::runtime();
        #[cfg(feature = "gui")]
        versions.extend(crate::gui::versions::toolkit());
        versions
    }

    pub fn push(&mut self, probe: VersionProbe) {
        self.probes.push(probe);
    }

    pub fn extend<I: IntoIterator<Item = VersionProbe>>(&mut self, probes: I) {
        self.probes.extend(probes);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name).collect()
    }

    /// Keeps only the probes named in `names`, compared case-insensitively.
    /// Probe order is kept; an empty list or names matching no probe are
    /// an error.
    pub fn retain_named<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), AboutError> {
        if names.is_empty() {
            return Err(AboutError::InvalidArgument(
                "library list is empty".to_string(),
            ));
        }
        for name in names {
            let name = name.as_ref();
            if !self.probes.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
                warn!("No version probe called {:?}", name);
                return Err(AboutError::InvalidArgument(format!(
                    "unknown library {:?}, expected one of: {}",
                    name,
                    self.names().join(", ")
                )));
            }
        }
        self.probes
            .retain(|p| names.iter().any(|n| p.name.eq_ignore_ascii_case(n.as_ref())));
        Ok(())
    }

    pub fn query(&self) -> Vec<LibraryVersion> {
        self.probes.iter().map(|p| p.query()).collect()
    }

    /// `"Name version, Name version, ..."`, recomputed on every call.
    pub fn describe(&self) -> String {
        self.query()
            .iter()
            .map(|v| format!("{} {}", v.name, v.version))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl Default for LibraryVersions {
    fn default() -> LibraryVersions {
        LibraryVersions::default_stack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_gtk() -> String {
        format_triple(4, 14, 2)
    }

    fn fake_cairo() -> String {
        "1.18.0".to_string()
    }

    fn broken() -> String {
        String::new()
    }

    fn sample() -> LibraryVersions {
        let mut versions = LibraryVersions::new();
        versions.push(VersionProbe::new("GTK", fake_gtk));
        versions.push(VersionProbe::new("Cairo", fake_cairo));
        versions
    }

    #[test]
    fn describe_joins_entries_in_probe_order() {
        assert_eq!(sample().describe(), "GTK 4.14.2, Cairo 1.18.0");
    }

    #[test]
    fn describe_is_stable_across_calls() {
        let versions = LibraryVersions::runtime();
        assert_eq!(versions.describe(), versions.describe());
    }

    #[test]
    fn one_non_empty_entry_per_probe() {
        let mut versions = sample();
        versions.push(VersionProbe::new("Broken", broken));
        let described = versions.describe();
        let entries = described.split(", ").collect::<Vec<_>>();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| !e.is_empty()));
        assert_eq!(entries[2], "Broken unknown");
    }

    #[test]
    fn runtime_lists_rust_first() {
        let described = LibraryVersions::runtime().describe();
        assert!(described.starts_with("Rust "), "{}", described);
        assert_eq!(LibraryVersions::default_stack().names()[0], "Rust");
    }

    #[test]
    fn retain_named_filters_case_insensitively() {
        let mut versions = sample();
        versions.retain_named(&["cairo"]).unwrap();
        assert_eq!(versions.names(), vec!["Cairo"]);
    }

    #[test]
    fn retain_named_rejects_empty_list() {
        let mut versions = LibraryVersions::runtime();
        let err = versions.retain_named::<&str>(&[]).unwrap_err();
        assert!(matches!(err, AboutError::InvalidArgument(_)));
        assert!(versions.describe().starts_with("Rust "));
    }

    #[test]
    fn retain_named_rejects_unknown_libraries() {
        let mut versions = sample();
        let err = versions.retain_named(&["Qt"]).unwrap_err();
        assert!(matches!(err, AboutError::InvalidArgument(_)));
        assert_eq!(versions.names(), vec!["GTK", "Cairo"]);
    }
}
