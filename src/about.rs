//! Everything the about dialog displays, resolved ahead of showing it.

use log::debug;
use serde::Serialize;

use crate::credits;
use crate::i18n::Localizer;
use crate::markup::escape;
use crate::meta;
use crate::platform;
use crate::versions::LibraryVersions;

/// What the about dialog needs to know about the running application.
pub trait AppInfo {
    /// The version the application reports, if it knows one.
    fn version(&self) -> Option<&str>;
}

/// The application's own version when it has a non-empty one, otherwise
/// the built-in fallback.
pub fn effective_version(reported: Option<&str>) -> &str {
    match reported {
        Some(v) if !v.is_empty() => v,
        _ => meta::FALLBACK_VERSION,
    }
}

/// Version line followed by the library diagnostics in small print.
pub fn version_markup(version: &str, libs: &str) -> String {
    format!("{}\n\n<small>({})</small>", escape(version), escape(libs))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub program_name: String,
    pub version: String,
    pub copyright: String,
    pub website: String,
    pub license: String,
    pub authors: Vec<String>,
    pub artists: Vec<String>,
    pub translator_credits: Option<String>,
}

impl AboutContent {
    pub fn assemble(
        app: &dyn AppInfo,
        localizer: &dyn Localizer,
        versions: &LibraryVersions,
    ) -> AboutContent {
        AboutContent::assemble_for(
            app,
            localizer,
            versions,
            platform::current_os(),
            platform::detected_bits(),
        )
    }

    pub fn assemble_for(
        app: &dyn AppInfo,
        localizer: &dyn Localizer,
        versions: &LibraryVersions,
        os: &str,
        bits: &str,
    ) -> AboutContent {
        let libs = versions.describe();
        debug!("Library versions: {}", libs);
        let content = AboutContent {
            program_name: platform::program_display_name(meta::PROGRAM_NAME, os, bits),
            version: version_markup(effective_version(app.version()), &libs),
            copyright: escape(&meta::COPYRIGHT.resolve(localizer)).into_owned(),
            website: meta::WEBSITE_URI.to_string(),
            license: meta::LICENSE_SUMMARY.resolve(localizer),
            authors: credits::authors(localizer),
            artists: credits::artists(localizer),
            translator_credits: credits::translator_credits(localizer),
        };
        debug!("About {} {}", content.program_name, content.version);
        content
    }
}
