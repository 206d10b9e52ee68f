use crate::markup::escape;

/// Operating system whose builds are released per architecture.
pub const ARCH_SUFFIXED_OS: &str = "windows";

const ARCH_SUFFIXES: &[(&str, &str)] = &[("32bit", "w32"), ("64bit", "w64")];

pub fn current_os() -> &'static str {
    std::env::consts::OS
}

pub fn detected_bits() -> &'static str {
    if cfg!(target_pointer_width = "64") {
        "64bit"
    } else if cfg!(target_pointer_width = "32") {
        "32bit"
    } else {
        "16bit"
    }
}

/// Short architecture code for `bits`; unknown widths come back unchanged.
pub fn arch_suffix(bits: &str) -> &str {
    ARCH_SUFFIXES
        .iter()
        .find(|(b, _)| *b == bits)
        .map(|(_, s)| *s)
        .unwrap_or(bits)
}

/// Markup-safe program name for the about dialog title.
pub fn program_display_name(name: &str, os: &str, bits: &str) -> String {
    if os == ARCH_SUFFIXED_OS {
        format!("{} {}", escape(name), escape(arch_suffix(bits)))
    } else {
        escape(name).into_owned()
    }
}
