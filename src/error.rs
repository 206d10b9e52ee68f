use std::fmt;

#[derive(Debug)]
pub enum AboutError {
    IoError(std::io::Error),
    IniError(ini::Error),
    JsonError(serde_json::Error),
    InvalidArgument(String),
    #[cfg(feature = "gui")]
    GlibError(gtk::glib::Error),
}

impl From<std::io::Error> for AboutError {
    fn from(error: std::io::Error) -> Self {
        AboutError::IoError(error)
    }
}

impl From<ini::Error> for AboutError {
    fn from(error: ini::Error) -> Self {
        AboutError::IniError(error)
    }
}

impl From<serde_json::Error> for AboutError {
    fn from(error: serde_json::Error) -> Self {
        AboutError::JsonError(error)
    }
}

#[cfg(feature = "gui")]
impl From<gtk::glib::Error> for AboutError {
    fn from(error: gtk::glib::Error) -> Self {
        AboutError::GlibError(error)
    }
}

impl fmt::Display for AboutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AboutError::IoError(e) => write!(f, "IO: {}", e),
            AboutError::IniError(e) => write!(f, "IniError: {}", e),
            AboutError::JsonError(e) => write!(f, "JsonError: {}", e),
            AboutError::InvalidArgument(s) => write!(f, "InvalidArgument: {}", s),
            #[cfg(feature = "gui")]
            AboutError::GlibError(e) => write!(f, "GlibError: {}", e),
        }
    }
}

impl std::error::Error for AboutError {}
