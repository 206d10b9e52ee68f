//! Version probes for the GTK stack the dialog runs on.

use std::ffi::CStr;
use std::os::raw::c_char;

use gtk::{cairo, gdk_pixbuf, glib};

use crate::versions::{format_triple, VersionProbe};

fn gtk_version() -> String {
    format_triple(
        gtk::major_version(),
        gtk::minor_version(),
        gtk::micro_version(),
    )
}

/// # Safety
///
/// `s` must be null or point at a NUL-terminated string that outlives the call.
unsafe fn library_string(s: *const c_char) -> String {
    if s.is_null() {
        return String::new();
    }
    CStr::from_ptr(s).to_string_lossy().into_owned()
}

fn gdk_pixbuf_version() -> String {
    // SAFETY: a string constant exported by the loaded library.
    unsafe { library_string(gdk_pixbuf::ffi::gdk_pixbuf_version) }
}

// The C library's version, which can differ from the cairo-rs binding's.
fn cairo_version() -> String {
    // SAFETY: cairo returns a static NUL-terminated string.
    unsafe { library_string(cairo::ffi::cairo_version_string()) }
}

fn glib_version() -> String {
    // SAFETY: plain integers set when libglib is loaded.
    unsafe {
        format_triple(
            glib::ffi::glib_major_version,
            glib::ffi::glib_minor_version,
            glib::ffi::glib_micro_version,
        )
    }
}

pub const GTK: VersionProbe = VersionProbe::new("GTK", gtk_version);
pub const GDK_PIXBUF: VersionProbe = VersionProbe::new("GdkPixbuf", gdk_pixbuf_version);
pub const CAIRO: VersionProbe = VersionProbe::new("Cairo", cairo_version);
pub const GLIB: VersionProbe = VersionProbe::new("GLib", glib_version);

/// Probes for every toolkit library linked in, in display order.
pub fn toolkit() -> [VersionProbe; 4] {
    [GTK, GDK_PIXBUF, CAIRO, GLIB]
}
