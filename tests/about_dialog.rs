#![cfg(feature = "gui")]

use gtk::prelude::*;
use gtk::{gdk, glib, AboutDialog, Window};

use mypaint_about::about::AboutContent;
use mypaint_about::gui::about_dialog::{build_about_dialog, show_modal, PaintApp};
use mypaint_about::gui::versions::{CAIRO, GDK_PIXBUF, GLIB};
use mypaint_about::i18n::IdentityLocalizer;
use mypaint_about::versions::LibraryVersions;

fn logo() -> gdk::Paintable {
    let bytes = glib::Bytes::from_owned(vec![0u8; 4 * 4 * 4]);
    gdk::MemoryTexture::new(4, 4, gdk::MemoryFormat::R8g8b8a8, &bytes, 16).upcast()
}

fn about_dialogs() -> Vec<Window> {
    Window::list_toplevels()
        .into_iter()
        .filter_map(|w| w.downcast::<Window>().ok())
        .filter(|w| w.is::<AboutDialog>())
        .collect()
}

// GTK may only be initialized from one thread, so every scenario that
// needs a display lives in this one test.
#[test]
fn dialog_is_populated_and_released_after_dismissal() {
    if gtk::init().is_err() {
        eprintln!("No display available, skipping");
        return;
    }
    let app = PaintApp::new(Some("2.0.1".to_string()), logo());
    let versions = LibraryVersions::default_stack();
    let content = AboutContent::assemble(&app, &IdentityLocalizer, &versions);

    let dialog = build_about_dialog(&content, &logo());
    assert_eq!(dialog.program_name().as_deref(), Some(content.program_name.as_str()));
    assert!(dialog.version().unwrap().starts_with("2.0.1"));
    assert_eq!(dialog.authors().len(), content.authors.len());
    assert_eq!(dialog.artists().len(), content.artists.len());
    assert!(dialog.wraps_license());

    // Dismissed through close-request, like the close button or Escape.
    let parent = Window::new();
    glib::idle_add_local_once(|| {
        for dialog in about_dialogs() {
            dialog.close();
        }
    });
    let weak = show_modal(dialog, Some(&parent));
    assert!(weak.upgrade().is_none());
    assert!(about_dialogs().is_empty());

    // Destroyed from elsewhere without a close request.
    glib::idle_add_local_once(|| {
        for dialog in about_dialogs() {
            dialog.destroy();
        }
    });
    let weak = show_modal(build_about_dialog(&content, &logo()), Some(&parent));
    assert!(weak.upgrade().is_none());
    assert!(about_dialogs().is_empty());

    parent.destroy();
}

#[test]
fn toolkit_versions_follow_the_runtime() {
    let names = LibraryVersions::default_stack().names();
    assert_eq!(names, vec!["Rust", "GTK", "GdkPixbuf", "Cairo", "GLib"]);
}

#[test]
fn toolkit_library_versions_are_dotted_numbers() {
    for probe in [GDK_PIXBUF, CAIRO, GLIB] {
        let version = probe.query().version;
        assert!(
            version.split('.').count() >= 2
                && version.split('.').all(|p| p.chars().all(|c| c.is_ascii_digit())),
            "{} reported {:?}",
            probe.name,
            version
        );
    }
}
