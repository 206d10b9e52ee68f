use std::ops::Deref;
use std::path::Path;

use gtk::glib::clone;
use gtk::prelude::*;
use gtk::{gdk, glib, AboutDialog, IconLookupFlags, IconTheme, TextDirection, Window};
use log::info;

use crate::about::{AboutContent, AppInfo};
use crate::error::AboutError;
use crate::i18n::Localizer;
use crate::versions::LibraryVersions;

pub static LOGO_ICON_NAME: &str = "org.mypaint.MyPaint";

/// An application the about dialog can describe.
pub trait AboutApp: AppInfo {
    fn logo(&self) -> &gdk::Paintable;
}

pub struct PaintApp {
    pub version: Option<String>,
    pub logo: gdk::Paintable,
}

impl PaintApp {
    pub fn new(version: Option<String>, logo: gdk::Paintable) -> PaintApp {
        PaintApp { version, logo }
    }

    /// Loads the logo from an image file.
    pub fn with_logo_file<P>(version: Option<String>, path: P) -> Result<PaintApp, AboutError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(AboutError::InvalidArgument(
                "logo path is empty".to_string(),
            ));
        }
        let texture = gdk::Texture::from_filename(path)?;
        Ok(PaintApp::new(version, texture.upcast()))
    }

    /// Uses the themed application icon as the logo.
    pub fn with_themed_logo(version: Option<String>, display: &gdk::Display) -> PaintApp {
        let icon = IconTheme::for_display(display).lookup_icon(
            LOGO_ICON_NAME,
            &["image-missing"],
            128,
            1,
            TextDirection::None,
            IconLookupFlags::empty(),
        );
        PaintApp::new(version, icon.upcast())
    }
}

impl AppInfo for PaintApp {
    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl AboutApp for PaintApp {
    fn logo(&self) -> &gdk::Paintable {
        &self.logo
    }
}

/// Owns a shown dialog and destroys it when dropped.
struct DialogGuard(AboutDialog);

impl DialogGuard {
    /// Shows the dialog and blocks until it is dismissed.
    fn run(&self) {
        let main_loop = glib::MainLoop::new(None, false);
        self.0.connect_close_request(clone!(
            #[strong]
            main_loop,
            move |_| {
                main_loop.quit();
                glib::Propagation::Proceed
            }
        ));
        self.0.connect_destroy(clone!(
            #[strong]
            main_loop,
            move |_| main_loop.quit()
        ));
        self.0.present();
        info!("About dialog shown");
        main_loop.run();
    }
}

impl Deref for DialogGuard {
    type Target = AboutDialog;

    fn deref(&self) -> &AboutDialog {
        &self.0
    }
}

impl Drop for DialogGuard {
    fn drop(&mut self) {
        self.0.destroy();
        info!("About dialog closed");
    }
}

pub fn build_about_dialog(content: &AboutContent, logo: &gdk::Paintable) -> AboutDialog {
    let dialog = AboutDialog::builder()
        .modal(true)
        .program_name(content.program_name.as_str())
        .version(content.version.as_str())
        .copyright(content.copyright.as_str())
        .website(content.website.as_str())
        .logo(logo)
        .license(content.license.as_str())
        .wrap_license(true)
        .authors(content.authors.clone())
        .artists(content.artists.clone())
        .build();
    dialog.set_translator_credits(content.translator_credits.as_deref());
    dialog
}

/// Runs the about window as a transient modal dialog.
pub fn run_about_dialog<W, A>(
    parent: Option<&W>,
    app: &A,
    localizer: &dyn Localizer,
    versions: &LibraryVersions,
) where
    W: IsA<Window>,
    A: AboutApp,
{
    let content = AboutContent::assemble(app, localizer, versions);
    show_modal(build_about_dialog(&content, app.logo()), parent);
}

/// Shows `dialog` modally over `parent`, blocks until it is dismissed and
/// destroys it. The returned reference no longer upgrades once the dialog
/// has been released.
pub fn show_modal<W>(dialog: AboutDialog, parent: Option<&W>) -> glib::WeakRef<AboutDialog>
where
    W: IsA<Window>,
{
    let weak = dialog.downgrade();
    let dialog = DialogGuard(dialog);
    dialog.set_transient_for(parent);
    dialog.run();
    weak
}
