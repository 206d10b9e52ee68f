#![windows_subsystem = "windows"]

use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use gettextrs::{bindtextdomain, setlocale, textdomain, LocaleCategory};
use gtk::gio::{ActionEntry, Menu};
use gtk::glib::clone;
use gtk::prelude::*;
use gtk::{glib, Application, ApplicationWindow, Label};
use log::{debug, error, warn};

use mypaint_about::about::AboutContent;
use mypaint_about::config::AboutConfig;
use mypaint_about::error::AboutError;
use mypaint_about::gui::about_dialog::{run_about_dialog, PaintApp};
use mypaint_about::i18n::GettextLocalizer;
use mypaint_about::meta::PROGRAM_NAME;
use mypaint_about::versions::LibraryVersions;

static GETTEXT_PACKAGE: &str = "mypaint";
static LOCALE_DIR: &str = "/usr/share/locale";

/// Show MyPaint's about dialog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// INI file with an [about] section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Version to report instead of the built-in one
    #[arg(long)]
    app_version: Option<String>,

    /// Image file to use as the logo
    #[arg(short, long)]
    logo: Option<PathBuf>,

    /// Print the dialog contents as JSON and exit
    #[arg(short, long)]
    print: bool,
}

fn main() -> glib::ExitCode {
    env_logger::init();
    let args = Args::parse();
    setup_gettext();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(err) => {
            error!("{}", err);
            return glib::ExitCode::FAILURE;
        }
    };
    let mut versions = LibraryVersions::default_stack();
    if let Some(libraries) = &config.libraries {
        if let Err(err) = versions.retain_named(libraries) {
            error!("{}", err);
            return glib::ExitCode::FAILURE;
        }
    }

    if args.print {
        return match print_content(&config, &versions) {
            Ok(()) => glib::ExitCode::SUCCESS,
            Err(err) => {
                error!("{}", err);
                glib::ExitCode::FAILURE
            }
        };
    }

    let application = Application::builder()
        .application_id("org.mypaint.About")
        .build();

    application.connect_activate(move |app| {
        let menubar = Menu::new();
        let help_menu = Menu::new();
        help_menu.append(Some("About"), Some("win.open-about"));
        menubar.append_submenu(Some("Help"), &help_menu);
        app.set_menubar(Some(&menubar));

        let window = ApplicationWindow::builder()
            .application(app)
            .title(PROGRAM_NAME)
            .default_width(350)
            .default_height(70)
            .show_menubar(true)
            .child(&Label::new(Some("Help \u{2192} About")))
            .build();

        let paint_app = Rc::new(paint_app(&config, &window));
        let versions = versions.clone();
        let action_about = ActionEntry::builder("open-about")
            .activate(clone!(
                #[strong]
                paint_app,
                move |window: &ApplicationWindow, _, _| {
                    run_about_dialog(
                        Some(window),
                        paint_app.as_ref(),
                        &GettextLocalizer,
                        &versions,
                    );
                }
            ))
            .build();
        window.add_action_entries([action_about]);
        window.present();
    });

    // clap already consumed the command line.
    let program = std::env::args().next().unwrap_or_default();
    application.run_with_args(&[program])
}

fn setup_gettext() {
    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = bindtextdomain(GETTEXT_PACKAGE, LOCALE_DIR) {
        warn!("Unable to bind the text domain: {}", err);
    }
    if let Err(err) = textdomain(GETTEXT_PACKAGE) {
        warn!("Unable to switch to the text domain: {}", err);
    }
}

fn load_config(args: &Args) -> Result<AboutConfig, AboutError> {
    let from_file = match &args.config {
        Some(path) => AboutConfig::load(path)?,
        None => AboutConfig::default(),
    };
    let from_args = AboutConfig {
        version: args.app_version.clone(),
        logo: args.logo.clone(),
        libraries: None,
    };
    let config = from_file.merge(from_args);
    debug!("Effective config: {:?}", config);
    Ok(config)
}

fn print_content(config: &AboutConfig, versions: &LibraryVersions) -> Result<(), AboutError> {
    struct Headless(Option<String>);
    impl mypaint_about::about::AppInfo for Headless {
        fn version(&self) -> Option<&str> {
            self.0.as_deref()
        }
    }
    let content = AboutContent::assemble(
        &Headless(config.version.clone()),
        &GettextLocalizer,
        versions,
    );
    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}

fn paint_app(config: &AboutConfig, window: &ApplicationWindow) -> PaintApp {
    if let Some(path) = &config.logo {
        match PaintApp::with_logo_file(config.version.clone(), path) {
            Ok(app) => return app,
            Err(err) => error!("Could not load logo {}: {}", path.display(), err),
        }
    }
    PaintApp::with_themed_logo(config.version.clone(), &window.display())
}
