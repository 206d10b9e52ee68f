//! Contributor credit tables.
//!
//! Contributors are listed in order of their appearance. Names are always
//! written in their native script and are not translated. A name may carry
//! a transcription in brackets and/or a quoted ’nym in Latin script; for
//! given-name/surname combinations a publicly known alias goes after the
//! given name.

use crate::i18n::{Localizer, Msg};

/// A kind of contribution, shown in brackets after a contributor's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Programming,
    Porting,
    ProjectManagement,
    Brushes,
    Patterns,
    ToolIcons,
    AppIcon,
    Palettes,
    Docs,
    Support,
    Outreach,
    Community,
}

impl Task {
    pub fn msg(self) -> Msg {
        match self {
            Task::Programming => Msg::new("About dialog: credits: tasks", "programming"),
            Task::Porting => Msg::new("About dialog: credits: tasks", "portability"),
            Task::ProjectManagement => {
                Msg::new("About dialog: credits: tasks", "project management")
            }
            Task::Brushes => Msg::new(
                "About dialog: credits: tasks: brush presets and icons",
                "brushes",
            ),
            Task::Patterns => Msg::new(
                "About dialog: credits: tasks: background paper textures",
                "patterns",
            ),
            Task::ToolIcons => Msg::new(
                "About dialog: credits: tasks: icons for internal tools",
                "tool icons",
            ),
            Task::AppIcon => Msg::new(
                "About dialog: credits: tasks: the main application icon",
                "desktop icon",
            ),
            Task::Palettes => Msg::new("About dialog: credits: tasks: palettes", "palettes"),
            Task::Docs => Msg::new(
                "About dialog: credits: tasks: docs, manuals and HOWTOs",
                "documentation",
            ),
            Task::Support => Msg::new("About dialog: credits: tasks: user support", "support"),
            Task::Outreach => Msg::new(
                "About dialog: credits: tasks: outreach (social media, ads?)",
                "outreach",
            ),
            Task::Community => Msg::new(
                "About dialog: credits: tasks: running or building a community",
                "community",
            ),
        }
    }

    pub fn label(self, localizer: &dyn Localizer) -> String {
        self.msg().resolve(localizer)
    }
}

pub const TASK_JOINER: Msg = Msg::new("About dialog: credits: tasks: joiner punctuation", ", ");

pub const TRANSLATOR_CREDITS: Msg = Msg::new(
    "About dialog: credits: translator credits (your name(s) here!)",
    "translator-credits",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditEntry {
    pub name: &'static str,
    pub tasks: &'static [Task],
}

impl CreditEntry {
    pub const fn new(name: &'static str, tasks: &'static [Task]) -> CreditEntry {
        CreditEntry { name, tasks }
    }

    /// Renders `"Name (task1, task2)"`, keeping the tasks in table order.
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        if self.tasks.is_empty() {
            return self.name.to_string();
        }
        let joiner = TASK_JOINER.resolve(localizer);
        let tasks = self
            .tasks
            .iter()
            .map(|t| t.label(localizer))
            .collect::<Vec<String>>()
            .join(&joiner);
        format!("{} ({})", self.name, tasks)
    }
}

use Task::*;

pub const AUTHOR_CREDITS: &[CreditEntry] = &[
    CreditEntry::new("Martin Renold", &[Programming]),
    CreditEntry::new("Yves Combe", &[Porting]),
    CreditEntry::new("Popolon", &[Programming]),
    CreditEntry::new("Clement Skau", &[Programming]),
    CreditEntry::new("Jon Nordby", &[Programming]),
    CreditEntry::new("Álinson Santos", &[Programming]),
    CreditEntry::new("Tumagonx", &[Porting]),
    CreditEntry::new("Ilya Portnov", &[Programming]),
    CreditEntry::new("Jonas Wagner", &[Programming]),
    CreditEntry::new("Luka Čehovin", &[Programming]),
    CreditEntry::new("Andrew Chadwick", &[Programming, ProjectManagement, Porting]),
    CreditEntry::new("Till Hartmann", &[Programming]),
    CreditEntry::new("David Grundberg", &[Programming]),
    CreditEntry::new("Krzysztof Pasek", &[Programming]),
    CreditEntry::new("Ben O’Steen", &[Programming]),
    CreditEntry::new("Ferry Jérémie", &[Programming]),
    CreditEntry::new("しげっち ‘sigetch’", &[Programming]),
    CreditEntry::new("Richard Jones", &[Programming]),
    CreditEntry::new("David Gowers", &[Programming]),
    CreditEntry::new("Micael Dias", &[Programming]),
    CreditEntry::new("Anna Harren", &[Community, Programming, Docs]),
    CreditEntry::new("Sebastien Leon", &[Programming]),
    CreditEntry::new("Ali Lown", &[Programming]),
    CreditEntry::new("Brien Dieterle", &[Programming]),
    CreditEntry::new("Jenny Wong", &[Programming]),
    CreditEntry::new("Dmitry Utkin ‘loentar’", &[Programming]),
    CreditEntry::new("ShadowKyogre", &[Programming]),
    CreditEntry::new("Albert Westra", &[Community, Programming]),
    CreditEntry::new("Cortexer", &[Programming]),
    CreditEntry::new("Elliott Sales de Andrade", &[Porting]),
    CreditEntry::new("Alberto Leiva Popper", &[Programming]),
    CreditEntry::new("Alinson Xavier", &[Programming]),
];

pub const ARTIST_CREDITS: &[CreditEntry] = &[
    CreditEntry::new("Artis Rozentāls", &[Brushes]),
    CreditEntry::new("Popolon", &[Brushes]),
    CreditEntry::new("Marcelo ‘Tanda’ Cerviño", &[Patterns, Brushes]),
    CreditEntry::new("David Revoy", &[Brushes, ToolIcons, Outreach]),
    CreditEntry::new("Ramón Miranda", &[Brushes, Patterns]),
    CreditEntry::new("Enrico Guarnieri ‘Ico_dY’", &[Brushes]),
    CreditEntry::new("Sebastian Kraft", &[AppIcon]),
    CreditEntry::new("Nicola Lunghi", &[Patterns]),
    CreditEntry::new("Toni Kasurinen", &[Brushes]),
    CreditEntry::new("Сан Саныч ‘MrMamurk’", &[Patterns]),
    CreditEntry::new("Andrew Chadwick", &[ToolIcons]),
    CreditEntry::new("Ben O’Steen", &[ToolIcons]),
    CreditEntry::new("Guillaume Loussarévian ‘Kaerhon’", &[Brushes]),
    CreditEntry::new("Jakub Steiner ‘jimmac’", &[AppIcon, Palettes]),
    CreditEntry::new("ShadowKyogre", &[ToolIcons]),
    CreditEntry::new("Albert Westra", &[ToolIcons]),
];

pub fn render_credits(entries: &[CreditEntry], localizer: &dyn Localizer) -> Vec<String> {
    entries.iter().map(|e| e.render(localizer)).collect()
}

pub fn authors(localizer: &dyn Localizer) -> Vec<String> {
    render_credits(AUTHOR_CREDITS, localizer)
}

pub fn artists(localizer: &dyn Localizer) -> Vec<String> {
    render_credits(ARTIST_CREDITS, localizer)
}

/// The translators' own credit line, or `None` while the current locale
/// has not filled in the placeholder.
pub fn translator_credits(localizer: &dyn Localizer) -> Option<String> {
    let credits = TRANSLATOR_CREDITS.resolve(localizer);
    if credits.is_empty() || credits == TRANSLATOR_CREDITS.text {
        return None;
    }
    Some(credits)
}
