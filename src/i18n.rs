//! Translation lookup used by the metadata tables.
//!
//! Everything user-visible goes through a [`Localizer`] passed in by the
//! caller, so the tables can be rendered untranslated in tests.

/// A message marked for translation, with its disambiguating context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msg {
    pub context: &'static str,
    pub text: &'static str,
}

impl Msg {
    pub const fn new(context: &'static str, text: &'static str) -> Msg {
        Msg { context, text }
    }

    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        localizer.pgettext(self.context, self.text)
    }
}

pub trait Localizer {
    /// Looks up `msgid` under `context`, returning `msgid` itself when no
    /// translation exists.
    fn pgettext(&self, context: &str, msgid: &str) -> String;
}

/// Returns every message untranslated.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn pgettext(&self, _context: &str, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Looks messages up in the process-wide gettext catalogue.
#[cfg(feature = "gui")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GettextLocalizer;

#[cfg(feature = "gui")]
impl Localizer for GettextLocalizer {
    fn pgettext(&self, context: &str, msgid: &str) -> String {
        gettextrs::pgettext(context, msgid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Table(HashMap<(&'static str, &'static str), &'static str>);

    impl Localizer for Table {
        fn pgettext(&self, context: &str, msgid: &str) -> String {
            self.0
                .iter()
                .find(|((c, m), _)| *c == context && *m == msgid)
                .map(|(_, t)| t.to_string())
                .unwrap_or_else(|| msgid.to_string())
        }
    }

    #[test]
    fn identity_returns_source_text() {
        let msg = Msg::new("About dialog: credits: tasks", "programming");
        assert_eq!(msg.resolve(&IdentityLocalizer), "programming");
    }

    #[test]
    fn context_disambiguates_lookups() {
        let mut map = HashMap::new();
        map.insert(("menu", "Open"), "Öffnen");
        let table = Table(map);
        assert_eq!(Msg::new("menu", "Open").resolve(&table), "Öffnen");
        assert_eq!(Msg::new("button", "Open").resolve(&table), "Open");
    }
}
