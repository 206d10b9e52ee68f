use std::borrow::Cow;

use xml::escape::escape_str_pcdata;

/// Escapes `&`, `<` and `>` so the text renders literally in Pango markup.
pub fn escape(text: &str) -> Cow<'_, str> {
    escape_str_pcdata(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<small>"), "&lt;small&gt;");
    }

    #[test]
    fn plain_text_is_borrowed_unchanged() {
        let text = "Copyright (C) 2005-2017";
        let escaped = escape(text);
        assert!(matches!(escaped, Cow::Borrowed(_)));
        assert_eq!(escaped, text);
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape("Сан Саныч ‘MrMamurk’"), "Сан Саныч ‘MrMamurk’");
    }
}
