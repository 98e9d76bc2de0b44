//! Locale selection for rendered error messages.

/// Languages available for message rendering (i18n).
///
/// Stored in the global [`ErrorConfig`](crate::ErrorConfig); every
/// [`ErrorDomain`](crate::ErrorDomain) ships a template per language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// American English.
    #[default]
    EnUs,
    /// Brazilian Portuguese.
    PtBr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::EnUs);
    }
}
