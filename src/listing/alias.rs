use std::collections::HashMap;

/// Fixed short aliases keyed by exact package identifier.
///
/// Takes precedence over name-derived aliases. Injectable so callers and
/// tests can extend or replace the defaults.
#[derive(Debug, Clone)]
pub struct SpecialAliases {
    table: HashMap<String, String>,
}

impl Default for SpecialAliases {
    fn default() -> Self {
        Self::empty()
            .with_alias("com.bitwarden.desktop", "bw")
            .with_alias("com.github.xournalpp.xournalpp", "xournal")
            .with_alias("com.spotify.Client", "sp")
    }
}

impl SpecialAliases {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with_alias(mut self, app_id: &str, alias: &str) -> Self {
        self.table.insert(app_id.to_string(), alias.to_string());
        self
    }

    pub fn get(&self, app_id: &str) -> Option<&str> {
        self.table.get(app_id).map(String::as_str)
    }
}

/// Derive a generic alias from a display name: keep letters, digits and
/// spaces, collapse space runs into single hyphens, lowercase.
///
/// Returns `None` when nothing survives the stripping.
pub fn derive_alias(display_name: &str) -> Option<String> {
    let cleaned: String = display_name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let alias = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    if alias.is_empty() { None } else { Some(alias) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiword_name() {
        assert_eq!(derive_alias("My App Name").as_deref(), Some("my-app-name"));
    }

    #[test]
    fn test_symbols_stripped() {
        assert_eq!(derive_alias("K-9 Mail!").as_deref(), Some("k9-mail"));
        assert_eq!(derive_alias("OBS Studio (beta)").as_deref(), Some("obs-studio-beta"));
    }

    #[test]
    fn test_symbol_only_name_yields_none() {
        assert_eq!(derive_alias("***"), None);
        assert_eq!(derive_alias("  "), None);
        assert_eq!(derive_alias(""), None);
    }

    #[test]
    fn test_default_special_table() {
        let specials = SpecialAliases::default();
        assert_eq!(specials.get("com.bitwarden.desktop"), Some("bw"));
        assert_eq!(specials.get("com.github.xournalpp.xournalpp"), Some("xournal"));
        assert_eq!(specials.get("com.spotify.Client"), Some("sp"));
        assert_eq!(specials.get("org.libreoffice.LibreOffice"), None);
    }

    #[test]
    fn test_special_table_is_extensible() {
        let specials = SpecialAliases::default().with_alias("org.mozilla.firefox", "fx");
        assert_eq!(specials.get("org.mozilla.firefox"), Some("fx"));
        assert_eq!(specials.get("com.spotify.Client"), Some("sp"));
    }
}
