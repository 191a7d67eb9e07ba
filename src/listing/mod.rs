pub mod alias;
pub mod row;

pub use alias::{SpecialAliases, derive_alias};
pub use row::{PackageRecord, recognize_row, split_fields};

/// Ordered alias-name -> package mapping with dict semantics: insertion
/// order is preserved and overwriting an existing key keeps its original
/// position while replacing the value.
#[derive(Debug, Default)]
pub struct AliasMap {
    entries: Vec<(String, PackageRecord)>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: String, record: PackageRecord) {
        match self.entries.iter_mut().find(|(name, _)| *name == alias) {
            Some(slot) => slot.1 = record,
            None => self.entries.push((alias, record)),
        }
    }

    pub fn get(&self, alias: &str) -> Option<&PackageRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the full lister output into an alias mapping.
///
/// Unrecognized rows and names that strip down to nothing are skipped
/// silently. Later rows deriving an already-present alias name overwrite
/// the earlier mapping.
pub fn parse_listing(output: &str, specials: &SpecialAliases) -> AliasMap {
    let mut map = AliasMap::new();

    for line in output.lines() {
        let fields = split_fields(line);
        let Some(record) = recognize_row(&fields) else {
            continue;
        };
        let Some(alias) = alias_for(&record, specials) else {
            continue;
        };
        map.insert(alias, record);
    }

    map
}

/// Alias for one record: the special table wins over name derivation.
pub fn alias_for(record: &PackageRecord, specials: &SpecialAliases) -> Option<String> {
    if let Some(short) = specials.get(&record.app_id) {
        return Some(short.to_string());
    }
    derive_alias(&record.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, app_id: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            app_id: app_id.to_string(),
            version: None,
            branch: None,
            origin: None,
            installation: None,
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut map = AliasMap::new();
        map.insert("b".into(), record("B", "org.example.B"));
        map.insert("a".into(), record("A", "org.example.A"));

        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_overwrite_keeps_position_and_replaces_value() {
        let mut map = AliasMap::new();
        map.insert("app".into(), record("App", "org.example.One"));
        map.insert("other".into(), record("Other", "org.example.Other"));
        map.insert("app".into(), record("App", "org.example.Two"));

        assert_eq!(map.len(), 2);
        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["app", "other"]);
        assert_eq!(map.get("app").unwrap().app_id, "org.example.Two");
    }

    #[test]
    fn test_parse_listing_end_to_end() {
        let output = "LibreOffice\torg.libreoffice.LibreOffice\t24.2.4.2\tstable\tflathub\tsystem\n";
        let map = parse_listing(output, &SpecialAliases::default());

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("libreoffice").unwrap().app_id, "org.libreoffice.LibreOffice");
    }

    #[test]
    fn test_special_alias_wins() {
        let output = "Bitwarden\tcom.bitwarden.desktop\t2024.6.2\tstable\tflathub\tsystem\n";
        let map = parse_listing(output, &SpecialAliases::default());

        assert_eq!(map.get("bw").unwrap().app_id, "com.bitwarden.desktop");
        assert!(map.get("bitwarden").is_none());
    }

    #[test]
    fn test_empty_listing() {
        let map = parse_listing("", &SpecialAliases::default());
        assert!(map.is_empty());
    }

    #[test]
    fn test_header_only_listing() {
        let map = parse_listing(
            "Name\tApplication ID\tVersion\tBranch\tInstallation\n",
            &SpecialAliases::default(),
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_collapses() {
        let output = "Spotify\tcom.spotify.Client\t1.2.40\tstable\tflathub\tsystem\n\
                      Spotify\tcom.spotify.Client\t1.2.45\tbeta\tflathub\tsystem\n";
        let map = parse_listing(output, &SpecialAliases::empty());

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("spotify").unwrap().version.as_deref(), Some("1.2.45"));
    }
}
