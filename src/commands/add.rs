use crate::error::Result;
use crate::listing::{self, AliasMap, PackageRecord, SpecialAliases};
use crate::store;
use crate::system;
use crate::ui as output;
use crate::utils::paths;
use colored::Colorize;

/// Options for the add command
pub struct AddOptions {
    pub app: Option<String>,
    pub all: bool,
    pub file: Option<String>,
}

pub fn run(options: AddOptions) -> Result<()> {
    let specials = SpecialAliases::default();
    let raw = system::list_installed()?;
    let map = listing::parse_listing(&raw, &specials);

    if map.is_empty() {
        output::info("No flatpak applications installed.");
        return Ok(());
    }

    let entries: Vec<(String, String)> = if options.all {
        map.iter()
            .map(|(name, record)| (name.to_string(), record.app_id.clone()))
            .collect()
    } else {
        let query = options.app.as_deref().unwrap_or_default();
        match find_app(&map, query) {
            None => {
                output::warning(&format!("No installed app matches '{}'.", query));
                return Ok(());
            }
            Some((name, record)) => expand_entries(name, record, &specials),
        }
    };

    let rc_path = paths::rc_file(options.file.as_deref())?;
    let outcome = store::add_aliases(&rc_path, &entries)?;

    for name in &outcome.skipped {
        output::info(&format!("Alias '{}' already present, skipping.", name.cyan()));
    }

    if outcome.appended.is_empty() {
        output::success(&format!("{} is already up to date.", rc_path.display()));
        return Ok(());
    }

    for name in &outcome.appended {
        output::verbose(&format!("Appended alias '{}'", name));
    }
    output::success(&format!(
        "Added {} alias(es) to {}. Restart your shell or source the file to use them.",
        outcome.appended.len(),
        rc_path.display()
    ));

    Ok(())
}

/// Match a requested app against the derived mapping: alias name, exact
/// identifier, or the lowercased request as alias name.
fn find_app<'a>(map: &'a AliasMap, query: &str) -> Option<(&'a str, &'a PackageRecord)> {
    let query_lower = query.to_lowercase();
    map.iter()
        .find(|(name, record)| *name == query || record.app_id == query || *name == query_lower)
}

/// A special-cased app gets both its short alias and the canonical
/// name-derived alias in the same operation.
fn expand_entries(
    name: &str,
    record: &PackageRecord,
    specials: &SpecialAliases,
) -> Vec<(String, String)> {
    let mut entries = vec![(name.to_string(), record.app_id.clone())];

    if specials.get(&record.app_id).is_some()
        && let Some(long) = listing::derive_alias(&record.name)
        && long != name
    {
        entries.push((long, record.app_id.clone()));
    }

    entries
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
    fn test_find_app_by_alias_id_or_case() {
        let mut map = AliasMap::new();
        map.insert("sp".into(), record("Spotify", "com.spotify.Client"));

        assert!(find_app(&map, "sp").is_some());
        assert!(find_app(&map, "com.spotify.Client").is_some());
        assert!(find_app(&map, "SP").is_some());
        assert!(find_app(&map, "spotify").is_none());
    }

    #[test]
    fn test_special_app_expands_to_both_aliases() {
        let specials = SpecialAliases::default();
        let rec = record("Bitwarden", "com.bitwarden.desktop");

        let entries = expand_entries("bw", &rec, &specials);

        assert_eq!(
            entries,
            vec![
                ("bw".to_string(), "com.bitwarden.desktop".to_string()),
                ("bitwarden".to_string(), "com.bitwarden.desktop".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_app_expands_to_one_alias() {
        let specials = SpecialAliases::default();
        let rec = record("LibreOffice", "org.libreoffice.LibreOffice");

        let entries = expand_entries("libreoffice", &rec, &specials);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "libreoffice");
    }
}
