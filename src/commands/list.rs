use crate::error::Result;
use crate::listing::{self, SpecialAliases};
use crate::system;
use crate::ui as output;
use colored::Colorize;
use serde::Serialize;

/// Options for the list command
pub struct ListOptions {
    pub format: String,
}

#[derive(Debug, Serialize)]
struct AliasRow<'a> {
    alias: &'a str,
    app_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let specials = SpecialAliases::default();
    let raw = system::list_installed()?;
    let map = listing::parse_listing(&raw, &specials);

    if map.is_empty() {
        output::info("No flatpak applications installed.");
        return Ok(());
    }

    let rows: Vec<AliasRow> = map
        .iter()
        .map(|(name, record)| AliasRow {
            alias: name,
            app_id: &record.app_id,
            version: record.version.as_deref(),
            branch: record.branch.as_deref(),
        })
        .collect();

    match options.format.as_str() {
        "json" => output_json(&rows),
        _ => {
            display_table(&rows);
            Ok(())
        }
    }
}

fn display_table(rows: &[AliasRow]) {
    output::header(&format!("Derived Aliases ({})", rows.len()));

    for row in rows {
        if output::is_verbose() {
            let version = row.version.unwrap_or("-");
            let branch = row.branch.unwrap_or("-");
            println!(
                "  {:<20} {:<44} {:>12} {}",
                row.alias,
                row.app_id.dimmed(),
                version,
                branch.dimmed()
            );
        } else {
            println!("  {:<20} {}", row.alias, row.app_id.dimmed());
        }
    }
}

fn output_json(rows: &[AliasRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{}", json);
    Ok(())
}
