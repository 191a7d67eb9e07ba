use regex::Regex;
use std::sync::LazyLock;

/// Reverse-domain application identifier: at least three dot-separated
/// segments, leading alpha so version strings never match.
static APP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*(\.[A-Za-z0-9_-]+){2,}$").expect("Invalid regex pattern")
});

/// One recognized row of lister output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub app_id: String,
    pub version: Option<String>,
    pub branch: Option<String>,
    pub origin: Option<String>,
    pub installation: Option<String>,
}

pub fn is_app_id(field: &str) -> bool {
    APP_ID.is_match(field)
}

/// Split a listing line into fields: on tabs when the lister emits them,
/// on whitespace runs otherwise.
pub fn split_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// Recognize one row against the documented schema.
///
/// Returns `None` for anything that does not match it: header lines, short
/// rows, rows without a plausible identifier. Of the first two fields,
/// exactly one matching the identifier pattern decides the layout
/// (name-first or identifier-first). When that is ambiguous, the identifier
/// is expected directly before the version/branch/origin/installation
/// suffix.
pub fn recognize_row(fields: &[&str]) -> Option<PackageRecord> {
    if fields.len() < 2 {
        return None;
    }

    match (is_app_id(fields[0]), is_app_id(fields[1])) {
        // Name, Application ID, Version, Branch, [Origin,] Installation
        (false, true) => Some(PackageRecord {
            name: fields[0].to_string(),
            app_id: fields[1].to_string(),
            version: fields.get(2).map(|f| f.to_string()),
            branch: fields.get(3).map(|f| f.to_string()),
            origin: if fields.len() >= 6 {
                fields.get(4).map(|f| f.to_string())
            } else {
                None
            },
            installation: if fields.len() >= 5 {
                fields.last().map(|f| f.to_string())
            } else {
                None
            },
        }),

        // Application ID, Name, Branch, Arch, ...
        (true, false) => Some(PackageRecord {
            name: fields[1].to_string(),
            app_id: fields[0].to_string(),
            version: None,
            branch: fields.get(2).map(|f| f.to_string()),
            origin: None,
            installation: if fields.len() >= 5 {
                fields.last().map(|f| f.to_string())
            } else {
                None
            },
        }),

        // Ambiguous leading pair: fixed position before the 4-wide suffix.
        _ => {
            if fields.len() < 5 {
                return None;
            }
            let id_idx = fields.len() - 5;
            if !is_app_id(fields[id_idx]) {
                return None;
            }

            let mut name = fields[..id_idx].join(" ");
            if name.is_empty() {
                name = fields[..fields.len() - 4].join(" ");
            }

            Some(PackageRecord {
                name,
                app_id: fields[id_idx].to_string(),
                version: fields.get(id_idx + 1).map(|f| f.to_string()),
                branch: fields.get(id_idx + 2).map(|f| f.to_string()),
                origin: fields.get(id_idx + 3).map(|f| f.to_string()),
                installation: fields.get(id_idx + 4).map(|f| f.to_string()),
            })
        }
    }
}
