//! Persona table CSV loading and export.
//!
//! The input table has a header row and at least the columns `Persona`,
//! `Handle`, `Followers`, and `Tags`; a `Follower Tags` column is picked
//! up when present. Fields may be quoted per RFC 4180; tag lists contain
//! commas, so quoted fields are the norm here.

use std::fs;
use std::path::Path;

use crate::matching::FollowRow;
use crate::persona::Persona;
use crate::utilities::errors::DatasetError;

/// Required column: persona display name.
pub const COL_PERSONA: &str = "Persona";
/// Required column: account handle.
pub const COL_HANDLE: &str = "Handle";
/// Required column: follower count.
pub const COL_FOLLOWERS: &str = "Followers";
/// Required column: comma-separated tags.
pub const COL_TAGS: &str = "Tags";
/// Optional column: hand-edited follower tag set.
pub const COL_FOLLOWER_TAGS: &str = "Follower Tags";

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a persona table from a CSV file.
pub fn load_personas(path: &Path) -> Result<Vec<Persona>, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse_personas(&content)
}

/// Parse a persona table from CSV text.
///
/// Blank rows are skipped. A file with only a header (or nothing at all)
/// is an empty table, not an error.
///
/// # Errors
/// `MissingColumn` when a required header is absent; `MalformedRow` when a
/// row fails persona validation (the row number is 1-based and counts the
/// header).
pub fn parse_personas(content: &str) -> Result<Vec<Persona>, DatasetError> {
    let mut records = parse_csv(content).into_iter();
    let header = match records.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    let required = |name: &str| -> Result<usize, DatasetError> {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DatasetError::MissingColumn {
                name: name.to_string(),
            })
    };
    let persona_col = required(COL_PERSONA)?;
    let handle_col = required(COL_HANDLE)?;
    let followers_col = required(COL_FOLLOWERS)?;
    let tags_col = required(COL_TAGS)?;
    let follower_tags_col = header.iter().position(|h| h.trim() == COL_FOLLOWER_TAGS);

    let mut personas = Vec::new();
    for (index, record) in records.enumerate() {
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let field = |col: usize| record.get(col).map(String::as_str).unwrap_or("");

        let persona = Persona::from_raw(
            field(persona_col),
            field(handle_col),
            field(followers_col),
            non_empty(field(tags_col)),
            follower_tags_col.and_then(|col| non_empty(field(col))),
        )
        .map_err(|e| DatasetError::MalformedRow {
            row: index + 2,
            message: e.to_string(),
        })?;
        personas.push(persona);
    }

    log::debug!("loaded {} personas", personas.len());
    Ok(personas)
}

fn non_empty(field: &str) -> Option<&str> {
    if field.trim().is_empty() {
        None
    } else {
        Some(field)
    }
}

/// Split CSV text into records of fields, honoring RFC 4180 quoting
/// (embedded commas, doubled quotes, newlines inside quoted fields).
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    // Final record without a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Write the persona table back out, tags re-joined as comma-separated
/// strings. The `Follower Tags` column is emitted only when at least one
/// persona carries one.
pub fn write_tagged_personas(path: &Path, personas: &[Persona]) -> Result<(), DatasetError> {
    let with_follower_tags = personas.iter().any(|p| p.follower_tags.is_some());

    let mut out = String::new();
    let mut header = vec![COL_PERSONA, COL_HANDLE, COL_FOLLOWERS, COL_TAGS];
    if with_follower_tags {
        header.push(COL_FOLLOWER_TAGS);
    }
    push_record(&mut out, &header);

    for persona in personas {
        let mut fields = vec![
            persona.name.clone(),
            persona.handle.clone(),
            persona.follower_count.to_string(),
            persona.tags.join(", "),
        ];
        if with_follower_tags {
            fields.push(
                persona
                    .follower_tags
                    .as_ref()
                    .map(|tags| tags.join(", "))
                    .unwrap_or_default(),
            );
        }
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        push_record(&mut out, &fields);
    }

    write_file(path, &out)
}

/// Write a follow table under a `Follower,Handle,Follows` header.
pub fn write_follow_table(path: &Path, rows: &[FollowRow]) -> Result<(), DatasetError> {
    let mut out = String::new();
    push_record(&mut out, &["Follower", "Handle", "Follows"]);
    for row in rows {
        push_record(
            &mut out,
            &[&row.follower_name, &row.follower_handle, &row.followed_name],
        );
    }
    write_file(path, &out)
}

fn write_file(path: &Path, content: &str) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

fn push_record(out: &mut String, fields: &[&str]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(field));
    }
    out.push('\n');
}

/// Quote a field only when it needs it.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
