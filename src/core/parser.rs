use crate::domain::model::Course;
use crate::utils::error::{CatalogError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Opens `path` and parses it into a catalog. A missing file and an
/// unreadable file are reported as distinct errors; everything else is
/// delegated to [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Vec<Course>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::FileUnreadable {
            path: path.display().to_string(),
            source,
        },
    })?;

    tracing::debug!("Loading catalog from {}", path.display());
    parse_catalog(file)
}

/// Decodes comma-delimited course records from `reader`, preserving file
/// order. Malformed lines are logged and skipped; they never abort the load.
///
/// The format has no escaping mechanism, so quoting is disabled and a
/// trailing field after the last delimiter is kept even when empty.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Course>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut courses = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(line, &record) {
            Ok(course) => courses.push(course),
            Err(err) => tracing::warn!("Skipping record: {}", err),
        }
    }

    tracing::debug!("Parsed {} course records", courses.len());
    Ok(courses)
}

/// Maps one raw record to a [`Course`]: field 0 is the identifier, field 1
/// the title, any remaining fields are prerequisites. Fewer than 2 fields,
/// or any field with nothing left after trimming, is a malformed line.
pub fn parse_record(line: u64, record: &csv::StringRecord) -> Result<Course> {
    if record.len() < 2 {
        return Err(CatalogError::MalformedLine {
            line,
            reason: format!("expected at least 2 fields, found {}", record.len()),
        });
    }

    let mut fields = Vec::with_capacity(record.len());
    for (index, raw) in record.iter().enumerate() {
        match trim_field(raw) {
            Some(value) => fields.push(value.to_string()),
            None => {
                return Err(CatalogError::MalformedLine {
                    line,
                    reason: format!("field {} is empty after trimming", index),
                })
            }
        }
    }

    let mut fields = fields.into_iter();
    Ok(Course {
        identifier: fields.next().unwrap_or_default(),
        title: fields.next().unwrap_or_default(),
        prerequisites: fields.collect(),
    })
}

/// Strips leading characters up to the first ASCII alphanumeric, then
/// trailing whitespace. `None` when nothing alphanumeric remains, which is
/// the malformed-field signal callers must handle.
pub fn trim_field(raw: &str) -> Option<&str> {
    let start = raw.find(|c: char| c.is_ascii_alphanumeric())?;
    Some(raw[start..].trim_end())
}
