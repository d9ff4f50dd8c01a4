use crate::{Catalog, CatalogError, Item};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    sync::Arc,
};

pub const FIELD_DELIMITER: char = '^';
const NUM_FIELDS: usize = 3;

/// Loads every valid item from a `^`-delimited catalog file.
///
/// The first line is a header and is ignored. A line with the wrong number
/// of fields aborts the whole load, while rows whose numbers do not parse
/// (or that describe an invalid item) are skipped.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(BufReader::new(file))?;
    info!("Loaded {} items from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|source| CatalogError::Read {
            line: line_number,
            source,
        })?;
        if line_number == 1 {
            continue;
        }
        let line = line.trim_end_matches('\r');

        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != NUM_FIELDS {
            return Err(CatalogError::FieldCount {
                line: line_number,
                found: fields.len(),
                text: line.to_string(),
            });
        }

        match parse_row(fields[0], fields[1], fields[2]) {
            Some(item) => catalog.push(Arc::new(item)),
            None => debug!("Skipping row {}: {:?}", line_number, line),
        }
    }
    Ok(catalog)
}

fn parse_row(description: &str, cost: &str, defense: &str) -> Option<Item> {
    let cost = cost.trim().parse::<f64>().ok()?.trunc();
    let defense = defense.trim().parse::<f64>().ok()?;
    if !(1.0..=u32::MAX as f64).contains(&cost) {
        return None;
    }
    Item::new(description, cost as u32, defense).ok()
}

pub const CATALOG_HEADER: &str = "description^gold^defense";

/// Writes `items` in the format read by [`parse_catalog`], header first.
pub fn write_catalog<W: Write>(mut writer: W, items: &[Arc<Item>]) -> std::io::Result<()> {
    writeln!(writer, "{}", CATALOG_HEADER)?;
    for item in items {
        writeln!(
            writer,
            "{}{}{}{}{}",
            item.description(),
            FIELD_DELIMITER,
            item.cost(),
            FIELD_DELIMITER,
            item.defense()
        )?;
    }
    writer.flush()
}
