//! Reading collections exported from the library backend.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use libris_model::{RawCollection, Record};

/// Path argument meaning standard input.
pub const STDIN: &str = "-";

/// Load a JSON collection from `path`, or from stdin when `path` is `-`.
pub fn load_collection(path: &Path) -> Result<RawCollection> {
    let collection = if path.as_os_str() == STDIN {
        RawCollection::from_reader(io::stdin().lock()).context("parse collection from stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        RawCollection::from_reader(BufReader::new(file))
            .with_context(|| format!("parse collection {}", path.display()))?
    };
    info!(source = %path.display(), records = collection.len(), "loaded collection");
    Ok(collection)
}

/// Parse a single JSON object given inline on the command line.
pub fn parse_record(raw: &str) -> Result<Record> {
    let value: serde_json::Value = serde_json::from_str(raw).context("parse record JSON")?;
    let object = value.as_object().context("record must be a JSON object")?;
    Ok(Record::from_json_object(object))
}
