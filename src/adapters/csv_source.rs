use crate::domain::model::RawRow;
use crate::utils::error::Result;
use std::io::{BufRead, BufReader, Read};

/// Split comma separated input into raw rows, one per line.
///
/// Every line becomes a row, blank lines and the header included, so row
/// positions match file line numbers. Within a line quotes are not special
/// and trailing empty fields are dropped (`a,b,,` has two fields, `,,,` has
/// none). Fields are left untrimmed; deciding what a usable row looks like is
/// the engine's job.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false);

    let mut rows = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let mut fields: RawRow = match builder.from_reader(line.as_bytes()).records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        rows.push(fields);
    }

    tracing::debug!("Read {} raw rows", rows.len());
    Ok(rows)
}
