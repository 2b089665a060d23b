// src/csv.rs
//
// Record source on top of the `csv` crate.
// Reading: header row first, then only *complete* rows are yielded: same arity
// as the header and no empty cell. Everything else is skipped and counted.
// Writing: CSV/TSV tables for the spreadsheet export.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Result, StatsError};

/* ---------------- Reading ---------------- */

pub struct RowSource<R: Read> {
    reader: csv::Reader<R>,
    header: Vec<String>,
    skipped: usize,
}

impl RowSource<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| StatsError::io(e, path))?;
        Self::from_reader(file)
    }
}

impl<R: Read> RowSource<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let header = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { s!(h.trim_start_matches('\u{feff}')) } else { s!(h) })
            .collect::<Vec<_>>();

        Ok(Self { reader, header, skipped: 0 })
    }

    pub fn header(&self) -> &[String] { &self.header }

    /// No header row at all (zero-byte or blank file).
    pub fn is_empty_file(&self) -> bool {
        self.header.is_empty() || (self.header.len() == 1 && self.header[0].is_empty())
    }

    /// Rows dropped so far for wrong arity or an empty cell.
    pub fn skipped(&self) -> usize { self.skipped }

    fn is_complete(&self, rec: &StringRecord) -> bool {
        rec.len() == self.header.len() && !rec.iter().any(str::is_empty)
    }
}

impl<R: Read> Iterator for RowSource<R> {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty_file() {
            return None;
        }
        loop {
            let mut rec = StringRecord::new();
            match self.reader.read_record(&mut rec) {
                Ok(false) => return None,
                Ok(true) if self.is_complete(&rec) => return Some(Ok(rec)),
                Ok(true) => {
                    self.skipped += 1;
                    logd!("Source: skipped incomplete row at line {}",
                        rec.position().map_or(0, |p| p.line()));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Column position lookup by header name.
pub fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}

/* ---------------- Writing ---------------- */

/// Write an optional header and all rows with the given delimiter.
pub fn write_table<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> std::result::Result<(), csv::Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);
    if let Some(h) = headers {
        out.write_record(h)?;
    }
    for r in rows {
        out.write_record(r)?;
    }
    out.flush()?;
    Ok(())
}

/// Same as `write_table`, into a String (GUI copy, tests).
pub fn table_to_string(headers: Option<&[String]>, rows: &[Vec<String>], delim: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_table(&mut buf, headers, rows, delim) {
        loge!("CSV: in-memory write failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(text: &str) -> (Vec<String>, Vec<Vec<String>>, usize) {
        let mut src = RowSource::from_reader(text.as_bytes()).unwrap();
        let rows = src
            .by_ref()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (src.header().to_vec(), rows, src.skipped())
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let (h, rows, skipped) = rows_of("a,b,c\n1,2,3\n4,,6\n7,8\n9,10,11,12\n\"x\ny\",z,w\n");
        assert_eq!(h, vec!["a", "b", "c"]);
        assert_eq!(rows, vec![vec!["1", "2", "3"], vec!["x\ny", "z", "w"]]);
        assert_eq!(skipped, 3);
    }

    #[test]
    fn bom_and_empty_input() {
        let (h, rows, _) = rows_of("\u{feff}name,x\nA,1\n");
        assert_eq!(h[0], "name");
        assert_eq!(rows.len(), 1);

        let src = RowSource::from_reader("".as_bytes()).unwrap();
        assert!(src.is_empty_file());
        assert_eq!(src.count(), 0);
    }

    #[test]
    fn writes_quoted_cells() {
        let headers = cells!["Город", "Доля"];
        let rows = vec![cells!["Санкт-Петербург, СПб", "12.5%"], cells!["Москва", "\"a\""]];
        let s = table_to_string(Some(headers.as_slice()), &rows, b',');
        assert_eq!(s, "Город,Доля\n\"Санкт-Петербург, СПб\",12.5%\nМосква,\"\"\"a\"\"\"\n");

        let s = table_to_string(None, &rows, b'\t');
        assert!(s.starts_with("Санкт-Петербург, СПб\t12.5%\n"));
    }
}
