//! Sheets on disk: delimited text (`.csv` / `.tsv`) or an Excel workbook (`.xlsx`).
//! The first row is the header.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::mem::take;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use rust_xlsxwriter::Workbook;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Tsv,
    Xlsx,
}

impl Format {
    pub fn for_path(path: &Path) -> Result<Format> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Format::Csv),
            Some("tsv") => Ok(Format::Tsv),
            Some("xlsx") => Ok(Format::Xlsx),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn sep(self) -> Option<char> {
        match self {
            Format::Csv => Some(','),
            Format::Tsv => Some('\t'),
            Format::Xlsx => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Sheet {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Case-insensitive header lookup.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    /// Cell value, empty when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Appends a column after every existing cell. Rows wider than the header
    /// first get placeholder headers (`column_N`) so no cell is overwritten.
    pub fn push_column(&mut self, header: &str, values: Vec<String>) {
        let widest = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        while self.headers.len() < widest {
            self.headers.push(format!("column_{}", self.headers.len() + 1));
        }

        let width = self.headers.len();
        self.headers.push(header.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() < width {
                row.resize(width, String::new());
            }
            row.push(value);
        }
    }
}

pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut rows = match Format::for_path(path)?.sep() {
        Some(sep) => {
            let text = fs::read_to_string(path)?;
            let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
            parse_rows(text, sep)
        }
        None => read_xlsx_rows(path)?,
    };
    if rows.is_empty() {
        return Ok(Sheet::default());
    }
    let headers = rows.remove(0);
    Ok(Sheet { headers, rows })
}

pub fn write_sheet(path: &Path, sheet: &Sheet) -> Result<()> {
    let format = Format::for_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let Some(sep) = format.sep() else {
        return write_xlsx(path, sheet);
    };
    let mut out = BufWriter::new(fs::File::create(path)?);
    write_row(&mut out, &sheet.headers, sep)?;
    for row in &sheet.rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// First worksheet as text cells. Leading empty columns are kept as blanks.
fn read_xlsx_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };
    let lead = range.start().map(|(_, c)| c as usize).unwrap_or(0);

    Ok(range
        .rows()
        .map(|cells| {
            std::iter::repeat(String::new())
                .take(lead)
                .chain(cells.iter().map(|c| c.to_string()))
                .collect()
        })
        .collect())
}

fn write_xlsx(path: &Path, sheet: &Sheet) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let all_rows = std::iter::once(&sheet.headers).chain(&sheet.rows);
    for (r, row) in all_rows.enumerate() {
        let r = u32::try_from(r).unwrap_or(u32::MAX);
        for (c, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let c = u16::try_from(c).unwrap_or(u16::MAX);
            worksheet.write_string(r, c, cell)?;
        }
    }
    workbook.save(path)?;
    Ok(())
}

/// Quote- and CRLF-tolerant parser. A blank line is a row with one empty
/// field; only blank lines at the end of the text are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    while rows.last().is_some_and(|r| r.len() == 1 && r[0].is_empty()) {
        rows.pop();
    }
    rows
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields() {
        let rows = parse_rows("name,location\r\n\"Kapaleeshwarar, Mylapore\",\"Chennai \"\"city\"\"\"\r\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "Kapaleeshwarar, Mylapore");
        assert_eq!(rows[1][1], "Chennai \"city\"");
    }

    #[test]
    fn quoted_newline_stays_in_field() {
        let rows = parse_rows("a,b\n\"line one\nline two\",x\n\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "line one\nline two");
    }

    #[test]
    fn trailing_row_without_newline() {
        let rows = parse_rows("a\tb\n1\t2", '\t');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn write_then_read_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sheet = Sheet::new(["Temple Name", "Description"]);
        sheet.rows.push(vec![
            "Meenakshi Amman Temple".into(),
            "Twin towers, \"gopurams\", and a tank".into(),
        ]);
        write_sheet(&path, &sheet).unwrap();

        let back = read_sheet(&path).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn format_by_extension() {
        assert_eq!(Format::for_path(Path::new("x.TSV")).unwrap(), Format::Tsv);
        assert_eq!(Format::for_path(Path::new("x.csv")).unwrap(), Format::Csv);
        assert_eq!(Format::for_path(Path::new("temples.xlsx")).unwrap(), Format::Xlsx);
        assert!(matches!(Format::for_path(Path::new("x.txt")), Err(Error::UnsupportedFormat(_))));
        assert!(matches!(Format::for_path(Path::new("x")), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temples.xls");
        let err = write_sheet(&path, &Sheet::new(["location"])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(p) if p.ends_with("temples.xls")));
        assert!(!path.exists());
        assert!(matches!(read_sheet(&path), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn xlsx_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("temples.xlsx");
        let mut sheet = Sheet::new(["Temple Name", "Location"]);
        sheet.rows.push(vec!["Meenakshi Amman Temple".into(), "Madurai, Tamil Nadu".into()]);
        sheet.rows.push(vec!["Unknown Shrine".into(), "".into()]);
        sheet.rows.push(vec!["108".into(), "Srirangam".into()]);
        write_sheet(&path, &sheet).unwrap();

        let back = read_sheet(&path).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn interior_blank_line_is_a_row() {
        let rows = parse_rows("location\nMadurai\n\nTirupati\n\n", ',');
        assert_eq!(rows, vec![vec!["location"], vec!["Madurai"], vec![""], vec!["Tirupati"]]);
    }

    #[test]
    fn column_lookup_ignores_case() {
        let sheet = Sheet::new(["Temple", "LOCATION"]);
        assert_eq!(sheet.column("location"), Some(1));
        assert_eq!(sheet.column("district"), None);
    }

    #[test]
    fn push_column_pads_short_rows() {
        let mut sheet = Sheet::new(["a", "b"]);
        sheet.rows.push(vec!["1".into()]);
        sheet.push_column("c", vec!["x".into()]);
        assert_eq!(sheet.rows[0], vec!["1", "", "x"]);
    }

    #[test]
    fn push_column_keeps_cells_past_the_header() {
        let mut sheet = Sheet::new(["name", "location"]);
        sheet.rows.push(vec!["A".into(), "Madurai".into(), "extra-note".into()]);
        sheet.rows.push(vec!["B".into()]);
        sheet.push_column("preprocessed_location", vec!["Madurai".into(), "".into()]);

        assert_eq!(sheet.headers, vec!["name", "location", "column_3", "preprocessed_location"]);
        assert_eq!(sheet.rows[0], vec!["A", "Madurai", "extra-note", "Madurai"]);
        assert_eq!(sheet.rows[1], vec!["B", "", "", ""]);
        assert_eq!(sheet.cell(0, 3), "Madurai");
    }
}
