use std::io::{self, Write};

use serde::Serialize;

use crate::record::NewsRecord;

/// Number of entries shown in the numbered headline list.
pub const HEADLINE_LIMIT: usize = 5;

/// Renders the outcome of a scrape.
pub trait Presenter {
    /// Called once the page has loaded, before extraction.
    fn page_title(&mut self, title: &str) -> io::Result<()>;

    /// Called with the extracted records when extraction succeeded, each
    /// paired with the 1-based position of the element it was read from.
    fn records(&mut self, records: &[(usize, NewsRecord)]) -> io::Result<()>;
}

/// Human-readable output: title, numbered headlines, then a table.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn page_title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "=== Site title ===\n{title}\n")
    }

    fn records(&mut self, records: &[(usize, NewsRecord)]) -> io::Result<()> {
        writeln!(self.out, "=== Latest news (top {HEADLINE_LIMIT}) ===")?;
        for (index, record) in records.iter().take(HEADLINE_LIMIT) {
            writeln!(self.out, "{index}. [{}] {}", record.date(), record.title())?;
        }

        if !records.is_empty() {
            writeln!(self.out, "\n=== Records ===")?;
            let table = render_table(records.iter().map(|(_, record)| record));
            self.out.write_all(table.as_bytes())?;
        }
        self.out.flush()
    }
}

/// Lay records out as a left-aligned table with a 0-based row index.
pub fn render_table<'a>(records: impl IntoIterator<Item = &'a NewsRecord>) -> String {
    const HEADERS: [&str; 3] = ["date", "title", "url"];

    let rows: Vec<[&str; 3]> = records
        .into_iter()
        .map(|r| [r.date(), r.title(), r.url()])
        .collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, "", index_width, &HEADERS, &widths);
    for (i, row) in rows.iter().enumerate() {
        push_row(&mut table, &i.to_string(), index_width, row, &widths);
    }
    table
}

fn push_row(table: &mut String, index: &str, index_width: usize, cells: &[&str; 3], widths: &[usize; 3]) {
    let mut line = format!("{index:<index_width$}");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str("  ");
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    table.push_str(line.trim_end());
    table.push('\n');
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    records: Vec<&'a NewsRecord>,
}

/// Machine-readable output: one JSON object once the records are known.
pub struct JsonPresenter<W> {
    out: W,
    title: String,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            title: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn page_title(&mut self, title: &str) -> io::Result<()> {
        self.title = title.to_string();
        Ok(())
    }

    fn records(&mut self, records: &[(usize, NewsRecord)]) -> io::Result<()> {
        let report = JsonReport {
            title: &self.title,
            records: records.iter().map(|(_, record)| record).collect(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
