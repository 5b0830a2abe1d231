//! Two-column attribute table
//!
//! Columns are sized to their widest cell. Multi-line values stay inside one
//! row, each physical line padded to the column width:
//! ```text
//! +-------+-----------+
//! | port  | 8080      |
//! | query | SELECT 1  |
//! |       | FROM dual |
//! +-------+-----------+
//! ```

use crate::{
    event::Attribute,
    string_utils::display_width,
};
use std::io::{
    self,
    Write,
};

/// Rows of `(key, value)` text in the order they were supplied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeTable {
    rows: Vec<[String; 2]>,
}

impl AttributeTable {
    pub fn from_attributes(attributes: &[Attribute]) -> Self {
        Self {
            rows: attributes
                .iter()
                .map(|attr| [attr.key.clone(), attr.value.to_string()])
                .collect(),
        }
    }

    pub fn push(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.rows.push([key.into(), value.into()]);
    }

    pub fn rows(&self) -> &[[String; 2]] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> [usize; 2] {
        let mut widths = [0; 2];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let widest =
                    cell_lines(cell).map(display_width).max().unwrap_or(0);
                *width = (*width).max(widest);
            }
        }
        widths
    }

    /// Write the table; nothing is written for an empty table
    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.column_widths();
        let border = border_line(widths);

        out.write_all(border.as_bytes())?;
        for row in &self.rows {
            let key_lines: Vec<&str> = cell_lines(&row[0]).collect();
            let value_lines: Vec<&str> = cell_lines(&row[1]).collect();
            let height = key_lines.len().max(value_lines.len());

            for i in 0..height {
                let key = key_lines.get(i).copied().unwrap_or("");
                let value = value_lines.get(i).copied().unwrap_or("");
                writeln!(
                    out,
                    "| {}{} | {}{} |",
                    key,
                    padding(key, widths[0]),
                    value,
                    padding(value, widths[1]),
                )?;
            }
        }
        out.write_all(border.as_bytes())
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf)
            .expect("Vec writes are infallible");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Physical lines of a cell; an empty cell still occupies one line
fn cell_lines(cell: &str) -> impl Iterator<Item = &str> {
    let mut lines = cell.lines().peekable();
    let empty = lines.peek().is_none();
    lines.chain(empty.then_some(""))
}

fn padding(
    text: &str,
    width: usize,
) -> String {
    " ".repeat(width.saturating_sub(display_width(text)))
}

fn border_line(widths: [usize; 2]) -> String {
    format!("+{}+{}+\n", "-".repeat(widths[0] + 2), "-".repeat(widths[1] + 2))
}
