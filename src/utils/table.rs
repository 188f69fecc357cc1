//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: h.width(),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit. Widths are display widths,
    /// not byte or char counts (names may contain wide glyphs).
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self, separator_char: &str) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&separator_char.repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row) {
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn columns_grow_to_widest_cell() {
        let mut t = Table::new(&["ID", "NAME"]);
        t.add_row(vec!["1".to_string(), "Bread".to_string()]);
        t.add_row(vec!["12".to_string(), "A longer name".to_string()]);

        let rendered = t.render("-");
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].contains("A longer name"));
    }

    #[test]
    fn raw_names_render_untrimmed() {
        let mut t = Table::new(&["ID", "NAME"]);
        t.add_row(vec!["1".to_string(), " milk ".to_string()]);
        assert!(t.render("-").contains(" milk "));
    }
}
