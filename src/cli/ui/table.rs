use crate::cli::output::current_preferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
    pub max_width: Option<usize>,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
            max_width: None,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }
}

/// Column-aligned text table. Cells are plain text; width counts chars.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    /// Header, rule and rows; trailing spaces are trimmed from every line.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule_char = if current_preferences().plain_mode {
            '-'
        } else {
            '─'
        };
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![self.render_row(&header, &widths)];
        lines.push(rule_char.to_string().repeat(rule_len));
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                pad(&truncate(text, *width), *width, column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut kept: String = text.chars().take(width.saturating_sub(1)).collect();
    kept.push('…');
    kept
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match alignment {
        Alignment::Left => format!("{text}{fill}"),
        Alignment::Right => format!("{fill}{text}"),
    }
}
