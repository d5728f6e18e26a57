//! Plain-text renderings of the panels a command can ask for.

use crossterm::terminal;

use crate::model::{CategoryKind, CategoryStatistic, Entry, Statistics};

const DEFAULT_WIDTH: usize = 100;
const MIN_DESCRIPTION_WIDTH: usize = 12;
const BAR_GLYPH: char = '#';

/// How a column aligns its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: &str, alignment: Alignment) -> Self {
        Self {
            header: header.to_string(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
    /// Use `-` for rules instead of box drawing.
    pub plain: bool,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 0,
            plain: false,
        }
    }

    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count().max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                match column.max_width {
                    Some(max_width) => width.min(max_width),
                    None => width,
                }
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding, self.plain),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let mut fitted: String = text.chars().take(width - 1).collect();
            fitted.push('…');
            fitted
        }
    }
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(fitted.chars().count());
    let (left, right) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };
    format!(
        "{pad}{}{fitted}{}{pad}",
        " ".repeat(left),
        " ".repeat(right),
        pad = " ".repeat(padding)
    )
}

fn horizontal_rule(widths: &[usize], padding: usize, plain: bool) -> String {
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    let glyph = if plain { '-' } else { '─' };
    glyph.to_string().repeat(total)
}

/// Current terminal width, or a fixed default when there is no terminal.
pub fn terminal_width() -> usize {
    terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Numbered entry listing; the description column absorbs width changes.
pub fn entry_table(entries: &[&Entry], width: usize, plain: bool) -> String {
    if entries.is_empty() {
        return "No entries to show.".to_string();
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            vec![
                (idx + 1).to_string(),
                entry.kind().to_string(),
                entry.category().name().to_string(),
                entry.description().to_string(),
                entry.amount().to_string(),
                entry.date().to_string(),
                crate::model::tag::format_tags(entry.tags()),
            ]
        })
        .collect();

    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Type", Alignment::Left),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Description", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Tags", Alignment::Left),
    ]);
    table.rows = rows;
    table.plain = plain;

    let widths = table.compute_widths();
    let others: usize = widths
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 3)
        .map(|(_, w)| w + 1)
        .sum();
    let room = width.saturating_sub(others).max(MIN_DESCRIPTION_WIDTH);
    table.columns[3] = TableColumn::new("Description", Alignment::Left).max_width(room);
    table.render()
}

fn statistic_rows(rows: &[CategoryStatistic]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.category.name().to_string(),
                row.count.to_string(),
                row.total.to_string(),
            ]
        })
        .collect()
}

pub fn statistics_table(statistics: &Statistics, plain: bool) -> String {
    let mut sections = vec![format!("Statistics for {}", statistics.period)];
    for (title, kind, total) in [
        ("Expenses", CategoryKind::Expense, statistics.total_expense),
        ("Income", CategoryKind::Income, statistics.total_income),
    ] {
        let mut table = Table::new(vec![
            TableColumn::new(title, Alignment::Left),
            TableColumn::new("Entries", Alignment::Right),
            TableColumn::new("Total", Alignment::Right),
        ]);
        table.rows = statistic_rows(statistics.rows(kind));
        table.plain = plain;
        sections.push(format!("{}\nTotal {}: {total}", table.render(), title.to_lowercase()));
    }
    sections.join("\n\n")
}

/// Horizontal bars scaled to the largest category total of each kind.
pub fn bar_chart(statistics: &Statistics, width: usize) -> String {
    let mut sections = vec![format!("Statistics for {}", statistics.period)];
    for (title, kind) in [
        ("Expenses", CategoryKind::Expense),
        ("Income", CategoryKind::Income),
    ] {
        let rows = statistics.rows(kind);
        let label_width = rows
            .iter()
            .map(|row| row.category.name().chars().count())
            .max()
            .unwrap_or(0);
        let amount_width = rows
            .iter()
            .map(|row| row.total.to_string().len())
            .max()
            .unwrap_or(0);
        let bar_room = width
            .saturating_sub(label_width + amount_width + 4)
            .max(1);
        let largest = rows.iter().map(|row| row.total.cents()).max().unwrap_or(0);

        let mut lines = vec![title.to_string()];
        for row in rows {
            let length = if largest == 0 {
                0
            } else {
                (row.total.cents() as u128 * bar_room as u128 / largest as u128) as usize
            };
            let bar = BAR_GLYPH.to_string().repeat(length);
            lines.push(
                format!(
                    "{:<label_width$} | {:>amount_width$} {bar}",
                    row.category.name(),
                    row.total.to_string(),
                )
                .trim_end()
                .to_string(),
            );
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        assert_eq!(truncate_text("Restaurant", 5), "Rest…");
        assert_eq!(truncate_text("Cafe", 5), "Cafe");
    }

    #[test]
    fn right_aligned_cells_pad_on_the_left() {
        assert_eq!(render_cell("7", 3, Alignment::Right, 1), "   7 ");
        assert_eq!(render_cell("7", 3, Alignment::Left, 0), "7  ");
    }
}
