// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain-text table with a bold header row.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
        }
    }

    fn column_widths(&self, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name().width()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|data| self.columns.iter().map(|col| col.format(data)).collect())
            .collect();
        let widths = self.column_widths(&rows);
        let last = self.columns.len().saturating_sub(1);

        for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
            let cell = pad(&col.name(), *width, col.padding_direction(), i == last);
            write!(f, "{}", cell.bold())?;
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)?;

        for (data, cells) in self.data.iter().zip(rows) {
            for (i, ((col, width), cell)) in self.columns.iter().zip(&widths).zip(cells).enumerate() {
                let cell = pad(&cell, *width, col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                if i < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, is_last: bool) -> String {
    // unicode width, not char count, decides the fill
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left if is_last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(u32, &'static str);

    enum PairColumn {
        Number,
        Name,
    }

    impl TableColumn<Pair> for PairColumn {
        fn name(&self) -> Cow<'_, str> {
            match self {
                PairColumn::Number => "No".into(),
                PairColumn::Name => "Name".into(),
            }
        }

        fn format<'a>(&self, data: &'a Pair) -> Cow<'a, str> {
            match self {
                PairColumn::Number => data.0.to_string().into(),
                PairColumn::Name => data.1.into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                PairColumn::Number => PaddingDirection::Right,
                PairColumn::Name => PaddingDirection::Left,
            }
        }
    }

    #[test]
    fn test_table_pads_columns() {
        colored::control::set_override(false);
        let columns = [PairColumn::Number, PairColumn::Name];
        let data = [Pair(7, "seven"), Pair(123, "日本")];

        let out = Table::new(&columns, &data).to_string();

        assert_eq!(out, " No Name\n  7 seven\n123 日本\n");
    }

    #[test]
    fn test_table_empty_prints_header() {
        colored::control::set_override(false);
        let columns = [PairColumn::Number, PairColumn::Name];
        let out = Table::new(&columns, &[] as &[Pair]).to_string();
        assert_eq!(out, "No Name\n");
    }
}
