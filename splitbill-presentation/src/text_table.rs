use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders a header line, a rule and one line per row. Trailing spaces
    /// are trimmed from every line.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().take(col_count).enumerate() {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut table = String::with_capacity(256);
        self.write_line(&mut table, self.headers, &col_widths);

        let rule: Vec<Cow<'_, str>> = col_widths
            .iter()
            .map(|&width| Cow::Owned("-".repeat(width)))
            .collect();
        self.write_line(&mut table, &rule, &col_widths);

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table.truncate(table.trim_end().len());
        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().copied().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map_or("", |c| c.as_ref());
            let padding = " ".repeat(width.saturating_sub(display_width(cell)));
            match self.alignments.get(i).copied().unwrap_or_default() {
                Alignment::Left => {
                    line.push_str(cell);
                    line.push_str(&padding);
                }
                Alignment::Right => {
                    line.push_str(&padding);
                    line.push_str(cell);
                }
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

// Wide (non-ASCII) characters count as two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_simple_table() {
        let headers = [Cow::Borrowed("Name"), Cow::Borrowed("Total")];
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers)
            .row([Cow::Borrowed("Ann"), Cow::Borrowed("$5.00")])
            .row([Cow::Borrowed("Benjamin"), Cow::Borrowed("$120.50")])
            .build();

        let expected = "\
Name        Total
--------  -------
Ann         $5.00
Benjamin  $120.50";
        assert_eq!(table, expected);
    }

    #[rstest]
    fn test_missing_cells_are_blank() {
        let headers = [Cow::Borrowed("A"), Cow::Borrowed("B")];
        let table = TextTableBuilder::<Vec<Cow<'_, str>>>::new()
            .headers(&headers)
            .row(vec![Cow::Borrowed("x")])
            .build();
        assert_eq!(table, "A  B\n-  -\nx");
    }

    #[rstest]
    fn test_empty_headers_render_nothing() {
        let table = TextTableBuilder::<[Cow<'_, str>; 0]>::new().build();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case::ascii("abc", 3)]
    #[case::wide("精算", 4)]
    #[case::mixed("a精", 3)]
    fn test_display_width(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(display_width(input), expected);
    }
}
