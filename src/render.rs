//! Markdown building blocks shared by every document.
//!
//! All functions here are pure: in-memory data in, a text block out.
//!
//! ```text
//! table    | Schema | Purpose |      header row
//!          |---|---|                 separator (one cell per column)
//!          | `dwh` | Star Schema |   one line per row
//!
//! section  ## 📦 Schemas             heading (icon + title)
//!                                    blank line
//!          <body>                    text block or joined lines
//!
//! steps    | Step | What happens |
//!          |---|---|
//!          | 1️⃣ | 🔍 RAG search |   1-based, input order
//! ```
//!
//! Blocks carry no trailing blank lines of their own except the section's
//! final line break; [`compose`] joins blocks into a document.

const NL: &str = "\n";

/// Keycap combining sequence appended to step numbers (`1️⃣`).
const KEYCAP: &str = "\u{fe0f}\u{20e3}";

/// Escape a cell so it cannot break the row structure.
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

fn table_row<S: AsRef<str>>(cells: impl Iterator<Item = S>) -> String {
    let cells: Vec<String> = cells.map(|c| cell(c.as_ref())).collect();
    format!("| {} |", cells.join(" | "))
}

/// Render a markdown table.
///
/// Always produces `rows.len() + 2` lines. Every row is normalized to the
/// header's width: short rows are padded with empty cells, long rows are cut.
pub fn table<H, R, C>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let width = headers.len();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(table_row(headers.iter()));
    lines.push(format!("|{}|", vec!["---"; width].join("|")));
    for row in rows {
        let row = row.as_ref();
        let cells = (0..width).map(|i| row.get(i).map_or("", |c| c.as_ref()));
        lines.push(table_row(cells));
    }
    lines.join(NL)
}

/// Body of a section: a preformatted block or lines to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Lines(Vec<String>),
}

impl Body {
    fn into_text(self) -> String {
        match self {
            Body::Text(text) => text,
            Body::Lines(lines) => lines.join(NL),
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Vec<String>> for Body {
    fn from(lines: Vec<String>) -> Self {
        Body::Lines(lines)
    }
}

impl From<&[&str]> for Body {
    fn from(lines: &[&str]) -> Self {
        Body::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Body {
    fn from(lines: [&str; N]) -> Self {
        Body::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Render a `##` section: heading, blank line, body, line break.
pub fn section(icon: &str, title: &str, body: impl Into<Body>) -> String {
    format!("## {icon} {title}{NL}{NL}{}{NL}", body.into().into_text())
}

/// Render an ordered list of `(icon, text)` steps as a two-column table.
pub fn steps(steps: &[(&str, &str)]) -> String {
    let rows: Vec<[String; 2]> = steps
        .iter()
        .enumerate()
        .map(|(i, (icon, text))| [format!("{}{KEYCAP}", i + 1), format!("{icon} {text}")])
        .collect();
    table(&["Step", "What happens"], &rows)
}

/// Join document blocks with line breaks.
pub fn compose<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

    fn cell_counts(rendered: &str) -> Vec<usize> {
        // Count unescaped pipes per line: cells = pipes - 1
        rendered
            .lines()
            .map(|line| {
                let escaped = line.matches("\\|").count();
                line.matches('|').count() - escaped - 1
            })
            .collect()
    }

    /// Parse markdown and count (table rows including header, cells per row).
    fn parsed_table_shape(markdown: &str) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut cells = 0;
        for event in Parser::new_ext(markdown, Options::ENABLE_TABLES) {
            match event {
                Event::Start(Tag::TableHead) | Event::Start(Tag::TableRow) => cells = 0,
                Event::Start(Tag::TableCell) => cells += 1,
                Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => shape.push(cells),
                _ => {}
            }
        }
        shape
    }

    // =========================================================================
    // table
    // =========================================================================

    #[test]
    fn table_basic_layout() {
        let out = table(&["A", "B"], &[["1", "2"]]);
        assert_eq!(out, "| A | B |\n|---|---|\n| 1 | 2 |");
    }

    #[test]
    fn table_line_count_is_rows_plus_two() {
        for n in 0..12 {
            let rows: Vec<[String; 3]> = (0..n)
                .map(|i| [i.to_string(), format!("r{i}"), String::new()])
                .collect();
            let out = table(&["x", "y", "z"], &rows);
            assert_eq!(out.lines().count(), n + 2, "rows = {n}");
            assert!(cell_counts(&out).iter().all(|&c| c == 3));
        }
    }

    #[test]
    fn table_zero_rows_has_header_and_separator() {
        let rows: Vec<Vec<String>> = Vec::new();
        let out = table(&["Dim", "Key", "Description"], &rows);
        assert_eq!(out, "| Dim | Key | Description |\n|---|---|---|");
    }

    #[test]
    fn table_pads_short_rows_and_cuts_long_rows() {
        let rows = vec![vec!["only"], vec!["a", "b", "c", "d"]];
        let out = table(&["one", "two", "three"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "| only |  |  |");
        assert_eq!(lines[3], "| a | b | c |");
    }

    #[test]
    fn table_escapes_pipes_and_newlines() {
        let out = table(&["Col"], &[["a | b\nc"]]);
        assert_eq!(out.lines().count(), 3);
        assert!(out.ends_with("| a \\| b c |"));
    }

    #[test]
    fn table_parses_as_markdown_table() {
        let rows = vec![
            vec!["`dwh`", "⭐ Star Schema", "Primary"],
            vec!["`meta`", "pipe | inside", "Auxiliary"],
        ];
        let out = table(&["Schema", "Purpose", "Access"], &rows);
        assert_eq!(parsed_table_shape(&out), vec![3, 3, 3]);
    }

    // =========================================================================
    // section
    // =========================================================================

    #[test]
    fn section_starts_with_heading() {
        let out = section("🔐", "Security", "body text");
        assert!(out.starts_with("## 🔐 Security\n"));
        assert_eq!(out, "## 🔐 Security\n\nbody text\n");
    }

    #[test]
    fn section_joins_lines() {
        let out = section("⚙️", "ETL", ["first", "second"]);
        assert_eq!(out, "## ⚙️ ETL\n\nfirst\nsecond\n");
    }

    #[test]
    fn section_with_owned_lines() {
        let lines = vec!["- a".to_string(), "- b".to_string()];
        assert_eq!(section("x", "T", lines), "## x T\n\n- a\n- b\n");
    }

    #[test]
    fn section_with_empty_body() {
        assert_eq!(section("x", "T", Body::Lines(vec![])), "## x T\n\n\n");
    }

    #[test]
    fn section_wraps_table() {
        let out = section("📦", "Schemas", table(&["A"], &[["1"]]));
        assert_eq!(parsed_table_shape(&out), vec![1, 1]);
    }

    // =========================================================================
    // steps
    // =========================================================================

    #[test]
    fn steps_numbered_in_input_order() {
        let out = steps(&[("🗣️", "User asks"), ("🔍", "RAG search"), ("🧠", "LLM")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "| Step | What happens |");
        assert_eq!(lines[2], "| 1\u{fe0f}\u{20e3} | 🗣️ User asks |");
        assert_eq!(lines[3], "| 2\u{fe0f}\u{20e3} | 🔍 RAG search |");
        assert_eq!(lines[4], "| 3\u{fe0f}\u{20e3} | 🧠 LLM |");
    }

    #[test]
    fn steps_row_count_matches_input() {
        for k in 0..15 {
            let input: Vec<(&str, &str)> = (0..k).map(|_| ("•", "step")).collect();
            let out = steps(&input);
            assert_eq!(out.lines().count(), k + 2);
            for (i, line) in out.lines().skip(2).enumerate() {
                assert!(line.starts_with(&format!("| {}{KEYCAP} |", i + 1)));
            }
        }
    }

    #[test]
    fn steps_do_not_resort() {
        let out = steps(&[("b", "zeta"), ("a", "alpha")]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].ends_with("b zeta |"));
        assert!(lines[3].ends_with("a alpha |"));
    }

    // =========================================================================
    // compose
    // =========================================================================

    #[test]
    fn compose_joins_with_newlines() {
        assert_eq!(compose(&["# T", "", "> q"]), "# T\n\n> q");
    }

    #[test]
    fn compose_sections_are_blank_line_separated() {
        let doc = compose(&[section("a", "A", "x"), section("b", "B", "y")]);
        assert_eq!(doc, "## a A\n\nx\n\n## b B\n\ny\n");
    }
}
