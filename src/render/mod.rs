//! Rendering layer: figure, table, and heading fragments.

pub mod figure;
pub mod heading;
pub mod table;
pub mod tabular;

pub use figure::emit_figure;
pub use heading::{emit_chapter_title, emit_page_break, emit_section_heading};
pub use table::{emit_table, emit_tabular};
pub use tabular::{escape_latex, Cell, Column, DataTable, TabularMarkup};

use crate::layout::Orientation;
use std::io::{self, Write};

/// Environments making up one float, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatTemplate {
    /// Wrappers opened around the float, as `(environment, arguments)`.
    pub wrappers: &'static [(&'static str, &'static str)],
    pub environment: &'static str,
    /// Placement that replaces the caller's location specifier.
    pub placement: Option<&'static str>,
}

const NORMAL_FIGURE: FloatTemplate = FloatTemplate {
    wrappers: &[],
    environment: "figure",
    placement: None,
};

const ROTATED_FIGURE: FloatTemplate = FloatTemplate {
    wrappers: &[],
    environment: "sidewaysfigure",
    placement: None,
};

const NORMAL_TABLE: FloatTemplate = FloatTemplate {
    wrappers: &[],
    environment: "table",
    placement: None,
};

const ROTATED_TABLE: FloatTemplate = FloatTemplate {
    wrappers: &[("turn", "{90}"), ("minipage", "{0.9\\textheight}")],
    environment: "table",
    placement: Some("[H]"),
};

/// Figure template for an orientation.
pub fn figure_template(orientation: Orientation) -> &'static FloatTemplate {
    match orientation {
        Orientation::Normal => &NORMAL_FIGURE,
        Orientation::Rotated => &ROTATED_FIGURE,
    }
}

/// Table template for an orientation.
pub fn table_template(orientation: Orientation) -> &'static FloatTemplate {
    match orientation {
        Orientation::Normal => &NORMAL_TABLE,
        Orientation::Rotated => &ROTATED_TABLE,
    }
}

/// Line writer that tracks open environments so every `\begin` gets its
/// `\end`, innermost first.
pub(crate) struct BlockWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    open: Vec<&'static str>,
}

impl<'w, W: Write + ?Sized> BlockWriter<'w, W> {
    pub(crate) fn new(out: &'w mut W) -> Self {
        Self {
            out,
            open: Vec::new(),
        }
    }

    pub(crate) fn begin(&mut self, environment: &'static str, args: &str) -> io::Result<()> {
        writeln!(self.out, "\\begin{{{}}}{}", environment, args)?;
        self.open.push(environment);
        Ok(())
    }

    /// Close the innermost open environment.
    pub(crate) fn end(&mut self) -> io::Result<()> {
        match self.open.pop() {
            Some(environment) => writeln!(self.out, "\\end{{{}}}", environment),
            None => Ok(()),
        }
    }

    /// Open the wrappers and float environment of `template`.
    pub(crate) fn open_float(
        &mut self,
        template: &FloatTemplate,
        location: &str,
    ) -> io::Result<()> {
        for &(environment, args) in template.wrappers {
            self.begin(environment, args)?;
        }
        self.begin(template.environment, template.placement.unwrap_or(location))
    }

    pub(crate) fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write pre-rendered markup, ending it on a line boundary.
    pub(crate) fn raw(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Caption and label lines; absent fields write nothing.
    pub(crate) fn caption_and_label(
        &mut self,
        caption: Option<&str>,
        label: Option<&str>,
        namespace: &str,
    ) -> io::Result<()> {
        if let Some(caption) = caption {
            writeln!(self.out, "\\caption{{{}}}", caption)?;
        }
        if let Some(label) = label {
            writeln!(self.out, "\\label{{{}:{}}}", namespace, label)?;
        }
        Ok(())
    }

    /// Close everything still open, then leave one blank line.
    pub(crate) fn finish(mut self) -> io::Result<()> {
        while !self.open.is_empty() {
            self.end()?;
        }
        self.out.write_all(b"\n")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Environment names from `\begin`/`\end` lines, in output order.
    pub(crate) fn directives(markup: &str) -> Vec<(bool, String)> {
        markup
            .lines()
            .filter_map(|line| {
                let line = line.trim_start();
                if let Some(rest) = line.strip_prefix("\\begin{") {
                    rest.split_once('}').map(|(name, _)| (true, name.to_string()))
                } else if let Some(rest) = line.strip_prefix("\\end{") {
                    rest.split_once('}').map(|(name, _)| (false, name.to_string()))
                } else {
                    None
                }
            })
            .collect()
    }

    /// True when every `\end` matches the most recent unclosed `\begin`
    /// and nothing is left open.
    pub(crate) fn is_balanced(markup: &str) -> bool {
        let mut stack = Vec::new();
        for (opening, name) in directives(markup) {
            if opening {
                stack.push(name);
            } else if stack.pop().as_deref() != Some(name.as_str()) {
                return false;
            }
        }
        stack.is_empty()
    }

    #[test]
    fn test_block_writer_closes_in_reverse() {
        let mut out: Vec<u8> = Vec::new();
        let mut block = BlockWriter::new(&mut out);
        block.open_float(table_template(Orientation::Rotated), "[htp]").unwrap();
        block.begin("threeparttable", "").unwrap();
        block.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\\begin{turn}{90}\n\\begin{minipage}{0.9\\textheight}\n\\begin{table}[H]\n\
             \\begin{threeparttable}\n\\end{threeparttable}\n\\end{table}\n\
             \\end{minipage}\n\\end{turn}\n\n"
        );
        assert!(is_balanced(&text));
    }

    #[test]
    fn test_raw_adds_missing_newline() {
        let mut out: Vec<u8> = Vec::new();
        let mut block = BlockWriter::new(&mut out);
        block.raw("a & b \\\\").unwrap();
        block.raw("").unwrap();
        block.raw("c\n").unwrap();

        assert_eq!(out, b"a & b \\\\\nc\n");
    }

    #[test]
    fn test_is_balanced_detects_crossed_ends() {
        assert!(is_balanced("\\begin{a}\n\\begin{b}\n\\end{b}\n\\end{a}\n"));
        assert!(!is_balanced("\\begin{a}\n\\begin{b}\n\\end{a}\n\\end{b}\n"));
        assert!(!is_balanced("\\begin{a}\n"));
    }
}
