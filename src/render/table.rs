//! Table blocks.
//!
//! The block is built outside-in:
//!
//! ```text
//! [turn -> minipage ->] table
//!     [\centering] [threeparttable] [\small]
//!     [caption/label]      (caption_above)
//!     body
//!     [caption/label]      (caption below)
//!     [tablenotes]
//! [/threeparttable] /table [-> /minipage -> /turn]
//! ```

use super::tabular::TabularMarkup;
use super::{table_template, BlockWriter};
use crate::error::Result;
use crate::layout::{LayoutOptions, TableSpec};
use std::io::Write;

/// Write a table block around `spec.body_markup`, followed by a blank line.
///
/// The layout is normalized first, so table notes always put the caption
/// above the body and wrap the table in a `threeparttable`. If writing
/// fails partway the sink may hold an incomplete block.
pub fn emit_table<W: Write + ?Sized>(out: &mut W, spec: &TableSpec) -> Result<()> {
    let layout = spec.layout.clone().normalized();
    let template = table_template(layout.orientation());
    log::trace!("table using {:?} template", layout.orientation());

    let mut block = BlockWriter::new(out);
    block.open_float(template, &layout.location_spec)?;

    if layout.centering {
        block.line("\\centering")?;
    }
    if layout.threeparttable {
        block.begin("threeparttable", "")?;
    }
    if layout.small {
        block.line("\\small")?;
    }

    let caption = layout.caption.as_deref();
    let label = layout.label.as_deref();

    if layout.caption_above {
        block.caption_and_label(caption, label, "tab")?;
    }

    block.raw(&spec.body_markup)?;

    if !layout.caption_above {
        block.caption_and_label(caption, label, "tab")?;
    }

    if layout.threeparttable {
        if let Some(notes) = layout.notes() {
            block.begin("tablenotes", "")?;
            block.line(notes)?;
            block.end()?;
        }
        block.end()?;
    }

    block.finish()?;

    log::debug!(
        "emitted table{}",
        label.map(|l| format!(" tab:{}", l)).unwrap_or_default()
    );
    Ok(())
}

/// Render `source` and write it as a table block with `layout`.
///
/// The body is rendered before anything is written, so a failing source
/// leaves the sink untouched; its error is returned unchanged.
///
/// # Example
///
/// ```rust
/// use texfrag::{emit_tabular, Column, DataTable, LayoutOptions};
///
/// let table = DataTable::new()
///     .with_column(Column::new("Parameter", ["Name"]))
///     .with_column(Column::new("Value", ["A1"]));
///
/// let mut out: Vec<u8> = Vec::new();
/// emit_tabular(&mut out, &table, &LayoutOptions::new().with_centering(true)).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("\\centering\n\\small\n\\begin{tabular}{ll}\n"));
/// ```
pub fn emit_tabular<W, T>(out: &mut W, source: &T, layout: &LayoutOptions) -> Result<()>
where
    W: Write + ?Sized,
    T: TabularMarkup + ?Sized,
{
    let body = source.render_markup()?;
    emit_table(out, &TableSpec::new(body, layout.clone()))
}
