//! Figure blocks.

use super::{figure_template, BlockWriter};
use crate::error::Result;
use crate::layout::FigureSpec;
use std::io::Write;

/// Write a figure block for `spec`, followed by a blank line.
///
/// The image path is not checked.
///
/// # Example
///
/// ```rust
/// use texfrag::{emit_figure, FigureSpec};
///
/// let mut out: Vec<u8> = Vec::new();
/// let spec = FigureSpec::new("figs/curve.png").with_caption("Consolidation curve");
/// emit_figure(&mut out, &spec).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("\\begin{figure}[htp]\n"));
/// assert!(text.ends_with("\\end{figure}\n\n"));
/// ```
pub fn emit_figure<W: Write + ?Sized>(out: &mut W, spec: &FigureSpec) -> Result<()> {
    let template = figure_template(spec.orientation());
    log::trace!("figure {} using {} template", spec.path, template.environment);

    let mut block = BlockWriter::new(out);
    block.open_float(template, &spec.location_spec)?;
    block.line("    \\centering")?;
    block.line(&format!(
        "    \\includegraphics[{}]{{{}}}",
        spec.include_args(),
        spec.path
    ))?;
    block.caption_and_label(spec.caption.as_deref(), spec.label.as_deref(), "fig")?;
    block.finish()?;

    log::debug!("emitted figure {}", spec.path);
    Ok(())
}
