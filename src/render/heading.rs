//! Single-line structural fragments.

use crate::error::Result;
use std::io::Write;

/// Write `\section{name}`, indented by `indent` spaces, with an optional
/// trailing `\label{..}`.
pub fn emit_section_heading<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    label: Option<&str>,
    indent: usize,
) -> Result<()> {
    write!(out, "{:indent$}\\section{{{}}}", "", name, indent = indent)?;
    if let Some(label) = label {
        write!(out, "\\label{{{}}}", label)?;
    }
    out.write_all(b"\n\n")?;
    Ok(())
}

/// Write `\chapter{title}` with an optional inline `\label{..}`.
pub fn emit_chapter_title<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    label: Option<&str>,
) -> Result<()> {
    write!(out, "\\chapter{{{}}}", title)?;
    if let Some(label) = label {
        write!(out, "\\label{{{}}}", label)?;
    }
    out.write_all(b"\n\n")?;
    Ok(())
}

pub fn emit_page_break<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    out.write_all(b"\\clearpage\n\n")?;
    Ok(())
}
