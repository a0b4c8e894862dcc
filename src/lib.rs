//! # texfrag
//!
//! LaTeX fragment emitters for automated report assembly: figures, tables,
//! section headings, and the numeric formatting used in table cells.
//!
//! ## Quick Start
//!
//! ```rust
//! use texfrag::{
//!     emit_figure, emit_section_heading, emit_tabular, fixed, with_sink, Column, DataTable,
//!     FigureSpec, LayoutOptions, Sink,
//! };
//!
//! let table = DataTable::new()
//!     .with_column(Column::new("step", [1.0, 2.0]))
//!     .with_column(Column::new("load", [10.0, 20.0]))
//!     .with_formatter("step", |x| fixed(x, 0))
//!     .with_formatter("load", |x| fixed(x, 1));
//!
//! let mut report: Vec<u8> = Vec::new();
//! with_sink(Sink::stream(&mut report), |w| {
//!     emit_section_heading(w, "Load steps", None, 0)?;
//!     emit_tabular(w, &table, &LayoutOptions::new().with_caption("Load steps"))?;
//!     emit_figure(w, &FigureSpec::new("figs/curve.png").with_sideways(true))
//! })
//! .unwrap();
//!
//! let tex = String::from_utf8(report).unwrap();
//! assert!(tex.contains("1 & 10.0 \\\\"));
//! assert!(tex.contains("\\begin{sidewaysfigure}"));
//! ```
//!
//! ## Output conventions
//!
//! - Figure and table blocks end with one blank line.
//! - Caption and label lines sit directly inside their block and are left
//!   out entirely when not set. Figure labels get a `fig:` prefix, table
//!   labels `tab:`.
//! - Sideways tables nest as `turn` > `minipage` > `table[H]` and close in
//!   reverse.
//! - Table notes force a `threeparttable` with the caption above the body.
//!
//! ## Sinks
//!
//! Output goes to any [`std::io::Write`]. [`with_sink`] also accepts a path,
//! which is opened in append mode unless configured otherwise, and is
//! closed before the call returns.
//!
//! ## Configuration
//!
//! Emitter defaults (float placement, figure width, table flags, missing
//! value text, sink mode) can be loaded from TOML with
//! [`EmitterConfig::from_toml_str`] or [`EmitterConfig::from_path`].

pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod render;
pub mod sink;

// Convenience re-exports
pub use config::EmitterConfig;
pub use error::{ConfigError, Error, FormatError, Result};
pub use format::{fixed, scientific, FormatSpec, Notation};
pub use layout::{FigureSpec, LayoutOptions, Orientation, TableSpec};
pub use render::{
    emit_chapter_title, emit_figure, emit_page_break, emit_section_heading, emit_table,
    emit_tabular, escape_latex, Cell, Column, DataTable, TabularMarkup,
};
pub use sink::{create_dirs, with_sink, FileMode, Sink};

/// Open a path sink in the mode configured for `config`.
pub fn configured_sink<'a>(
    path: impl Into<std::path::PathBuf>,
    config: &EmitterConfig,
) -> Sink<'a> {
    Sink::path_with_mode(path, config.sink.mode)
}
