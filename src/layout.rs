//! Layout descriptions for figure and table fragments.

use crate::config::{FigureDefaults, TableDefaults, DEFAULT_LOCATION, DEFAULT_WIDTH};

/// Whether a float is typeset normally or rotated onto a landscape page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotated,
}

impl Orientation {
    pub fn from_sideways(sideways: bool) -> Self {
        if sideways {
            Orientation::Rotated
        } else {
            Orientation::Normal
        }
    }
}

/// Layout flags for a table block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Rotate the table 90 degrees inside a full-height minipage.
    pub sideways: bool,
    pub centering: bool,
    /// Typeset the table body in `\small`.
    pub small: bool,
    pub caption: Option<String>,
    /// Place caption and label before the body instead of after it.
    pub caption_above: bool,
    /// Label name, written as `tab:<label>`.
    pub label: Option<String>,
    /// Float placement, e.g. `[htp]`. Ignored for sideways tables.
    pub location_spec: String,
    /// Wrap the table in a `threeparttable` so it can carry notes.
    pub threeparttable: bool,
    /// Notes typeset below the table. Non-empty notes force
    /// `threeparttable` and `caption_above`.
    pub tablenotes: Option<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from_config(&TableDefaults::default())
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured table defaults.
    pub fn from_config(defaults: &TableDefaults) -> Self {
        Self {
            sideways: false,
            centering: defaults.centering,
            small: defaults.small,
            caption: None,
            caption_above: defaults.caption_above,
            label: None,
            location_spec: defaults.location.clone(),
            threeparttable: false,
            tablenotes: None,
        }
    }

    pub fn with_sideways(mut self, sideways: bool) -> Self {
        self.sideways = sideways;
        self
    }

    pub fn with_centering(mut self, centering: bool) -> Self {
        self.centering = centering;
        self
    }

    pub fn with_small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_caption_above(mut self, above: bool) -> Self {
        self.caption_above = above;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_location(mut self, location_spec: impl Into<String>) -> Self {
        self.location_spec = location_spec.into();
        self
    }

    pub fn with_threeparttable(mut self, threeparttable: bool) -> Self {
        self.threeparttable = threeparttable;
        self
    }

    pub fn with_tablenotes(mut self, notes: impl Into<String>) -> Self {
        self.tablenotes = Some(notes.into());
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_sideways(self.sideways)
    }

    /// Notes text, if present and non-empty.
    pub fn notes(&self) -> Option<&str> {
        self.tablenotes.as_deref().filter(|notes| !notes.is_empty())
    }

    /// Resolve flag interactions before rendering.
    ///
    /// Table notes only typeset inside a `threeparttable`, and the notes sit
    /// below the body, so the caption moves above. This overrides whatever
    /// the caller set for those two flags.
    pub fn normalized(mut self) -> Self {
        if self.notes().is_some() {
            if !self.threeparttable || !self.caption_above {
                log::debug!(
                    "table notes present: forcing threeparttable and caption_above (were {}, {})",
                    self.threeparttable,
                    self.caption_above
                );
            }
            self.threeparttable = true;
            self.caption_above = true;
        }
        self
    }
}

/// A figure block referencing an external image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureSpec {
    /// Image path as it should appear in `\includegraphics`.
    pub path: String,
    pub sideways: bool,
    pub caption: Option<String>,
    /// Label name, written as `fig:<label>`.
    pub label: Option<String>,
    pub location_spec: String,
    pub width: String,
    pub extra_include_args: String,
}

impl FigureSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sideways: false,
            caption: None,
            label: None,
            location_spec: DEFAULT_LOCATION.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            extra_include_args: String::new(),
        }
    }

    /// Start from configured figure defaults.
    pub fn from_config(path: impl Into<String>, defaults: &FigureDefaults) -> Self {
        Self {
            location_spec: defaults.location.clone(),
            width: defaults.width.clone(),
            extra_include_args: defaults.include_args.clone(),
            ..Self::new(path)
        }
    }

    pub fn with_sideways(mut self, sideways: bool) -> Self {
        self.sideways = sideways;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_location(mut self, location_spec: impl Into<String>) -> Self {
        self.location_spec = location_spec.into();
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_include_args(mut self, args: impl Into<String>) -> Self {
        self.extra_include_args = args.into();
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_sideways(self.sideways)
    }

    /// Options passed to `\includegraphics`.
    pub fn include_args(&self) -> String {
        if self.extra_include_args.is_empty() {
            format!("width={}", self.width)
        } else {
            format!("width={},{}", self.width, self.extra_include_args)
        }
    }
}

/// A table block around an already-rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Body markup, written verbatim.
    pub body_markup: String,
    pub layout: LayoutOptions,
}

impl TableSpec {
    pub fn new(body_markup: impl Into<String>, layout: LayoutOptions) -> Self {
        Self {
            body_markup: body_markup.into(),
            layout,
        }
    }
}
