use owo_colors::Style;

/// Whether rendered output contains ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Apply styles from the stylesheet
    #[default]
    EnableColors,
    /// Emit plain text
    DisableColors,
}

impl ColorChoice {
    /// Applies `style` to `text` if colours are enabled.
    #[must_use]
    pub fn style(self, style: Style, text: &str) -> String {
        match self {
            Self::EnableColors => style.style(text).to_string(),
            Self::DisableColors => text.to_string(),
        }
    }
}

/// Settings that control how errors are rendered.
///
/// The group limits keep very wide or very deep groups readable: members
/// past `max_group_width` are summarized in one line, and groups nested
/// deeper than `max_group_depth` are replaced by a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to colour the output
    pub color_choice: ColorChoice,
    /// Print the `Debug` form of the error instead of rendering it
    pub print_debug: bool,
    /// Maximum number of members shown per group
    pub max_group_width: usize,
    /// Maximum number of nested group levels shown
    pub max_group_depth: usize,
}

impl RenderConfig {
    /// Default number of members shown per group.
    pub const DEFAULT_MAX_GROUP_WIDTH: usize = 15;
    /// Default number of nested group levels shown.
    pub const DEFAULT_MAX_GROUP_DEPTH: usize = 10;

    /// Returns the default settings with colours disabled.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color_choice: ColorChoice::DisableColors,
            ..Self::default()
        }
    }

    /// Returns the settings with colours enabled or disabled.
    #[must_use]
    pub const fn with_colors(mut self, use_colors: bool) -> Self {
        self.color_choice = if use_colors {
            ColorChoice::EnableColors
        } else {
            ColorChoice::DisableColors
        };
        self
    }

    /// Returns the settings with debug printing enabled or disabled.
    #[must_use]
    pub const fn with_print_debug(mut self, print_debug: bool) -> Self {
        self.print_debug = print_debug;
        self
    }

    /// Returns the settings with the given group limits.
    #[must_use]
    pub const fn with_group_limits(mut self, max_group_width: usize, max_group_depth: usize) -> Self {
        self.max_group_width = max_group_width;
        self.max_group_depth = max_group_depth;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_choice: ColorChoice::EnableColors,
            print_debug: false,
            max_group_width: Self::DEFAULT_MAX_GROUP_WIDTH,
            max_group_depth: Self::DEFAULT_MAX_GROUP_DEPTH,
        }
    }
}
