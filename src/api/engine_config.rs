use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Side, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PagingStep;
use crate::layout::{DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_OUTER_PADDING_PX};
use crate::render::Color;

/// Pixels reserved per category when deriving how many fit on the track.
pub const DEFAULT_CATEGORY_SIZE_PX: f64 = 32.0;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Record field bound to the scrollbar-governed category axis.
    pub category_field: String,
    /// Record field bound to the value axis.
    pub value_field: String,
    /// Record field whose distinct values become legend entries.
    #[serde(default)]
    pub series_field: Option<String>,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Category axis on the left and value axis at the bottom.
    #[serde(default)]
    pub transposed: bool,
    #[serde(default)]
    pub scrollbar: Option<ScrollbarConfig>,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub category_axis: AxisLabelConfig,
    #[serde(default)]
    pub theme: ChartTheme,
}

impl ChartEngineConfig {
    /// Creates a config with no scrollbar and default legend/axis settings.
    #[must_use]
    pub fn new(
        viewport: Viewport,
        category_field: impl Into<String>,
        value_field: impl Into<String>,
    ) -> Self {
        Self {
            viewport,
            category_field: category_field.into(),
            value_field: value_field.into(),
            series_field: None,
            padding: default_padding(),
            transposed: false,
            scrollbar: None,
            legend: LegendConfig::default(),
            category_axis: AxisLabelConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    #[must_use]
    pub fn with_series_field(mut self, field: impl Into<String>) -> Self {
        self.series_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_transposed(mut self, transposed: bool) -> Self {
        self.transposed = transposed;
        self
    }

    #[must_use]
    pub fn with_scrollbar(mut self, scrollbar: ScrollbarConfig) -> Self {
        self.scrollbar = Some(scrollbar);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_category_axis(mut self, axis: AxisLabelConfig) -> Self {
        self.category_axis = axis;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Unknown scrollbar `type` values and
    /// legend positions are rejected here.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

/// Scrollbar options recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarConfig {
    #[serde(rename = "type", default)]
    pub orientation: Orientation,
    #[serde(default = "default_category_size")]
    pub category_size: f64,
    #[serde(default)]
    pub style: ScrollbarStyleConfig,
    #[serde(default)]
    pub paging: PagingStep,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl ScrollbarConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            category_size: default_category_size(),
            style: ScrollbarStyleConfig::default(),
            paging: PagingStep::default(),
        }
    }

    #[must_use]
    pub fn with_category_size(mut self, category_size: f64) -> Self {
        self.category_size = category_size;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ScrollbarStyleConfig) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_paging(mut self, paging: PagingStep) -> Self {
        self.paging = paging;
        self
    }
}

/// Per-chart color overrides. Unset colors fall back to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollbarStyleConfig {
    #[serde(default)]
    pub track_color: Option<Color>,
    #[serde(default)]
    pub thumb_color: Option<Color>,
    #[serde(default)]
    pub thumb_highlight_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub position: Side,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: Side::Bottom,
        }
    }
}

impl LegendConfig {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn at(position: Side) -> Self {
        Self {
            visible: true,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelConfig {
    /// Rotate labels 45 degrees when they do not fit their category slot.
    #[serde(default = "default_true")]
    pub auto_rotate: bool,
    /// Drop labels that would overlap a previously drawn one.
    #[serde(default)]
    pub auto_hide: bool,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_hide: false,
            font_size_px: default_font_size_px(),
        }
    }
}

/// Resolved style values the engine draws with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    #[serde(default)]
    pub scrollbar: ScrollbarTheme,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_axis_line_color")]
    pub axis_line_color: Color,
    /// Legend marker colors, cycled per series.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarTheme::default(),
            text_color: default_text_color(),
            axis_line_color: default_axis_line_color(),
            palette: default_palette(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollbarTheme {
    #[serde(default)]
    pub default: ScrollbarDefaultTheme,
    #[serde(default)]
    pub hover: ScrollbarHoverTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarDefaultTheme {
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for ScrollbarDefaultTheme {
    fn default() -> Self {
        Self {
            track_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            thumb_color: Color::rgba(0.0, 0.0, 0.0, 0.15),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarHoverTheme {
    pub thumb_color: Color,
}

impl Default for ScrollbarHoverTheme {
    fn default() -> Self {
        Self {
            thumb_color: Color::rgba(0.0, 0.0, 0.0, 0.45),
        }
    }
}

fn default_padding() -> f64 {
    DEFAULT_OUTER_PADDING_PX
}

fn default_category_size() -> f64 {
    DEFAULT_CATEGORY_SIZE_PX
}

fn default_font_size_px() -> f64 {
    DEFAULT_LABEL_FONT_SIZE_PX
}

fn default_true() -> bool {
    true
}

fn default_text_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.65)
}

fn default_axis_line_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.25)
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0.357, 0.561, 0.976),
        Color::rgb(0.353, 0.847, 0.651),
        Color::rgb(0.365, 0.439, 0.573),
        Color::rgb(0.965, 0.741, 0.086),
        Color::rgb(0.910, 0.408, 0.333),
    ]
}
