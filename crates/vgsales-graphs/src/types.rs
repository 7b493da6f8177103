//! Chart specification types
//!
//! A [`ChartSpec`] is the unit of output the UI layer consumes: chart
//! kind, axis titles and ranges, labelled series, and the theme. Specs
//! serialize to JSON as-is.

use serde::{Deserialize, Serialize};

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Multi-series line chart over a numeric x axis.
    Line,
    /// Vertical bars over a categorical axis.
    Bar,
    /// Horizontal bars over a categorical axis.
    HorizontalBar,
    /// Pie chart of one categorical series.
    Pie,
    /// Point cloud over two numeric axes.
    Scatter,
    /// Sized markers positioned by longitude/latitude.
    GeoScatter,
}

/// Axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    /// Linear scale.
    #[default]
    Linear,
    /// Logarithmic scale; series built for it carry only positive values.
    Log,
}

/// One axis of a chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Axis title, if any.
    pub title: Option<String>,
    /// Fixed display range; data-driven when absent.
    pub range: Option<(f64, f64)>,
    /// Linear or logarithmic.
    pub scale: AxisScale,
    /// Whether the axis runs high-to-low (the genre bar lists genres
    /// top-down).
    pub reversed: bool,
}

impl AxisSpec {
    /// An axis with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets a fixed display range.
    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Switches the axis to log scale.
    #[must_use]
    pub const fn log_scale(mut self) -> Self {
        self.scale = AxisScale::Log;
        self
    }

    /// Reverses the axis direction.
    #[must_use]
    pub const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

/// One point of a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    /// Category name for categorical axes (genre, platform, game...).
    pub category: Option<String>,
    /// Numeric x value (release year, critic score, longitude).
    pub x: f64,
    /// Numeric y value.
    pub y: f64,
    /// Marker size for sized-marker charts.
    pub size: Option<f64>,
    /// Annotation/hover text.
    pub label: Option<String>,
}

impl DataPoint {
    /// A point on a categorical axis.
    pub fn categorical(category: impl Into<String>, y: f64) -> Self {
        Self {
            category: Some(category.into()),
            x: 0.0,
            y,
            size: None,
            label: None,
        }
    }

    /// A point on two numeric axes.
    pub const fn xy(x: f64, y: f64) -> Self {
        Self {
            category: None,
            x,
            y,
            size: None,
            label: None,
        }
    }

    /// Attaches annotation text.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a marker size.
    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// A named series of points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Series name, shown in the legend.
    pub name: String,
    /// The points.
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Creates a named series.
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Color theme. The dashboard ships dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// Parses a configured theme name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Page background color.
    pub const fn background(self) -> &'static str {
        match self {
            Self::Dark => "#222123",
            Self::Light => "#ffffff",
        }
    }

    /// Plot-area background color.
    pub const fn plot_background(self) -> &'static str {
        match self {
            Self::Dark => "#282828",
            Self::Light => "#f8f9fa",
        }
    }

    /// Text color.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Dark => "#ffffff",
            Self::Light => "#212529",
        }
    }
}

/// A complete chart specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Stable identifier, also used for export file names.
    pub id: String,
    /// Chart title.
    pub title: String,
    /// Chart kind.
    pub kind: ChartKind,
    /// Horizontal axis.
    pub x_axis: AxisSpec,
    /// Vertical axis.
    pub y_axis: AxisSpec,
    /// The data series.
    pub series: Vec<Series>,
    /// Color theme.
    pub theme: Theme,
}

impl ChartSpec {
    /// Creates an empty spec with default axes.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            x_axis: AxisSpec::default(),
            y_axis: AxisSpec::default(),
            series: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Whether the spec carries no points at all. An empty filter
    /// produces an empty chart, not an error.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}
