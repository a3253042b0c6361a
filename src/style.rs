pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_FILL: &str = "#FFF";
pub const DEFAULT_STROKE: &str = "#E0E0E0";
pub const DEFAULT_LABEL_STROKE: &str = "#FFF";
pub const DEFAULT_LABEL_FILL: &str = "#000";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_FONT_FAMILY: &str = "arial";

/// Visual options shared by every node and edge of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub line_width: f64,
    /// circle fill
    pub fill: String,
    /// circle outline and edge color
    pub stroke: String,
    pub label_stroke: String,
    pub label_fill: String,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            fill: DEFAULT_FILL.into(),
            stroke: DEFAULT_STROKE.into(),
            label_stroke: DEFAULT_LABEL_STROKE.into(),
            label_fill: DEFAULT_LABEL_FILL.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.into(),
        }
    }
}
