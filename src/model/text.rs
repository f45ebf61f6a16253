//! Text node properties.

/// Font family and style name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontName {
    /// Font family (e.g., "Inter")
    pub family: String,
    /// Style name (e.g., "Semi Bold")
    pub style: String,
}

impl FontName {
    /// Create a font name.
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

/// A line-height or letter-spacing value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextMetric {
    /// Let the renderer decide; carries no numeric value
    Auto,
    /// Absolute value in pixels
    Pixels(f64),
    /// Value relative to the font size
    Percent(f64),
}

impl TextMetric {
    /// Numeric value, if the metric has one.
    pub fn value(&self) -> Option<f64> {
        match self {
            TextMetric::Auto => None,
            TextMetric::Pixels(v) | TextMetric::Percent(v) => Some(*v),
        }
    }

    /// Host unit tag.
    pub fn unit(&self) -> &'static str {
        match self {
            TextMetric::Auto => "AUTO",
            TextMetric::Pixels(_) => "PIXELS",
            TextMetric::Percent(_) => "PERCENT",
        }
    }
}

/// Properties carried only by text nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProperties {
    /// Text content
    pub characters: String,
    /// Font size; `None` when mixed across the text
    pub font_size: Option<f64>,
    /// Font name; `None` when mixed across the text
    pub font_name: Option<FontName>,
    /// Line height
    pub line_height: Option<TextMetric>,
    /// Letter spacing
    pub letter_spacing: Option<TextMetric>,
    /// Horizontal alignment (LEFT, CENTER, RIGHT, JUSTIFIED)
    pub text_align_horizontal: Option<String>,
    /// Vertical alignment (TOP, CENTER, BOTTOM)
    pub text_align_vertical: Option<String>,
    /// Decoration (NONE, UNDERLINE, STRIKETHROUGH)
    pub text_decoration: Option<String>,
    /// Case transform (ORIGINAL, UPPER, LOWER, TITLE, ...)
    pub text_case: Option<String>,
}

impl TextProperties {
    /// Create text properties with the given content and font size.
    pub fn new(characters: impl Into<String>, font_size: f64) -> Self {
        Self {
            characters: characters.into(),
            font_size: Some(font_size),
            ..Default::default()
        }
    }

    /// Set the font.
    pub fn with_font(mut self, family: impl Into<String>, style: impl Into<String>) -> Self {
        self.font_name = Some(FontName::new(family, style));
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: TextMetric) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Set the letter spacing.
    pub fn with_letter_spacing(mut self, letter_spacing: TextMetric) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_metric_values() {
        assert_eq!(TextMetric::Auto.value(), None);
        assert_eq!(TextMetric::Pixels(20.0).value(), Some(20.0));
        assert_eq!(TextMetric::Percent(150.0).unit(), "PERCENT");
    }

    #[test]
    fn test_text_properties_builder() {
        let text = TextProperties::new("Hello", 16.0)
            .with_font("Inter", "Bold")
            .with_line_height(TextMetric::Pixels(24.0));

        assert_eq!(text.characters, "Hello");
        assert_eq!(text.font_size, Some(16.0));
        assert_eq!(text.font_name.unwrap().style, "Bold");
        assert_eq!(text.line_height, Some(TextMetric::Pixels(24.0)));
        assert!(text.letter_spacing.is_none());
    }
}
