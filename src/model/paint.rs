//! Fill and stroke paints.

/// A color with linear channels in `[0, 1]`.
///
/// Solid paints carry no alpha (their opacity lives on the [`Paint`]);
/// gradient stops and effect colors do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel, when the source provides one
    pub a: Option<f64>,
}

impl Color {
    /// Create an opaque color without an alpha channel.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a color with an explicit alpha channel.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientType {
    /// Straight-line gradient
    Linear,
    /// Circular gradient
    Radial,
    /// Conic gradient
    Angular,
    /// Diamond-shaped gradient
    Diamond,
}

impl GradientType {
    /// Host type tag for this gradient.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientType::Linear => "GRADIENT_LINEAR",
            GradientType::Radial => "GRADIENT_RADIAL",
            GradientType::Angular => "GRADIENT_ANGULAR",
            GradientType::Diamond => "GRADIENT_DIAMOND",
        }
    }

    /// Parse a host type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "GRADIENT_LINEAR" => Some(GradientType::Linear),
            "GRADIENT_RADIAL" => Some(GradientType::Radial),
            "GRADIENT_ANGULAR" => Some(GradientType::Angular),
            "GRADIENT_DIAMOND" => Some(GradientType::Diamond),
            _ => None,
        }
    }
}

/// One stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Stop color, alpha included
    pub color: Color,
    /// Position along the gradient in `[0, 1]`
    pub position: f64,
}

impl ColorStop {
    /// Create a gradient stop.
    pub fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }
}

/// Type-specific content of a paint layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintKind {
    /// Flat color
    Solid {
        /// Paint color
        color: Color,
    },
    /// Gradient between color stops
    Gradient {
        /// Gradient geometry
        gradient: GradientType,
        /// Ordered color stops; `None` when the host gave none
        stops: Option<Vec<ColorStop>>,
    },
    /// Bitmap image
    Image {
        /// How the image is fitted (FILL, FIT, CROP, TILE)
        scale_mode: Option<String>,
    },
    /// Any paint type without a dedicated variant (video, pattern, ...)
    Other(String),
}

impl PaintKind {
    /// Host type tag for this paint.
    pub fn type_tag(&self) -> &str {
        match self {
            PaintKind::Solid { .. } => "SOLID",
            PaintKind::Gradient { gradient, .. } => gradient.as_str(),
            PaintKind::Image { .. } => "IMAGE",
            PaintKind::Other(tag) => tag,
        }
    }
}

/// A single fill or stroke layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    /// Visibility flag; `None` means visible
    pub visible: Option<bool>,
    /// Layer opacity; `None` means fully opaque
    pub opacity: Option<f64>,
    /// Type-specific content
    pub kind: PaintKind,
}

impl Paint {
    /// Create a paint of the given kind with default visibility and opacity.
    pub fn new(kind: PaintKind) -> Self {
        Self {
            visible: None,
            opacity: None,
            kind,
        }
    }

    /// Create a solid paint.
    pub fn solid(color: Color) -> Self {
        Self::new(PaintKind::Solid { color })
    }

    /// Create a gradient paint.
    pub fn gradient(gradient: GradientType, stops: Vec<ColorStop>) -> Self {
        Self::new(PaintKind::Gradient {
            gradient,
            stops: Some(stops),
        })
    }

    /// Create an image paint.
    pub fn image(scale_mode: impl Into<String>) -> Self {
        Self::new(PaintKind::Image {
            scale_mode: Some(scale_mode.into()),
        })
    }

    /// Set the layer opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Mark the layer as hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    /// Whether the layer is visible. A missing flag counts as visible.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Whether this is an image paint.
    pub fn is_image(&self) -> bool {
        matches!(self.kind, PaintKind::Image { .. })
    }
}
