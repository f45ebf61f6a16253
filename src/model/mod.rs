//! Document model types for design node trees.
//!
//! This module defines the read-only view of a host document that the
//! extractors consume. Common attributes live on [`Node`]; data that only
//! some node types carry (text content, instance origins) lives in the
//! [`NodeKind`] tagged union.

mod effect;
mod node;
mod paint;
mod text;
mod variable;

pub use effect::{Effect, EffectKind, Offset};
pub use node::{
    AutoLayout, ComponentRef, CornerRadii, Geometry, LayoutMode, Node, NodeKind, NodeType,
};
pub use paint::{Color, ColorStop, GradientType, Paint, PaintKind};
pub use text::{FontName, TextMetric, TextProperties};
pub use variable::{Variable, VariableAlias, VariableBinding};
