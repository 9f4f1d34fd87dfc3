//! Callout Core Types and Definitions
//!
//! This crate provides the foundational types for anchored callout bubbles:
//!
//! - **Geometry**: Points, sizes, bounds, insets, sides and transforms ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Appearance**: The declarative bubble configuration ([`appearance::Appearance`])
//! - **Text**: Text measurement behind the [`text::TextMeasurer`] trait
//! - **Outline**: Closed bubble-plus-arrow contours ([`outline::build_outline`])
//! - **Draw**: Layered SVG drawables for bubbles, images and labels ([`draw`] module)

pub mod appearance;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod outline;
pub mod text;
