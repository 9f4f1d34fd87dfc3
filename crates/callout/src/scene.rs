//! Scenes: one anchored bubble inside a container, ready to render.
//!
//! A scene is usually read from TOML:
//!
//! ```toml
//! text = "Tap to edit"
//! anchor_offset = 0.0
//!
//! [container]
//! x = 0.0
//! y = 0.0
//! width = 400.0
//! height = 800.0
//!
//! [anchor]
//! x = 100.0
//! y = 100.0
//! width = 50.0
//! height = 50.0
//!
//! [image]
//! width = 64.0
//! height = 64.0
//! href = "icon.png"
//!
//! [header]
//! width = 120.0
//! height = 24.0
//!
//! [appearance.arrow]
//! side = "top"
//! ```
//!
//! A scene without an `appearance` table uses the configured default.

use serde::Deserialize;

use callout_core::{
    appearance::Appearance,
    geometry::{Bounds, Size},
};

use crate::layout::TooltipContent;

/// An image placed in the bubble. Its size is the intrinsic image size; the
/// layout fits it into the appearance's image slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneImage {
    size: Size,
    href: Option<String>,
}

impl SceneImage {
    pub fn new(size: Size) -> Self {
        Self { size, href: None }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// A container, an anchor inside it and the bubble pointing at the anchor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SceneFile")]
pub struct Scene {
    container: Bounds,
    anchor: Bounds,
    text: String,
    image: Option<SceneImage>,
    header: Option<Size>,
    anchor_offset: f32,
    appearance: Option<Appearance>,
}

impl Scene {
    pub fn new(container: Bounds, anchor: Bounds, text: impl Into<String>) -> Self {
        Self {
            container,
            anchor,
            text: text.into(),
            image: None,
            header: None,
            anchor_offset: 0.0,
            appearance: None,
        }
    }

    pub fn with_image(mut self, image: SceneImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Pins a header of `size` above the bubble.
    pub fn with_header(mut self, size: Size) -> Self {
        self.header = Some(size);
        self
    }

    pub fn with_anchor_offset(mut self, offset: f32) -> Self {
        self.anchor_offset = offset;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn container(&self) -> Bounds {
        self.container
    }

    pub fn anchor(&self) -> Bounds {
        self.anchor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&SceneImage> {
        self.image.as_ref()
    }

    pub fn header(&self) -> Option<Size> {
        self.header
    }

    /// The scene's own appearance, if it declares one.
    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }

    /// The layout input for this scene's bubble.
    pub fn content(&self) -> TooltipContent<'_> {
        let mut content = TooltipContent::new(&self.text).with_anchor_offset(self.anchor_offset);
        if let Some(image) = &self.image {
            content = content.with_image(image.size);
        }
        if let Some(header) = self.header {
            content = content.with_header(header);
        }
        content
    }
}

/// Serialized form of a [`Scene`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    container: RectFile,
    anchor: RectFile,
    #[serde(default)]
    text: String,
    #[serde(default)]
    image: Option<ImageFile>,
    #[serde(default)]
    header: Option<HeaderFile>,
    #[serde(default)]
    anchor_offset: f32,
    #[serde(default)]
    appearance: Option<Appearance>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RectFile {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImageFile {
    width: f32,
    height: f32,
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HeaderFile {
    width: f32,
    height: f32,
}

impl From<RectFile> for Bounds {
    fn from(rect: RectFile) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<SceneFile> for Scene {
    fn from(file: SceneFile) -> Self {
        Self {
            container: file.container.into(),
            anchor: file.anchor.into(),
            text: file.text,
            image: file.image.map(|image| SceneImage {
                size: Size::new(image.width, image.height),
                href: image.href,
            }),
            header: file
                .header
                .map(|header| Size::new(header.width, header.height)),
            anchor_offset: file.anchor_offset,
            appearance: file.appearance,
        }
    }
}
