//! Card frame geometry.
//!
//! The art box was measured once against the post-M15 card frame and is
//! scaled to whatever resolution a batch of scans was produced at. Both
//! axes scale independently; nothing here touches the filesystem.

/// Pixel dimensions of a card image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

/// Post-M15 reference frame the art box was measured against.
pub const REFERENCE_FRAME: FrameSize = FrameSize {
    width: 312.0,
    height: 445.0,
};

/// Art region within a reference-sized card image.
pub const REFERENCE_ART: ArtBox = ArtBox {
    x: 20.0,
    y: 48.0,
    width: 273.0,
    height: 198.0,
};

/// A crop rectangle in card-image coordinates.
///
/// Real-valued: rounding to whole pixels only happens at the raster
/// boundary via [`ArtBox::to_pixels`], so callers keep control over the
/// rounding policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ArtBox {
    /// Scale this box from `reference` coordinates into `target` coordinates.
    ///
    /// Each axis scales by its own ratio. A target whose aspect ratio
    /// differs from the reference stretches the box instead of preserving
    /// its shape.
    pub fn scaled_to(&self, reference: FrameSize, target: FrameSize) -> ArtBox {
        let width_ratio = target.width / reference.width;
        let height_ratio = target.height / reference.height;

        ArtBox {
            x: self.x * width_ratio,
            y: self.y * height_ratio,
            width: self.width * width_ratio,
            height: self.height * height_ratio,
        }
    }

    /// Round to whole pixels for the raster boundary.
    pub fn to_pixels(&self) -> PixelBox {
        PixelBox {
            x: self.x.round() as u32,
            y: self.y.round() as u32,
            width: self.width.round() as u32,
            height: self.height.round() as u32,
        }
    }
}

/// The art box for a scan of the given dimensions.
pub fn art_box(scan: FrameSize) -> ArtBox {
    REFERENCE_ART.scaled_to(REFERENCE_FRAME, scan)
}

/// A whole-pixel crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    /// Intersect with an image of the given dimensions.
    ///
    /// Keeps the origin inside the image and shrinks width/height so the
    /// box never reaches past the bottom-right corner.
    pub fn clamped(&self, image_width: u32, image_height: u32) -> PixelBox {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);

        PixelBox {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }
}
