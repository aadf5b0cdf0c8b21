//! Overlay placement math.
//!
//! Places the square gizmo viewport in a canvas corner according to the
//! configured alignment and margins, and converts cursor positions into
//! overlay-local uv coordinates.

use glam::Vec2;

use crate::options::NavCubeOptions;

/// An axis-aligned rectangle in physical pixels, y-down window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    /// Returns whether the rect has zero area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether a cursor position lies inside the rect.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= f64::from(self.x)
            && y >= f64::from(self.y)
            && x < f64::from(self.x) + f64::from(self.width)
            && y < f64::from(self.y) + f64::from(self.height)
    }

    /// Converts a cursor position to overlay-local uv with (0, 0) at the
    /// bottom-left of the overlay. Returns `None` outside the rect.
    #[must_use]
    pub fn to_local_uv(&self, x: f64, y: f64) -> Option<Vec2> {
        if !self.contains(x, y) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let u = ((x - f64::from(self.x)) / f64::from(self.width)) as f32;
        #[allow(clippy::cast_possible_truncation)]
        let v = 1.0 - ((y - f64::from(self.y)) / f64::from(self.height)) as f32;
        Some(Vec2::new(u, v))
    }
}

/// Computes the overlay viewport for the given canvas size.
///
/// The overlay is a square of `options.size_px`, shrunk when the canvas
/// minus margins cannot fit it. An empty canvas yields a zero rect.
#[must_use]
pub fn overlay_viewport(options: &NavCubeOptions, canvas_w: u32, canvas_h: u32) -> ViewportRect {
    let margins = options.margins;
    // Margins are unclamped user input; the sums can exceed u32.
    let avail_w = canvas_w
        .saturating_sub(margins.left)
        .saturating_sub(margins.right);
    let avail_h = canvas_h
        .saturating_sub(margins.top)
        .saturating_sub(margins.bottom);
    let size = options.size_px.min(avail_w).min(avail_h);
    if size == 0 {
        return ViewportRect::default();
    }

    let x = if options.alignment.is_right() {
        canvas_w - margins.right - size
    } else {
        margins.left
    };
    let y = if options.alignment.is_top() {
        margins.top
    } else {
        canvas_h - margins.bottom - size
    };

    ViewportRect {
        x,
        y,
        width: size,
        height: size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Alignment, Margins};

    fn options(alignment: Alignment) -> NavCubeOptions {
        NavCubeOptions {
            size_px: 200,
            alignment,
            margins: Margins::uniform(10),
            ..Default::default()
        }
    }

    #[test]
    fn test_bottom_right_placement() {
        let rect = overlay_viewport(&options(Alignment::BottomRight), 1280, 720);
        assert_eq!(
            rect,
            ViewportRect {
                x: 1280 - 10 - 200,
                y: 720 - 10 - 200,
                width: 200,
                height: 200
            }
        );
    }

    #[test]
    fn test_top_left_placement() {
        let rect = overlay_viewport(&options(Alignment::TopLeft), 1280, 720);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_shrinks_to_fit_small_canvas() {
        let rect = overlay_viewport(&options(Alignment::BottomRight), 120, 720);
        // 120 - 2*10 = 100 available horizontally.
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 100);
        assert_eq!(rect.x, 120 - 10 - 100);
    }

    #[test]
    fn test_huge_margins_yield_zero_rect() {
        // Margin sums larger than u32 must not overflow; the overlay simply
        // has no room left.
        let opts = NavCubeOptions {
            margins: Margins {
                left: u32::MAX,
                right: 1,
                top: u32::MAX,
                bottom: u32::MAX,
            },
            ..Default::default()
        };
        let rect = overlay_viewport(&opts, 1280, 720);
        assert!(rect.is_empty());
        assert_eq!(rect, ViewportRect::default());
    }

    #[test]
    fn test_contains_near_u32_max() {
        let rect = ViewportRect {
            x: u32::MAX - 10,
            y: u32::MAX - 10,
            width: u32::MAX,
            height: u32::MAX,
        };
        assert!(rect.contains(f64::from(u32::MAX), f64::from(u32::MAX)));
        assert!(!rect.contains(0.0, 0.0));
    }

    #[test]
    fn test_empty_canvas_yields_zero_rect() {
        let rect = overlay_viewport(&options(Alignment::BottomRight), 0, 0);
        assert!(rect.is_empty());
        assert!(!rect.contains(0.0, 0.0));
    }

    #[test]
    fn test_contains_and_uv_flip() {
        let rect = ViewportRect {
            x: 100,
            y: 50,
            width: 200,
            height: 200,
        };
        assert!(rect.contains(100.0, 50.0));
        assert!(!rect.contains(300.0, 50.0));

        // Top-left pixel of the rect maps to uv (0, 1).
        let uv = rect.to_local_uv(100.0, 50.0).unwrap();
        assert!(uv.x.abs() < 1e-5);
        assert!((uv.y - 1.0).abs() < 1e-5);

        // Center maps to (0.5, 0.5).
        let uv = rect.to_local_uv(200.0, 150.0).unwrap();
        assert!((uv.x - 0.5).abs() < 1e-5);
        assert!((uv.y - 0.5).abs() < 1e-5);

        assert!(rect.to_local_uv(99.0, 50.0).is_none());
    }
}
