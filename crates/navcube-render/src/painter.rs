//! CPU repainting of the cube texture.
//!
//! The atlas is repainted whenever the hovered region changes: base face
//! color, the hovered zone(s) mixed toward the hover color, an outline frame
//! per face, and the face labels. Output is deterministic for identical
//! inputs.

use glam::Vec3;
use image::{Rgba, RgbaImage};
use navcube_core::options::CubeColors;
use navcube_core::region::{Face, Region};

use crate::atlas::{highlight_zones, FaceAtlas, ZoneRect};
use crate::font;

/// Mix factor applied when blending the hover color over a face.
const HOVER_MIX: f32 = 0.6;

/// Paints the cube texture atlas.
#[derive(Debug, Clone)]
pub struct AtlasPainter {
    atlas: FaceAtlas,
    colors: CubeColors,
}

impl AtlasPainter {
    /// Creates a painter for the given atlas and color set.
    #[must_use]
    pub fn new(atlas: FaceAtlas, colors: CubeColors) -> Self {
        Self { atlas, colors }
    }

    /// Replaces the color set (the next paint reflects it).
    pub fn set_colors(&mut self, colors: CubeColors) {
        self.colors = colors;
    }

    /// Returns the atlas this painter targets.
    #[must_use]
    pub fn atlas(&self) -> FaceAtlas {
        self.atlas
    }

    /// Paints the full atlas, highlighting the hovered region if any.
    #[must_use]
    pub fn paint(&self, hover: Option<Region>) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(
            self.atlas.width(),
            self.atlas.height(),
            to_rgba(self.colors.face),
        );

        if let Some(region) = hover {
            let hover_color = mix(self.colors.face, self.colors.hover, HOVER_MIX);
            for (face, zone) in highlight_zones(region) {
                self.fill_zone(&mut img, face, &zone, to_rgba(hover_color));
            }
        }

        for face in Face::ALL {
            self.draw_outline(&mut img, face);
            self.draw_label(&mut img, face);
        }

        img
    }

    /// Fills a face-local uv zone, flipping v into image coordinates.
    fn fill_zone(&self, img: &mut RgbaImage, face: Face, zone: &ZoneRect, color: Rgba<u8>) {
        let (cx, cy, cw, ch) = self.atlas.pixel_rect(face);
        #[allow(clippy::cast_precision_loss)]
        let (cw_f, ch_f) = (cw as f32, ch as f32);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let x0 = cx + (zone.min.x.clamp(0.0, 1.0) * cw_f) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let x1 = cx + (zone.max.x.clamp(0.0, 1.0) * cw_f).ceil() as u32;
        // v = 0 is the bottom of the cell; image y grows downward.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let y0 = cy + ((1.0 - zone.max.y.clamp(0.0, 1.0)) * ch_f) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let y1 = cy + ((1.0 - zone.min.y.clamp(0.0, 1.0)) * ch_f).ceil() as u32;

        for y in y0..y1.min(cy + ch) {
            for x in x0..x1.min(cx + cw) {
                img.put_pixel(x, y, color);
            }
        }
    }

    fn draw_outline(&self, img: &mut RgbaImage, face: Face) {
        let (cx, cy, cw, ch) = self.atlas.pixel_rect(face);
        let thickness = (cw / 64).max(1);
        let color = to_rgba(self.colors.outline);

        for y in cy..cy + ch {
            for x in cx..cx + cw {
                let inset_x = (x - cx).min(cx + cw - 1 - x);
                let inset_y = (y - cy).min(cy + ch - 1 - y);
                if inset_x < thickness || inset_y < thickness {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_label(&self, img: &mut RgbaImage, face: Face) {
        let (cx, cy, cw, ch) = self.atlas.pixel_rect(face);
        let label = face.label();

        // Largest integer scale keeping the text within 80% of the cell width
        // and 30% of its height.
        let base_width = font::text_width(label, 1);
        let mut scale = 1;
        while font::text_width(label, scale + 1) <= cw * 4 / 5
            && font::GLYPH_HEIGHT * (scale + 1) <= ch * 3 / 10
        {
            scale += 1;
        }
        if base_width == 0 {
            return;
        }

        let text_w = font::text_width(label, scale);
        let text_h = font::GLYPH_HEIGHT * scale;
        let x = cx + (cw.saturating_sub(text_w)) / 2;
        let y = cy + (ch.saturating_sub(text_h)) / 2;
        font::draw_text(img, label, x, y, scale, to_rgba(self.colors.label));
    }
}

fn to_rgba(color: Vec3) -> Rgba<u8> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([to_u8(color.x), to_u8(color.y), to_u8(color.z), 255])
}

fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use navcube_core::region::RegionKind;

    fn painter() -> AtlasPainter {
        AtlasPainter::new(FaceAtlas::new(64).unwrap(), CubeColors::default())
    }

    #[test]
    fn test_paint_dimensions() {
        let img = painter().paint(None);
        assert_eq!(img.width(), 192);
        assert_eq!(img.height(), 128);
    }

    #[test]
    fn test_paint_deterministic() {
        let p = painter();
        let hover = Some(Region::face(Face::Top));
        assert_eq!(p.paint(hover).as_raw(), p.paint(hover).as_raw());
    }

    #[test]
    fn test_hover_changes_pixels() {
        let p = painter();
        let plain = p.paint(None);
        let hovered = p.paint(Some(Region::face(Face::Front)));
        assert_ne!(plain.as_raw(), hovered.as_raw());
    }

    #[test]
    fn test_hover_confined_to_region_faces() {
        let p = painter();
        let plain = p.paint(None);
        let hovered = p.paint(Some(Region::face(Face::Front)));

        // The bottom face cell is untouched by a front-face hover.
        let atlas = p.atlas();
        let (x, y, w, h) = atlas.pixel_rect(Face::Bottom);
        for yy in y..y + h {
            for xx in x..x + w {
                assert_eq!(plain.get_pixel(xx, yy), hovered.get_pixel(xx, yy));
            }
        }
    }

    #[test]
    fn test_edge_hover_touches_two_cells() {
        let p = painter();
        let plain = p.paint(None);
        let edge = Region::edge(Face::Front, Face::Right).unwrap();
        assert_eq!(edge.kind(), RegionKind::Edge);
        let hovered = p.paint(Some(edge));

        let atlas = p.atlas();
        for face in [Face::Front, Face::Right] {
            let (x, y, w, h) = atlas.pixel_rect(face);
            let mut changed = false;
            'scan: for yy in y..y + h {
                for xx in x..x + w {
                    if plain.get_pixel(xx, yy) != hovered.get_pixel(xx, yy) {
                        changed = true;
                        break 'scan;
                    }
                }
            }
            assert!(changed, "edge hover did not touch {face:?}");
        }
    }

    #[test]
    fn test_label_pixels_present() {
        let p = painter();
        let img = p.paint(None);
        let label = to_rgba(CubeColors::default().label);
        let found = img.pixels().any(|px| *px == label);
        assert!(found, "no label pixels painted");
    }
}
