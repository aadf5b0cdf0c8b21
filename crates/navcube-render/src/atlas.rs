//! Face atlas layout.
//!
//! The six cube faces live in a fixed 3x2 grid inside one texture:
//!
//! ```text
//! +-------+-------+--------+
//! | Front | Back  | Left   |
//! +-------+-------+--------+
//! | Right | Top   | Bottom |
//! +-------+-------+--------+
//! ```
//!
//! Face-local uv has its origin at the bottom-left of a cell, matching the
//! frame used by [`Face::uv_axes`] and the pick queries.

use glam::Vec2;
use navcube_core::region::{Face, Region, RegionKind, DEFAULT_EDGE_BAND};

use crate::error::{RenderError, RenderResult};

/// Number of atlas columns.
pub const ATLAS_COLS: u32 = 3;
/// Number of atlas rows.
pub const ATLAS_ROWS: u32 = 2;

/// A rectangle in face-local uv coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ZoneRect {
    /// The whole face cell.
    pub const FULL: ZoneRect = ZoneRect {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    /// Intersection of two zones, `None` when empty.
    #[must_use]
    pub fn intersect(&self, other: &ZoneRect) -> Option<ZoneRect> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.x < max.x && min.y < max.y).then_some(ZoneRect { min, max })
    }
}

/// The fixed 3x2 face atlas.
#[derive(Debug, Clone, Copy)]
pub struct FaceAtlas {
    cell: u32,
}

impl Default for FaceAtlas {
    /// 256 pixels per face cell.
    fn default() -> Self {
        Self { cell: 256 }
    }
}

impl FaceAtlas {
    /// Creates an atlas with the given per-face cell resolution.
    pub fn new(cell_resolution: u32) -> RenderResult<Self> {
        if cell_resolution < 32 || !cell_resolution.is_power_of_two() {
            return Err(RenderError::InvalidAtlasResolution(cell_resolution));
        }
        Ok(Self {
            cell: cell_resolution,
        })
    }

    /// Per-face cell edge length in pixels.
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell
    }

    /// Full atlas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.cell * ATLAS_COLS
    }

    /// Full atlas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.cell * ATLAS_ROWS
    }

    /// Grid cell (column, row) of a face.
    #[must_use]
    pub fn cell_of(face: Face) -> (u32, u32) {
        match face {
            Face::Front => (0, 0),
            Face::Back => (1, 0),
            Face::Left => (2, 0),
            Face::Right => (0, 1),
            Face::Top => (1, 1),
            Face::Bottom => (2, 1),
        }
    }

    /// Pixel rectangle `(x, y, w, h)` of a face cell, y-down image coordinates.
    #[must_use]
    pub fn pixel_rect(&self, face: Face) -> (u32, u32, u32, u32) {
        let (col, row) = Self::cell_of(face);
        (col * self.cell, row * self.cell, self.cell, self.cell)
    }

    /// Normalized uv rectangle `(min, max)` of a face cell within the atlas,
    /// with v = 0 at the bottom of the texture.
    #[must_use]
    pub fn uv_rect(&self, face: Face) -> (Vec2, Vec2) {
        let (col, row) = Self::cell_of(face);
        #[allow(clippy::cast_precision_loss)]
        let (cols, rows) = (ATLAS_COLS as f32, ATLAS_ROWS as f32);
        #[allow(clippy::cast_precision_loss)]
        let (col, row) = (col as f32, row as f32);
        // Image row 0 is the top, uv v=0 the bottom.
        let min = Vec2::new(col / cols, (rows - row - 1.0) / rows);
        let max = Vec2::new((col + 1.0) / cols, (rows - row) / rows);
        (min, max)
    }
}

/// Returns the face-local zone that the given neighbor's edge band occupies
/// on `face`, or `None` when the faces are not adjacent.
#[must_use]
pub fn side_zone(face: Face, neighbor: Face, band: f32) -> Option<ZoneRect> {
    let band = band.clamp(1e-3, 0.5 - 1e-3);
    let (u_axis, v_axis) = face.uv_axes();
    let n = neighbor.normal();

    let close = |a: glam::Vec3, b: glam::Vec3| (a - b).length_squared() < 1e-6;

    if close(n, u_axis) {
        Some(ZoneRect {
            min: Vec2::new(1.0 - band, 0.0),
            max: Vec2::ONE,
        })
    } else if close(n, -u_axis) {
        Some(ZoneRect {
            min: Vec2::ZERO,
            max: Vec2::new(band, 1.0),
        })
    } else if close(n, v_axis) {
        Some(ZoneRect {
            min: Vec2::new(0.0, 1.0 - band),
            max: Vec2::ONE,
        })
    } else if close(n, -v_axis) {
        Some(ZoneRect {
            min: Vec2::ZERO,
            max: Vec2::new(1.0, band),
        })
    } else {
        None
    }
}

/// Returns the zones to highlight for a hovered region, as face-local rects.
///
/// A face region highlights its whole cell; an edge highlights the border
/// band on both adjacent faces; a corner highlights the corner square on all
/// three.
#[must_use]
pub fn highlight_zones(region: Region) -> Vec<(Face, ZoneRect)> {
    let band = DEFAULT_EDGE_BAND;
    let faces = region.faces();

    match region.kind() {
        RegionKind::Face => vec![(faces[0], ZoneRect::FULL)],
        RegionKind::Edge => {
            let mut zones = Vec::with_capacity(2);
            for (face, other) in [(faces[0], faces[1]), (faces[1], faces[0])] {
                if let Some(zone) = side_zone(face, other, band) {
                    zones.push((face, zone));
                }
            }
            zones
        }
        RegionKind::Corner => {
            let mut zones = Vec::with_capacity(3);
            for i in 0..3 {
                let face = faces[i];
                let a = faces[(i + 1) % 3];
                let b = faces[(i + 2) % 3];
                if let (Some(za), Some(zb)) = (side_zone(face, a, band), side_zone(face, b, band))
                {
                    if let Some(zone) = za.intersect(&zb) {
                        zones.push((face, zone));
                    }
                }
            }
            zones
        }
    }
}
