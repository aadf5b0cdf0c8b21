//! Pick targets on the navigation cube.
//!
//! The cube exposes 26 orientation targets: 6 faces, 12 edges, and 8 corners.
//! Each target carries the direction the camera should view the scene from
//! and an up vector for that view.

use glam::{Vec2, Vec3};

/// Default width of the border band (in face-local uv units) that turns a
/// face hit into an edge or corner hit.
pub const DEFAULT_EDGE_BAND: f32 = 0.18;

/// One of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +Z face.
    Front,
    /// -Z face.
    Back,
    /// -X face.
    Left,
    /// +X face.
    Right,
    /// +Y face.
    Top,
    /// -Y face.
    Bottom,
}

impl Face {
    /// All six faces, in stable index order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Returns the outward unit normal of this face.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
            Face::Left => Vec3::NEG_X,
            Face::Right => Vec3::X,
            Face::Top => Vec3::Y,
            Face::Bottom => Vec3::NEG_Y,
        }
    }

    /// Returns the label painted on this face.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "FRONT",
            Face::Back => "BACK",
            Face::Left => "LEFT",
            Face::Right => "RIGHT",
            Face::Top => "TOP",
            Face::Bottom => "BOTTOM",
        }
    }

    /// Returns a stable index in `0..6`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Back => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    /// Converts a stable index back to a face.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// Returns the face whose outward normal equals the given unit axis.
    #[must_use]
    pub fn from_normal(normal: Vec3) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|f| (f.normal() - normal).length_squared() < 1e-6)
    }

    /// Returns the world-space directions of this face's local u and v axes.
    ///
    /// The axes are chosen so that, viewed from outside along the inward
    /// normal, u points right and v points up, and `u × v == normal`. The
    /// texture atlas and the uv reported by pick queries share this frame.
    #[must_use]
    pub fn uv_axes(self) -> (Vec3, Vec3) {
        match self {
            Face::Front => (Vec3::X, Vec3::Y),
            Face::Back => (Vec3::NEG_X, Vec3::Y),
            Face::Left => (Vec3::Z, Vec3::Y),
            Face::Right => (Vec3::NEG_Z, Vec3::Y),
            Face::Top => (Vec3::X, Vec3::NEG_Z),
            Face::Bottom => (Vec3::X, Vec3::Z),
        }
    }

    /// Returns the face opposite to this one.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }
}

/// Classification of a pick target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// A whole face (1 face).
    Face,
    /// An edge between two adjacent faces.
    Edge,
    /// A corner shared by three faces.
    Corner,
}

/// An orientation target on the cube: a face, an edge, or a corner.
///
/// Regions compare equal regardless of the order their faces were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    faces: [Face; 3],
    count: u8,
}

impl Region {
    /// Creates a face region.
    #[must_use]
    pub fn face(face: Face) -> Self {
        Self {
            faces: [face, face, face],
            count: 1,
        }
    }

    /// Creates an edge region between two adjacent faces.
    ///
    /// Returns `None` for identical or opposite faces.
    #[must_use]
    pub fn edge(a: Face, b: Face) -> Option<Self> {
        if a == b || a == b.opposite() {
            return None;
        }
        let mut faces = [a, b];
        faces.sort_by_key(|f| f.index());
        Some(Self {
            faces: [faces[0], faces[1], faces[1]],
            count: 2,
        })
    }

    /// Creates a corner region shared by three mutually adjacent faces.
    ///
    /// Returns `None` if any pair is identical or opposite.
    #[must_use]
    pub fn corner(a: Face, b: Face, c: Face) -> Option<Self> {
        for (x, y) in [(a, b), (a, c), (b, c)] {
            if x == y || x == y.opposite() {
                return None;
            }
        }
        let mut faces = [a, b, c];
        faces.sort_by_key(|f| f.index());
        Some(Self { faces, count: 3 })
    }

    /// Returns the faces making up this region.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces[..self.count as usize]
    }

    /// Returns the classification of this region.
    #[must_use]
    pub fn kind(&self) -> RegionKind {
        match self.count {
            1 => RegionKind::Face,
            2 => RegionKind::Edge,
            _ => RegionKind::Corner,
        }
    }

    /// Returns the unit direction the camera views the scene from when this
    /// region is activated.
    #[must_use]
    pub fn dir(&self) -> Vec3 {
        let sum: Vec3 = self.faces().iter().map(|f| f.normal()).sum();
        sum.normalize()
    }

    /// Returns the up vector for this region's view.
    ///
    /// World +Y projected orthogonal to the view direction; straight-down and
    /// straight-up views fall back to the -Z / +Z convention so the front
    /// face lands at the bottom of the screen.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        let dir = self.dir();
        if dir.y.abs() > 0.999 {
            if dir.y > 0.0 {
                Vec3::NEG_Z
            } else {
                Vec3::Z
            }
        } else {
            (Vec3::Y - dir * dir.y).normalize()
        }
    }

    /// Refines a face hit at face-local `uv` into a face, edge, or corner
    /// region. `band` is the border width in uv units and is clamped to
    /// `(0, 0.5)`. Corners win over edges.
    #[must_use]
    pub fn from_face_uv(face: Face, uv: Vec2, band: f32) -> Self {
        let band = band.clamp(1e-3, 0.5 - 1e-3);
        let (u_axis, v_axis) = face.uv_axes();

        let horizontal = if uv.x < band {
            Face::from_normal(-u_axis)
        } else if uv.x > 1.0 - band {
            Face::from_normal(u_axis)
        } else {
            None
        };
        let vertical = if uv.y < band {
            Face::from_normal(-v_axis)
        } else if uv.y > 1.0 - band {
            Face::from_normal(v_axis)
        } else {
            None
        };

        match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                Region::corner(face, h, v).unwrap_or_else(|| Region::face(face))
            }
            (Some(h), None) => Region::edge(face, h).unwrap_or_else(|| Region::face(face)),
            (None, Some(v)) => Region::edge(face, v).unwrap_or_else(|| Region::face(face)),
            (None, None) => Region::face(face),
        }
    }

    /// Enumerates all 26 regions: 6 faces, 12 edges, 8 corners.
    #[must_use]
    pub fn all() -> Vec<Region> {
        let mut regions = Vec::with_capacity(26);

        for face in Face::ALL {
            regions.push(Region::face(face));
        }

        for (i, a) in Face::ALL.into_iter().enumerate() {
            for b in Face::ALL.into_iter().skip(i + 1) {
                if let Some(edge) = Region::edge(a, b) {
                    regions.push(edge);
                }
            }
        }

        for i in 0..Face::ALL.len() {
            for j in (i + 1)..Face::ALL.len() {
                for k in (j + 1)..Face::ALL.len() {
                    if let Some(corner) = Region::corner(Face::ALL[i], Face::ALL[j], Face::ALL[k]) {
                        regions.push(corner);
                    }
                }
            }
        }

        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_region_count() {
        let regions = Region::all();
        assert_eq!(regions.len(), 26);
        assert_eq!(
            regions
                .iter()
                .filter(|r| r.kind() == RegionKind::Face)
                .count(),
            6
        );
        assert_eq!(
            regions
                .iter()
                .filter(|r| r.kind() == RegionKind::Edge)
                .count(),
            12
        );
        assert_eq!(
            regions
                .iter()
                .filter(|r| r.kind() == RegionKind::Corner)
                .count(),
            8
        );
    }

    #[test]
    fn test_directions_unit_and_distinct() {
        let regions = Region::all();
        for r in &regions {
            assert!((r.dir().length() - 1.0).abs() < 1e-5, "{r:?}");
        }
        for (i, a) in regions.iter().enumerate() {
            for b in regions.iter().skip(i + 1) {
                assert!(
                    (a.dir() - b.dir()).length() > 1e-3,
                    "duplicate dir for {a:?} and {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_face_region_dir_is_normal() {
        for face in Face::ALL {
            assert!((Region::face(face).dir() - face.normal()).length() < 1e-6);
        }
    }

    #[test]
    fn test_up_never_parallel_to_dir() {
        for r in Region::all() {
            let dot = r.up().dot(r.dir()).abs();
            assert!(dot < 0.5, "up nearly parallel to dir for {r:?}: {dot}");
            assert!((r.up().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_top_bottom_up_convention() {
        assert_eq!(Region::face(Face::Top).up(), Vec3::NEG_Z);
        assert_eq!(Region::face(Face::Bottom).up(), Vec3::Z);
    }

    #[test]
    fn test_uv_axes_right_handed() {
        for face in Face::ALL {
            let (u, v) = face.uv_axes();
            assert!((u.cross(v) - face.normal()).length() < 1e-6, "{face:?}");
        }
    }

    #[test]
    fn test_refine_center_is_face() {
        let r = Region::from_face_uv(Face::Front, Vec2::new(0.5, 0.5), DEFAULT_EDGE_BAND);
        assert_eq!(r, Region::face(Face::Front));
    }

    #[test]
    fn test_refine_edge() {
        // Right border of the front face meets the right face.
        let r = Region::from_face_uv(Face::Front, Vec2::new(0.95, 0.5), DEFAULT_EDGE_BAND);
        assert_eq!(r, Region::edge(Face::Front, Face::Right).unwrap());

        // Top border of the front face meets the top face.
        let r = Region::from_face_uv(Face::Front, Vec2::new(0.5, 0.99), DEFAULT_EDGE_BAND);
        assert_eq!(r, Region::edge(Face::Front, Face::Top).unwrap());
    }

    #[test]
    fn test_refine_corner() {
        let r = Region::from_face_uv(Face::Front, Vec2::new(0.02, 0.02), DEFAULT_EDGE_BAND);
        assert_eq!(
            r,
            Region::corner(Face::Front, Face::Left, Face::Bottom).unwrap()
        );
    }

    #[test]
    fn test_refine_consistent_across_shared_edge() {
        // The front/right edge must resolve to the same region from either side.
        let from_front =
            Region::from_face_uv(Face::Front, Vec2::new(0.99, 0.5), DEFAULT_EDGE_BAND);
        let from_right =
            Region::from_face_uv(Face::Right, Vec2::new(0.01, 0.5), DEFAULT_EDGE_BAND);
        assert_eq!(from_front, from_right);
    }

    #[test]
    fn test_edge_rejects_opposite_faces() {
        assert!(Region::edge(Face::Front, Face::Back).is_none());
        assert!(Region::corner(Face::Top, Face::Bottom, Face::Left).is_none());
    }

    proptest! {
        #[test]
        fn prop_refine_total_over_uv_square(
            face_idx in 0usize..6,
            u in 0.0f32..=1.0,
            v in 0.0f32..=1.0,
            band in 0.01f32..0.45,
        ) {
            let face = Face::from_index(face_idx).unwrap();
            let region = Region::from_face_uv(face, Vec2::new(u, v), band);
            // The hit face always participates in the refined region.
            prop_assert!(region.faces().contains(&face));
            prop_assert!((region.dir().length() - 1.0).abs() < 1e-4);
        }
    }
}
