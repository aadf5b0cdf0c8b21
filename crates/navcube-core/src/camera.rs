//! Camera pose math for the navigation cube.
//!
//! The gizmo renders through its own small orthographic camera that mirrors
//! the host camera's orientation at a fixed distance from the origin.

use glam::{Mat4, Vec3};

use crate::region::Region;

/// Distance from the origin at which the gizmo camera orbits the cube.
pub const GIZMO_DISTANCE: f32 = 5.0;

/// A camera pose: where it sits, what it looks at, and which way is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Creates a pose looking from `eye` toward `target`.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Returns the view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Returns the normalized view direction, or `None` when eye and target
    /// coincide.
    #[must_use]
    pub fn forward(&self) -> Option<Vec3> {
        let f = self.target - self.eye;
        (f.length_squared() > 1e-12).then(|| f.normalize())
    }

    /// Returns the eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.target - self.eye).length()
    }

    /// Orbits the eye around the target, turntable style. Pitch is clamped
    /// away from the poles so up never flips.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let radius = self.distance();
        if radius < 1e-6 {
            return;
        }
        let offset = self.eye - self.target;
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta -= yaw;
        phi = (phi - pitch).clamp(0.01, std::f32::consts::PI - 0.01);

        self.eye = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, GIZMO_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// Derives the gizmo camera pose from the host camera pose.
///
/// The gizmo camera sits `distance` behind the origin along the host view
/// direction and copies the host up vector (re-orthonormalized), so the cube
/// always shows the same orientation as the main view. Returns `None` for a
/// degenerate host pose; the caller keeps the previous gizmo pose in that
/// case.
#[must_use]
pub fn gizmo_pose(main: &CameraPose, distance: f32) -> Option<CameraPose> {
    let forward = main.forward()?;

    let mut up = main.up - forward * main.up.dot(forward);
    if up.length_squared() < 1e-9 {
        up = Vec3::Y - forward * forward.y;
    }
    if up.length_squared() < 1e-9 {
        up = Vec3::Z;
    }

    Some(CameraPose {
        eye: -forward * distance.max(1e-3),
        target: Vec3::ZERO,
        up: up.normalize(),
    })
}

/// Returns the camera pose that frames the sphere `(center, radius)` from
/// the given region's direction.
///
/// The eye distance is `radius / sin(fit_fov / 2)`, the standard fit for a
/// bounding sphere under a vertical field of view.
#[must_use]
pub fn pose_for_region(
    region: Region,
    center: Vec3,
    radius: f32,
    fit_fov_degrees: f32,
) -> CameraPose {
    let half_fov = (fit_fov_degrees.clamp(1.0, 179.0) * 0.5).to_radians();
    let distance = radius.max(1e-3) / half_fov.sin();

    CameraPose {
        eye: center + region.dir() * distance,
        target: center,
        up: region.up(),
    }
}

/// Orthographic projection parameters for the gizmo overlay camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoProjection {
    /// Half extent of the vertical view volume.
    pub half_extent: f32,
}

impl GizmoProjection {
    /// Half extent that frames the unit cube with some breathing room.
    pub const DEFAULT_HALF_EXTENT: f32 = 1.1;

    /// Returns the orthographic projection matrix for the given aspect ratio.
    #[must_use]
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        let half_h = self.half_extent;
        let half_w = half_h * aspect_ratio.max(1e-3);
        // Depth range generous enough for the gizmo camera at GIZMO_DISTANCE.
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -half_h,
            half_h,
            0.01,
            GIZMO_DISTANCE * 4.0,
        )
    }

    /// Scales the extent with the host field of view so the cube's apparent
    /// size tracks the host zoom. At 45 degrees this matches the default.
    pub fn synch_from_fov(&mut self, fov_degrees: f32) {
        let reference = (45.0f32 * 0.5).to_radians().tan();
        let current = (fov_degrees.clamp(1.0, 179.0) * 0.5).to_radians().tan();
        self.half_extent = Self::DEFAULT_HALF_EXTENT * current / reference;
    }
}

impl Default for GizmoProjection {
    fn default() -> Self {
        Self {
            half_extent: Self::DEFAULT_HALF_EXTENT,
        }
    }
}
