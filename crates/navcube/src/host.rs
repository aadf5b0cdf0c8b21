//! Traits for the host rendering engine boundary.
//!
//! The scene graph, render passes, and picking engine belong to the host;
//! the plugin only consumes them through these seams. Real implementations
//! live host-side, test doubles live in this crate's tests.

use glam::{Vec2, Vec3};
use navcube_core::camera::CameraPose;
use navcube_core::region::Face;

/// The host camera the plugin reads and steers.
pub trait CameraRig {
    /// Current camera pose.
    fn pose(&self) -> CameraPose;

    /// Applies a new camera pose.
    fn set_pose(&mut self, pose: CameraPose);

    /// Current vertical field of view in degrees.
    fn fov_degrees(&self) -> f32;

    /// Center of the scene contents.
    fn scene_center(&self) -> Vec3;

    /// Radius of a sphere bounding the scene contents.
    fn scene_radius(&self) -> f32;
}

/// The host's pick query against the cube, in overlay-local coordinates.
pub trait FacePicker {
    /// Casts a ray through the overlay at `uv` (origin bottom-left) and
    /// returns the hit cube face with its face-local uv, or `None` when the
    /// ray misses the cube.
    fn pick_face(&self, uv: Vec2) -> Option<(Face, Vec2)>;
}
