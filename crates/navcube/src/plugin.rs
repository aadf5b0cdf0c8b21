//! The navigation cube plugin.

use glam::Mat4;
use image::RgbaImage;
use navcube_core::camera::{gizmo_pose, CameraPose, GizmoProjection, GIZMO_DISTANCE};
use navcube_core::error::{NavCubeError, Result};
use navcube_core::flight::CameraFlight;
use navcube_core::layout::{overlay_viewport, ViewportRect};
use navcube_core::options::{Alignment, CubeColors, Margins, NavCubeOptions};
use navcube_core::region::Region;
use navcube_render::atlas::FaceAtlas;
use navcube_render::painter::AtlasPainter;

use crate::host::CameraRig;

/// A navigation-cube camera gizmo.
///
/// The host owns one of these per viewport, forwards window events to it
/// (see the input methods), calls [`NavCube::update`] once per frame, and
/// draws the overlay using the painted atlas, [`NavCube::gizmo_camera`], and
/// [`NavCube::overlay_viewport`].
pub struct NavCube {
    pub(crate) options: NavCubeOptions,
    pub(crate) gizmo_camera: CameraPose,
    pub(crate) projection: GizmoProjection,
    pub(crate) hover: Option<Region>,
    pub(crate) repaint: bool,
    pub(crate) flight: CameraFlight,
    pub(crate) detached: bool,
    painter: AtlasPainter,

    // Input state.
    pub(crate) cursor: (f64, f64),
    pub(crate) left_down: bool,
    pub(crate) armed: bool,
    pub(crate) drag_distance: f64,
}

impl Default for NavCube {
    fn default() -> Self {
        Self::new(NavCubeOptions::default())
    }
}

impl NavCube {
    /// Creates a plugin with the given options (numeric fields clamped).
    #[must_use]
    pub fn new(options: NavCubeOptions) -> Self {
        let options = options.clamped();
        let painter = AtlasPainter::new(FaceAtlas::default(), options.colors);
        Self {
            options,
            gizmo_camera: CameraPose::default(),
            projection: GizmoProjection::default(),
            hover: None,
            repaint: true,
            flight: CameraFlight::new(),
            detached: false,
            painter,
            cursor: (0.0, 0.0),
            left_down: false,
            armed: false,
            drag_distance: 0.0,
        }
    }

    fn ensure_attached(&self) -> Result<()> {
        if self.detached {
            Err(NavCubeError::Detached)
        } else {
            Ok(())
        }
    }

    /// Returns the current options.
    #[must_use]
    pub fn options(&self) -> &NavCubeOptions {
        &self.options
    }

    /// Returns the overlay edge length in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.options.size_px
    }

    /// Sets the overlay edge length in pixels (clamped).
    pub fn set_size(&mut self, size_px: u32) -> Result<()> {
        self.ensure_attached()?;
        self.options.size_px = NavCubeOptions::clamp_size(size_px);
        Ok(())
    }

    /// Returns the overlay alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.options.alignment
    }

    /// Sets the overlay alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) -> Result<()> {
        self.ensure_attached()?;
        self.options.alignment = alignment;
        Ok(())
    }

    /// Sets the overlay alignment from a name, warning and falling back to
    /// `bottomRight` on unknown input.
    pub fn set_alignment_name(&mut self, name: &str) -> Result<()> {
        self.ensure_attached()?;
        self.options.alignment = Alignment::parse_or_default(name);
        Ok(())
    }

    /// Returns the overlay margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.options.margins
    }

    /// Sets the overlay margins.
    pub fn set_margins(&mut self, margins: Margins) -> Result<()> {
        self.ensure_attached()?;
        self.options.margins = margins;
        Ok(())
    }

    /// Returns whether camera transitions animate.
    #[must_use]
    pub fn camera_fly(&self) -> bool {
        self.options.camera_fly
    }

    /// Sets whether camera transitions animate (`false` = jump).
    pub fn set_camera_fly(&mut self, fly: bool) -> Result<()> {
        self.ensure_attached()?;
        self.options.camera_fly = fly;
        Ok(())
    }

    /// Returns the fit field of view in degrees.
    #[must_use]
    pub fn fit_fov_degrees(&self) -> f32 {
        self.options.fit_fov_degrees
    }

    /// Sets the fit field of view in degrees (clamped).
    pub fn set_fit_fov_degrees(&mut self, degrees: f32) -> Result<()> {
        self.ensure_attached()?;
        self.options.fit_fov_degrees = NavCubeOptions::clamp_fit_fov(degrees);
        Ok(())
    }

    /// Returns the flight duration in seconds.
    #[must_use]
    pub fn fly_duration_secs(&self) -> f32 {
        self.options.fly_duration_secs
    }

    /// Sets the flight duration in seconds (clamped).
    pub fn set_fly_duration_secs(&mut self, secs: f32) -> Result<()> {
        self.ensure_attached()?;
        self.options.fly_duration_secs = NavCubeOptions::clamp_fly_duration(secs);
        Ok(())
    }

    /// Returns whether the overlay is visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.options.visible
    }

    /// Shows or hides the overlay. Hiding clears the hover highlight.
    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.ensure_attached()?;
        self.options.visible = visible;
        if !visible {
            self.update_hover(None);
        }
        Ok(())
    }

    /// Returns whether the gizmo projection follows the host field of view.
    #[must_use]
    pub fn synch_projection(&self) -> bool {
        self.options.synch_projection
    }

    /// Sets whether the gizmo projection follows the host field of view.
    pub fn set_synch_projection(&mut self, synch: bool) -> Result<()> {
        self.ensure_attached()?;
        self.options.synch_projection = synch;
        if !synch {
            self.projection = GizmoProjection::default();
        }
        Ok(())
    }

    /// Returns the cube colors.
    #[must_use]
    pub fn colors(&self) -> CubeColors {
        self.options.colors
    }

    /// Sets the cube colors and schedules a repaint.
    pub fn set_colors(&mut self, colors: CubeColors) -> Result<()> {
        self.ensure_attached()?;
        self.options.colors = colors;
        self.painter.set_colors(colors);
        self.repaint = true;
        Ok(())
    }

    /// Returns the currently hovered region, if any.
    #[must_use]
    pub fn hovered_region(&self) -> Option<Region> {
        self.hover
    }

    /// Returns whether a camera flight is in progress.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_flying()
    }

    /// Returns whether the plugin has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.detached
    }

    /// Returns the atlas the painted texture uses.
    #[must_use]
    pub fn atlas(&self) -> FaceAtlas {
        self.painter.atlas()
    }

    /// Returns a freshly painted atlas when the texture needs re-upload,
    /// i.e. when the hover or colors changed since the last call.
    pub fn take_repaint(&mut self) -> Option<RgbaImage> {
        if !self.repaint || self.detached {
            return None;
        }
        self.repaint = false;
        Some(self.painter.paint(self.hover))
    }

    pub(crate) fn update_hover(&mut self, hover: Option<Region>) {
        if self.hover != hover {
            self.hover = hover;
            self.repaint = true;
        }
    }

    /// Forwards the host camera pose into the gizmo camera.
    ///
    /// Call whenever the host camera changes. Degenerate host poses leave
    /// the gizmo camera untouched.
    pub fn sync_from_camera(&mut self, main: &CameraPose) {
        if self.detached {
            return;
        }
        if let Some(pose) = gizmo_pose(main, GIZMO_DISTANCE) {
            self.gizmo_camera = pose;
        }
    }

    /// Returns the gizmo camera pose.
    #[must_use]
    pub fn gizmo_camera(&self) -> CameraPose {
        self.gizmo_camera
    }

    /// Returns the gizmo orthographic projection parameters.
    #[must_use]
    pub fn projection(&self) -> GizmoProjection {
        self.projection
    }

    /// Returns the view-projection matrix for the overlay pass.
    #[must_use]
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection.matrix(aspect_ratio) * self.gizmo_camera.view_matrix()
    }

    /// Computes the overlay viewport for the given canvas size.
    #[must_use]
    pub fn overlay_viewport(&self, canvas_w: u32, canvas_h: u32) -> ViewportRect {
        overlay_viewport(&self.options, canvas_w, canvas_h)
    }

    /// Per-frame tick: advances any camera flight onto the rig and keeps the
    /// gizmo camera and projection in sync with the host.
    pub fn update(&mut self, dt: f32, rig: &mut dyn CameraRig) {
        if self.detached {
            return;
        }
        if self.options.synch_projection {
            self.projection.synch_from_fov(rig.fov_degrees());
        }
        if let Some(pose) = self.flight.tick(dt) {
            rig.set_pose(pose);
        }
        self.sync_from_camera(&rig.pose());
    }

    /// Detaches the plugin: clears hover, cancels any flight, and turns all
    /// further mutations into [`NavCubeError::Detached`]. Event handling
    /// becomes a no-op.
    pub fn destroy(&mut self) {
        if self.detached {
            return;
        }
        self.hover = None;
        self.repaint = false;
        let _ = self.flight.cancel();
        self.detached = true;
        log::debug!("nav cube destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_size_roundtrip_and_clamp() {
        let mut cube = NavCube::default();
        cube.set_size(300).unwrap();
        assert_eq!(cube.size(), 300);
        cube.set_size(1).unwrap();
        assert_eq!(cube.size(), 50);
    }

    #[test]
    fn test_alignment_name_fallback() {
        let mut cube = NavCube::default();
        cube.set_alignment_name("topLeft").unwrap();
        assert_eq!(cube.alignment(), Alignment::TopLeft);
        cube.set_alignment_name("middle").unwrap();
        assert_eq!(cube.alignment(), Alignment::BottomRight);
    }

    #[test]
    fn test_initial_repaint_then_idle() {
        let mut cube = NavCube::default();
        assert!(cube.take_repaint().is_some());
        assert!(cube.take_repaint().is_none());
    }

    #[test]
    fn test_sync_from_camera() {
        let mut cube = NavCube::default();
        let main = CameraPose::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        cube.sync_from_camera(&main);
        let gizmo = cube.gizmo_camera();
        assert!((gizmo.eye - Vec3::new(0.0, 0.0, GIZMO_DISTANCE)).length() < 1e-4);

        // Degenerate pose leaves the gizmo camera untouched.
        let broken = CameraPose::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y);
        cube.sync_from_camera(&broken);
        assert_eq!(cube.gizmo_camera().eye, gizmo.eye);
    }

    #[test]
    fn test_destroy_blocks_mutation() {
        let mut cube = NavCube::default();
        cube.destroy();
        assert!(cube.is_destroyed());
        assert!(matches!(cube.set_size(300), Err(NavCubeError::Detached)));
        assert!(cube.take_repaint().is_none());
        // Idempotent.
        cube.destroy();
    }

    #[test]
    fn test_hide_clears_hover() {
        let mut cube = NavCube::default();
        let _ = cube.take_repaint();
        cube.update_hover(Some(Region::face(navcube_core::region::Face::Top)));
        assert!(cube.hovered_region().is_some());
        cube.set_visible(false).unwrap();
        assert!(cube.hovered_region().is_none());
        assert!(cube.take_repaint().is_some());
    }
}
