//! Mouse event wiring.
//!
//! Hovering the overlay highlights the face/edge/corner under the cursor,
//! clicking flies (or jumps) the host camera to that region, and dragging on
//! the cube orbits the host camera directly.

use navcube_core::camera::pose_for_region;
use navcube_core::region::{Region, DEFAULT_EDGE_BAND};
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::host::{CameraRig, FacePicker};
use crate::plugin::NavCube;

/// Cursor travel (in pixels) below which a press/release pair counts as a
/// click rather than a drag.
const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Orbit speed while dragging the cube.
const ORBIT_RADIANS_PER_PIXEL: f32 = 0.01;

impl NavCube {
    /// Dispatches a winit window event to the plugin.
    ///
    /// `canvas_w`/`canvas_h` are the physical size of the canvas the overlay
    /// lives in. Events are ignored while hidden or destroyed.
    pub fn on_window_event(
        &mut self,
        event: &WindowEvent,
        canvas_w: u32,
        canvas_h: u32,
        rig: &mut dyn CameraRig,
        picker: &dyn FacePicker,
    ) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y, canvas_w, canvas_h, rig, picker);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.on_mouse_press(canvas_w, canvas_h),
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.on_mouse_release(rig),
            WindowEvent::CursorLeft { .. } => self.on_cursor_left(),
            _ => {}
        }
    }

    /// Handles cursor movement: hover tracking, or drag-orbit while the
    /// left button is held on the cube.
    pub fn on_cursor_moved(
        &mut self,
        x: f64,
        y: f64,
        canvas_w: u32,
        canvas_h: u32,
        rig: &mut dyn CameraRig,
        picker: &dyn FacePicker,
    ) {
        if self.detached || !self.options.visible {
            return;
        }

        let (dx, dy) = (x - self.cursor.0, y - self.cursor.1);
        self.cursor = (x, y);

        if self.left_down && self.armed {
            self.drag_distance += dx.abs() + dy.abs();
            if self.drag_distance >= DRAG_THRESHOLD_PX {
                // Dragging the cube orbits the host camera.
                self.update_hover(None);
                #[allow(clippy::cast_possible_truncation)]
                let (yaw, pitch) = (
                    dx as f32 * ORBIT_RADIANS_PER_PIXEL,
                    dy as f32 * ORBIT_RADIANS_PER_PIXEL,
                );
                let mut pose = rig.pose();
                pose.orbit(yaw, pitch);
                rig.set_pose(pose);
                self.sync_from_camera(&rig.pose());
                return;
            }
        }

        let rect = self.overlay_viewport(canvas_w, canvas_h);
        let hover = rect.to_local_uv(x, y).and_then(|uv| {
            picker
                .pick_face(uv)
                .map(|(face, face_uv)| Region::from_face_uv(face, face_uv, DEFAULT_EDGE_BAND))
        });
        self.update_hover(hover);
    }

    /// Handles a left button press at the last cursor position.
    pub fn on_mouse_press(&mut self, canvas_w: u32, canvas_h: u32) {
        if self.detached || !self.options.visible {
            return;
        }
        self.left_down = true;
        self.drag_distance = 0.0;
        let rect = self.overlay_viewport(canvas_w, canvas_h);
        self.armed = rect.contains(self.cursor.0, self.cursor.1);
    }

    /// Handles a left button release: a click on a region starts a camera
    /// flight (or jump) to it.
    pub fn on_mouse_release(&mut self, rig: &mut dyn CameraRig) {
        if self.detached || !self.options.visible {
            self.left_down = false;
            self.armed = false;
            return;
        }

        if self.armed && self.drag_distance < DRAG_THRESHOLD_PX {
            if let Some(region) = self.hover {
                let to = pose_for_region(
                    region,
                    rig.scene_center(),
                    rig.scene_radius(),
                    self.options.fit_fov_degrees,
                );
                let duration = if self.options.camera_fly {
                    self.options.fly_duration_secs
                } else {
                    0.0
                };
                log::debug!(
                    "nav cube click: flying to {:?} over {duration}s",
                    region.faces()
                );
                self.flight.fly(rig.pose(), to, duration);
            }
        }

        self.left_down = false;
        self.armed = false;
        self.drag_distance = 0.0;
    }

    /// Handles the cursor leaving the window.
    pub fn on_cursor_left(&mut self) {
        if self.detached {
            return;
        }
        self.update_hover(None);
        self.armed = false;
    }
}
