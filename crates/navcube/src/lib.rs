//! navcube: a navigation-cube camera gizmo plugin for wgpu-based 3D viewers.
//!
//! The nav cube is an on-screen cube overlay synchronized with the host
//! camera. Hovering highlights the face, edge, or corner under the cursor;
//! clicking reorients the camera toward that region (animated or instant);
//! dragging the cube orbits the camera directly.
//!
//! The host engine stays opaque: the plugin reads and steers the camera
//! through [`CameraRig`] and resolves cube hits through [`FacePicker`].
//!
//! # Quick Start
//!
//! ```no_run
//! use navcube::{NavCube, NavCubeOptions};
//!
//! let mut cube = NavCube::new(NavCubeOptions::default());
//!
//! // Each frame, with your winit event and host camera in hand:
//! // cube.on_window_event(&event, width, height, &mut rig, &picker);
//! // cube.update(dt, &mut rig);
//! // if let Some(image) = cube.take_repaint() {
//! //     atlas_texture.upload(&queue, &image).unwrap();
//! // }
//! // Draw the overlay in cube.overlay_viewport(width, height) using
//! // cube.view_projection(1.0) and the cube mesh.
//! ```

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod input;
mod plugin;

pub mod host;

pub use host::{CameraRig, FacePicker};
pub use plugin::NavCube;

// Re-export core types
pub use navcube_core::{
    camera::{gizmo_pose, pose_for_region, CameraPose, GizmoProjection, GIZMO_DISTANCE},
    error::{NavCubeError, Result},
    flight::CameraFlight,
    layout::ViewportRect,
    options::{Alignment, CubeColors, Margins, NavCubeOptions},
    region::{Face, Region, RegionKind, DEFAULT_EDGE_BAND},
    Mat4, Vec2, Vec3, Vec4,
};

// Re-export render types
pub use navcube_render::{
    atlas::FaceAtlas,
    color_grading::{wgsl_function as color_grading_wgsl, ColorGrading, ColorGradingUniforms},
    geometry::{cube_mesh, CubeMesh, NavCubeUniforms},
    painter::AtlasPainter,
    texture::AtlasTexture,
};
