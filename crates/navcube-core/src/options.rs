//! Configuration options for the navigation cube.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{NavCubeError, Result};

/// Minimum overlay edge length in pixels.
pub const MIN_SIZE_PX: u32 = 50;
/// Maximum overlay edge length in pixels.
pub const MAX_SIZE_PX: u32 = 1024;

/// Screen corner the overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Alignment {
    /// Bottom-right corner (default).
    #[default]
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Top-right corner.
    TopRight,
    /// Top-left corner.
    TopLeft,
}

impl Alignment {
    /// Parses a canonical alignment name, failing on unknown input.
    pub fn try_parse(name: &str) -> Result<Self> {
        match name {
            "bottomRight" => Ok(Alignment::BottomRight),
            "bottomLeft" => Ok(Alignment::BottomLeft),
            "topRight" => Ok(Alignment::TopRight),
            "topLeft" => Ok(Alignment::TopLeft),
            _ => Err(NavCubeError::InvalidAlignment(name.to_string())),
        }
    }

    /// Parses an alignment name, warning and falling back to
    /// [`Alignment::BottomRight`] on unknown input.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::try_parse(name).unwrap_or_else(|_| {
            log::warn!("unknown alignment '{name}', falling back to bottomRight");
            Alignment::BottomRight
        })
    }

    /// Returns the canonical name for this alignment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Alignment::BottomRight => "bottomRight",
            Alignment::BottomLeft => "bottomLeft",
            Alignment::TopRight => "topRight",
            Alignment::TopLeft => "topLeft",
        }
    }

    /// Whether the overlay hugs the right edge of the canvas.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Alignment::BottomRight | Alignment::TopRight)
    }

    /// Whether the overlay hugs the top edge of the canvas.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Alignment::TopRight | Alignment::TopLeft)
    }
}

/// Margins between the overlay and the canvas edges, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl Margins {
    /// Creates margins with the same value on every side.
    #[must_use]
    pub fn uniform(px: u32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }
}

/// Colors used when painting the cube texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeColors {
    /// Base face color.
    pub face: Vec3,
    /// Highlight color for the hovered face/edge/corner zone.
    pub hover: Vec3,
    /// Face outline color.
    pub outline: Vec3,
    /// Label text color.
    pub label: Vec3,
}

impl Default for CubeColors {
    fn default() -> Self {
        Self {
            face: Vec3::new(0.84, 0.84, 0.84),
            hover: Vec3::new(0.0, 0.55, 0.0),
            outline: Vec3::new(0.33, 0.33, 0.33),
            label: Vec3::new(0.2, 0.2, 0.2),
        }
    }
}

/// Configuration for the navigation cube plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavCubeOptions {
    /// Whether the overlay is shown and receives input.
    pub visible: bool,

    /// Edge length of the square overlay in physical pixels.
    pub size_px: u32,

    /// Which canvas corner the overlay is anchored to.
    pub alignment: Alignment,

    /// Margins between the overlay and the canvas edges.
    pub margins: Margins,

    /// Animate camera transitions (`true`) or jump instantly (`false`).
    pub camera_fly: bool,

    /// Vertical field of view, in degrees, used to frame the scene when
    /// flying to a region.
    pub fit_fov_degrees: f32,

    /// Duration of an animated camera transition, in seconds.
    pub fly_duration_secs: f32,

    /// Whether the gizmo projection follows the host camera's field of view.
    pub synch_projection: bool,

    /// Cube texture colors.
    pub colors: CubeColors,
}

impl Default for NavCubeOptions {
    fn default() -> Self {
        Self {
            visible: true,
            size_px: 250,
            alignment: Alignment::BottomRight,
            margins: Margins::default(),
            camera_fly: true,
            fit_fov_degrees: 45.0,
            fly_duration_secs: 0.5,
            synch_projection: false,
            colors: CubeColors::default(),
        }
    }
}

impl NavCubeOptions {
    /// Clamps an overlay size to the supported range.
    #[must_use]
    pub fn clamp_size(size_px: u32) -> u32 {
        size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX)
    }

    /// Clamps a fit field of view to the supported range.
    #[must_use]
    pub fn clamp_fit_fov(degrees: f32) -> f32 {
        degrees.clamp(1.0, 120.0)
    }

    /// Clamps a flight duration to the supported range.
    #[must_use]
    pub fn clamp_fly_duration(secs: f32) -> f32 {
        secs.clamp(0.0, 10.0)
    }

    /// Returns a copy with every numeric field clamped to its valid range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.size_px = Self::clamp_size(self.size_px);
        self.fit_fov_degrees = Self::clamp_fit_fov(self.fit_fov_degrees);
        self.fly_duration_secs = Self::clamp_fly_duration(self.fly_duration_secs);
        self
    }
}
