//! WGSL color-grading snippet generation.
//!
//! Emits a brightness / saturation / contrast function as a WGSL fragment
//! the host can splice into its post pipeline, plus the matching uniform
//! layout. A CPU mirror of the formula exists for testing.

use glam::Vec3;

/// Rec. 709 luminance weights.
const LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Brightness / saturation / contrast parameters.
///
/// `brightness` is an additive offset in `[-1, 1]`; `saturation` and
/// `contrast` are multipliers in `[0, 2]` with 1 as identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGrading {
    pub brightness: f32,
    pub saturation: f32,
    pub contrast: f32,
}

impl Default for ColorGrading {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            saturation: 1.0,
            contrast: 1.0,
        }
    }
}

impl ColorGrading {
    /// Returns a copy with every parameter clamped to its valid range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(-1.0, 1.0),
            saturation: self.saturation.clamp(0.0, 2.0),
            contrast: self.contrast.clamp(0.0, 2.0),
        }
    }

    /// CPU mirror of the WGSL formula, for tests and previews.
    #[must_use]
    pub fn apply(&self, color: Vec3) -> Vec3 {
        let brightened = color + Vec3::splat(self.brightness);
        let luminance = brightened.dot(LUMA);
        let saturated = Vec3::splat(luminance).lerp(brightened, self.saturation);
        (saturated - Vec3::splat(0.5)) * self.contrast + Vec3::splat(0.5)
    }
}

/// Emits the color-grading function as a WGSL fragment.
///
/// The generated signature is
/// `fn <name>(color: vec3<f32>, params: vec3<f32>) -> vec3<f32>` where
/// `params` is `(brightness, saturation, contrast)` — pair it with
/// [`ColorGradingUniforms`].
#[must_use]
pub fn wgsl_function(name: &str) -> String {
    format!(
        "\
fn {name}(color: vec3<f32>, params: vec3<f32>) -> vec3<f32> {{
    let brightened = color + vec3<f32>(params.x);
    let luminance = dot(brightened, vec3<f32>({lr}, {lg}, {lb}));
    let saturated = mix(vec3<f32>(luminance), brightened, params.y);
    return (saturated - vec3<f32>(0.5)) * params.z + vec3<f32>(0.5);
}}
",
        lr = LUMA.x,
        lg = LUMA.y,
        lb = LUMA.z,
    )
}

/// GPU uniforms matching the `params` argument of the generated function.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct ColorGradingUniforms {
    /// `(brightness, saturation, contrast)`.
    pub params: [f32; 3],
    /// Padding to 16-byte alignment.
    pub _padding: f32,
}

impl Default for ColorGradingUniforms {
    fn default() -> Self {
        Self::from(&ColorGrading::default())
    }
}

impl From<&ColorGrading> for ColorGradingUniforms {
    fn from(grading: &ColorGrading) -> Self {
        let g = grading.clamped();
        Self {
            params: [g.brightness, g.saturation, g.contrast],
            _padding: 0.0,
        }
    }
}
