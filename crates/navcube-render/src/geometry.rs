//! Cube geometry for the overlay pass.

use glam::Mat4;
use navcube_core::region::Face;

use crate::atlas::FaceAtlas;

/// CPU-side cube mesh: 24 vertices (4 per face) with per-face normals and
/// atlas UVs, 36 indices.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// Builds the unit cube (edge length 1, centered at the origin) with UVs
/// into the given face atlas. Faces wind counter-clockwise seen from
/// outside.
#[must_use]
pub fn cube_mesh(atlas: &FaceAtlas) -> CubeMesh {
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in Face::ALL {
        let normal = face.normal();
        let (u_axis, v_axis) = face.uv_axes();
        let (uv_min, uv_max) = atlas.uv_rect(face);

        #[allow(clippy::cast_possible_truncation)]
        let base = positions.len() as u32;

        // (su, sv) in face-local corner order: bottom-left, bottom-right,
        // top-right, top-left. u_axis x v_axis == normal, so this order is
        // CCW from outside.
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let p = normal * 0.5 + u_axis * su + v_axis * sv;
            positions.push([p.x, p.y, p.z]);
            normals.push([normal.x, normal.y, normal.z]);
            let u = if su < 0.0 { uv_min.x } else { uv_max.x };
            let v = if sv < 0.0 { uv_min.y } else { uv_max.y };
            uvs.push([u, v]);
        }

        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    CubeMesh {
        positions,
        normals,
        uvs,
        indices,
    }
}

/// GPU uniforms for the overlay pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct NavCubeUniforms {
    /// Combined view-projection matrix of the gizmo camera.
    pub view_proj: [[f32; 4]; 4],
    /// Model matrix for the cube.
    pub model: [[f32; 4]; 4],
    /// Extra tint applied to the hovered zone by the shader (0 = none).
    pub hover_mix: f32,
    /// Padding to 16-byte alignment.
    pub _padding: [f32; 3],
}

impl Default for NavCubeUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            hover_mix: 0.0,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_mesh_counts() {
        let atlas = FaceAtlas::new(64).unwrap();
        let mesh = cube_mesh(&atlas);
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.uvs.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_positions_on_unit_cube() {
        let atlas = FaceAtlas::new(64).unwrap();
        let mesh = cube_mesh(&atlas);
        for p in &mesh.positions {
            for c in p {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        let atlas = FaceAtlas::new(64).unwrap();
        let mesh = cube_mesh(&atlas);
        for tri in mesh.indices.chunks_exact(3) {
            let a = Vec3::from_array(mesh.positions[tri[0] as usize]);
            let b = Vec3::from_array(mesh.positions[tri[1] as usize]);
            let c = Vec3::from_array(mesh.positions[tri[2] as usize]);
            let n = Vec3::from_array(mesh.normals[tri[0] as usize]);
            let cross = (b - a).cross(c - a);
            assert!(cross.dot(n) > 0.0, "triangle winds inward");
        }
    }

    #[test]
    fn test_uvs_inside_face_cells() {
        let atlas = FaceAtlas::new(64).unwrap();
        let mesh = cube_mesh(&atlas);
        for (i, uv) in mesh.uvs.iter().enumerate() {
            let face = Face::from_index(i / 4).unwrap();
            let (min, max) = atlas.uv_rect(face);
            assert!(uv[0] >= min.x - 1e-6 && uv[0] <= max.x + 1e-6);
            assert!(uv[1] >= min.y - 1e-6 && uv[1] <= max.y + 1e-6);
        }
    }

    #[test]
    fn test_uniforms_pod_size() {
        // 2 mat4 + vec4 worth of tail.
        assert_eq!(std::mem::size_of::<NavCubeUniforms>(), 144);
    }
}
