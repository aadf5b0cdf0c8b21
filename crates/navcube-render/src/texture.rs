//! GPU upload for the painted atlas.

use image::RgbaImage;

use crate::atlas::FaceAtlas;
use crate::error::{RenderError, RenderResult};

/// The wgpu texture backing the cube atlas, with its view and sampler.
pub struct AtlasTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl AtlasTexture {
    /// Creates an empty atlas texture sized to the given atlas.
    #[must_use]
    pub fn new(device: &wgpu::Device, atlas: &FaceAtlas) -> Self {
        let (width, height) = (atlas.width(), atlas.height());

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("NavCube Atlas Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("NavCube Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    /// Writes a freshly painted atlas image into the texture.
    pub fn upload(&self, queue: &wgpu::Queue, image: &RgbaImage) -> RenderResult<()> {
        check_image_size(self.width, self.height, image)?;

        log::trace!("uploading {}x{} atlas texture", self.width, self.height);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        Ok(())
    }

    /// Returns the texture view for bind groups.
    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Returns the sampler for bind groups.
    #[must_use]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Returns the texture dimensions in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Rejects images that do not match the texture dimensions exactly.
fn check_image_size(expected_w: u32, expected_h: u32, image: &RgbaImage) -> RenderResult<()> {
    if image.width() != expected_w || image.height() != expected_h {
        return Err(RenderError::TextureSizeMismatch {
            expected_w,
            expected_h,
            actual_w: image.width(),
            actual_h: image.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::AtlasPainter;
    use navcube_core::options::CubeColors;

    #[test]
    fn test_matching_image_accepted() {
        let atlas = FaceAtlas::new(64).unwrap();
        let img = AtlasPainter::new(atlas, CubeColors::default()).paint(None);
        assert!(check_image_size(atlas.width(), atlas.height(), &img).is_ok());
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let atlas = FaceAtlas::new(64).unwrap();
        let img = AtlasPainter::new(atlas, CubeColors::default()).paint(None);
        let err = check_image_size(atlas.width() * 2, atlas.height(), &img).unwrap_err();
        match err {
            RenderError::TextureSizeMismatch {
                expected_w,
                actual_w,
                ..
            } => {
                assert_eq!(expected_w, atlas.width() * 2);
                assert_eq!(actual_w, atlas.width());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
