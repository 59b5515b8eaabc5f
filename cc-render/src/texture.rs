use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use cc_scene::{TexturePattern, WrapMode};

fn address_mode(mode: WrapMode) -> ImageAddressMode {
    match mode {
        WrapMode::Repeat => ImageAddressMode::Repeat,
    }
}

/// Uploads the corrugated pattern as an sRGB image with the pattern's wrap modes.
pub fn pattern_to_image(pattern: &TexturePattern) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: pattern.width(),
            height: pattern.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pattern.as_rgba().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );

    let mut sampler = ImageSamplerDescriptor::linear();
    sampler.address_mode_u = address_mode(pattern.wrap_u);
    sampler.address_mode_v = address_mode(pattern.wrap_v);
    image.sampler = ImageSampler::Descriptor(sampler);
    image
}
