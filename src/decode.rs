use image::DynamicImage;

use crate::Result;

/// Uniform type identifiers of the image formats a drop target reads.
pub const IMAGE_TYPES: &[&str] = &[
    "public.image",
    "public.png",
    "public.tiff",
    "public.jpeg",
    "public.jpeg-2000",
    "com.compuserve.gif",
    "com.microsoft.bmp",
    "com.microsoft.ico",
    "org.webmproject.webp",
    "public.heic",
    "com.adobe.photoshop-image",
    "com.truevision.tga-image",
];

/// Whether a declared type identifier names an image format. Accepts both
/// uniform type identifiers and `image/*` MIME types.
pub fn is_image_type(type_id: &str) -> bool {
    type_id.starts_with("image/") || IMAGE_TYPES.contains(&type_id)
}

/// Decodes raw bytes as a pixel image, guessing the format from its header.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(data)?)
}

#[cfg(test)]
pub(crate) fn encode_png(width: u32, height: u32) -> Vec<u8> {
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    let buffer = ImageBuffer::from_pixel(width, height, Rgba([255u8, 0, 0, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
