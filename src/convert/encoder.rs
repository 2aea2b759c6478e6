//! JPEG decoding and lossy WEBP encoding.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use webp::Encoder;

use crate::error::{Error, Result};

/// Decode an image, sniffing the format from its content before the extension.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::file_io("Failed to open", path, e))?
        .with_guessed_format()
        .map_err(|e| Error::file_io("Failed to read", path, e))?;

    reader.decode().map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Encode an image as lossy WEBP at `quality` (0 to 100).
///
/// `path` only names the source in errors.
pub fn encode_webp(path: &Path, image: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(Error::Encode {
            path: path.to_path_buf(),
            message: "Image has no pixels".to_string(),
        });
    }

    // libwebp takes packed RGB or RGBA only
    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };

    encoded
        .map(|memory| memory.to_vec())
        .map_err(|e| Error::Encode {
            path: path.to_path_buf(),
            message: format!("{:?}", e),
        })
}

/// Decode `source` and write it to `target` as lossy WEBP.
pub fn convert_file(source: &Path, target: &Path, quality: f32) -> Result<()> {
    let image = decode_image(source)?;
    let bytes = encode_webp(source, &image, quality)?;
    std::fs::write(target, bytes).map_err(|e| Error::file_io("Failed to write", target, e))?;

    tracing::debug!(
        "Encoded {} ({}x{}) to {}",
        source.display(),
        image.width(),
        image.height(),
        target.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn is_webp(bytes: &[u8]) -> bool {
        bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
    }

    #[test]
    fn test_encode_rgb() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 12, Rgb([200, 120, 40])));
        let bytes = encode_webp(Path::new("a.jpg"), &image, 70.0).unwrap();
        assert!(is_webp(&bytes));
    }

    #[test]
    fn test_encode_rgba_and_grayscale() {
        let rgba =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128])));
        assert!(is_webp(&encode_webp(Path::new("a.png"), &rgba, 70.0).unwrap()));

        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(8, 8, image::Luma([90])));
        assert!(is_webp(&encode_webp(Path::new("g.jpg"), &gray, 70.0).unwrap()));
    }

    #[test]
    fn test_encode_empty_image_fails() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let err = encode_webp(Path::new("empty.jpg"), &image, 70.0).unwrap_err();
        assert!(matches!(err, Error::Encode { .. }));
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.JPG");
        let target = dir.path().join("photo.webp");
        RgbImage::from_pixel(32, 24, Rgb([0, 128, 255]))
            .save_with_format(&source, ImageFormat::Jpeg)
            .unwrap();

        convert_file(&source, &target, 70.0).unwrap();

        let bytes = std::fs::read(&target).unwrap();
        assert!(is_webp(&bytes));
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.jpg");
        std::fs::write(&source, b"definitely not a jpeg").unwrap();

        let err = decode_image(&source).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
