use crate::errors::{InspectorError, InspectorResult};
use crate::models::ImageAsset;
use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Longest edge the Gemini API accepts without server-side downscaling.
pub const MAX_EDGE: u32 = 4096;

/// Normalizes an image for submission: three-channel color, longest edge
/// capped at [`MAX_EDGE`]. Conformant images pass through untouched.
pub fn prepare(image: DynamicImage) -> DynamicImage {
    let image = match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    };

    let longer = image.width().max(image.height());
    if longer > MAX_EDGE {
        // resize() fits within the bounds while preserving aspect ratio
        image.resize(MAX_EDGE, MAX_EDGE, FilterType::Lanczos3)
    } else {
        image
    }
}

/// Decodes a photo from disk. Fails with `ImageDecode` before any remote
/// call is attempted if the file is not a readable PNG/JPEG.
pub fn load(path: &Path) -> InspectorResult<ImageAsset> {
    let reader = ImageReader::open(path)
        .map_err(|e| InspectorError::image_decode(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| InspectorError::image_decode(format!("{}: {}", path.display(), e)))?;

    let image = reader
        .decode()
        .map_err(|e| InspectorError::image_decode(format!("{}: {}", path.display(), e)))?;

    Ok(ImageAsset::new(image, path))
}

/// Re-encodes a prepared image as PNG bytes for the wire.
pub fn encode_png(image: &DynamicImage) -> InspectorResult<Vec<u8>> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| InspectorError::image_decode(format!("failed to re-encode image: {}", e)))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, Rgba};

    fn rgb_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([120u8, 90, 40])))
    }

    #[test]
    fn conformant_image_passes_through_unchanged() {
        let prepared = prepare(rgb_image(800, 600));
        assert_eq!(prepared.width(), 800);
        assert_eq!(prepared.height(), 600);
        assert!(matches!(prepared, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn image_at_exact_limit_is_not_resized() {
        let prepared = prepare(rgb_image(MAX_EDGE, 100));
        assert_eq!(prepared.width(), MAX_EDGE);
        assert_eq!(prepared.height(), 100);
    }

    #[test]
    fn oversized_image_is_capped_at_max_edge() {
        let prepared = prepare(rgb_image(8192, 16));
        assert_eq!(prepared.width(), MAX_EDGE);
        assert_eq!(prepared.height(), 8);
    }

    #[test]
    fn downscale_preserves_aspect_ratio_within_one_pixel() {
        let prepared = prepare(rgb_image(5000, 30));
        assert_eq!(prepared.width(), MAX_EDGE);
        let expected = 30.0 * f64::from(MAX_EDGE) / 5000.0;
        assert!((f64::from(prepared.height()) - expected).abs() <= 1.0);
    }

    #[test]
    fn tall_image_is_capped_on_height() {
        let prepared = prepare(rgb_image(20, 8192));
        assert_eq!(prepared.height(), MAX_EDGE);
        assert_eq!(prepared.width(), 10);
    }

    #[test]
    fn grayscale_is_converted_to_rgb_same_dimensions() {
        let gray =
            DynamicImage::ImageLuma8(ImageBuffer::from_pixel(64, 48, Luma([200u8])));
        let prepared = prepare(gray);
        assert_eq!((prepared.width(), prepared.height()), (64, 48));
        assert!(matches!(prepared, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let rgba =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(32, 32, Rgba([10u8, 20, 30, 128])));
        let prepared = prepare(rgba);
        assert_eq!((prepared.width(), prepared.height()), (32, 32));
        assert!(matches!(prepared, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn load_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image at all").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, InspectorError::ImageDecode(_)));
    }

    #[test]
    fn load_round_trips_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.png");
        rgb_image(12, 8).save(&path).unwrap();
        let asset = load(&path).unwrap();
        assert_eq!((asset.width, asset.height), (12, 8));
        assert_eq!(asset.file_name(), "site.png");
    }

    #[test]
    fn encode_png_produces_decodable_bytes() {
        let bytes = encode_png(&rgb_image(10, 10)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 10));
    }
}
