//! Reading and writing raster files.

use crate::raster::{Image, RGB_CHANNELS};
use crate::types::{invalid_argument, Result};
use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};
use log::debug;
use ndarray::{Array2, Array3};
use std::convert::TryFrom;
use std::path::Path;

/// Decode the file at `path`.
///
/// Luma images (with or without alpha) become grayscale, everything else is
/// converted to 8 bit RGB.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let decoded = image::open(path.as_ref())?;
    debug!(
        "decoded {} ({}x{}, {:?})",
        path.as_ref().display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Image::try_from_dynamic(decoded)
}

/// Clamp `image` to 8 bit samples and encode it to `path`.
///
/// The format follows the file extension.
pub fn save_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<()> {
    image.to_dynamic()?.save(path.as_ref())?;
    debug!("wrote {}", path.as_ref().display());
    Ok(())
}

impl Image {
    /// Convert a decoded image, keeping grayscale sources single channel.
    pub fn try_from_dynamic(decoded: DynamicImage) -> Result<Image> {
        match decoded {
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => Image::from_gray_image(&decoded.to_luma8()),
            _ => Image::from_rgb_image(&decoded.to_rgb8()),
        }
    }

    pub fn from_gray_image(img: &GrayImage) -> Result<Image> {
        let (width, height) = img.dimensions();
        let samples: Vec<f64> = img.as_raw().iter().copied().map(f64::from).collect();
        match Array2::from_shape_vec((height as usize, width as usize), samples) {
            Ok(data) => Image::gray(data),
            Err(_) => invalid_argument("gray buffer does not match image dimensions"),
        }
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Image> {
        let (width, height) = img.dimensions();
        let samples: Vec<f64> = img.as_raw().iter().copied().map(f64::from).collect();
        match Array3::from_shape_vec((height as usize, width as usize, RGB_CHANNELS), samples) {
            Ok(data) => Image::rgb(data),
            Err(_) => invalid_argument("RGB buffer does not match image dimensions"),
        }
    }

    /// Clamped 8 bit copy of `self` as an `image` crate buffer.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        self.validate()?;

        let (width, height) = match (u32::try_from(self.width()), u32::try_from(self.height())) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return invalid_argument(format!(
                    "{}x{} image exceeds the encoder limits",
                    self.height(),
                    self.width()
                ))
            }
        };
        let samples = self.to_u8_samples();
        let encoded = match self {
            Image::Gray(_) => GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8),
            Image::Rgb(_) => RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
        };
        match encoded {
            Some(encoded) => Ok(encoded),
            None => invalid_argument("sample buffer does not match image dimensions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageCompressionError;
    use image::{ImageBuffer, Luma, Rgb};
    use ndarray::array;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rusty-image-compression-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_gray_image_to_array() {
        let img: GrayImage = ImageBuffer::from_vec(3, 2, vec![0, 128, 255, 65, 40, 22]).unwrap();

        let actual = Image::from_gray_image(&img).unwrap();

        assert_eq!(
            actual,
            Image::Gray(array![[0.0, 128.0, 255.0], [65.0, 40.0, 22.0]])
        );
    }

    #[test]
    fn test_rgb_image_to_array() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, Rgb([1, 2, 3]));

        let actual = Image::from_rgb_image(&img).unwrap();

        assert_eq!(actual.shape(), &[1, 2, 3]);
        assert_eq!(actual.planes()[2][[0, 1]], 3.0);
        assert_eq!(actual.planes()[0][[0, 0]], 0.0);
    }

    #[test]
    fn test_to_dynamic_clamps() {
        let image = Image::gray(array![[-7.0, 12.4], [255.7, 99.5]]).unwrap();

        let img = image.to_dynamic().unwrap().to_luma8();

        assert_eq!(img.get_pixel(0, 0), &Luma([0]));
        assert_eq!(img.get_pixel(1, 0), &Luma([12]));
        assert_eq!(img.get_pixel(0, 1), &Luma([255]));
        assert_eq!(img.get_pixel(1, 1), &Luma([100]));
    }

    #[test]
    fn test_to_dynamic_rejects_malformed() {
        assert!(matches!(
            Image::Rgb(Array3::zeros((3, 3, 2))).to_dynamic(),
            Err(ImageCompressionError::InvalidArgument(_))
        ));

        let path = scratch_path("malformed.png");
        assert!(save_image(&Image::Gray(Array2::zeros((1, 1))), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_png_round_trip() {
        let path = scratch_path("round-trip.png");
        let data = Array3::from_shape_fn((5, 4, 3), |(i, j, c)| (i * 40 + j * 10 + c) as f64);
        let image = Image::rgb(data).unwrap();

        save_image(&image, &path).unwrap();
        let actual = load_image(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(actual, image);
    }

    #[test]
    fn test_gray_png_stays_gray() {
        let path = scratch_path("gray.png");
        let image = Image::gray(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();

        save_image(&image, &path).unwrap();
        let actual = load_image(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(actual.is_gray());
        assert_eq!(actual, image);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_path("does-not-exist.png");

        assert!(matches!(load_image(&path), Err(ImageCompressionError::Io(_))));
    }
}
