//! Conversion of RGB images to a single channel.

use crate::raster::{Image, RGB_CHANNELS};
use crate::types::{invalid_argument, Result};
use ndarray::Axis;

/// Average the red, green and blue channels of `image`.
///
/// Grayscale input is rejected since there is nothing to convert.
pub fn grayscale(image: &Image) -> Result<Image> {
    image.validate()?;

    match image {
        Image::Gray(_) => invalid_argument("image is already single channel"),
        Image::Rgb(data) => {
            let plane = data.sum_axis(Axis(2)) / RGB_CHANNELS as f64;
            Image::gray(plane)
        }
    }
}
