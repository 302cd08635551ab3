//! In-memory raster images.
//!
//! Grayscale images are stored as `height x width` arrays, RGB images as
//! `height x width x 3` arrays with the channels in red, green, blue order.
//! Samples are kept as `f64` so that intermediate results may leave the
//! displayable range; [`Image::clamped`] brings them back to integers in [0, 255].

use crate::types::{invalid_argument, Result};
use ndarray::{stack, Array2, Array3, ArrayD, ArrayView2, Axis, Ix2, Ix3};

/// Number of channels of an RGB image.
pub const RGB_CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub enum Image {
    Gray(Array2<f64>),
    Rgb(Array3<f64>),
}

impl Image {
    /// Wrap a grayscale plane, validating its shape.
    pub fn gray(data: Array2<f64>) -> Result<Self> {
        let (height, width) = data.dim();
        check_extent(height, width)?;
        Ok(Image::Gray(data))
    }

    /// Wrap a `height x width x 3` array, validating its shape.
    pub fn rgb(data: Array3<f64>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if channels != RGB_CHANNELS {
            return invalid_argument(format!(
                "RGB image needs {} channels, got {}",
                RGB_CHANNELS, channels
            ));
        }
        check_extent(height, width)?;
        Ok(Image::Rgb(data))
    }

    /// Re-check the shape invariants of `self`.
    ///
    /// Images built from the variants directly skip [`Image::gray`] and [`Image::rgb`].
    pub fn validate(&self) -> Result<()> {
        match self {
            Image::Gray(data) => check_extent(data.nrows(), data.ncols()),
            Image::Rgb(data) => {
                let (height, width, channels) = data.dim();
                if channels != RGB_CHANNELS {
                    return invalid_argument(format!(
                        "RGB image needs {} channels, got {}",
                        RGB_CHANNELS, channels
                    ));
                }
                check_extent(height, width)
            }
        }
    }

    /// Build an image from an array of arbitrary dimensionality.
    ///
    /// Two dimensional arrays are grayscale, three dimensional arrays are RGB.
    pub fn from_array(data: ArrayD<f64>) -> Result<Self> {
        match data.ndim() {
            2 => match data.into_dimensionality::<Ix2>() {
                Ok(plane) => Image::gray(plane),
                Err(_) => invalid_argument("could not view array as a grayscale plane"),
            },
            3 => match data.into_dimensionality::<Ix3>() {
                Ok(planes) => Image::rgb(planes),
                Err(_) => invalid_argument("could not view array as RGB planes"),
            },
            ndim => invalid_argument(format!(
                "image arrays must be 2 or 3 dimensional, got {} dimensions",
                ndim
            )),
        }
    }

    /// Reassemble an RGB image from its red, green and blue planes.
    pub fn from_planes(red: Array2<f64>, green: Array2<f64>, blue: Array2<f64>) -> Result<Self> {
        if red.dim() != green.dim() || red.dim() != blue.dim() {
            return invalid_argument("channel planes differ in shape");
        }
        match stack(Axis(2), &[red.view(), green.view(), blue.view()]) {
            Ok(data) => Image::rgb(data),
            Err(_) => invalid_argument("could not stack channel planes"),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Image::Gray(data) => data.nrows(),
            Image::Rgb(data) => data.len_of(Axis(0)),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Image::Gray(data) => data.ncols(),
            Image::Rgb(data) => data.len_of(Axis(1)),
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            Image::Gray(_) => 1,
            Image::Rgb(_) => RGB_CHANNELS,
        }
    }

    /// Shape of the underlying array.
    pub fn shape(&self) -> &[usize] {
        match self {
            Image::Gray(data) => data.shape(),
            Image::Rgb(data) => data.shape(),
        }
    }

    pub fn is_gray(&self) -> bool {
        matches!(self, Image::Gray(_))
    }

    /// Views of the individual channel planes.
    pub fn planes(&self) -> Vec<ArrayView2<f64>> {
        match self {
            Image::Gray(data) => vec![data.view()],
            Image::Rgb(data) => data.axis_iter(Axis(2)).collect(),
        }
    }

    /// Round every sample to the nearest integer and clamp it to [0, 255].
    ///
    /// NaN samples become 0.
    pub fn clamped(&self) -> Image {
        match self {
            Image::Gray(data) => Image::Gray(data.mapv(clamp_sample)),
            Image::Rgb(data) => Image::Rgb(data.mapv(clamp_sample)),
        }
    }

    /// Samples in row major order converted to `u8` after clamping.
    pub fn to_u8_samples(&self) -> Vec<u8> {
        let to_u8 = |item: &f64| clamp_sample(*item) as u8;
        match self {
            Image::Gray(data) => data.iter().map(to_u8).collect(),
            Image::Rgb(data) => data.iter().map(to_u8).collect(),
        }
    }

    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Image::Gray(data) => data.into_dyn(),
            Image::Rgb(data) => data.into_dyn(),
        }
    }
}

impl From<Array2<u8>> for Image {
    fn from(data: Array2<u8>) -> Self {
        Image::Gray(data.mapv(f64::from))
    }
}

impl From<Array3<u8>> for Image {
    fn from(data: Array3<u8>) -> Self {
        Image::Rgb(data.mapv(f64::from))
    }
}

fn clamp_sample(item: f64) -> f64 {
    if item.is_nan() {
        return 0.0;
    }
    item.round().max(0.0).min(255.0)
}

fn check_extent(height: usize, width: usize) -> Result<()> {
    if height * width < 2 {
        return invalid_argument(format!(
            "degenerate {}x{} image, need at least two pixels",
            height, width
        ));
    }
    Ok(())
}
