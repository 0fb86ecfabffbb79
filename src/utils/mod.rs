//! Internal utility functions for imageops-median.
//!
//! This module contains small helpers shared by the sampler and the engine.

use crate::error::MedianFilterError;

/// Moves `center + offset` back inside `0..extent`.
///
/// Out-of-range coordinates snap to the nearest edge, so neighborhoods at
/// the border replicate edge pixels instead of wrapping around.
///
/// # Arguments
///
/// * `center` - The coordinate the window is centered on
/// * `offset` - Signed displacement from the center
/// * `extent` - Image width or height; must be non-zero
///
/// # Returns
///
/// A coordinate in `0..extent`
#[inline]
pub fn clamp_coordinate(center: u32, offset: i64, extent: u32) -> u32 {
    let last = i64::from(extent) - 1;
    // `last` fits in u32, so the clamped value does too
    (i64::from(center) + offset).clamp(0, last) as u32
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `MedianFilterError::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), MedianFilterError> {
    if width == 0 || height == 0 {
        Err(MedianFilterError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}
