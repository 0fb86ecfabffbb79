use thiserror::Error;

/// Error type for median filter operations
///
/// Every variant is raised while validating the request, before a single
/// output pixel is computed. Once validation succeeds the filter is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MedianFilterError {
    /// Window size is zero or even
    ///
    /// The window must have a well-defined center pixel, so only odd
    /// positive sizes (1, 3, 5, ...) are accepted.
    #[error("Window size must be a positive odd integer, got {size}")]
    InvalidWindowSize { size: u32 },

    /// Worker count is zero
    ///
    /// At least one worker is needed to process the image.
    #[error("Worker count must be at least 1, got {count}")]
    InvalidWorkerCount { count: usize },

    /// Image has a zero dimension
    ///
    /// A median is undefined over an empty neighborhood, so images without
    /// pixels are rejected instead of producing an empty result.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// The worker threads could not be spawned
    ///
    /// Carries the message reported by the thread pool builder.
    #[error("Failed to create worker pool: {0}")]
    ThreadPoolCreationFailed(String),
}
