use image::{Pixel, Primitive};

/// Reduces a neighborhood of pixels to its per-channel median
///
/// Each channel is treated as an independent scalar: the red median, the
/// green median and so on are selected separately and recombined, so the
/// result is generally not one of the input pixels. Alpha is filtered like
/// any other channel.
///
/// The reducer owns only a scratch buffer, which lets a worker reuse one
/// allocation for every pixel of its region.
///
/// # Examples
///
/// ```rust
/// use image::Rgba;
/// use imageops_median::ChannelMedianReducer;
///
/// let neighborhood = [
///     Rgba([1u8, 9, 5, 0]),
///     Rgba([2, 8, 6, 128]),
///     Rgba([3, 7, 4, 255]),
/// ];
/// let mut reducer = ChannelMedianReducer::new();
/// assert_eq!(reducer.reduce(&neighborhood), Rgba([2, 8, 5, 128]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChannelMedianReducer<S> {
    scratch: Vec<S>,
    weighted: Vec<(S, u64)>,
}

impl<S> ChannelMedianReducer<S>
where
    S: Primitive + Ord,
{
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
            weighted: Vec::new(),
        }
    }

    /// Creates a reducer whose scratch space fits `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(capacity),
            weighted: Vec::new(),
        }
    }

    /// Selects the middle order statistic of every channel
    ///
    /// For `n` samples the value at sorted index `n / 2` is chosen. With an
    /// odd sample count, which every square window yields, this is the exact
    /// median; no averaging of two middle values takes place.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn reduce<P>(&mut self, colors: &[P]) -> P
    where
        P: Pixel<Subpixel = S>,
    {
        assert!(
            !colors.is_empty(),
            "median of an empty neighborhood is undefined"
        );
        let middle = colors.len() / 2;

        let mut output = colors[middle];
        for (channel, value) in output.channels_mut().iter_mut().enumerate() {
            self.scratch.clear();
            self.scratch
                .extend(colors.iter().map(|color| color.channels()[channel]));
            let (_, median, _) = self.scratch.select_nth_unstable(middle);
            *value = *median;
        }
        output
    }

    /// Same as [`reduce`](Self::reduce) on a neighborhood in which every
    /// color is repeated `count` times, without materializing the repeats
    ///
    /// Takes the output of
    /// [`Window::sample_weighted_into`](crate::Window::sample_weighted_into).
    /// The value at cumulative position `total / 2` is selected per channel.
    ///
    /// # Panics
    ///
    /// Panics if the counts sum to zero.
    pub fn reduce_weighted<P>(&mut self, samples: &[(P, u64)]) -> P
    where
        P: Pixel<Subpixel = S>,
    {
        let total: u64 = samples.iter().map(|&(_, count)| count).sum();
        assert!(total > 0, "median of an empty neighborhood is undefined");
        let middle = total / 2;

        let mut output = samples[0].0;
        for (channel, value) in output.channels_mut().iter_mut().enumerate() {
            self.weighted.clear();
            self.weighted.extend(
                samples
                    .iter()
                    .map(|(color, count)| (color.channels()[channel], *count)),
            );
            self.weighted.sort_unstable_by_key(|&(sample, _)| sample);

            let mut seen = 0;
            for &(sample, count) in &self.weighted {
                seen += count;
                if seen > middle {
                    *value = sample;
                    break;
                }
            }
        }
        output
    }
}

/// Per-channel median of `colors` using a temporary reducer
///
/// Convenience wrapper around [`ChannelMedianReducer::reduce`] for one-off
/// calls; hot loops should keep a reducer alive instead.
///
/// # Panics
///
/// Panics if `colors` is empty.
pub fn channel_median<P>(colors: &[P]) -> P
where
    P: Pixel,
    P::Subpixel: Ord,
{
    ChannelMedianReducer::with_capacity(colors.len()).reduce(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_noise_rgba_image;
    use image::{Luma, LumaA, Rgb, Rgba};

    fn sorted_median(mut values: Vec<u8>) -> u8 {
        values.sort_unstable();
        values[values.len() / 2]
    }

    #[test]
    fn reduce_single_color_is_identity() {
        let color = Rgba([12u8, 34, 56, 78]);
        assert_eq!(channel_median(&[color]), color);
    }

    #[test]
    fn reduce_clamped_ramp_edges() {
        let left = [Luma([10u8]), Luma([10]), Luma([20])];
        let right = [Luma([40u8]), Luma([50]), Luma([50])];
        assert_eq!(channel_median(&left), Luma([10]));
        assert_eq!(channel_median(&right), Luma([50]));
    }

    #[test]
    fn reduce_treats_channels_independently() {
        let colors = [
            Rgb([1u8, 9, 5]),
            Rgb([2, 8, 6]),
            Rgb([3, 7, 4]),
            Rgb([200, 0, 255]),
            Rgb([0, 200, 0]),
        ];
        // Red {0,1,2,3,200}, green {0,7,8,9,200}, blue {0,4,5,6,255}
        assert_eq!(channel_median(&colors), Rgb([2, 8, 5]));
    }

    #[test]
    fn reduce_alpha_independent_of_color() {
        let colors: Vec<Rgba<u8>> = [250u8, 10, 130, 70, 190]
            .iter()
            .map(|&alpha| Rgba([40, 80, 120, alpha]))
            .collect();
        assert_eq!(channel_median(&colors), Rgba([40, 80, 120, 130]));
    }

    #[test]
    fn reduce_luma_alpha() {
        let colors = [LumaA([5u8, 1]), LumaA([1, 5]), LumaA([3, 3])];
        assert_eq!(channel_median(&colors), LumaA([3, 3]));
    }

    #[test]
    fn reduce_sixteen_bit_channels() {
        let colors = [
            Rgba([65535u16, 0, 1000, 65535]),
            Rgba([0, 65535, 2000, 0]),
            Rgba([30000, 30000, 3000, 30000]),
        ];
        assert_eq!(
            channel_median(&colors),
            Rgba([30000, 30000, 2000, 30000])
        );
    }

    #[test]
    fn reduce_matches_full_sort() {
        let image = create_noise_rgba_image(7, 7, 3);
        let colors: Vec<Rgba<u8>> = image.pixels().copied().collect();
        let mut reducer = ChannelMedianReducer::with_capacity(colors.len());

        for window in [1, 9, 25, 49] {
            let neighborhood = &colors[..window];
            let median = reducer.reduce(neighborhood);
            for channel in 0..4 {
                let values = neighborhood.iter().map(|p| p[channel]).collect();
                assert_eq!(median[channel], sorted_median(values));
            }
        }
    }

    #[test]
    fn reducer_can_be_reused() {
        let mut reducer = ChannelMedianReducer::new();
        let first = reducer.reduce(&[Luma([9u8]), Luma([1]), Luma([5])]);
        let second = reducer.reduce(&[Luma([2u8])]);
        assert_eq!(first, Luma([5]));
        assert_eq!(second, Luma([2]));
    }

    #[test]
    #[should_panic(expected = "empty neighborhood")]
    fn reduce_empty_neighborhood_panics() {
        let colors: [Luma<u8>; 0] = [];
        channel_median(&colors);
    }

    #[test]
    fn reduce_weighted_matches_expanded_neighborhood() {
        let image = create_noise_rgba_image(4, 3, 9);
        let samples: Vec<(Rgba<u8>, u64)> = image
            .pixels()
            .zip([1u64, 4, 2, 1, 7, 3, 1, 1, 5, 2, 6, 1])
            .map(|(pixel, count)| (*pixel, count))
            .collect();
        let expanded: Vec<Rgba<u8>> = samples
            .iter()
            .flat_map(|&(pixel, count)| std::iter::repeat(pixel).take(count as usize))
            .collect();

        let mut reducer = ChannelMedianReducer::new();
        assert_eq!(reducer.reduce_weighted(&samples), channel_median(&expanded));
    }

    #[test]
    fn reduce_weighted_majority_edge_wins() {
        // 32768 clamped repeats of the edge against 32767 of the far side
        let samples = [(Luma([0u8]), 32768), (Luma([100]), 1), (Luma([200]), 32766)];
        let mut reducer = ChannelMedianReducer::new();
        assert_eq!(reducer.reduce_weighted(&samples), Luma([0]));

        let samples = [(Luma([0u8]), 32767), (Luma([100]), 1), (Luma([200]), 32767)];
        assert_eq!(reducer.reduce_weighted(&samples), Luma([100]));
    }

    #[test]
    fn reduce_weighted_with_huge_counts() {
        let count = u64::from(u32::MAX).pow(2);
        let mut reducer = ChannelMedianReducer::new();
        assert_eq!(reducer.reduce_weighted(&[(Luma([7u8]), count)]), Luma([7]));
    }

    #[test]
    #[should_panic(expected = "empty neighborhood")]
    fn reduce_weighted_empty_neighborhood_panics() {
        let samples: [(Luma<u8>, u64); 0] = [];
        ChannelMedianReducer::new().reduce_weighted(&samples);
    }
}
