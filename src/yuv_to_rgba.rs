/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::frame_error::check_rgba_destination;
use crate::numerics::qrshr;
use crate::yuv_support::{get_yuv_range, search_inverse_transform, YuvSourceChannels};
use crate::{ConvertError, YuvPlanarImage, YuvRange, YuvStandardMatrix};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

const PRECISION: i32 = 13;

fn yuv420_to_rgbx<const DESTINATION_CHANNELS: u8>(
    planar_image: &YuvPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    check_rgba_destination(
        rgba,
        rgba_stride,
        planar_image.width,
        planar_image.height,
        channels,
    )?;
    planar_image.check_constraints()?;

    let chroma_range = get_yuv_range(8, range);
    let kr_kb = matrix.get_kr_kb();
    let inverse_transform =
        search_inverse_transform(PRECISION, 8, range, matrix, chroma_range, kr_kb);
    let cr_coef = inverse_transform.cr_coef;
    let cb_coef = inverse_transform.cb_coef;
    let y_coef = inverse_transform.y_coef;
    let g_coef_1 = inverse_transform.g_coeff_1;
    let g_coef_2 = inverse_transform.g_coeff_2;

    let bias_y = chroma_range.bias_y as i32;
    let bias_uv = chroma_range.bias_uv as i32;

    let width = planar_image.width as usize;
    let chroma_width = width.div_ceil(2);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgba.par_chunks_exact_mut(rgba_stride as usize).zip(
            planar_image
                .y_plane
                .par_chunks_exact(planar_image.y_stride as usize),
        );
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgba.chunks_exact_mut(rgba_stride as usize).zip(
            planar_image
                .y_plane
                .chunks_exact(planar_image.y_stride as usize),
        );
    }

    iter.enumerate().for_each(|(y, (rgba, y_plane))| {
        let u_offset = (y >> 1) * (planar_image.u_stride as usize);
        let v_offset = (y >> 1) * (planar_image.v_stride as usize);
        let u_plane = &planar_image.u_plane[u_offset..(u_offset + chroma_width)];
        let v_plane = &planar_image.v_plane[v_offset..(v_offset + chroma_width)];
        let y_plane = &y_plane[..width];
        let rgba = &mut rgba[..width * channels];

        for (((rgba, y_src), &u_src), &v_src) in rgba
            .chunks_exact_mut(channels * 2)
            .zip(y_plane.chunks_exact(2))
            .zip(u_plane.iter())
            .zip(v_plane.iter())
        {
            let y0_value = (y_src[0] as i32 - bias_y) * y_coef;
            let cb_value = u_src as i32 - bias_uv;
            let cr_value = v_src as i32 - bias_uv;

            let r0 = qrshr::<PRECISION, 8>(y0_value + cr_coef * cr_value);
            let b0 = qrshr::<PRECISION, 8>(y0_value + cb_coef * cb_value);
            let g0 = qrshr::<PRECISION, 8>(y0_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

            rgba[dst_chans.get_r_channel_offset()] = r0 as u8;
            rgba[dst_chans.get_g_channel_offset()] = g0 as u8;
            rgba[dst_chans.get_b_channel_offset()] = b0 as u8;
            if dst_chans.has_alpha() {
                rgba[dst_chans.get_a_channel_offset()] = 255;
            }

            let y1_value = (y_src[1] as i32 - bias_y) * y_coef;

            let r1 = qrshr::<PRECISION, 8>(y1_value + cr_coef * cr_value);
            let b1 = qrshr::<PRECISION, 8>(y1_value + cb_coef * cb_value);
            let g1 = qrshr::<PRECISION, 8>(y1_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

            rgba[dst_chans.get_r_channel_offset() + channels] = r1 as u8;
            rgba[dst_chans.get_g_channel_offset() + channels] = g1 as u8;
            rgba[dst_chans.get_b_channel_offset() + channels] = b1 as u8;
            if dst_chans.has_alpha() {
                rgba[dst_chans.get_a_channel_offset() + channels] = 255;
            }
        }

        if width & 1 != 0 {
            let y0_value = (*y_plane.last().unwrap() as i32 - bias_y) * y_coef;
            let cb_value = *u_plane.last().unwrap() as i32 - bias_uv;
            let cr_value = *v_plane.last().unwrap() as i32 - bias_uv;
            let rgba = rgba.chunks_exact_mut(channels * 2).into_remainder();

            let r0 = qrshr::<PRECISION, 8>(y0_value + cr_coef * cr_value);
            let b0 = qrshr::<PRECISION, 8>(y0_value + cb_coef * cb_value);
            let g0 = qrshr::<PRECISION, 8>(y0_value - g_coef_1 * cr_value - g_coef_2 * cb_value);

            rgba[dst_chans.get_r_channel_offset()] = r0 as u8;
            rgba[dst_chans.get_g_channel_offset()] = g0 as u8;
            rgba[dst_chans.get_b_channel_offset()] = b0 as u8;
            if dst_chans.has_alpha() {
                rgba[dst_chans.get_a_channel_offset()] = 255;
            }
        }
    });

    Ok(())
}

/// Convert YUV 420 planar format to RGB format.
///
/// This function takes YUV 420 planar format data with 8-bit precision,
/// and converts it to RGB format with 8-bit per channel precision.
/// Chroma is expanded by nearest neighbor, each chroma sample serves its
/// 2x2 luma quad.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (components per row) for the RGB image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGB data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv420_to_rgb(
    planar_image: &YuvPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv420_to_rgbx::<{ YuvSourceChannels::Rgb as u8 }>(planar_image, rgb, rgb_stride, range, matrix)
}

/// Convert YUV 420 planar format to RGBA format.
///
/// This function takes YUV 420 planar format data with 8-bit precision,
/// and converts it to RGBA format with 8-bit per channel precision, alpha
/// is set fully opaque. Chroma is expanded by nearest neighbor.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - The stride (components per row) for the RGBA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGBA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv420_to_rgba(
    planar_image: &YuvPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv420_to_rgbx::<{ YuvSourceChannels::Rgba as u8 }>(
        planar_image,
        rgba,
        rgba_stride,
        range,
        matrix,
    )
}

/// Convert YUV 420 planar format to BGRA format.
///
/// This function takes YUV 420 planar format data with 8-bit precision,
/// and converts it to BGRA format with 8-bit per channel precision, alpha
/// is set fully opaque. Chroma is expanded by nearest neighbor.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `bgra` - A mutable slice to store the converted BGRA data.
/// * `bgra_stride` - The stride (components per row) for the BGRA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output BGRA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv420_to_bgra(
    planar_image: &YuvPlanarImage<u8>,
    bgra: &mut [u8],
    bgra_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv420_to_rgbx::<{ YuvSourceChannels::Bgra as u8 }>(
        planar_image,
        bgra,
        bgra_stride,
        range,
        matrix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encode_flat_yuv420, flat_planar_image, PlanarBuffers};

    #[test]
    fn zero_point_is_black() {
        for range in [YuvRange::Limited, YuvRange::Full] {
            let chroma_range = get_yuv_range(8, range);
            let buffers = PlanarBuffers::flat(5, 3, chroma_range.bias_y as u8, 128, 128);
            let image = flat_planar_image(&buffers, 5, 3);
            let mut rgba = vec![0u8; 5 * 3 * 4];
            yuv420_to_rgba(&image, &mut rgba, 5 * 4, range, YuvStandardMatrix::Bt601).unwrap();
            for px in rgba.chunks_exact(4) {
                assert_eq!(&px[..3], &[0, 0, 0]);
                assert_eq!(px[3], 255);
            }
        }
    }

    #[test]
    fn peak_luma_is_white() {
        let buffers = PlanarBuffers::flat(4, 4, 235, 128, 128);
        let image = flat_planar_image(&buffers, 4, 4);
        let mut rgb = vec![0u8; 4 * 4 * 3];
        yuv420_to_rgb(
            &image,
            &mut rgb,
            4 * 3,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();
        assert!(rgb.iter().all(|&c| c == 255));

        let buffers = PlanarBuffers::flat(4, 4, 255, 128, 128);
        let image = flat_planar_image(&buffers, 4, 4);
        let mut rgb = vec![0u8; 4 * 4 * 3];
        yuv420_to_rgb(
            &image,
            &mut rgb,
            4 * 3,
            YuvRange::Full,
            YuvStandardMatrix::Bt709,
        )
        .unwrap();
        assert!(rgb.iter().all(|&c| c == 255));
    }

    #[test]
    fn flat_colors_round_trip_within_tolerance() {
        use rand::Rng;
        let mut rng = rand::rng();
        for matrix in [
            YuvStandardMatrix::Bt601,
            YuvStandardMatrix::Bt709,
            YuvStandardMatrix::Bt2020,
        ] {
            for range in [YuvRange::Limited, YuvRange::Full] {
                for (width, height) in [(16u32, 16u32), (15, 9), (1, 1), (2, 5)] {
                    let color = [
                        rng.random_range(0..256u32) as u8,
                        rng.random_range(0..256u32) as u8,
                        rng.random_range(0..256u32) as u8,
                    ];
                    let buffers = encode_flat_yuv420(color, width, height, range, matrix);
                    let image = flat_planar_image(&buffers, width, height);
                    let mut rgba = vec![0u8; (width * height * 4) as usize];
                    yuv420_to_rgba(&image, &mut rgba, width * 4, range, matrix).unwrap();
                    for px in rgba.chunks_exact(4) {
                        let diff_r = (px[0] as i32 - color[0] as i32).unsigned_abs();
                        let diff_g = (px[1] as i32 - color[1] as i32).unsigned_abs();
                        let diff_b = (px[2] as i32 - color[2] as i32).unsigned_abs();
                        assert!(
                            diff_r <= 3 && diff_g <= 3 && diff_b <= 3,
                            "Original RGB {:?}, decoded RGB {:?}, matrix {:?}, range {:?}",
                            color,
                            &px[..3],
                            matrix,
                            range
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bgra_output_swaps_channels() {
        let buffers = encode_flat_yuv420(
            [200, 50, 10],
            8,
            8,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        );
        let image = flat_planar_image(&buffers, 8, 8);
        let mut rgba = vec![0u8; 8 * 8 * 4];
        let mut bgra = vec![0u8; 8 * 8 * 4];
        yuv420_to_rgba(
            &image,
            &mut rgba,
            8 * 4,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();
        yuv420_to_bgra(
            &image,
            &mut bgra,
            8 * 4,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        )
        .unwrap();
        for (rgba_px, bgra_px) in rgba.chunks_exact(4).zip(bgra.chunks_exact(4)) {
            assert_eq!(rgba_px[0], bgra_px[2]);
            assert_eq!(rgba_px[1], bgra_px[1]);
            assert_eq!(rgba_px[2], bgra_px[0]);
            assert_eq!(rgba_px[3], bgra_px[3]);
        }
    }

    #[test]
    fn undersized_planes_are_rejected() {
        let y = vec![0u8; 8 * 8 - 1];
        let chroma = vec![0u8; 4 * 4];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 8,
            u_plane: &chroma,
            u_stride: 4,
            v_plane: &chroma,
            v_stride: 4,
            width: 8,
            height: 8,
        };
        let mut rgba = vec![0u8; 8 * 8 * 4];
        assert!(yuv420_to_rgba(
            &image,
            &mut rgba,
            8 * 4,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601
        )
        .is_err());

        let mut short_rgba = vec![0u8; 8 * 8 * 4 - 4];
        let y = vec![0u8; 8 * 8];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 8,
            u_plane: &chroma,
            u_stride: 4,
            v_plane: &chroma,
            v_stride: 4,
            width: 8,
            height: 8,
        };
        assert!(yuv420_to_rgba(
            &image,
            &mut short_rgba,
            8 * 4,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601
        )
        .is_err());
    }
}
