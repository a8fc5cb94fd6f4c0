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
use crate::yuv_support::{get_yuv_range, search_inverse_transform, YuvNVOrder, YuvSourceChannels};
use crate::{ConvertError, YuvBiPlanarImage, YuvRange, YuvStandardMatrix};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

const PRECISION: i32 = 13;

fn yuv_nv_to_rgbx<const UV_ORDER: u8, const DESTINATION_CHANNELS: u8>(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    check_rgba_destination(
        rgba,
        rgba_stride,
        bi_planar_image.width,
        bi_planar_image.height,
        channels,
    )?;
    bi_planar_image.check_constraints()?;

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

    let width = bi_planar_image.width as usize;

    let process_halved_chroma_row = |y_src: &[u8], uv_src: &[u8], rgba: &mut [u8]| {
        for ((rgba, y_src), uv_src) in rgba
            .chunks_exact_mut(channels * 2)
            .zip(y_src.chunks_exact(2))
            .zip(uv_src.chunks_exact(2))
        {
            let cb_value = uv_src[order.get_u_position()] as i32 - bias_uv;
            let cr_value = uv_src[order.get_v_position()] as i32 - bias_uv;

            let y0_value = (y_src[0] as i32 - bias_y) * y_coef;

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
            let rgba = rgba.chunks_exact_mut(channels * 2).into_remainder();
            let uv_src = uv_src.chunks_exact(2).last().unwrap();
            let y_src = y_src.chunks_exact(2).remainder();

            let y0_value = (y_src[0] as i32 - bias_y) * y_coef;
            let cb_value = uv_src[order.get_u_position()] as i32 - bias_uv;
            let cr_value = uv_src[order.get_v_position()] as i32 - bias_uv;

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
    };

    let process_double_chroma_row =
        |y_src0: &[u8], y_src1: &[u8], uv_src: &[u8], rgba0: &mut [u8], rgba1: &mut [u8]| {
            for ((((rgba0, rgba1), y_src0), y_src1), uv_src) in rgba0
                .chunks_exact_mut(channels * 2)
                .zip(rgba1.chunks_exact_mut(channels * 2))
                .zip(y_src0.chunks_exact(2))
                .zip(y_src1.chunks_exact(2))
                .zip(uv_src.chunks_exact(2))
            {
                let cb_value = uv_src[order.get_u_position()] as i32 - bias_uv;
                let cr_value = uv_src[order.get_v_position()] as i32 - bias_uv;

                let g_built_coeff = -g_coef_1 * cr_value - g_coef_2 * cb_value;

                let y00_value = (y_src0[0] as i32 - bias_y) * y_coef;

                let r00 = qrshr::<PRECISION, 8>(y00_value + cr_coef * cr_value);
                let b00 = qrshr::<PRECISION, 8>(y00_value + cb_coef * cb_value);
                let g00 = qrshr::<PRECISION, 8>(y00_value + g_built_coeff);

                rgba0[dst_chans.get_r_channel_offset()] = r00 as u8;
                rgba0[dst_chans.get_g_channel_offset()] = g00 as u8;
                rgba0[dst_chans.get_b_channel_offset()] = b00 as u8;
                if dst_chans.has_alpha() {
                    rgba0[dst_chans.get_a_channel_offset()] = 255;
                }

                let y01_value = (y_src0[1] as i32 - bias_y) * y_coef;

                let r01 = qrshr::<PRECISION, 8>(y01_value + cr_coef * cr_value);
                let b01 = qrshr::<PRECISION, 8>(y01_value + cb_coef * cb_value);
                let g01 = qrshr::<PRECISION, 8>(y01_value + g_built_coeff);

                rgba0[dst_chans.get_r_channel_offset() + channels] = r01 as u8;
                rgba0[dst_chans.get_g_channel_offset() + channels] = g01 as u8;
                rgba0[dst_chans.get_b_channel_offset() + channels] = b01 as u8;
                if dst_chans.has_alpha() {
                    rgba0[dst_chans.get_a_channel_offset() + channels] = 255;
                }

                let y10_value = (y_src1[0] as i32 - bias_y) * y_coef;

                let r10 = qrshr::<PRECISION, 8>(y10_value + cr_coef * cr_value);
                let b10 = qrshr::<PRECISION, 8>(y10_value + cb_coef * cb_value);
                let g10 = qrshr::<PRECISION, 8>(y10_value + g_built_coeff);

                rgba1[dst_chans.get_r_channel_offset()] = r10 as u8;
                rgba1[dst_chans.get_g_channel_offset()] = g10 as u8;
                rgba1[dst_chans.get_b_channel_offset()] = b10 as u8;
                if dst_chans.has_alpha() {
                    rgba1[dst_chans.get_a_channel_offset()] = 255;
                }

                let y11_value = (y_src1[1] as i32 - bias_y) * y_coef;

                let r11 = qrshr::<PRECISION, 8>(y11_value + cr_coef * cr_value);
                let b11 = qrshr::<PRECISION, 8>(y11_value + cb_coef * cb_value);
                let g11 = qrshr::<PRECISION, 8>(y11_value + g_built_coeff);

                rgba1[dst_chans.get_r_channel_offset() + channels] = r11 as u8;
                rgba1[dst_chans.get_g_channel_offset() + channels] = g11 as u8;
                rgba1[dst_chans.get_b_channel_offset() + channels] = b11 as u8;
                if dst_chans.has_alpha() {
                    rgba1[dst_chans.get_a_channel_offset() + channels] = 255;
                }
            }

            if width & 1 != 0 {
                let rgba0 = rgba0.chunks_exact_mut(channels * 2).into_remainder();
                let rgba1 = rgba1.chunks_exact_mut(channels * 2).into_remainder();
                let uv_src = uv_src.chunks_exact(2).last().unwrap();
                let y_src0 = y_src0.chunks_exact(2).remainder();
                let y_src1 = y_src1.chunks_exact(2).remainder();

                let cb_value = uv_src[order.get_u_position()] as i32 - bias_uv;
                let cr_value = uv_src[order.get_v_position()] as i32 - bias_uv;

                let g_built_coeff = -g_coef_1 * cr_value - g_coef_2 * cb_value;

                let y0_value = (y_src0[0] as i32 - bias_y) * y_coef;

                let r0 = qrshr::<PRECISION, 8>(y0_value + cr_coef * cr_value);
                let b0 = qrshr::<PRECISION, 8>(y0_value + cb_coef * cb_value);
                let g0 = qrshr::<PRECISION, 8>(y0_value + g_built_coeff);

                rgba0[dst_chans.get_r_channel_offset()] = r0 as u8;
                rgba0[dst_chans.get_g_channel_offset()] = g0 as u8;
                rgba0[dst_chans.get_b_channel_offset()] = b0 as u8;
                if dst_chans.has_alpha() {
                    rgba0[dst_chans.get_a_channel_offset()] = 255;
                }

                let y1_value = (y_src1[0] as i32 - bias_y) * y_coef;

                let r1 = qrshr::<PRECISION, 8>(y1_value + cr_coef * cr_value);
                let b1 = qrshr::<PRECISION, 8>(y1_value + cb_coef * cb_value);
                let g1 = qrshr::<PRECISION, 8>(y1_value + g_built_coeff);

                rgba1[dst_chans.get_r_channel_offset()] = r1 as u8;
                rgba1[dst_chans.get_g_channel_offset()] = g1 as u8;
                rgba1[dst_chans.get_b_channel_offset()] = b1 as u8;
                if dst_chans.has_alpha() {
                    rgba1[dst_chans.get_a_channel_offset()] = 255;
                }
            }
        };

    let y_stride = bi_planar_image.y_stride as usize;
    let uv_stride = bi_planar_image.uv_stride as usize;
    let y_plane = bi_planar_image.y_plane;
    let uv_plane = bi_planar_image.uv_plane;
    let chroma_row_width = width.div_ceil(2) * 2;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact(y_stride * 2)
            .zip(uv_plane.par_chunks_exact(uv_stride))
            .zip(rgba.par_chunks_exact_mut(rgba_stride as usize * 2));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact(y_stride * 2)
            .zip(uv_plane.chunks_exact(uv_stride))
            .zip(rgba.chunks_exact_mut(rgba_stride as usize * 2));
    }
    iter.for_each(|((y_src, uv_src), rgba)| {
        let (y_src0, y_src1) = y_src.split_at(y_stride);
        let (rgba0, rgba1) = rgba.split_at_mut(rgba_stride as usize);
        process_double_chroma_row(
            &y_src0[..width],
            &y_src1[..width],
            &uv_src[..chroma_row_width],
            &mut rgba0[..width * channels],
            &mut rgba1[..width * channels],
        );
    });

    if bi_planar_image.height & 1 != 0 {
        let y_src = y_plane.chunks_exact(y_stride * 2).remainder();
        let uv_src = uv_plane.chunks_exact(uv_stride).last().unwrap();
        let rgba = rgba
            .chunks_exact_mut(rgba_stride as usize * 2)
            .into_remainder();
        process_halved_chroma_row(
            &y_src[..width],
            &uv_src[..chroma_row_width],
            &mut rgba[..width * channels],
        );
    }

    Ok(())
}

/// Convert YUV NV12 format to RGB format.
///
/// This function takes YUV NV12 data with 8-bit precision,
/// and converts it to RGB format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (components per row) for the RGB image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGB data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv12_to_rgb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::UV as u8 }, { YuvSourceChannels::Rgb as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        range,
        matrix,
    )
}

/// Convert YUV NV12 format to RGBA format.
///
/// This function takes YUV NV12 data with 8-bit precision,
/// and converts it to RGBA format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - The stride (components per row) for the RGBA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGBA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv12_to_rgba(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::UV as u8 }, { YuvSourceChannels::Rgba as u8 }>(
        bi_planar_image,
        rgba,
        rgba_stride,
        range,
        matrix,
    )
}

/// Convert YUV NV12 format to BGRA format.
///
/// This function takes YUV NV12 data with 8-bit precision,
/// and converts it to BGRA format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `bgra` - A mutable slice to store the converted BGRA data.
/// * `bgra_stride` - The stride (components per row) for the BGRA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output BGRA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv12_to_bgra(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    bgra: &mut [u8],
    bgra_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::UV as u8 }, { YuvSourceChannels::Bgra as u8 }>(
        bi_planar_image,
        bgra,
        bgra_stride,
        range,
        matrix,
    )
}

/// Convert YUV NV21 format to RGB format.
///
/// This function takes YUV NV21 data with 8-bit precision,
/// and converts it to RGB format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - The stride (components per row) for the RGB image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGB data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv21_to_rgb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::VU as u8 }, { YuvSourceChannels::Rgb as u8 }>(
        bi_planar_image,
        rgb,
        rgb_stride,
        range,
        matrix,
    )
}

/// Convert YUV NV21 format to RGBA format.
///
/// This function takes YUV NV21 data with 8-bit precision,
/// and converts it to RGBA format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - The stride (components per row) for the RGBA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output RGBA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv21_to_rgba(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::VU as u8 }, { YuvSourceChannels::Rgba as u8 }>(
        bi_planar_image,
        rgba,
        rgba_stride,
        range,
        matrix,
    )
}

/// Convert YUV NV21 format to BGRA format.
///
/// This function takes YUV NV21 data with 8-bit precision,
/// and converts it to BGRA format with 8-bit per channel precision.
///
/// # Arguments
///
/// * `bi_planar_image` - Source Bi-Planar image.
/// * `bgra` - A mutable slice to store the converted BGRA data.
/// * `bgra_stride` - The stride (components per row) for the BGRA image data.
/// * `range` - The YUV range (limited or full).
/// * `matrix` - The YUV standard matrix (BT.601 or BT.709 or BT.2020 or other).
///
/// # Errors
///
/// This function returns an error if the lengths of the planes or the output BGRA data are not
/// valid based on the specified width, height, and strides.
///
pub fn yuv_nv21_to_bgra(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    bgra: &mut [u8],
    bgra_stride: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Result<(), ConvertError> {
    yuv_nv_to_rgbx::<{ YuvNVOrder::VU as u8 }, { YuvSourceChannels::Bgra as u8 }>(
        bi_planar_image,
        bgra,
        bgra_stride,
        range,
        matrix,
    )
}
