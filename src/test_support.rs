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
//! Flat-color YUV fixtures shared by the kernel tests.
//!
//! Flat images sidestep 4:2:0 subsampling loss, so a float forward transform
//! here is an exact reference for the fixed-point decode kernels.

use crate::yuv_support::get_yuv_range;
use crate::{YuvBiPlanarImage, YuvPlanarImage, YuvRange, YuvStandardMatrix};

/// Owned 4:2:0 planes for a flat-color tri-planar image.
pub(crate) struct PlanarBuffers {
    pub y: Vec<u8>,
    pub u: Vec<u8>,
    pub v: Vec<u8>,
}

impl PlanarBuffers {
    pub(crate) fn flat(width: u32, height: u32, y: u8, u: u8, v: u8) -> Self {
        let chroma_width = width.div_ceil(2) as usize;
        let chroma_height = height.div_ceil(2) as usize;
        PlanarBuffers {
            y: vec![y; width as usize * height as usize],
            u: vec![u; chroma_width * chroma_height],
            v: vec![v; chroma_width * chroma_height],
        }
    }
}

/// Owned 4:2:0 planes for a flat-color bi-planar image, chroma stored
/// in the interleaved order the caller passes.
pub(crate) struct BiPlanarBuffers {
    pub y: Vec<u8>,
    pub uv: Vec<u8>,
}

impl BiPlanarBuffers {
    pub(crate) fn flat(width: u32, height: u32, y: u8, first: u8, second: u8) -> Self {
        let chroma_width = width.div_ceil(2) as usize;
        let chroma_height = height.div_ceil(2) as usize;
        let mut uv = vec![0u8; chroma_width * chroma_height * 2];
        for pair in uv.chunks_exact_mut(2) {
            pair[0] = first;
            pair[1] = second;
        }
        BiPlanarBuffers {
            y: vec![y; width as usize * height as usize],
            uv,
        }
    }
}

pub(crate) fn flat_planar_image(
    buffers: &PlanarBuffers,
    width: u32,
    height: u32,
) -> YuvPlanarImage<'_, u8> {
    YuvPlanarImage {
        y_plane: &buffers.y,
        y_stride: width,
        u_plane: &buffers.u,
        u_stride: width.div_ceil(2),
        v_plane: &buffers.v,
        v_stride: width.div_ceil(2),
        width,
        height,
    }
}

pub(crate) fn flat_biplanar_image(
    buffers: &BiPlanarBuffers,
    width: u32,
    height: u32,
) -> YuvBiPlanarImage<'_, u8> {
    YuvBiPlanarImage {
        y_plane: &buffers.y,
        y_stride: width,
        uv_plane: &buffers.uv,
        uv_stride: width.div_ceil(2) * 2,
        width,
        height,
    }
}

/// Forward-transforms one RGB color in float space and returns its (Y, Cb, Cr).
pub(crate) fn encode_yuv_color(
    rgb: [u8; 3],
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> (u8, u8, u8) {
    let chroma_range = get_yuv_range(8, range);
    let kr_kb = matrix.get_kr_kb();
    let kr = kr_kb.kr;
    let kb = kr_kb.kb;
    let r = rgb[0] as f32;
    let g = rgb[1] as f32;
    let b = rgb[2] as f32;
    let luma = kr * r + (1. - kr - kb) * g + kb * b;
    let y = chroma_range.bias_y as f32 + chroma_range.range_y as f32 / 255. * luma;
    let cb = chroma_range.bias_uv as f32
        + chroma_range.range_uv as f32 / 255. * (b - luma) / (2. * (1. - kb));
    let cr = chroma_range.bias_uv as f32
        + chroma_range.range_uv as f32 / 255. * (r - luma) / (2. * (1. - kr));
    (
        y.round().clamp(0., 255.) as u8,
        cb.round().clamp(0., 255.) as u8,
        cr.round().clamp(0., 255.) as u8,
    )
}

pub(crate) fn encode_flat_yuv420(
    rgb: [u8; 3],
    width: u32,
    height: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> PlanarBuffers {
    let (y, u, v) = encode_yuv_color(rgb, range, matrix);
    PlanarBuffers::flat(width, height, y, u, v)
}

pub(crate) fn encode_flat_nv(
    rgb: [u8; 3],
    width: u32,
    height: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
    u_first: bool,
) -> BiPlanarBuffers {
    let (y, u, v) = encode_yuv_color(rgb, range, matrix);
    let (first, second) = if u_first { (u, v) } else { (v, u) };
    BiPlanarBuffers::flat(width, height, y, first, second)
}
