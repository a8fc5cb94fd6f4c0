/*
 * Copyright (c) Radzivon Bartoshyk, 8/2025. All rights reserved.
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
use criterion::{criterion_group, criterion_main, Criterion};
use frameconv::{
    bgra_to_rgba, pixel_format, yuv400_to_rgba, yuv420_to_rgba, yuv420_to_rgba_bilinear,
    yuv_nv12_to_rgba, BitmapLayout, FrameBuffer, FrameConverter, FramePlane, FrameRotation,
    RgbBitmap, SampleBuffer, VideoFrame, YuvBiPlanarImage, YuvGrayImage, YuvPlanarImage, YuvRange,
    YuvStandardMatrix,
};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let mut rng = rand::rng();

    let luma_size = width as usize * height as usize;
    let chroma_size = width.div_ceil(2) as usize * height.div_ceil(2) as usize;

    let y_plane: Vec<u8> = (0..luma_size).map(|_| rng.random()).collect();
    let uv_plane: Vec<u8> = (0..chroma_size * 2).map(|_| rng.random()).collect();
    let u_plane: Vec<u8> = (0..chroma_size).map(|_| rng.random()).collect();
    let v_plane: Vec<u8> = (0..chroma_size).map(|_| rng.random()).collect();
    let bgra_bytes: Vec<u8> = (0..luma_size * 4).map(|_| rng.random()).collect();

    let bi_planar_image = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride: width.div_ceil(2) * 2,
        width,
        height,
    };

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        u_stride: width.div_ceil(2),
        v_plane: &v_plane,
        v_stride: width.div_ceil(2),
        width,
        height,
    };

    let gray_image = YuvGrayImage {
        y_plane: &y_plane,
        y_stride: width,
        width,
        height,
    };

    c.bench_function("frameconv: NV12 -> RGBA 1080p", |b| {
        let mut rgba_bytes = vec![0u8; luma_size * 4];
        b.iter(|| {
            yuv_nv12_to_rgba(
                &bi_planar_image,
                &mut rgba_bytes,
                width * 4,
                YuvRange::Limited,
                YuvStandardMatrix::Bt601,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: I420 -> RGBA 1080p", |b| {
        let mut rgba_bytes = vec![0u8; luma_size * 4];
        b.iter(|| {
            yuv420_to_rgba(
                &planar_image,
                &mut rgba_bytes,
                width * 4,
                YuvRange::Limited,
                YuvStandardMatrix::Bt601,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: I420 -> RGBA bilinear 1080p", |b| {
        let mut rgba_bytes = vec![0u8; luma_size * 4];
        b.iter(|| {
            yuv420_to_rgba_bilinear(
                &planar_image,
                &mut rgba_bytes,
                width * 4,
                YuvRange::Limited,
                YuvStandardMatrix::Bt601,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: GRAY8 -> RGBA 1080p", |b| {
        let mut rgba_bytes = vec![0u8; luma_size * 4];
        b.iter(|| {
            yuv400_to_rgba(
                &gray_image,
                &mut rgba_bytes,
                width * 4,
                YuvRange::Limited,
                YuvStandardMatrix::Bt601,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: BGRA -> RGBA 1080p", |b| {
        let mut rgba_bytes = vec![0u8; luma_size * 4];
        b.iter(|| {
            bgra_to_rgba(
                &bgra_bytes,
                width * 4,
                &mut rgba_bytes,
                width * 4,
                width,
                height,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: converter NV12 rotate 90 1080p", |b| {
        let planes = [
            FramePlane {
                data: &y_plane,
                stride: width,
            },
            FramePlane {
                data: &uv_plane,
                stride: width.div_ceil(2) * 2,
            },
        ];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::NV12_VIDEO,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate90,
        };
        let converter = FrameConverter::new();
        let mut bitmap = RgbBitmap::alloc(height, width, BitmapLayout::Rgba).unwrap();
        b.iter(|| {
            converter.convert_into(&frame, &mut bitmap).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
