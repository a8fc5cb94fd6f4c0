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
use frameconv::{
    pixel_format, BitmapLayout, ChromaUpsampling, FrameBuffer, FrameConverter, FramePlane,
    FrameRotation, RgbBitmap, SampleBuffer, VideoFrame, YuvPlanarImage,
};
use std::time::Instant;

fn paint_nv12(
    width: usize,
    height: usize,
    y_stride: usize,
    uv_stride: usize,
) -> (Vec<u8>, Vec<u8>) {
    let mut y_plane = vec![0u8; y_stride * height];
    let mut uv_plane = vec![0u8; uv_stride * height.div_ceil(2)];
    for (j, row) in y_plane.chunks_exact_mut(y_stride).enumerate() {
        for (i, dst) in row[..width].iter_mut().enumerate() {
            *dst = (16 + (i * 219) / width.max(1) + j % 7) as u8;
        }
    }
    for (j, row) in uv_plane.chunks_exact_mut(uv_stride).enumerate() {
        for (i, uv) in row.chunks_exact_mut(2).enumerate() {
            uv[0] = (64 + (i * 128) / width.max(1)) as u8;
            uv[1] = (192 - (j * 128) / height.max(1)) as u8;
        }
    }
    (y_plane, uv_plane)
}

fn main() {
    let width = 1280u32;
    let height = 720u32;

    // Padded strides on purpose, real capture buffers rarely come tight.
    let y_stride = width as usize + 64;
    let uv_stride = width as usize + 64;
    let (y_plane, uv_plane) = paint_nv12(width as usize, height as usize, y_stride, uv_stride);

    let planes = [
        FramePlane {
            data: &y_plane,
            stride: y_stride as u32,
        },
        FramePlane {
            data: &uv_plane,
            stride: uv_stride as u32,
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

    let converter = FrameConverter::new().with_layout(BitmapLayout::Rgb);

    let start_time = Instant::now();
    let bitmap = converter.convert(&frame).unwrap();
    println!("NV12 1280x720 rotate 90 time: {:?}", start_time.elapsed());
    println!(
        "display size {}x{}, stride {}",
        bitmap.width(),
        bitmap.height(),
        bitmap.stride()
    );

    image::save_buffer(
        "converted_nv12.png",
        bitmap.data(),
        bitmap.width(),
        bitmap.height(),
        image::ExtendedColorType::Rgb8,
    )
    .unwrap();

    // Reusing one bitmap across a stream of frames skips the per-frame allocation.
    let mut reused = RgbBitmap::alloc(bitmap.width(), bitmap.height(), BitmapLayout::Rgb).unwrap();
    let start_time = Instant::now();
    for _ in 0..100 {
        converter.convert_into(&frame, &mut reused).unwrap();
    }
    println!(
        "NV12 1280x720 rotate 90 x100 reused time: {:?}",
        start_time.elapsed()
    );

    let chroma_stride = width.div_ceil(2) as usize;
    let u_plane = vec![90u8; chroma_stride * height.div_ceil(2) as usize];
    let v_plane = vec![240u8; chroma_stride * height.div_ceil(2) as usize];
    let i420_frame = VideoFrame {
        buffer: FrameBuffer::I420(YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: y_stride as u32,
            u_plane: &u_plane,
            u_stride: chroma_stride as u32,
            v_plane: &v_plane,
            v_stride: chroma_stride as u32,
            width,
            height,
        }),
        rotation: FrameRotation::Rotate0,
    };

    let bilinear = converter.with_upsampling(ChromaUpsampling::Bilinear);
    let start_time = Instant::now();
    let smooth = bilinear.convert(&i420_frame).unwrap();
    println!("I420 1280x720 bilinear time: {:?}", start_time.elapsed());

    image::save_buffer(
        "converted_i420.png",
        smooth.data(),
        smooth.width(),
        smooth.height(),
        image::ExtendedColorType::Rgb8,
    )
    .unwrap();
}
