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

#![no_main]

use frameconv::{
    pixel_format, BitmapLayout, ChromaUpsampling, FourCC, FrameBuffer, FrameConverter, FramePlane,
    FrameRotation, SampleBuffer, VideoFrame,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_convert(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_convert(selector: u8, i_width: u8, i_height: u8, rotation: u8, fill: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let tags = [
        pixel_format::BGRA32,
        pixel_format::RGBA32,
        pixel_format::ARGB32,
        pixel_format::RGB24,
        pixel_format::BGR24,
        pixel_format::NV12_VIDEO,
        pixel_format::NV12_FULL,
        pixel_format::NV12,
        pixel_format::NV21,
        pixel_format::I420_VIDEO,
        pixel_format::I420_FULL,
        pixel_format::I420,
        pixel_format::GRAY8,
    ];
    let format = tags[selector as usize % tags.len()];

    let luma = vec![fill; width as usize * height as usize];
    let chroma = vec![fill; (width as usize).div_ceil(2) * (height as usize).div_ceil(2)];
    let interleaved =
        vec![fill; (width as usize).div_ceil(2) * 2 * (height as usize).div_ceil(2)];
    let packed3 = vec![fill; width as usize * 3 * height as usize];
    let packed4 = vec![fill; width as usize * 4 * height as usize];

    let planes: Vec<FramePlane> = if format == pixel_format::BGRA32
        || format == pixel_format::RGBA32
        || format == pixel_format::ARGB32
    {
        vec![FramePlane {
            data: &packed4,
            stride: width * 4,
        }]
    } else if format == pixel_format::RGB24 || format == pixel_format::BGR24 {
        vec![FramePlane {
            data: &packed3,
            stride: width * 3,
        }]
    } else if format == pixel_format::GRAY8 {
        vec![FramePlane {
            data: &luma,
            stride: width,
        }]
    } else if format == pixel_format::I420_VIDEO
        || format == pixel_format::I420_FULL
        || format == pixel_format::I420
    {
        vec![
            FramePlane {
                data: &luma,
                stride: width,
            },
            FramePlane {
                data: &chroma,
                stride: width.div_ceil(2),
            },
            FramePlane {
                data: &chroma,
                stride: width.div_ceil(2),
            },
        ]
    } else {
        vec![
            FramePlane {
                data: &luma,
                stride: width,
            },
            FramePlane {
                data: &interleaved,
                stride: width.div_ceil(2) * 2,
            },
        ]
    };

    let frame = VideoFrame {
        buffer: FrameBuffer::Sample(SampleBuffer {
            format,
            width,
            height,
            planes: &planes,
        }),
        rotation: match rotation % 4 {
            0 => FrameRotation::Rotate0,
            1 => FrameRotation::Rotate90,
            2 => FrameRotation::Rotate180,
            _ => FrameRotation::Rotate270,
        },
    };

    let layout = if fill % 2 == 0 {
        BitmapLayout::Rgba
    } else {
        BitmapLayout::Rgb
    };
    let upsampling = if fill % 3 == 0 {
        ChromaUpsampling::Bilinear
    } else {
        ChromaUpsampling::Nearest
    };
    let converter = FrameConverter::new()
        .with_layout(layout)
        .with_upsampling(upsampling);

    let bitmap = converter.convert(&frame).unwrap();
    assert_eq!((bitmap.width(), bitmap.height()), frame.display_dimensions());

    let mut reused = bitmap;
    converter.convert_into(&frame, &mut reused).unwrap();

    // Arbitrary tags must reject gracefully, never panic. The bytes may
    // occasionally spell a real tag, then the plane checks take over.
    let arbitrary_tag = VideoFrame {
        buffer: FrameBuffer::Sample(SampleBuffer {
            format: FourCC([selector, i_width, i_height, fill]),
            width,
            height,
            planes: &planes,
        }),
        rotation: FrameRotation::Rotate0,
    };
    let _ = converter.convert(&arbitrary_tag);
}
