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
use crate::images::YuvPlanarImage;
use four_cc::FourCC;

/// CoreVideo-compatible pixel format tags understood by the sample buffer path.
///
/// Producers that do not speak FourCC (V4L2-style enumerations, transport
/// codecs) are covered by the `NV12`/`NV21`/`I420` aliases.
pub mod pixel_format {
    use four_cc::FourCC;

    /// 32-bit BGRA, 8 bits per channel.
    pub const BGRA32: FourCC = FourCC(*b"BGRA");
    /// 32-bit RGBA, 8 bits per channel.
    pub const RGBA32: FourCC = FourCC(*b"RGBA");
    /// 32-bit ARGB, `kCVPixelFormatType_32ARGB`.
    pub const ARGB32: FourCC = FourCC([0, 0, 0, 0x20]);
    /// 24-bit RGB, `kCVPixelFormatType_24RGB`.
    pub const RGB24: FourCC = FourCC([0, 0, 0, 0x18]);
    /// 24-bit BGR, `kCVPixelFormatType_24BGR`.
    pub const BGR24: FourCC = FourCC(*b"24BG");
    /// Bi-planar 4:2:0, video range, `kCVPixelFormatType_420YpCbCr8BiPlanarVideoRange`.
    pub const NV12_VIDEO: FourCC = FourCC(*b"420v");
    /// Bi-planar 4:2:0, full range, `kCVPixelFormatType_420YpCbCr8BiPlanarFullRange`.
    pub const NV12_FULL: FourCC = FourCC(*b"420f");
    /// Bi-planar 4:2:0 alias, treated as video range.
    pub const NV12: FourCC = FourCC(*b"NV12");
    /// Bi-planar 4:2:0 with VU chroma order, treated as video range.
    pub const NV21: FourCC = FourCC(*b"NV21");
    /// Tri-planar 4:2:0, video range, `kCVPixelFormatType_420YpCbCr8Planar`.
    pub const I420_VIDEO: FourCC = FourCC(*b"y420");
    /// Tri-planar 4:2:0, full range, `kCVPixelFormatType_420YpCbCr8PlanarFullRange`.
    pub const I420_FULL: FourCC = FourCC(*b"f420");
    /// Tri-planar 4:2:0 alias, treated as video range.
    pub const I420: FourCC = FourCC(*b"I420");
    /// 8-bit single channel, `kCVPixelFormatType_OneComponent8`.
    pub const GRAY8: FourCC = FourCC(*b"L008");
}

#[derive(Debug, Copy, Clone)]
/// One borrowed plane of a sample buffer.
pub struct FramePlane<'a> {
    pub data: &'a [u8],
    /// Stride here always means bytes per row.
    pub stride: u32,
}

#[derive(Debug, Clone)]
/// Platform camera pixel buffer: a format tag, dimensions and its planes.
///
/// Plane count is dictated by the format tag, one for packed and gray
/// formats, two for bi-planar YUV, three for tri-planar YUV.
pub struct SampleBuffer<'a> {
    pub format: FourCC,
    pub width: u32,
    pub height: u32,
    pub planes: &'a [FramePlane<'a>],
}

#[derive(Debug, Clone)]
/// Source variants a conversion accepts.
pub enum FrameBuffer<'a> {
    /// Camera sample buffer with a declared pixel format.
    Sample(SampleBuffer<'a>),
    /// Transport-delivered tri-planar 4:2:0 buffer.
    I420(YuvPlanarImage<'a, u8>),
}

impl FrameBuffer<'_> {
    pub const fn width(&self) -> u32 {
        match self {
            FrameBuffer::Sample(buffer) => buffer.width,
            FrameBuffer::I420(image) => image.width,
        }
    }

    pub const fn height(&self) -> u32 {
        match self {
            FrameBuffer::Sample(buffer) => buffer.height,
            FrameBuffer::I420(image) => image.height,
        }
    }
}

#[repr(u32)]
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Clockwise rotation a frame declares to be presented upright.
pub enum FrameRotation {
    #[default]
    Rotate0 = 0,
    Rotate90 = 90,
    Rotate180 = 180,
    Rotate270 = 270,
}

impl FrameRotation {
    /// Output width and height trade places under 90 and 270 degrees.
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, FrameRotation::Rotate90 | FrameRotation::Rotate270)
    }

    pub const fn from_degrees(degrees: u32) -> Option<FrameRotation> {
        match degrees {
            0 => Some(FrameRotation::Rotate0),
            90 => Some(FrameRotation::Rotate90),
            180 => Some(FrameRotation::Rotate180),
            270 => Some(FrameRotation::Rotate270),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// A borrowed video frame: pixel data plus presentation rotation.
///
/// The frame never owns its planes, the producer keeps them alive for the
/// duration of the conversion call.
pub struct VideoFrame<'a> {
    pub buffer: FrameBuffer<'a>,
    pub rotation: FrameRotation,
}

impl VideoFrame<'_> {
    /// Dimensions of the upright output, after rotation is applied.
    pub const fn display_dimensions(&self) -> (u32, u32) {
        let width = self.buffer.width();
        let height = self.buffer.height();
        if self.rotation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}
