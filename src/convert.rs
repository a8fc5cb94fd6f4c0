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
use crate::bitmap::{BitmapLayout, RgbBitmap};
use crate::frame::{pixel_format, FrameBuffer, FramePlane, FrameRotation, SampleBuffer, VideoFrame};
use crate::frame_error::{check_rgba_destination, ConvertError, MismatchedSize};
use crate::geometry::{rotate_rgb, rotate_rgba, RotationMode};
use crate::gray_to_rgb::{yuv400_to_rgb, yuv400_to_rgba};
use crate::images::{YuvBiPlanarImage, YuvGrayImage, YuvPlanarImage};
use crate::shuffle::{
    argb_to_rgb, argb_to_rgba, bgr_to_rgb, bgr_to_rgba, bgra_to_rgb, bgra_to_rgba, rgb_to_rgba,
    rgba_to_rgb,
};
use crate::yuv_nv_to_rgba::{yuv_nv12_to_rgb, yuv_nv12_to_rgba, yuv_nv21_to_rgb, yuv_nv21_to_rgba};
use crate::yuv_support::{YuvRange, YuvStandardMatrix};
use crate::yuv_to_rgba::{yuv420_to_rgb, yuv420_to_rgba};
use crate::yuv_to_rgba_bilinear::{yuv420_to_rgb_bilinear, yuv420_to_rgba_bilinear};
use four_cc::FourCC;

/// Declares how 4:2:0 chroma is expanded back to full resolution.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ChromaUpsampling {
    /// Each chroma sample is replicated over its 2x2 luma block.
    #[default]
    Nearest = 0,
    /// Chroma is reconstructed with 3:1 bi-linear weighting between
    /// neighbouring samples. Slower, visibly smoother on chroma edges.
    Bilinear = 1,
}

/// Converts borrowed video frames into owned, upright RGB bitmaps.
///
/// The converter itself is a plain value: it holds only the conversion
/// settings, never any pixel data, so one instance may be shared freely
/// between threads and calls may overlap without locking.
///
/// Formats that pin their own range, such as `420f`, override the
/// configured [`YuvRange`]; the configured range covers sources that do
/// not carry one, untagged I420 and 8-bit gray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameConverter {
    matrix: YuvStandardMatrix,
    range: YuvRange,
    layout: BitmapLayout,
    upsampling: ChromaUpsampling,
}

impl Default for FrameConverter {
    fn default() -> Self {
        FrameConverter::new()
    }
}

impl FrameConverter {
    /// Creates a converter with BT.601 limited range sources and RGBA output.
    pub const fn new() -> FrameConverter {
        FrameConverter {
            matrix: YuvStandardMatrix::Bt601,
            range: YuvRange::Limited,
            layout: BitmapLayout::Rgba,
            upsampling: ChromaUpsampling::Nearest,
        }
    }

    /// Sets the YUV standard matrix used for all YUV sources.
    pub const fn with_matrix(mut self, matrix: YuvStandardMatrix) -> FrameConverter {
        self.matrix = matrix;
        self
    }

    /// Sets the range assumed for sources whose format tag does not pin one.
    pub const fn with_range(mut self, range: YuvRange) -> FrameConverter {
        self.range = range;
        self
    }

    /// Sets the channel layout of produced bitmaps.
    pub const fn with_layout(mut self, layout: BitmapLayout) -> FrameConverter {
        self.layout = layout;
        self
    }

    /// Sets the chroma upsampling used for 4:2:0 planar sources.
    pub const fn with_upsampling(mut self, upsampling: ChromaUpsampling) -> FrameConverter {
        self.upsampling = upsampling;
        self
    }

    /// Converts a single frame into a freshly allocated bitmap.
    ///
    /// The produced bitmap is upright: the frame rotation is already applied,
    /// so for 90 and 270 degrees its dimensions come out swapped against the
    /// buffer dimensions. Ownership of the pixel storage passes to the caller.
    ///
    /// # Arguments
    ///
    /// * `frame`: Source frame, pixel data plus rotation.
    ///
    /// returns: Result<RgbBitmap, ConvertError>
    ///
    /// # Errors
    ///
    /// Returns an error when the pixel format is not in the supported
    /// enumeration, when plane sizes do not match the advertised dimensions,
    /// or when the output storage cannot be allocated. No partially converted
    /// bitmap is ever returned.
    pub fn convert(&self, frame: &VideoFrame) -> Result<RgbBitmap, ConvertError> {
        let (width, height) = frame.display_dimensions();
        let mut bitmap = RgbBitmap::alloc(width, height, self.layout)?;
        self.render(frame, &mut bitmap)?;
        Ok(bitmap)
    }

    /// Converts a single frame into an existing bitmap, reusing its storage.
    ///
    /// The bitmap is refitted to the display dimensions and the configured
    /// layout first, growing its storage only when the current capacity does
    /// not suffice. On error the bitmap stays allocated but its contents are
    /// unspecified.
    ///
    /// # Arguments
    ///
    /// * `frame`: Source frame, pixel data plus rotation.
    /// * `bitmap`: Destination bitmap to render into.
    ///
    /// returns: Result<(), ConvertError>
    ///
    /// # Errors
    ///
    /// Returns an error when the pixel format is not in the supported
    /// enumeration, when plane sizes do not match the advertised dimensions,
    /// or when the output storage cannot be grown.
    pub fn convert_into(
        &self,
        frame: &VideoFrame,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let (width, height) = frame.display_dimensions();
        bitmap.refit(width, height, self.layout)?;
        self.render(frame, bitmap)
    }

    fn render(&self, frame: &VideoFrame, bitmap: &mut RgbBitmap) -> Result<(), ConvertError> {
        let mode = match frame.rotation {
            FrameRotation::Rotate0 => return self.convert_buffer(&frame.buffer, bitmap),
            FrameRotation::Rotate90 => RotationMode::Rotate90,
            FrameRotation::Rotate180 => RotationMode::Rotate180,
            FrameRotation::Rotate270 => RotationMode::Rotate270,
        };
        let width = frame.buffer.width();
        let height = frame.buffer.height();
        // Rotation runs on converted RGB rows, the scratch holds the
        // unrotated pass at the buffer dimensions.
        let mut unrotated = RgbBitmap::alloc(width, height, self.layout)?;
        self.convert_buffer(&frame.buffer, &mut unrotated)?;
        let dst_stride = bitmap.stride() as usize;
        match self.layout {
            BitmapLayout::Rgb => rotate_rgb(
                unrotated.data(),
                unrotated.stride() as usize,
                bitmap.data_mut(),
                dst_stride,
                width as usize,
                height as usize,
                mode,
            ),
            BitmapLayout::Rgba => rotate_rgba(
                unrotated.data(),
                unrotated.stride() as usize,
                bitmap.data_mut(),
                dst_stride,
                width as usize,
                height as usize,
                mode,
            ),
        }
    }

    fn convert_buffer(
        &self,
        buffer: &FrameBuffer,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        match buffer {
            FrameBuffer::I420(planar_image) => {
                self.planar_to_bitmap(planar_image, self.range, bitmap)
            }
            FrameBuffer::Sample(sample) => self.sample_to_bitmap(sample, bitmap),
        }
    }

    fn sample_to_bitmap(
        &self,
        sample: &SampleBuffer,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let format = sample.format;
        if format == pixel_format::BGRA32
            || format == pixel_format::RGBA32
            || format == pixel_format::ARGB32
            || format == pixel_format::RGB24
            || format == pixel_format::BGR24
        {
            self.packed_to_bitmap(sample, bitmap)
        } else if format == pixel_format::NV12_VIDEO
            || format == pixel_format::NV12_FULL
            || format == pixel_format::NV12
            || format == pixel_format::NV21
        {
            self.nv_to_bitmap(sample, bitmap)
        } else if format == pixel_format::I420_VIDEO
            || format == pixel_format::I420_FULL
            || format == pixel_format::I420
        {
            let planes = expect_planes(sample, 3)?;
            let planar_image = YuvPlanarImage {
                y_plane: planes[0].data,
                y_stride: planes[0].stride,
                u_plane: planes[1].data,
                u_stride: planes[1].stride,
                v_plane: planes[2].data,
                v_stride: planes[2].stride,
                width: sample.width,
                height: sample.height,
            };
            self.planar_to_bitmap(&planar_image, tagged_range(format), bitmap)
        } else if format == pixel_format::GRAY8 {
            self.gray_to_bitmap(sample, bitmap)
        } else {
            Err(ConvertError::UnsupportedPixelFormat(format))
        }
    }

    fn packed_to_bitmap(
        &self,
        sample: &SampleBuffer,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let planes = expect_planes(sample, 1)?;
        let plane = &planes[0];
        let width = sample.width;
        let height = sample.height;
        let format = sample.format;
        let dst_stride = bitmap.stride();
        let src = plane.data;
        let src_stride = plane.stride;
        match bitmap.layout() {
            BitmapLayout::Rgb => {
                let dst = bitmap.data_mut();
                if format == pixel_format::BGRA32 {
                    bgra_to_rgb(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::RGBA32 {
                    rgba_to_rgb(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::ARGB32 {
                    argb_to_rgb(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::BGR24 {
                    bgr_to_rgb(src, src_stride, dst, dst_stride, width, height)
                } else {
                    // RGB24 already matches the destination layout.
                    copy_packed_rows(src, src_stride, dst, dst_stride, width, height, 3)
                }
            }
            BitmapLayout::Rgba => {
                let dst = bitmap.data_mut();
                if format == pixel_format::BGRA32 {
                    bgra_to_rgba(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::ARGB32 {
                    argb_to_rgba(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::RGB24 {
                    rgb_to_rgba(src, src_stride, dst, dst_stride, width, height)
                } else if format == pixel_format::BGR24 {
                    bgr_to_rgba(src, src_stride, dst, dst_stride, width, height)
                } else {
                    // RGBA32 already matches the destination layout.
                    copy_packed_rows(src, src_stride, dst, dst_stride, width, height, 4)
                }
            }
        }
    }

    fn nv_to_bitmap(
        &self,
        sample: &SampleBuffer,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let planes = expect_planes(sample, 2)?;
        let bi_planar_image = YuvBiPlanarImage {
            y_plane: planes[0].data,
            y_stride: planes[0].stride,
            uv_plane: planes[1].data,
            uv_stride: planes[1].stride,
            width: sample.width,
            height: sample.height,
        };
        let range = tagged_range(sample.format);
        let order_vu = sample.format == pixel_format::NV21;
        let dst_stride = bitmap.stride();
        let matrix = self.matrix;
        match bitmap.layout() {
            BitmapLayout::Rgb => {
                let dst = bitmap.data_mut();
                if order_vu {
                    yuv_nv21_to_rgb(&bi_planar_image, dst, dst_stride, range, matrix)
                } else {
                    yuv_nv12_to_rgb(&bi_planar_image, dst, dst_stride, range, matrix)
                }
            }
            BitmapLayout::Rgba => {
                let dst = bitmap.data_mut();
                if order_vu {
                    yuv_nv21_to_rgba(&bi_planar_image, dst, dst_stride, range, matrix)
                } else {
                    yuv_nv12_to_rgba(&bi_planar_image, dst, dst_stride, range, matrix)
                }
            }
        }
    }

    fn planar_to_bitmap(
        &self,
        planar_image: &YuvPlanarImage<u8>,
        range: YuvRange,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let dst_stride = bitmap.stride();
        let matrix = self.matrix;
        match (bitmap.layout(), self.upsampling) {
            (BitmapLayout::Rgb, ChromaUpsampling::Nearest) => {
                yuv420_to_rgb(planar_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
            (BitmapLayout::Rgb, ChromaUpsampling::Bilinear) => {
                yuv420_to_rgb_bilinear(planar_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
            (BitmapLayout::Rgba, ChromaUpsampling::Nearest) => {
                yuv420_to_rgba(planar_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
            (BitmapLayout::Rgba, ChromaUpsampling::Bilinear) => {
                yuv420_to_rgba_bilinear(planar_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
        }
    }

    fn gray_to_bitmap(
        &self,
        sample: &SampleBuffer,
        bitmap: &mut RgbBitmap,
    ) -> Result<(), ConvertError> {
        let planes = expect_planes(sample, 1)?;
        let gray_image = YuvGrayImage {
            y_plane: planes[0].data,
            y_stride: planes[0].stride,
            width: sample.width,
            height: sample.height,
        };
        let dst_stride = bitmap.stride();
        let range = self.range;
        let matrix = self.matrix;
        match bitmap.layout() {
            BitmapLayout::Rgb => {
                yuv400_to_rgb(&gray_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
            BitmapLayout::Rgba => {
                yuv400_to_rgba(&gray_image, bitmap.data_mut(), dst_stride, range, matrix)
            }
        }
    }
}

// 420f and f420 advertise full swing, every other YUV tag is video range.
fn tagged_range(format: FourCC) -> YuvRange {
    if format == pixel_format::NV12_FULL || format == pixel_format::I420_FULL {
        YuvRange::Full
    } else {
        YuvRange::Limited
    }
}

fn expect_planes<'a>(
    sample: &SampleBuffer<'a>,
    expected: usize,
) -> Result<&'a [FramePlane<'a>], ConvertError> {
    if sample.planes.len() != expected {
        return Err(ConvertError::PlaneCountMismatch(MismatchedSize {
            expected,
            received: sample.planes.len(),
        }));
    }
    Ok(sample.planes)
}

fn copy_packed_rows(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), ConvertError> {
    check_rgba_destination(src, src_stride, width, height, channels)?;
    check_rgba_destination(dst, dst_stride, width, height, channels)?;
    let row_size = width as usize * channels;
    for (dst, src) in dst
        .chunks_exact_mut(dst_stride as usize)
        .zip(src.chunks_exact(src_stride as usize))
    {
        dst[..row_size].copy_from_slice(&src[..row_size]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_error::ConvertErrorKind;
    use crate::test_support::{
        encode_flat_nv, encode_flat_yuv420, flat_planar_image, PlanarBuffers,
    };

    fn planar_sample_planes(buffers: &PlanarBuffers, width: u32) -> [FramePlane<'_>; 3] {
        [
            FramePlane {
                data: &buffers.y,
                stride: width,
            },
            FramePlane {
                data: &buffers.u,
                stride: width.div_ceil(2),
            },
            FramePlane {
                data: &buffers.v,
                stride: width.div_ceil(2),
            },
        ]
    }

    #[test]
    fn i420_black_frame_converts_to_black_bitmap() {
        let width = 6;
        let height = 4;
        // Zero luma sits below the limited range floor and clamps to black
        // there as well, both ranges must agree on this frame.
        let buffers = PlanarBuffers::flat(width, height, 0, 128, 128);
        for range in [YuvRange::Limited, YuvRange::Full] {
            let frame = VideoFrame {
                buffer: FrameBuffer::I420(flat_planar_image(&buffers, width, height)),
                rotation: FrameRotation::Rotate0,
            };
            let bitmap = FrameConverter::new()
                .with_range(range)
                .convert(&frame)
                .unwrap();
            assert_eq!(bitmap.width(), width);
            assert_eq!(bitmap.height(), height);
            for px in bitmap.data().chunks_exact(4) {
                assert_eq!(px, [0, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn packed_formats_preserve_dimensions() {
        let width = 5u32;
        let height = 3u32;
        let packed3 = vec![40u8; (width * 3 * height) as usize];
        let packed4 = vec![40u8; (width * 4 * height) as usize];
        for (format, data, stride) in [
            (pixel_format::BGRA32, &packed4, width * 4),
            (pixel_format::RGBA32, &packed4, width * 4),
            (pixel_format::ARGB32, &packed4, width * 4),
            (pixel_format::RGB24, &packed3, width * 3),
            (pixel_format::BGR24, &packed3, width * 3),
        ] {
            let planes = [FramePlane { data, stride }];
            let frame = VideoFrame {
                buffer: FrameBuffer::Sample(SampleBuffer {
                    format,
                    width,
                    height,
                    planes: &planes,
                }),
                rotation: FrameRotation::Rotate0,
            };
            for layout in [BitmapLayout::Rgb, BitmapLayout::Rgba] {
                let bitmap = FrameConverter::new()
                    .with_layout(layout)
                    .convert(&frame)
                    .unwrap();
                assert_eq!((bitmap.width(), bitmap.height()), (width, height));
            }
        }
    }

    #[test]
    fn white_bgra_sample_stays_white() {
        let width = 4u32;
        let height = 2u32;
        // Padded stride, the pad bytes must never leak into the output.
        let stride = width * 4 + 8;
        let mut data = vec![0u8; (stride * height) as usize];
        for row in data.chunks_exact_mut(stride as usize) {
            for px in row[..(width * 4) as usize].iter_mut() {
                *px = 255;
            }
        }
        let planes = [FramePlane {
            data: &data,
            stride,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::BGRA32,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let bitmap = FrameConverter::new().convert(&frame).unwrap();
        assert!(bitmap.data().iter().all(|&px| px == 255));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let data = [0u8; 8];
        let planes = [FramePlane {
            data: &data,
            stride: 4,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: FourCC(*b"L555"),
                width: 2,
                height: 2,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let err = FrameConverter::new().convert(&frame).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedPixelFormat(_)));
        assert_eq!(err.kind(), ConvertErrorKind::UnsupportedFormat);
    }

    #[test]
    fn empty_packed_plane_is_rejected() {
        let planes = [FramePlane {
            data: &[],
            stride: 0,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::BGRA32,
                width: 2,
                height: 2,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let err = FrameConverter::new().convert(&frame).unwrap_err();
        assert_eq!(err.kind(), ConvertErrorKind::InvalidInput);
    }

    #[test]
    fn zero_sized_frame_is_rejected() {
        let buffers = PlanarBuffers::flat(0, 0, 16, 128, 128);
        let frame = VideoFrame {
            buffer: FrameBuffer::I420(flat_planar_image(&buffers, 0, 0)),
            rotation: FrameRotation::Rotate0,
        };
        let err = FrameConverter::new().convert(&frame).unwrap_err();
        assert_eq!(err.kind(), ConvertErrorKind::InvalidInput);
    }

    #[test]
    fn plane_count_mismatch_is_rejected() {
        let y_plane = vec![16u8; 4 * 4];
        let planes = [FramePlane {
            data: &y_plane,
            stride: 4,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::NV12_VIDEO,
                width: 4,
                height: 4,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let err = FrameConverter::new().convert(&frame).unwrap_err();
        assert!(matches!(err, ConvertError::PlaneCountMismatch(_)));
        assert_eq!(err.kind(), ConvertErrorKind::InvalidInput);
    }

    #[test]
    fn rotation_swaps_output_dimensions() {
        let width = 640;
        let height = 480;
        let buffers = PlanarBuffers::flat(width, height, 126, 128, 128);
        let converter = FrameConverter::new();
        for (rotation, expected) in [
            (FrameRotation::Rotate0, (640, 480)),
            (FrameRotation::Rotate90, (480, 640)),
            (FrameRotation::Rotate180, (640, 480)),
            (FrameRotation::Rotate270, (480, 640)),
        ] {
            let frame = VideoFrame {
                buffer: FrameBuffer::I420(flat_planar_image(&buffers, width, height)),
                rotation,
            };
            let bitmap = converter.convert(&frame).unwrap();
            assert_eq!((bitmap.width(), bitmap.height()), expected);
        }
    }

    #[test]
    fn rotated_gray_frame_lands_upright() {
        // 4x2 full range gray, rows top to bottom.
        let y_plane = [10u8, 20, 30, 40, 50, 60, 70, 80];
        let planes = [FramePlane {
            data: &y_plane,
            stride: 4,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::GRAY8,
                width: 4,
                height: 2,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate90,
        };
        let converter = FrameConverter::new()
            .with_range(YuvRange::Full)
            .with_layout(BitmapLayout::Rgb);
        let bitmap = converter.convert(&frame).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (2, 4));
        // Clockwise: the leftmost source column becomes the top output row.
        let luma: Vec<u8> = bitmap.data().chunks_exact(3).map(|px| px[0]).collect();
        assert_eq!(luma, [50, 10, 60, 20, 70, 30, 80, 40]);
    }

    #[test]
    fn nv12_full_range_tag_overrides_configured_range() {
        let rgb = [60u8, 120, 200];
        let width = 6;
        let height = 4;
        let buffers = encode_flat_nv(
            rgb,
            width,
            height,
            YuvRange::Full,
            YuvStandardMatrix::Bt601,
            true,
        );
        let planes = [
            FramePlane {
                data: &buffers.y,
                stride: width,
            },
            FramePlane {
                data: &buffers.uv,
                stride: width.div_ceil(2) * 2,
            },
        ];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::NV12_FULL,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        // The converter is left at its limited range default on purpose.
        let bitmap = FrameConverter::new().convert(&frame).unwrap();
        for px in bitmap.data().chunks_exact(4) {
            for (&value, &reference) in px.iter().zip(rgb.iter()) {
                assert!(
                    (value as i32 - reference as i32).abs() <= 3,
                    "got {px:?}, expected around {rgb:?}"
                );
            }
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn nv21_sample_swaps_chroma_order() {
        let rgb = [200u8, 80, 40];
        let width = 4;
        let height = 4;
        let nv12 = encode_flat_nv(
            rgb,
            width,
            height,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
            true,
        );
        let nv21 = encode_flat_nv(
            rgb,
            width,
            height,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
            false,
        );
        let converter = FrameConverter::new();
        let mut bitmaps = Vec::new();
        for (format, buffers) in [
            (pixel_format::NV12_VIDEO, &nv12),
            (pixel_format::NV21, &nv21),
        ] {
            let planes = [
                FramePlane {
                    data: &buffers.y,
                    stride: width,
                },
                FramePlane {
                    data: &buffers.uv,
                    stride: width.div_ceil(2) * 2,
                },
            ];
            let frame = VideoFrame {
                buffer: FrameBuffer::Sample(SampleBuffer {
                    format,
                    width,
                    height,
                    planes: &planes,
                }),
                rotation: FrameRotation::Rotate0,
            };
            bitmaps.push(converter.convert(&frame).unwrap().into_data());
        }
        assert_eq!(bitmaps[0], bitmaps[1]);
    }

    #[test]
    fn i420_sample_tag_matches_planar_transport() {
        let width = 6;
        let height = 4;
        let buffers = encode_flat_yuv420(
            [90u8, 160, 40],
            width,
            height,
            YuvRange::Limited,
            YuvStandardMatrix::Bt601,
        );
        let converter = FrameConverter::new();
        let planes = planar_sample_planes(&buffers, width);
        let tagged = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::I420_VIDEO,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let transport = VideoFrame {
            buffer: FrameBuffer::I420(flat_planar_image(&buffers, width, height)),
            rotation: FrameRotation::Rotate0,
        };
        let from_tag = converter.convert(&tagged).unwrap().into_data();
        let from_transport = converter.convert(&transport).unwrap().into_data();
        assert_eq!(from_tag, from_transport);
    }

    #[test]
    fn argb_sample_carries_alpha_through() {
        let data = [9u8, 10, 20, 30];
        let planes = [FramePlane {
            data: &data,
            stride: 4,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::ARGB32,
                width: 1,
                height: 1,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let bitmap = FrameConverter::new().convert(&frame).unwrap();
        assert_eq!(bitmap.data(), [10, 20, 30, 9]);
    }

    #[test]
    fn rgb24_sample_copies_rows_with_padding() {
        let width = 2u32;
        let height = 2u32;
        let stride = 8u32;
        let mut data = vec![0xEEu8; (stride * height) as usize];
        data[0..6].copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        data[8..14].copy_from_slice(&[7, 8, 9, 10, 11, 12]);
        let planes = [FramePlane {
            data: &data,
            stride,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::RGB24,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate0,
        };
        let converter = FrameConverter::new().with_layout(BitmapLayout::Rgb);
        let bitmap = converter.convert(&frame).unwrap();
        assert_eq!(bitmap.data(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn convert_into_refits_existing_bitmap() {
        let mut bitmap = RgbBitmap::alloc(2, 2, BitmapLayout::Rgb).unwrap();
        let width = 4;
        let height = 4;
        let buffers = PlanarBuffers::flat(width, height, 126, 128, 128);
        let frame = VideoFrame {
            buffer: FrameBuffer::I420(flat_planar_image(&buffers, width, height)),
            rotation: FrameRotation::Rotate0,
        };
        let converter = FrameConverter::new();
        converter.convert_into(&frame, &mut bitmap).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (width, height));
        assert_eq!(bitmap.layout(), BitmapLayout::Rgba);
        assert_eq!(bitmap.data().len(), (width * height * 4) as usize);
        // Mid gray limited luma expands to mid gray RGB.
        let px = &bitmap.data()[..4];
        assert!(px[0] == px[1] && px[1] == px[2]);
        assert!((px[0] as i32 - 128).abs() <= 2);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn bilinear_converter_matches_nearest_on_flat_input() {
        let width = 8;
        let height = 6;
        let buffers = encode_flat_yuv420(
            [30u8, 190, 90],
            width,
            height,
            YuvRange::Limited,
            YuvStandardMatrix::Bt709,
        );
        let nearest = FrameConverter::new().with_matrix(YuvStandardMatrix::Bt709);
        let bilinear = nearest.with_upsampling(ChromaUpsampling::Bilinear);
        let frame = VideoFrame {
            buffer: FrameBuffer::I420(flat_planar_image(&buffers, width, height)),
            rotation: FrameRotation::Rotate0,
        };
        let a = nearest.convert(&frame).unwrap().into_data();
        let b = bilinear.convert(&frame).unwrap().into_data();
        assert_eq!(a, b);
    }

    #[test]
    fn rotated_rgba_round_trip_preserves_pixels() {
        let width = 3u32;
        let height = 2u32;
        let data: Vec<u8> = (0..width * height * 4).map(|v| v as u8).collect();
        let planes = [FramePlane {
            data: &data,
            stride: width * 4,
        }];
        let frame = VideoFrame {
            buffer: FrameBuffer::Sample(SampleBuffer {
                format: pixel_format::RGBA32,
                width,
                height,
                planes: &planes,
            }),
            rotation: FrameRotation::Rotate180,
        };
        let bitmap = FrameConverter::new().convert(&frame).unwrap();
        let mut pixels: Vec<&[u8]> = bitmap.data().chunks_exact(4).collect();
        pixels.reverse();
        let restored: Vec<u8> = pixels.concat();
        assert_eq!(restored, data);
    }
}
