/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
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
use four_cc::FourCC;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Failure of a single frame conversion.
///
/// [ConvertError::kind] folds the precise variants into the coarse
/// taxonomy callers usually branch on.
#[derive(Debug)]
pub enum ConvertError {
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    LumaPlaneSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    /// Pixel buffer carries a different plane count than its format defines.
    PlaneCountMismatch(MismatchedSize),
    ImageDimensionsNotMatch,
    ImagesSizesNotMatch,
    /// Format tag is not in the supported enumeration.
    UnsupportedPixelFormat(FourCC),
    /// Output plane allocation failed, payload is the requested size in bytes.
    OutOfMemory(usize),
}

/// Coarse failure classes of [ConvertError].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConvertErrorKind {
    /// Empty, undersized or zero-dimensioned input.
    InvalidInput,
    /// Pixel format tag outside the supported enumeration.
    UnsupportedFormat,
    /// Output allocation failed or sizes overflow the address space.
    OutOfMemory,
}

impl ConvertError {
    pub const fn kind(&self) -> ConvertErrorKind {
        match self {
            ConvertError::UnsupportedPixelFormat(_) => ConvertErrorKind::UnsupportedFormat,
            ConvertError::PointerOverflow | ConvertError::OutOfMemory(_) => {
                ConvertErrorKind::OutOfMemory
            }
            _ => ConvertErrorKind::InvalidInput,
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            ConvertError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            ConvertError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ConvertError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            ConvertError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ConvertError::PlaneCountMismatch(size) => f.write_fmt(format_args!(
                "Pixel buffer must carry {} planes, but it carries {}",
                size.expected, size.received
            )),
            ConvertError::ImageDimensionsNotMatch => {
                f.write_str("Images dimensions must match to each other")
            }
            ConvertError::ImagesSizesNotMatch => f.write_str("Images sizes must match to each other"),
            ConvertError::UnsupportedPixelFormat(fourcc) => f.write_fmt(format_args!(
                "Pixel format {} is not in the supported enumeration",
                fourcc
            )),
            ConvertError::OutOfMemory(size) => f.write_fmt(format_args!(
                "Cannot allocate {} bytes for the output plane",
                size
            )),
        }
    }
}

impl Error for ConvertError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), ConvertError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), ConvertError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_rgba_destination<V>(
    arr: &[V],
    rgba_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), ConvertError> {
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(rgba_stride as usize, height as usize)?;
    if arr.len() != rgba_stride as usize * height as usize {
        return Err(ConvertError::DestinationSizeMismatch(MismatchedSize {
            expected: rgba_stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    if (rgba_stride as usize * height as usize) < (width as usize * height as usize * channels) {
        return Err(ConvertError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize * channels,
            received: rgba_stride as usize * height as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if (stride as usize * height as usize) < (width as usize * height as usize) {
        return Err(ConvertError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(ConvertError::LumaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Validates a 4:2:0 subsampled chroma plane against the full image bounds.
#[inline]
pub(crate) fn check_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), ConvertError> {
    check_chroma_channel_impl(data, stride, image_width.div_ceil(2), image_height)
}

/// Validates a 4:2:0 interleaved UV plane, rows carry both chroma components.
#[inline]
pub(crate) fn check_interleaved_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), ConvertError> {
    check_chroma_channel_impl(data, stride, image_width.div_ceil(2) * 2, image_height)
}

#[inline]
fn check_chroma_channel_impl<V>(
    data: &[V],
    stride: u32,
    chroma_min_width: u32,
    image_height: u32,
) -> Result<(), ConvertError> {
    let chroma_height = image_height.div_ceil(2);
    check_overflow_v2(stride as usize, chroma_height as usize)?;
    check_overflow_v2(chroma_min_width as usize, chroma_height as usize)?;
    if (stride as usize * chroma_height as usize)
        < (chroma_min_width as usize * chroma_height as usize)
    {
        return Err(ConvertError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_min_width as usize * chroma_height as usize,
            received: stride as usize * chroma_height as usize,
        }));
    }
    if stride as usize * chroma_height as usize != data.len() {
        return Err(ConvertError::ChromaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_partition_the_variants() {
        assert_eq!(
            ConvertError::ZeroBaseSize.kind(),
            ConvertErrorKind::InvalidInput
        );
        assert_eq!(
            ConvertError::LumaPlaneSizeMismatch(MismatchedSize {
                expected: 10,
                received: 0,
            })
            .kind(),
            ConvertErrorKind::InvalidInput
        );
        assert_eq!(
            ConvertError::UnsupportedPixelFormat(FourCC(*b"L555")).kind(),
            ConvertErrorKind::UnsupportedFormat
        );
        assert_eq!(
            ConvertError::PointerOverflow.kind(),
            ConvertErrorKind::OutOfMemory
        );
        assert_eq!(
            ConvertError::OutOfMemory(usize::MAX).kind(),
            ConvertErrorKind::OutOfMemory
        );
    }

    #[test]
    fn zero_sized_planes_are_rejected() {
        assert!(check_y8_channel::<u8>(&[], 640, 640, 480).is_err());
        assert!(check_chroma_channel::<u8>(&[], 320, 640, 480).is_err());
        assert!(check_rgba_destination::<u8>(&[], 640 * 4, 640, 480, 4).is_err());
    }

    #[test]
    fn stride_padding_is_accepted() {
        let y = vec![0u8; 128 * 100];
        assert!(check_y8_channel(&y, 128, 100, 100).is_ok());
        let chroma = vec![0u8; 64 * 50];
        assert!(check_chroma_channel(&chroma, 64, 100, 100).is_ok());
    }

    #[test]
    fn overflowing_dimensions_map_to_out_of_memory() {
        let err = check_overflow_v3(usize::MAX, 2, 4).unwrap_err();
        assert_eq!(err.kind(), ConvertErrorKind::OutOfMemory);
    }
}
