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
use crate::frame_error::{
    check_chroma_channel, check_interleaved_chroma_channel, check_y8_channel,
};
use crate::ConvertError;
use std::fmt::Debug;

#[derive(Debug, Clone)]
/// Non-mutable representation of a tri-planar YUV 4:2:0 image.
///
/// Luma plane is `width` x `height`, both chroma planes are
/// `(width + 1) / 2` x `(height + 1) / 2`.
pub struct YuvPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::ZeroBaseSize);
        }
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_channel(self.u_plane, self.u_stride, self.width, self.height)?;
        check_chroma_channel(self.v_plane, self.v_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of a bi-planar YUV 4:2:0 image (NV12/NV21).
///
/// The second plane interleaves both chroma components, so its row
/// payload is `2 * ((width + 1) / 2)` elements.
pub struct YuvBiPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub uv_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvBiPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::ZeroBaseSize);
        }
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_interleaved_chroma_channel(self.uv_plane, self.uv_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of a single-channel gray image.
pub struct YuvGrayImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvGrayImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::ZeroBaseSize);
        }
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertErrorKind;

    #[test]
    fn planar_constraints_accept_tight_and_padded_planes() {
        let y = vec![0u8; 7 * 5];
        let chroma = vec![0u8; 4 * 3];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 7,
            u_plane: &chroma,
            u_stride: 4,
            v_plane: &chroma,
            v_stride: 4,
            width: 7,
            height: 5,
        };
        image.check_constraints().unwrap();

        let y_padded = vec![0u8; 16 * 5];
        let chroma_padded = vec![0u8; 8 * 3];
        let padded = YuvPlanarImage {
            y_plane: &y_padded,
            y_stride: 16,
            u_plane: &chroma_padded,
            u_stride: 8,
            v_plane: &chroma_padded,
            v_stride: 8,
            width: 7,
            height: 5,
        };
        padded.check_constraints().unwrap();
    }

    #[test]
    fn planar_constraints_reject_short_chroma() {
        let y = vec![0u8; 8 * 6];
        let u = vec![0u8; 4 * 3];
        let v_short = vec![0u8; 4 * 3 - 1];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 8,
            u_plane: &u,
            u_stride: 4,
            v_plane: &v_short,
            v_stride: 4,
            width: 8,
            height: 6,
        };
        let err = image.check_constraints().unwrap_err();
        assert_eq!(err.kind(), ConvertErrorKind::InvalidInput);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let image = YuvGrayImage::<u8> {
            y_plane: &[],
            y_stride: 0,
            width: 0,
            height: 0,
        };
        assert!(matches!(
            image.check_constraints(),
            Err(ConvertError::ZeroBaseSize)
        ));
    }

    #[test]
    fn biplanar_constraints_validate_interleaved_chroma() {
        let y = vec![0u8; 6 * 4];
        let uv = vec![0u8; 6 * 2];
        let image = YuvBiPlanarImage {
            y_plane: &y,
            y_stride: 6,
            uv_plane: &uv,
            uv_stride: 6,
            width: 6,
            height: 4,
        };
        image.check_constraints().unwrap();

        let uv_short = vec![0u8; 6 * 2 - 2];
        let bad = YuvBiPlanarImage {
            y_plane: &y,
            y_stride: 6,
            uv_plane: &uv_short,
            uv_stride: 6,
            width: 6,
            height: 4,
        };
        assert!(bad.check_constraints().is_err());
    }
}
