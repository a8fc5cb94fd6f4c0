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
use crate::frame_error::check_overflow_v3;
use crate::ConvertError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Interleaved channel layout of an output bitmap.
pub enum BitmapLayout {
    Rgb,
    Rgba,
}

impl BitmapLayout {
    #[inline(always)]
    pub const fn get_channels_count(self) -> usize {
        match self {
            BitmapLayout::Rgb => 3,
            BitmapLayout::Rgba => 4,
        }
    }
}

#[derive(Debug, Clone)]
/// Owned interleaved 8-bit bitmap, top-left origin, tightly packed rows.
///
/// `stride` is always `width * channels` bytes; it is carried explicitly so
/// consumers that expect a stride do not have to recompute it.
pub struct RgbBitmap {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: u32,
    layout: BitmapLayout,
}

impl RgbBitmap {
    /// Allocates a zero-filled bitmap.
    ///
    /// Allocation failure surfaces as [ConvertError::OutOfMemory] rather
    /// than aborting the process.
    pub fn alloc(width: u32, height: u32, layout: BitmapLayout) -> Result<Self, ConvertError> {
        let mut bitmap = RgbBitmap {
            data: Vec::new(),
            width: 0,
            height: 0,
            stride: 0,
            layout,
        };
        bitmap.refit(width, height, layout)?;
        Ok(bitmap)
    }

    /// Reshapes the bitmap for new dimensions, reusing the existing
    /// allocation when it is large enough.
    pub(crate) fn refit(
        &mut self,
        width: u32,
        height: u32,
        layout: BitmapLayout,
    ) -> Result<(), ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::ZeroBaseSize);
        }
        check_overflow_v3(width as usize, height as usize, layout.get_channels_count())?;
        let stride = width as usize * layout.get_channels_count();
        if stride > u32::MAX as usize {
            return Err(ConvertError::PointerOverflow);
        }
        let total = stride * height as usize;
        if total > self.data.len() {
            self.data
                .try_reserve_exact(total - self.data.len())
                .map_err(|_| ConvertError::OutOfMemory(total))?;
        }
        self.data.resize(total, 0);
        self.width = width;
        self.height = height;
        self.stride = stride as u32;
        self.layout = layout;
        Ok(())
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub const fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub const fn layout(&self) -> BitmapLayout {
        self.layout
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the bitmap, handing the interleaved bytes to the caller.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
