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
//! Conversion of captured video frames into displayable RGB bitmaps.
//!
//! The crate takes borrowed frame data, packed BGRA/RGBA/ARGB/RGB samples,
//! bi-planar NV12/NV21, tri-planar I420 or 8-bit gray, and produces an owned,
//! upright, interleaved bitmap with the frame rotation already applied.
//! [FrameConverter] is the single entry point; the per-format kernels it
//! dispatches to are exported as well for callers that manage their own
//! buffers.
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_clamp)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod bitmap;
mod built_coefficients;
mod convert;
mod frame;
mod frame_error;
mod geometry;
mod gray_to_rgb;
mod images;
mod numerics;
mod shuffle;
#[cfg(test)]
mod test_support;
mod yuv_nv_to_rgba;
mod yuv_support;
mod yuv_to_rgba;
mod yuv_to_rgba_bilinear;

pub use four_cc::FourCC;

pub use frame::pixel_format;
pub use frame::FrameBuffer;
pub use frame::FramePlane;
pub use frame::FrameRotation;
pub use frame::SampleBuffer;
pub use frame::VideoFrame;

pub use bitmap::BitmapLayout;
pub use bitmap::RgbBitmap;

pub use convert::ChromaUpsampling;
pub use convert::FrameConverter;

pub use frame_error::ConvertError;
pub use frame_error::ConvertErrorKind;
pub use frame_error::MismatchedSize;

pub use images::YuvBiPlanarImage;
pub use images::YuvGrayImage;
pub use images::YuvPlanarImage;

pub use yuv_support::YuvRange;
pub use yuv_support::YuvStandardMatrix;

pub use yuv_to_rgba::yuv420_to_bgra;
pub use yuv_to_rgba::yuv420_to_rgb;
pub use yuv_to_rgba::yuv420_to_rgba;

pub use yuv_to_rgba_bilinear::yuv420_to_bgra_bilinear;
pub use yuv_to_rgba_bilinear::yuv420_to_rgb_bilinear;
pub use yuv_to_rgba_bilinear::yuv420_to_rgba_bilinear;

pub use yuv_nv_to_rgba::yuv_nv12_to_bgra;
pub use yuv_nv_to_rgba::yuv_nv12_to_rgb;
pub use yuv_nv_to_rgba::yuv_nv12_to_rgba;
pub use yuv_nv_to_rgba::yuv_nv21_to_bgra;
pub use yuv_nv_to_rgba::yuv_nv21_to_rgb;
pub use yuv_nv_to_rgba::yuv_nv21_to_rgba;

pub use gray_to_rgb::yuv400_to_bgra;
pub use gray_to_rgb::yuv400_to_rgb;
pub use gray_to_rgb::yuv400_to_rgba;

pub use shuffle::argb_to_rgb;
pub use shuffle::argb_to_rgba;
pub use shuffle::bgr_to_rgb;
pub use shuffle::bgr_to_rgba;
pub use shuffle::bgra_to_rgb;
pub use shuffle::bgra_to_rgba;
pub use shuffle::rgb_to_rgba;
pub use shuffle::rgba_to_bgra;
pub use shuffle::rgba_to_rgb;

pub use geometry::rotate_rgb;
pub use geometry::rotate_rgba;
pub use geometry::RotationMode;
