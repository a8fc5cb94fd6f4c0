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
    argb_to_rgb, argb_to_rgba, bgr_to_rgb, bgr_to_rgba, bgra_to_rgb, bgra_to_rgba, rgb_to_rgba,
    rgba_to_bgra, rgba_to_rgb,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_shuffler(data.0, data.1, data.2, data.3);
});

type Shuffler = fn(&[u8], u32, &mut [u8], u32, u32, u32) -> Result<(), frameconv::ConvertError>;

fn fuzz_shuffler(i_width: u8, i_height: u8, pixel: u8, selector: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let variants: [(usize, usize, Shuffler); 9] = [
        (4, 4, bgra_to_rgba),
        (4, 3, bgra_to_rgb),
        (4, 4, argb_to_rgba),
        (4, 3, argb_to_rgb),
        (4, 3, rgba_to_rgb),
        (4, 4, rgba_to_bgra),
        (3, 4, rgb_to_rgba),
        (3, 4, bgr_to_rgba),
        (3, 3, bgr_to_rgb),
    ];
    let (src_chans, dst_chans, shuffler) = variants[selector as usize % variants.len()];

    let src_data = vec![pixel; src_chans * i_width as usize * i_height as usize];
    let mut dst_data = vec![0u8; dst_chans * i_width as usize * i_height as usize];

    shuffler(
        &src_data,
        src_chans as u32 * i_width as u32,
        &mut dst_data,
        dst_chans as u32 * i_width as u32,
        i_width as u32,
        i_height as u32,
    )
    .unwrap();
}
