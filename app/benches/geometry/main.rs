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
use frameconv::{rotate_rgb, rotate_rgba, RotationMode};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let mut rng = rand::rng();

    let rgba_src: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
    let rgb_src: Vec<u8> = (0..width * height * 3).map(|_| rng.random()).collect();

    c.bench_function("frameconv: Rotate 90 RGBA8", |b| {
        let mut dst = vec![0u8; width * height * 4];
        b.iter(|| {
            rotate_rgba(
                &rgba_src,
                width * 4,
                &mut dst,
                height * 4,
                width,
                height,
                RotationMode::Rotate90,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: Rotate 180 RGBA8", |b| {
        let mut dst = vec![0u8; width * height * 4];
        b.iter(|| {
            rotate_rgba(
                &rgba_src,
                width * 4,
                &mut dst,
                width * 4,
                width,
                height,
                RotationMode::Rotate180,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: Rotate 270 RGBA8", |b| {
        let mut dst = vec![0u8; width * height * 4];
        b.iter(|| {
            rotate_rgba(
                &rgba_src,
                width * 4,
                &mut dst,
                height * 4,
                width,
                height,
                RotationMode::Rotate270,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: Rotate 90 RGB8", |b| {
        let mut dst = vec![0u8; width * height * 3];
        b.iter(|| {
            rotate_rgb(
                &rgb_src,
                width * 3,
                &mut dst,
                height * 3,
                width,
                height,
                RotationMode::Rotate90,
            )
            .unwrap();
        })
    });

    c.bench_function("frameconv: Rotate 180 RGB8", |b| {
        let mut dst = vec![0u8; width * height * 3];
        b.iter(|| {
            rotate_rgb(
                &rgb_src,
                width * 3,
                &mut dst,
                width * 3,
                width,
                height,
                RotationMode::Rotate180,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
