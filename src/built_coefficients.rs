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
use crate::yuv_support::{CbCrInverseTransform, YuvRange, YuvStandardMatrix};

static INVERSE_BT601_LIMITED_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 9538,
    cr_coef: 13074,
    cb_coef: 16525,
    g_coeff_1: 6659,
    g_coeff_2: 3209,
};

static INVERSE_BT601_FULL_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 8192,
    cr_coef: 11485,
    cb_coef: 14516,
    g_coeff_1: 5850,
    g_coeff_2: 2819,
};

static INVERSE_BT709_LIMITED_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 9538,
    cr_coef: 14686,
    cb_coef: 17304,
    g_coeff_1: 4365,
    g_coeff_2: 1746,
};

static INVERSE_BT709_FULL_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 8192,
    cr_coef: 12900,
    cb_coef: 15201,
    g_coeff_1: 3834,
    g_coeff_2: 1534,
};

static INVERSE_BT2020_LIMITED_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 9538,
    cr_coef: 13751,
    cb_coef: 17545,
    g_coeff_1: 5328,
    g_coeff_2: 1534,
};

static INVERSE_BT2020_FULL_8_PREC13: CbCrInverseTransform<i32> = CbCrInverseTransform {
    y_coef: 8192,
    cr_coef: 12079,
    cb_coef: 15412,
    g_coeff_1: 4680,
    g_coeff_2: 1348,
};

pub(crate) fn get_built_inverse_transform(
    prec: u32,
    bit_depth: u32,
    range: YuvRange,
    matrix: YuvStandardMatrix,
) -> Option<CbCrInverseTransform<i32>> {
    if prec != 13 {
        return None;
    }
    if bit_depth == 8 {
        if matrix == YuvStandardMatrix::Bt601 {
            return match range {
                YuvRange::Limited => Some(INVERSE_BT601_LIMITED_8_PREC13),
                YuvRange::Full => Some(INVERSE_BT601_FULL_8_PREC13),
            };
        } else if matrix == YuvStandardMatrix::Bt709 {
            return match range {
                YuvRange::Limited => Some(INVERSE_BT709_LIMITED_8_PREC13),
                YuvRange::Full => Some(INVERSE_BT709_FULL_8_PREC13),
            };
        } else if matrix == YuvStandardMatrix::Bt2020 {
            return match range {
                YuvRange::Limited => Some(INVERSE_BT2020_LIMITED_8_PREC13),
                YuvRange::Full => Some(INVERSE_BT2020_FULL_8_PREC13),
            };
        }
    }
    None
}
