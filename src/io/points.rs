// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::str::FromStr;

use crate::error::InputError;
use crate::geometry::Point2;
use crate::numeric::Scalar;

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']')
}

/// Parses `x0 y0, x1 y1, ...` into points.
///
/// Commas, whitespace and brackets all separate coordinates, so
/// `"[(0,0),(1,0),(0,1)]"` and `"0 0 1 0 0 1"` are equivalent.
pub fn parse_point_list<T>(input: &str) -> Result<Vec<Point2<T>>, InputError>
where
    T: Scalar + FromStr,
{
    let coords = input
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<T>().map_err(|_| InputError::InvalidNumber {
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    if coords.len() % 2 != 0 {
        return Err(InputError::OddCoordinateCount {
            count: coords.len(),
        });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0], xy[1]))
        .collect())
}
