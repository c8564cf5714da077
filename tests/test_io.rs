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

use std::sync::Arc;

use flipgraph::io::{parse_point_list, to_wkt};
use flipgraph::{InputError, PointSet, Triangulation};

#[test]
fn parsed_points_triangulate() {
    let pts = parse_point_list::<f64>("0 0, 1 0, 0 1, 1 1").unwrap();
    let t = Triangulation::build(Arc::new(PointSet::new(pts).unwrap())).unwrap();
    assert_eq!(
        to_wkt(&t),
        "MULTIPOLYGON(((0 0, 0 1, 1 0, 0 0)), ((0 1, 1 0, 1 1, 0 1)))"
    );
}

#[test]
fn wkt_rings_are_closed() {
    let pts = parse_point_list::<f64>("[(0,0),(2,0.5),(1,3),(-1,2),(0.5,1)]").unwrap();
    let t = Triangulation::build(Arc::new(PointSet::new(pts).unwrap())).unwrap();
    let wkt = to_wkt(&t);
    let body = wkt
        .strip_prefix("MULTIPOLYGON(((")
        .and_then(|s| s.strip_suffix(")))"))
        .unwrap();
    let rings: Vec<&str> = body.split(")), ((").collect();
    assert_eq!(rings.len(), t.triangle_count());
    for ring in rings {
        let vertices: Vec<&str> = ring.split(", ").collect();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0], vertices[3]);
    }
}

#[test]
fn non_finite_input_is_rejected() {
    let pts = parse_point_list::<f64>("0 0, inf 1").unwrap();
    assert_eq!(
        PointSet::new(pts).unwrap_err(),
        InputError::NonFiniteCoordinate { index: 1 }
    );
}

#[test]
fn errors_render_readably() {
    let err = parse_point_list::<f64>("1 2 3").unwrap_err();
    assert_eq!(err.to_string(), "expected an even number of coordinates, got 3");
}
