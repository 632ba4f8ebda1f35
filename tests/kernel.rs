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

use tricell::geometry::Point3;
use tricell::kernel::{barycentric_weights, in_circle, orient2d, point_in_triangle};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn orientation_matches_turn_direction() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(4.0, 0.0, 0.0);
    assert!(orient2d(&a, &b, &Point3::new(2.0, 3.0, 0.0)) > 0.0);
    assert!(orient2d(&a, &b, &Point3::new(2.0, -3.0, 0.0)) < 0.0);
    assert_eq!(orient2d(&a, &b, &Point3::new(9.0, 0.0, 0.0)), 0.0);
}

#[test]
fn in_circle_is_strict_at_cocircularity() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(2.0, 0.0, 0.0);
    let c = Point3::new(2.0, 2.0, 0.0);
    // fourth corner of the square is exactly on the circumcircle
    assert_eq!(in_circle(&a, &b, &c, &Point3::new(0.0, 2.0, 0.0)), 0.0);
    assert!(in_circle(&a, &b, &c, &Point3::new(1.0, 1.0, 0.0)) > 0.0);
    assert!(in_circle(&a, &b, &c, &Point3::new(3.0, 3.0, 0.0)) < 0.0);
}

#[test]
fn triangle_membership_includes_boundary() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(4.0, 0.0, 0.0);
    let c = Point3::new(0.0, 4.0, 0.0);
    assert!(point_in_triangle(&a, &b, &c, &Point3::new(1.0, 1.0, 0.0)));
    assert!(point_in_triangle(&a, &b, &c, &Point3::new(2.0, 0.0, 0.0)));
    assert!(point_in_triangle(&a, &b, &c, &b));
    assert!(!point_in_triangle(&a, &b, &c, &Point3::new(3.0, 3.0, 0.0)));
}

#[test]
fn weights_reconstruct_the_point() {
    let v0 = Point3::new(1.0, 2.0, 0.0);
    let v1 = Point3::new(6.0, 1.0, 0.0);
    let v2 = Point3::new(3.0, 7.0, 0.0);
    let p = Point3::new(3.5, 3.0, 0.0);

    let w = barycentric_weights(&v0, &v1, &v2, &p);
    assert!(close(w[0] + w[1] + w[2], 1.0));
    let x = w[0] * v0.x + w[1] * v1.x + w[2] * v2.x;
    let y = w[0] * v0.y + w[1] * v1.y + w[2] * v2.y;
    assert!(close(x, p.x) && close(y, p.y));
}

#[test]
fn weights_work_on_tilted_triangles() {
    let v0 = Point3::new(0.0, 0.0, 1.0);
    let v1 = Point3::new(2.0, 0.0, 3.0);
    let v2 = Point3::new(0.0, 2.0, 5.0);
    // midpoint of the v1-v2 edge, in the triangle's own plane
    let p = Point3::new(1.0, 1.0, 4.0);

    let w = barycentric_weights(&v0, &v1, &v2, &p);
    assert!(close(w[0], 0.0) && close(w[1], 0.5) && close(w[2], 0.5));
}

#[test]
fn weights_go_negative_outside() {
    let v0 = Point3::new(0.0, 0.0, 0.0);
    let v1 = Point3::new(2.0, 0.0, 0.0);
    let v2 = Point3::new(0.0, 2.0, 0.0);
    let w = barycentric_weights(&v0, &v1, &v2, &Point3::new(-1.0, -1.0, 0.0));
    assert!(close(w[0] + w[1] + w[2], 1.0));
    assert!(w.iter().any(|&x| x < 0.0));
}
