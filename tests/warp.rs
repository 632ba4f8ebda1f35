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

use tricell::error::TriangulationError;
use tricell::geometry::Point3;
use tricell::triangulation::{warp_point, Delaunay};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn boxed() -> Delaunay<f64> {
    Delaunay::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 0.0)).unwrap()
}

#[test]
fn identity_warp() {
    let mut source = boxed();
    let mut target = boxed();
    for &(x, y) in &[(3.0, 2.0), (7.0, 6.0), (2.0, 8.0)] {
        source.insert(Point3::new(x, y, 0.0)).unwrap();
        target.insert(Point3::new(x, y, 0.0)).unwrap();
    }
    let p = Point3::new(4.1, 5.3, 2.5);
    let q = warp_point(&source, &target, &p).unwrap();
    assert!(close(q.x, p.x) && close(q.y, p.y));
    assert_eq!(q.z, p.z);
}

#[test]
fn scaling_warp() {
    let source = boxed();
    let target =
        Delaunay::new(Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 20.0, 0.0)).unwrap();
    let q = warp_point(&source, &target, &Point3::new(5.0, 5.0, 3.0)).unwrap();
    assert!(close(q.x, 10.0) && close(q.y, 10.0));
    assert_eq!(q.z, 3.0);
}

#[test]
fn warp_follows_moved_vertex() {
    let mut source = boxed();
    let mut target = boxed();
    source.insert(Point3::new(3.0, 3.0, 1.0)).unwrap();
    target.insert(Point3::new(3.0, 3.0, 1.0)).unwrap();
    target.move_point(4, Point3::new(6.0, 2.0, 0.0)).unwrap();

    // a query sitting on source vertex 4 lands on target vertex 4
    let q = warp_point(&source, &target, &Point3::new(3.0, 3.0, 7.0)).unwrap();
    assert!(close(q.x, 6.0) && close(q.y, 2.0));
    assert_eq!(q.z, 7.0);
}

#[test]
fn mismatched_point_counts_rejected() {
    let mut source = boxed();
    let target = boxed();
    source.insert(Point3::new(5.0, 5.0, 0.0)).unwrap();
    let r = warp_point(&source, &target, &Point3::new(1.0, 1.0, 0.0));
    assert_eq!(r, Err(TriangulationError::InvalidIndex(4)));
}
