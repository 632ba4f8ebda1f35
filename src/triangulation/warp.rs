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

use crate::{
    error::TriangulationError,
    geometry::Point3,
    kernel::barycentric_weights,
    numeric::Scalar,
    triangulation::Delaunay,
};

/// Resample `p` from `source` into `target`.
///
/// Locates `p` in `source`, computes its barycentric weights there, and
/// combines the same-indexed vertices of `target`. The z coordinate of `p`
/// is carried through unchanged (the warp is planar).
///
/// The two triangulations must be in strict index correspondence: same point
/// count, every structural edit mirrored in the same order. Maintaining that
/// correspondence is the caller's job; only the point counts are checked
/// here.
pub fn warp_point<T: Scalar>(
    source: &Delaunay<T>,
    target: &Delaunay<T>,
    p: &Point3<T>,
) -> Result<Point3<T>, TriangulationError> {
    if source.points().len() != target.points().len() {
        return Err(TriangulationError::InvalidIndex(target.points().len()));
    }

    let ti = source.locate(p)?;
    let [i0, i1, i2] = source.triangles()[ti].vertices;

    // weights are taken in the xy plane; z is payload, not geometry
    let sp = source.points();
    let flat = |q: &Point3<T>| Point3::new(q.x, q.y, T::zero());
    let w = barycentric_weights(&flat(&sp[i0]), &flat(&sp[i1]), &flat(&sp[i2]), &flat(p));

    let tp = target.points();
    let q = (tp[i0].to_vector() * w[0] + tp[i1].to_vector() * w[1] + tp[i2].to_vector() * w[2])
        .to_point();
    Ok(Point3::new(q.x, q.y, p.z))
}
