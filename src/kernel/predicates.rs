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

use crate::{geometry::Point3, kernel::orient2d, numeric::Scalar};

/// In-circle predicate in the xy plane.
///
/// For a counter-clockwise triangle (a, b, c), the result is:
/// - >0 if d lies strictly inside the circumcircle
/// - <0 if d lies strictly outside
/// - =0 if the four points are cocircular
pub fn in_circle<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let ad2 = adx * adx + ady * ady;
    let bd2 = bdx * bdx + bdy * bdy;
    let cd2 = cdx * cdx + cdy * cdy;

    adx * (bdy * cd2 - cdy * bd2) - ady * (bdx * cd2 - cdx * bd2)
        + ad2 * (bdx * cdy - cdx * bdy)
}

/// Boundary-inclusive point-in-triangle test for a counter-clockwise
/// triangle, in the xy plane.
pub fn point_in_triangle<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    p: &Point3<T>,
) -> bool {
    orient2d(a, b, p) >= T::zero()
        && orient2d(b, c, p) >= T::zero()
        && orient2d(c, a, p) >= T::zero()
}

/// Barycentric weights of `p` with respect to triangle (v0, v1, v2).
///
/// Signed sub-triangle areas are taken as cross products projected onto the
/// triangle normal, so the result is robust under arbitrary orientation in
/// 3D. The weights always sum to 1; they go negative when `p` lies outside
/// the triangle. The triangle must not be degenerate.
pub fn barycentric_weights<T: Scalar>(
    v0: &Point3<T>,
    v1: &Point3<T>,
    v2: &Point3<T>,
    p: &Point3<T>,
) -> [T; 3] {
    let area_0 = (*v1 - *p).cross(&(*v2 - *p));
    let area_1 = (*v2 - *p).cross(&(*v0 - *p));
    let area_2 = (*v0 - *p).cross(&(*v1 - *p));

    let area_t = (*v1 - *v0).cross(&(*v2 - *v0));
    let denom = area_t.dot(&area_t);

    [
        area_0.dot(&area_t) / denom,
        area_1.dot(&area_t) / denom,
        area_2.dot(&area_t) / denom,
    ]
}
