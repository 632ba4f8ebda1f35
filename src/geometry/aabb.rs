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

use crate::{geometry::Point3, numeric::Scalar};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Build the box spanned by two opposite corners, given in any order.
    pub fn from_corners(a: Point3<T>, b: Point3<T>) -> Self {
        Aabb {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Inclusive membership test on all three axes.
    pub fn contains(&self, p: &Point3<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Inclusive membership test in the xy plane only, for domains where z
    /// is carried as payload rather than geometry.
    pub fn contains_xy(&self, p: &Point3<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True when the box encloses no area in the xy plane.
    pub fn is_degenerate_xy(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let b = Aabb::from_corners(Point3::new(1.0, -1.0, 0.0), Point3::new(-1.0, 1.0, 0.0));
        assert_eq!(b.min, Point3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Aabb::from_corners(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(b.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(b.contains(&Point3::new(1.0, -1.0, 0.0)));
        assert!(!b.contains(&Point3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn xy_membership_ignores_z() {
        let b = Aabb::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 0.0));
        assert!(b.contains_xy(&Point3::new(1.0, 1.0, 7.0)));
        assert!(!b.contains_xy(&Point3::new(3.0, 1.0, 0.0)));
        assert!(!b.contains(&Point3::new(1.0, 1.0, 7.0)));
    }

    #[test]
    fn flat_box_is_degenerate() {
        let b = Aabb::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0));
        assert!(b.is_degenerate_xy());
    }
}
