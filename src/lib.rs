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

//! Incremental planar Delaunay triangulation and Catmull-Clark style polygon
//! subdivision.
//!
//! The triangulation engine maintains a Delaunay triangulation over a dynamic
//! point set inside a fixed bounding box and supports point insertion,
//! removal, relocation and point-location queries. The subdivision engine
//! refines arbitrary polygonal meshes (triangles, quads, n-gons) one level at
//! a time using centroid and edge-node insertion rules with distinct
//! boundary/interior formulas.
//!
//! Both engines sit on a small shared layer of geometry primitives and
//! predicate functions (`geometry`, `kernel`) and are generic over the
//! [`numeric::scalar::Scalar`] coordinate type.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod subdivision;
pub mod triangulation;
