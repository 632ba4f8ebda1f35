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

use thiserror::Error;

/// Errors reported by the Delaunay triangulation engine.
///
/// Every failing operation leaves the triangulation unchanged, except for
/// [`TriangulationError::BrokenTopology`], which signals that an invariant no
/// longer holds and the structure should be considered corrupted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TriangulationError {
    /// The bounding box has zero extent along x or y.
    #[error("bounding box is degenerate in the xy plane")]
    DegenerateBox,

    /// The point lies outside the triangulated domain.
    #[error("point lies outside the bounding box")]
    OutOfBounds,

    /// Indices 0..4 are the bounding-box corners and can be neither removed
    /// nor relocated.
    #[error("vertex {0} is a protected bounding-box corner")]
    ProtectedVertex(usize),

    /// The vertex index is past the end of the point list.
    #[error("vertex index {0} is out of range")]
    InvalidIndex(usize),

    /// A vertex with the same xy coordinates already exists.
    #[error("point coincides with an existing vertex")]
    DuplicatePoint,

    /// Point location failed for an in-box query. This indicates a corrupted
    /// walk structure, not a normal runtime condition.
    #[error("no triangle contains the query point")]
    PointNotFound,

    /// Adjacency, winding or empty-circumcircle invariants do not hold.
    #[error("triangulation topology is inconsistent: {0}")]
    BrokenTopology(&'static str),
}

/// Errors reported by the polygon subdivision engine.
///
/// All of these are precondition violations of the input mesh; subdivision
/// refuses to run rather than corrupt the fixed-offset node indexing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubdivisionError {
    /// The mesh has no elements.
    #[error("mesh has no elements")]
    EmptyMesh,

    /// An edge is shared by more than two elements.
    #[error("edge {a}-{b} is shared by more than two elements")]
    NonManifoldEdge {
        /// Lower node index of the edge.
        a: usize,
        /// Higher node index of the edge.
        b: usize,
    },

    /// A node is referenced by no element.
    #[error("node {0} is not referenced by any element")]
    IsolatedNode(usize),

    /// An element has fewer than 3 nodes, repeats a node, or references a
    /// node index out of range.
    #[error("element {0} is malformed")]
    MalformedElement(usize),
}
