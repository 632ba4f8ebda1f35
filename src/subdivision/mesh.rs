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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{error::SubdivisionError, geometry::Point3, numeric::Scalar};

/// Unordered node-index pair identifying an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }
}

/// A mesh node: position, boundary classification, and the elements it
/// belongs to.
#[derive(Clone, Debug)]
pub struct Node<T: Scalar> {
    pub position: Point3<T>,
    /// Set when any incident edge has only one incident element.
    pub boundary: bool,
    /// Incident element indices, maintained by connectivity rebuild.
    pub elements: SmallVec<[usize; 8]>,
}

impl<T: Scalar> Node<T> {
    fn new(position: Point3<T>) -> Self {
        Node {
            position,
            boundary: false,
            elements: SmallVec::new(),
        }
    }
}

/// A polygonal element: an ordered node loop with one neighbor entry per
/// edge.
///
/// `neighbors[i]` is the element across edge `nodes[i]..nodes[i + 1]`, or
/// `None` at the mesh boundary.
#[derive(Clone, Debug)]
pub struct Element {
    pub nodes: SmallVec<[usize; 4]>,
    pub neighbors: SmallVec<[Option<usize>; 4]>,
}

impl Element {
    fn new(nodes: SmallVec<[usize; 4]>) -> Self {
        let sides = nodes.len();
        Element {
            nodes,
            neighbors: SmallVec::from_elem(None, sides),
        }
    }

    /// Number of sides (= number of nodes).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cyclic node access: `i` may be negative or past the end.
    #[inline]
    pub fn node(&self, i: isize) -> usize {
        let n = self.nodes.len() as isize;
        self.nodes[i.rem_euclid(n) as usize]
    }

    /// Cyclic neighbor access, aligned with [`Element::node`].
    #[inline]
    pub fn neighbor(&self, i: isize) -> Option<usize> {
        let n = self.neighbors.len() as isize;
        self.neighbors[i.rem_euclid(n) as usize]
    }
}

/// A polygonal mesh prepared for subdivision.
///
/// Built once from node positions and per-element node loops; refined in
/// place by [`crate::subdivision::subdivide`], which may be applied
/// repeatedly to its own output.
#[derive(Clone, Debug)]
pub struct SubDivMesh<T: Scalar> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) elements: Vec<Element>,
}

impl<T: Scalar> SubDivMesh<T> {
    /// Build a mesh and its connectivity from raw geometry.
    ///
    /// Fails on the same precondition violations as
    /// [`SubDivMesh::rebuild_connectivity`].
    pub fn new(
        positions: Vec<Point3<T>>,
        elements: Vec<Vec<usize>>,
    ) -> Result<Self, SubdivisionError> {
        let mut mesh = SubDivMesh {
            nodes: positions.into_iter().map(Node::new).collect(),
            elements: elements
                .into_iter()
                .map(|nodes| Element::new(SmallVec::from_vec(nodes)))
                .collect(),
        };
        mesh.rebuild_connectivity()?;
        Ok(mesh)
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn push_node(&mut self, position: Point3<T>) -> usize {
        self.nodes.push(Node::new(position));
        self.nodes.len() - 1
    }

    pub(crate) fn replace_element(&mut self, i: usize, nodes: [usize; 4]) {
        self.elements[i] = Element::new(SmallVec::from_slice(&nodes));
    }

    pub(crate) fn add_element(&mut self, nodes: [usize; 4]) {
        self.elements.push(Element::new(SmallVec::from_slice(&nodes)));
    }

    /// Recompute all derived connectivity from the element table: per-node
    /// incident-element lists, per-edge element neighbors, and boundary
    /// flags.
    ///
    /// Fails loudly on malformed input rather than corrupting the
    /// fixed-offset indexing the subdivision pass depends on:
    /// an element with fewer than 3 nodes, a repeated node, or an
    /// out-of-range index ([`SubdivisionError::MalformedElement`]); an edge
    /// with more than two incident elements
    /// ([`SubdivisionError::NonManifoldEdge`]); a node referenced by no
    /// element ([`SubdivisionError::IsolatedNode`]); an empty element table
    /// ([`SubdivisionError::EmptyMesh`]).
    pub fn rebuild_connectivity(&mut self) -> Result<(), SubdivisionError> {
        if self.elements.is_empty() {
            return Err(SubdivisionError::EmptyMesh);
        }

        for node in &mut self.nodes {
            node.boundary = false;
            node.elements.clear();
        }

        for (ei, e) in self.elements.iter().enumerate() {
            if e.len() < 3 {
                return Err(SubdivisionError::MalformedElement(ei));
            }
            for (k, &ni) in e.nodes.iter().enumerate() {
                if ni >= self.nodes.len() {
                    return Err(SubdivisionError::MalformedElement(ei));
                }
                if e.nodes[..k].contains(&ni) {
                    return Err(SubdivisionError::MalformedElement(ei));
                }
            }
        }
        for ei in 0..self.elements.len() {
            for k in 0..self.elements[ei].len() {
                let ni = self.elements[ei].nodes[k];
                self.nodes[ni].elements.push(ei);
            }
        }

        let mut edge_map: AHashMap<EdgeKey, SmallVec<[(usize, usize); 2]>> =
            AHashMap::with_capacity(self.elements.len() * 4);
        for (ei, e) in self.elements.iter().enumerate() {
            for j in 0..e.len() {
                let key = EdgeKey::new(e.node(j as isize), e.node(j as isize + 1));
                let entry = edge_map.entry(key).or_default();
                if entry.len() == 2 {
                    return Err(SubdivisionError::NonManifoldEdge { a: key.0, b: key.1 });
                }
                entry.push((ei, j));
            }
        }

        for (key, incident) in &edge_map {
            match incident.as_slice() {
                [(e0, j0), (e1, j1)] => {
                    self.elements[*e0].neighbors[*j0] = Some(*e1);
                    self.elements[*e1].neighbors[*j1] = Some(*e0);
                }
                [(e0, j0)] => {
                    self.elements[*e0].neighbors[*j0] = None;
                    self.nodes[key.0].boundary = true;
                    self.nodes[key.1].boundary = true;
                }
                _ => unreachable!("edge entries are capped at two"),
            }
        }

        if let Some(isolated) = self.nodes.iter().position(|n| n.elements.is_empty()) {
            return Err(SubdivisionError::IsolatedNode(isolated));
        }
        Ok(())
    }
}
