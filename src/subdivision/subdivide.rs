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
use log::debug;

use crate::{
    error::SubdivisionError,
    geometry::Vector3,
    numeric::Scalar,
    subdivision::mesh::{EdgeKey, SubDivMesh},
};

/// One destructive Catmull-Clark style refinement pass.
///
/// Every n-gon becomes n quads. New nodes append after the originals:
/// first one centroid per element (at the fixed offset
/// `original node count + element index`), then one node per distinct edge.
/// Original nodes are then repositioned with distinct boundary/interior
/// rules. The pass may be applied repeatedly to its own output.
pub fn subdivide<T: Scalar>(mesh: &mut SubDivMesh<T>) -> Result<(), SubdivisionError> {
    if mesh.elements.is_empty() {
        return Err(SubdivisionError::EmptyMesh);
    }
    let n_nodes = mesh.nodes.len();
    let n_elems = mesh.elements.len();

    // 1) one centroid per element; phases 3 and 4 rely on the fixed offset
    for i in 0..n_elems {
        let e = &mesh.elements[i];
        let mut sum = Vector3::default();
        for &ni in &e.nodes {
            sum += mesh.nodes[ni].position.to_vector();
        }
        let centroid = (sum / T::from_lit(e.len() as f64)).to_point();
        mesh.push_node(centroid);
    }

    // 2) one node per distinct edge, deduplicated across the two incident
    //    elements
    let mut edge_nodes: AHashMap<EdgeKey, usize> = AHashMap::with_capacity(n_elems * 4);
    for i in 0..n_elems {
        for j in 0..mesh.elements[i].len() {
            let e = &mesh.elements[i];
            let a = e.node(j as isize);
            let b = e.node(j as isize + 1);
            let key = EdgeKey::new(a, b);
            if edge_nodes.contains_key(&key) {
                continue;
            }
            let pa = mesh.nodes[a].position.to_vector();
            let pb = mesh.nodes[b].position.to_vector();
            let pos = match e.neighbor(j as isize) {
                // interior edge: endpoints plus both adjacent centroids
                Some(v) => {
                    let c1 = mesh.nodes[n_nodes + i].position.to_vector();
                    let c2 = mesh.nodes[n_nodes + v].position.to_vector();
                    ((pa + pb + c1 + c2) / T::from_lit(4.0)).to_point()
                }
                // boundary edge: plain midpoint
                None => ((pa + pb) / T::from_lit(2.0)).to_point(),
            };
            let idx = mesh.push_node(pos);
            edge_nodes.insert(key, idx);
        }
    }

    // 3) rebuild every element as n quads; the centroid sits in slot 0 of
    //    each quad, which phase 4 reads back
    for i in 0..n_elems {
        let e = mesh.elements[i].clone();
        let centroid = n_nodes + i;
        for j in 0..e.len() {
            let n0 = e.node(j as isize);
            let n1 = edge_nodes[&EdgeKey::new(e.node(j as isize), e.node(j as isize + 1))];
            let n2 = edge_nodes[&EdgeKey::new(e.node(j as isize), e.node(j as isize - 1))];
            if j == 0 {
                mesh.replace_element(i, [centroid, n2, n0, n1]);
            } else {
                mesh.add_element([centroid, n2, n0, n1]);
            }
        }
    }
    mesh.rebuild_connectivity()?;

    // 4) reposition the original nodes, indexed by the original topology.
    //    r accumulates incident edge nodes; on mixed boundary/interior
    //    edges only the interior endpoint accumulates, so a boundary
    //    node's r comes from its boundary edges alone
    let mut r = vec![Vector3::<T>::default(); n_nodes];
    for (key, &en) in &edge_nodes {
        let ep = mesh.nodes[en].position.to_vector();
        let (a, b) = (key.0, key.1);
        if mesh.nodes[a].boundary == mesh.nodes[b].boundary {
            r[a] += ep;
            r[b] += ep;
        } else if mesh.nodes[a].boundary {
            r[b] += ep;
        } else {
            r[a] += ep;
        }
    }

    for i in 0..n_nodes {
        let p = mesh.nodes[i].position.to_vector();
        let new_pos = if mesh.nodes[i].boundary {
            // midpoint-style rule over the (at most two) boundary edges
            let rb = r[i] / T::from_lit(2.0);
            (rb + p) / T::from_lit(2.0)
        } else {
            // valence = incident elements = incident edges = incident
            // centroids; one quad per original incident element carries
            // that element's centroid in slot 0
            let n = T::from_lit(mesh.nodes[i].elements.len() as f64);
            let r_bar = r[i] / n;
            let mut f = Vector3::default();
            for &ei in &mesh.nodes[i].elements {
                f += mesh.nodes[mesh.elements[ei].nodes[0]].position.to_vector();
            }
            let f_bar = f / n;
            (r_bar * T::from_lit(4.0) - f_bar + p * (n - T::from_lit(3.0))) / n
        };
        mesh.nodes[i].position = new_pos.to_point();
    }

    debug!(
        "subdivided: {} nodes, {} elements",
        mesh.nodes.len(),
        mesh.elements.len()
    );
    Ok(())
}
