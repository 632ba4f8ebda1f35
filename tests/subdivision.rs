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

use tricell::error::SubdivisionError;
use tricell::geometry::Point3;
use tricell::subdivision::{subdivide, SubDivMesh};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn unit_square() -> SubDivMesh<f64> {
    SubDivMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
    )
    .unwrap()
}

fn cube() -> SubDivMesh<f64> {
    SubDivMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ],
        vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ],
    )
    .unwrap()
}

#[test]
fn square_one_pass_counts() {
    let mut mesh = unit_square();
    subdivide(&mut mesh).unwrap();
    // 4 originals + 1 centroid + 4 edge nodes
    assert_eq!(mesh.nodes().len(), 9);
    assert_eq!(mesh.elements().len(), 4);
    assert!(mesh.elements().iter().all(|e| e.len() == 4));
}

#[test]
fn square_centroid_and_edge_nodes() {
    let mut mesh = unit_square();
    subdivide(&mut mesh).unwrap();
    // centroids come first in the new-node block
    let c = mesh.nodes()[4].position;
    assert!(close(c.x, 0.5) && close(c.y, 0.5) && close(c.z, 0.0));
    // all four edges are boundary edges, so their nodes are midpoints
    let mut mids: Vec<(f64, f64)> = mesh.nodes()[5..]
        .iter()
        .map(|n| (n.position.x, n.position.y))
        .collect();
    mids.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(mids, vec![(0.0, 0.5), (0.5, 0.0), (0.5, 1.0), (1.0, 0.5)]);
}

#[test]
fn square_boundary_corners_pulled_in() {
    let mut mesh = unit_square();
    subdivide(&mut mesh).unwrap();
    // corner rule: ((r/2) + p) / 2 with r the two boundary edge midpoints
    let p0 = mesh.nodes()[0].position;
    assert!(close(p0.x, 0.125) && close(p0.y, 0.125) && close(p0.z, 0.0));
    let p2 = mesh.nodes()[2].position;
    assert!(close(p2.x, 0.875) && close(p2.y, 0.875));
}

#[test]
fn square_boundary_flags() {
    let mut mesh = unit_square();
    subdivide(&mut mesh).unwrap();
    // every node except the centroid sits on the boundary
    for (i, n) in mesh.nodes().iter().enumerate() {
        assert_eq!(n.boundary, i != 4, "node {i}");
    }
}

#[test]
fn square_two_passes_counts() {
    let mut mesh = unit_square();
    subdivide(&mut mesh).unwrap();
    subdivide(&mut mesh).unwrap();
    // 9 + 4 centroids + 12 edges, and each quad splits in four
    assert_eq!(mesh.nodes().len(), 25);
    assert_eq!(mesh.elements().len(), 16);
}

#[test]
fn grid_center_node_is_fixed_point() {
    let mut positions = Vec::new();
    for y in 0..3 {
        for x in 0..3 {
            positions.push(Point3::new(x as f64, y as f64, 0.0));
        }
    }
    let mut mesh = SubDivMesh::new(
        positions,
        vec![
            vec![0, 1, 4, 3],
            vec![1, 2, 5, 4],
            vec![3, 4, 7, 6],
            vec![4, 5, 8, 7],
        ],
    )
    .unwrap();
    assert!(!mesh.nodes()[4].boundary);
    subdivide(&mut mesh).unwrap();
    assert_eq!(mesh.nodes().len(), 25);
    assert_eq!(mesh.elements().len(), 16);
    // by symmetry the interior rule leaves the center in place
    let c = mesh.nodes()[4].position;
    assert!(close(c.x, 1.0) && close(c.y, 1.0) && close(c.z, 0.0));
}

#[test]
fn cube_one_pass_counts() {
    let mut mesh = cube();
    subdivide(&mut mesh).unwrap();
    // 8 originals + 6 centroids + 12 edge nodes; 6 quads split in four
    assert_eq!(mesh.nodes().len(), 26);
    assert_eq!(mesh.elements().len(), 24);
    // a closed surface has no boundary anywhere
    assert!(mesh.nodes().iter().all(|n| !n.boundary));
    assert!(mesh
        .elements()
        .iter()
        .all(|e| e.neighbors.iter().all(|n| n.is_some())));
}

#[test]
fn triangle_element_becomes_three_quads() {
    let mut mesh = SubDivMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![vec![0, 1, 2]],
    )
    .unwrap();
    subdivide(&mut mesh).unwrap();
    assert_eq!(mesh.nodes().len(), 7);
    assert_eq!(mesh.elements().len(), 3);
    assert!(mesh.elements().iter().all(|e| e.len() == 4));
}

#[test]
fn neighbor_links_are_symmetric_after_pass() {
    let mut mesh = cube();
    subdivide(&mut mesh).unwrap();
    for (ei, e) in mesh.elements().iter().enumerate() {
        for (j, &n) in e.neighbors.iter().enumerate() {
            let Some(n) = n else { continue };
            let back = mesh.elements()[n]
                .neighbors
                .iter()
                .any(|&b| b == Some(ei));
            assert!(back, "element {ei} edge {j} links {n} one-way");
        }
    }
}

#[test]
fn empty_mesh_rejected() {
    let r = SubDivMesh::<f64>::new(vec![Point3::new(0.0, 0.0, 0.0)], vec![]);
    assert_eq!(r.unwrap_err(), SubdivisionError::EmptyMesh);
}

#[test]
fn non_manifold_edge_rejected() {
    let r = SubDivMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]],
    );
    assert_eq!(
        r.unwrap_err(),
        SubdivisionError::NonManifoldEdge { a: 0, b: 1 }
    );
}

#[test]
fn isolated_node_rejected() {
    let r = SubDivMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 5.0, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
    );
    assert_eq!(r.unwrap_err(), SubdivisionError::IsolatedNode(4));
}

#[test]
fn malformed_elements_rejected() {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let repeated = SubDivMesh::new(positions.clone(), vec![vec![0, 1, 1]]);
    assert_eq!(
        repeated.unwrap_err(),
        SubdivisionError::MalformedElement(0)
    );
    let too_short = SubDivMesh::new(positions.clone(), vec![vec![0, 1]]);
    assert_eq!(
        too_short.unwrap_err(),
        SubdivisionError::MalformedElement(0)
    );
    let out_of_range = SubDivMesh::new(positions, vec![vec![0, 1, 9]]);
    assert_eq!(
        out_of_range.unwrap_err(),
        SubdivisionError::MalformedElement(0)
    );
}
