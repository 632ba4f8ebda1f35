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

use std::cell::Cell;

use ahash::AHashMap;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::{
    error::TriangulationError,
    geometry::{Aabb, Point3},
    kernel::{in_circle, orient2d, point_in_triangle},
    numeric::Scalar,
};

/// Number of permanent bounding-box corner points. Indices below this are
/// never removable or relocatable.
pub const CORNER_POINTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// A triangle of the arena, counter-clockwise in the xy plane.
///
/// `neighbors[i]` is the triangle across the edge
/// `vertices[i]..vertices[i + 1]`, or `None` when that edge lies on the
/// bounding box. All links are indices into the owning triangle vec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [usize; 3],
    pub neighbors: [Option<usize>; 3],
}

impl Triangle {
    fn new(vertices: [usize; 3]) -> Self {
        Triangle {
            vertices,
            neighbors: [None; 3],
        }
    }

    /// The i-th directed edge, as a (start, end) vertex pair.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.vertices[i], self.vertices[(i + 1) % 3])
    }

    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    #[inline]
    fn vertex_slot(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&x| x == v)
    }

    /// Index of the directed edge (a, b), if this triangle stores it in
    /// exactly that order.
    #[inline]
    fn directed_edge_slot(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&i| self.edge(i) == (a, b))
    }
}

/// Incremental Delaunay triangulation of a dynamic point set inside a fixed
/// bounding box.
///
/// The first [`CORNER_POINTS`] points are the box corners; the two seed
/// triangles split the box along one diagonal. Points are insertion-ordered
/// and index-stable except for [`Delaunay::remove`], which erases one slot
/// and renumbers the indices above it (callers that keep two triangulations
/// in index correspondence must mirror every edit in the same order).
#[derive(Clone, Debug)]
pub struct Delaunay<T: Scalar> {
    points: Vec<Point3<T>>,
    triangles: Vec<Triangle>,
    bbox: Aabb<T>,
    hint: Cell<usize>,
}

impl<T: Scalar> Delaunay<T> {
    /// Seed the triangulation with the box spanned by two opposite corners.
    ///
    /// Fails with [`TriangulationError::DegenerateBox`] when the corners
    /// enclose no area in the xy plane.
    pub fn new(a: Point3<T>, b: Point3<T>) -> Result<Self, TriangulationError> {
        let bbox = Aabb::from_corners(a, b);
        if bbox.is_degenerate_xy() {
            return Err(TriangulationError::DegenerateBox);
        }
        let (lo, hi) = (bbox.min, bbox.max);
        let points = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ];
        // two mirror triangles across the 0-2 diagonal
        let triangles = vec![
            Triangle {
                vertices: [0, 1, 2],
                neighbors: [None, None, Some(1)],
            },
            Triangle {
                vertices: [0, 2, 3],
                neighbors: [Some(0), None, None],
            },
        ];
        Ok(Delaunay {
            points,
            triangles,
            bbox,
            hint: Cell::new(0),
        })
    }

    /// The point sequence; index = identity.
    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    /// The triangle arena. Slots are reused, so indices are only meaningful
    /// until the next structural edit.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn bounding_box(&self) -> &Aabb<T> {
        &self.bbox
    }

    /// Pure bounding-box membership test, independent of topology.
    pub fn contains_point_in_box(&self, p: &Point3<T>) -> bool {
        self.bbox.contains(p)
    }

    /// Index of the triangle containing `p` (boundary inclusive).
    ///
    /// Walks from the last located triangle, stepping across whichever edge
    /// has `p` on its outside. The walk is capped and falls back to a linear
    /// scan: the deterministic first-negative-edge step can cycle on
    /// degenerate configurations, and the scan keeps the query correct at
    /// O(n) instead of hanging. An in-box query that still misses means the
    /// topology is corrupted; that is reported as
    /// [`TriangulationError::PointNotFound`].
    pub fn locate(&self, p: &Point3<T>) -> Result<usize, TriangulationError> {
        let mut current = self.hint.get();
        if current >= self.triangles.len() {
            current = 0;
        }
        let cap = 4 * self.triangles.len() + 16;
        'walk: for _ in 0..cap {
            let t = &self.triangles[current];
            for i in 0..3 {
                let (a, b) = t.edge(i);
                if orient2d(&self.points[a], &self.points[b], p) < T::zero() {
                    match t.neighbors[i] {
                        Some(n) => {
                            current = n;
                            continue 'walk;
                        }
                        // outside the hull; the scan below will also miss
                        None => break 'walk,
                    }
                }
            }
            self.hint.set(current);
            return Ok(current);
        }
        for (ti, t) in self.triangles.iter().enumerate() {
            let [a, b, c] = t.vertices;
            if point_in_triangle(&self.points[a], &self.points[b], &self.points[c], p) {
                self.hint.set(ti);
                return Ok(ti);
            }
        }
        Err(TriangulationError::PointNotFound)
    }

    /// Insert a point and restore the Delaunay property.
    ///
    /// Returns the new point's index (the previous point count). The
    /// triangulation is left untouched on error: points outside the box in
    /// the xy plane are rejected, as are points that coincide in xy with an
    /// existing vertex.
    pub fn insert(&mut self, p: Point3<T>) -> Result<usize, TriangulationError> {
        // z is payload, so only xy decides domain membership
        if !self.bbox.contains_xy(&p) {
            return Err(TriangulationError::OutOfBounds);
        }
        let ti = self.locate(&p)?;
        for &v in &self.triangles[ti].vertices {
            if self.points[v].coincides_xy(&p) {
                return Err(TriangulationError::DuplicatePoint);
            }
        }
        let pid = self.points.len();
        self.points.push(p);
        self.insert_vertex(ti, pid)?;
        debug!(
            "inserted point {pid}; {} triangles total",
            self.triangles.len()
        );
        Ok(pid)
    }

    /// Remove a previously inserted point.
    ///
    /// The incident triangle fan is replaced by a re-triangulation of the
    /// hole and the point is erased from the sequence, renumbering every
    /// index above it (vec-erase semantics). Box corners are permanent.
    pub fn remove(&mut self, index: usize) -> Result<(), TriangulationError> {
        if index < CORNER_POINTS {
            return Err(TriangulationError::ProtectedVertex(index));
        }
        if index >= self.points.len() {
            return Err(TriangulationError::InvalidIndex(index));
        }
        self.detach(index)?;
        self.points.remove(index);
        for t in &mut self.triangles {
            for v in &mut t.vertices {
                if *v > index {
                    *v -= 1;
                }
            }
        }
        debug!(
            "removed point {index}; {} points remain",
            self.points.len()
        );
        Ok(())
    }

    /// Relocate a previously inserted point, keeping its index stable.
    ///
    /// Observably equivalent to remove + reinsert at the same index; callers
    /// that keep parallel triangulations depend on the index not changing.
    pub fn move_point(&mut self, index: usize, q: Point3<T>) -> Result<(), TriangulationError> {
        if index < CORNER_POINTS {
            return Err(TriangulationError::ProtectedVertex(index));
        }
        if index >= self.points.len() {
            return Err(TriangulationError::InvalidIndex(index));
        }
        if !self.bbox.contains_xy(&q) {
            return Err(TriangulationError::OutOfBounds);
        }
        if self
            .points
            .iter()
            .enumerate()
            .any(|(i, pt)| i != index && pt.coincides_xy(&q))
        {
            return Err(TriangulationError::DuplicatePoint);
        }
        self.detach(index)?;
        self.points[index] = q;
        let ti = self.locate(&q)?;
        self.insert_vertex(ti, index)?;
        debug!("moved point {index}");
        Ok(())
    }

    /// Full consistency check: winding, neighbor symmetry, box coverage and
    /// the empty-circumcircle property, with scale-aware float tolerances.
    ///
    /// O(triangles × points); meant for tests and fail-fast diagnostics, not
    /// per-frame use.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        let span = (self.bbox.max.x - self.bbox.min.x).max(self.bbox.max.y - self.bbox.min.y);
        let tol4 = T::epsilon().sqrt() * span * span * span * span;

        let mut area2 = T::zero();
        for (ti, t) in self.triangles.iter().enumerate() {
            let [a, b, c] = t.vertices;
            if a >= self.points.len() || b >= self.points.len() || c >= self.points.len() {
                return Err(TriangulationError::BrokenTopology(
                    "vertex index out of range",
                ));
            }
            let o = orient2d(&self.points[a], &self.points[b], &self.points[c]);
            if o <= T::zero() {
                return Err(TriangulationError::BrokenTopology("non-CCW triangle"));
            }
            area2 = area2 + o;

            for i in 0..3 {
                let Some(n) = t.neighbors[i] else { continue };
                if n >= self.triangles.len() {
                    return Err(TriangulationError::BrokenTopology(
                        "neighbor index out of range",
                    ));
                }
                let (ea, eb) = t.edge(i);
                let Some(ej) = self.triangles[n].directed_edge_slot(eb, ea) else {
                    return Err(TriangulationError::BrokenTopology(
                        "asymmetric neighbor link",
                    ));
                };
                if self.triangles[n].neighbors[ej] != Some(ti) {
                    return Err(TriangulationError::BrokenTopology(
                        "asymmetric neighbor link",
                    ));
                }
            }

            for (pi, p) in self.points.iter().enumerate() {
                if pi == a || pi == b || pi == c {
                    continue;
                }
                if in_circle(&self.points[a], &self.points[b], &self.points[c], p) > tol4 {
                    return Err(TriangulationError::BrokenTopology(
                        "circumcircle contains a foreign point",
                    ));
                }
            }
        }

        let box_area2 = T::from_lit(2.0)
            * (self.bbox.max.x - self.bbox.min.x)
            * (self.bbox.max.y - self.bbox.min.y);
        if (area2 - box_area2).abs() > T::epsilon().sqrt() * span * span {
            return Err(TriangulationError::BrokenTopology(
                "triangles do not cover the bounding box",
            ));
        }
        Ok(())
    }

    // ---- internal machinery ----

    /// Split the containing triangle (or edge, when `pid` lands exactly on
    /// one) around an already-stored point, then legalize.
    fn insert_vertex(&mut self, ti: usize, pid: usize) -> Result<(), TriangulationError> {
        let p = self.points[pid];
        let mut on_edge = None;
        for i in 0..3 {
            let (a, b) = self.triangles[ti].edge(i);
            if orient2d(&self.points[a], &self.points[b], &p) == T::zero() {
                on_edge = Some(i);
                break;
            }
        }
        let seeds = match on_edge {
            Some(ei) => self.split_edge(ti, ei, pid),
            None => self.split_face(ti, pid),
        };
        self.hint.set(ti);
        self.legalize(seeds)
    }

    /// 1→3 split: the triangle's slot is reused, two fan triangles append.
    /// Returns the edges opposite `pid`, which are the ones legalization
    /// must re-test.
    fn split_face(&mut self, ti: usize, pid: usize) -> Vec<(usize, usize)> {
        let t = self.triangles[ti];
        let [a, b, c] = t.vertices;
        let [n_ab, n_bc, n_ca] = t.neighbors;
        let m0 = self.triangles.len();
        let m1 = m0 + 1;

        self.triangles[ti] = Triangle {
            vertices: [a, b, pid],
            neighbors: [n_ab, Some(m0), Some(m1)],
        };
        self.triangles.push(Triangle {
            vertices: [b, c, pid],
            neighbors: [n_bc, Some(m1), Some(ti)],
        });
        self.triangles.push(Triangle {
            vertices: [c, a, pid],
            neighbors: [n_ca, Some(ti), Some(m0)],
        });

        self.relink(n_bc, ti, m0);
        self.relink(n_ca, ti, m1);

        vec![(ti, 0), (m0, 0), (m1, 0)]
    }

    /// 2→4 split for a point landing exactly on an edge. With a boundary
    /// edge this degenerates to a 1→2 split on the inside.
    fn split_edge(&mut self, ti: usize, ei: usize, pid: usize) -> Vec<(usize, usize)> {
        let t = self.triangles[ti];
        let (a, b) = t.edge(ei);
        let c = t.vertices[(ei + 2) % 3];
        let n_ab = t.neighbors[ei];
        let n_bc = t.neighbors[(ei + 1) % 3];
        let n_ca = t.neighbors[(ei + 2) % 3];

        let m = self.triangles.len();
        // near side: ti keeps [a, pid, c], m takes [pid, b, c]
        self.triangles[ti] = Triangle {
            vertices: [a, pid, c],
            neighbors: [None, Some(m), n_ca],
        };
        self.triangles.push(Triangle {
            vertices: [pid, b, c],
            neighbors: [None, n_bc, Some(ti)],
        });
        self.relink(n_bc, ti, m);

        let mut seeds = vec![(ti, 2), (m, 1)];

        if let Some(u) = n_ab {
            let tu = self.triangles[u];
            // the far triangle stores the edge reversed
            let ej = tu
                .directed_edge_slot(b, a)
                .unwrap_or_else(|| unreachable!("neighbor links are symmetric"));
            let d = tu.vertices[(ej + 2) % 3];
            let n_ad = tu.neighbors[(ej + 1) % 3];
            let n_db = tu.neighbors[(ej + 2) % 3];

            let m2 = self.triangles.len();
            self.triangles[u] = Triangle {
                vertices: [pid, a, d],
                neighbors: [Some(ti), n_ad, Some(m2)],
            };
            self.triangles.push(Triangle {
                vertices: [b, pid, d],
                neighbors: [Some(m), Some(u), n_db],
            });
            self.relink(n_db, u, m2);

            self.triangles[ti].neighbors[0] = Some(u);
            self.triangles[m].neighbors[0] = Some(m2);

            seeds.push((u, 1));
            seeds.push((m2, 2));
        }
        seeds
    }

    /// Lawson legalization: flip every edge whose opposite vertex lies
    /// strictly inside the circumcircle, re-testing the edges each flip
    /// exposes. Strictly-inside only, so cocircular configurations never
    /// cycle. The flip budget is a hard cap; exhausting it means the
    /// structure was already inconsistent.
    fn legalize(&mut self, mut stack: Vec<(usize, usize)>) -> Result<(), TriangulationError> {
        let budget = 4 * self.triangles.len() * self.triangles.len() + 64;
        let mut flips = 0usize;
        while let Some((ti, ei)) = stack.pop() {
            if ti >= self.triangles.len() {
                continue;
            }
            let Some(nj) = self.triangles[ti].neighbors[ei] else {
                continue;
            };
            let (a, b) = self.triangles[ti].edge(ei);
            let c = self.triangles[ti].vertices[(ei + 2) % 3];
            let Some(ej) = self.triangles[nj].directed_edge_slot(b, a) else {
                return Err(TriangulationError::BrokenTopology(
                    "asymmetric neighbor link",
                ));
            };
            let d = self.triangles[nj].vertices[(ej + 2) % 3];
            let drift = in_circle(
                &self.points[a],
                &self.points[b],
                &self.points[c],
                &self.points[d],
            );
            if drift <= T::zero() {
                continue;
            }
            if let Some((t0, t1)) = self.flip(ti, ei) {
                flips += 1;
                if flips > budget {
                    return Err(TriangulationError::BrokenTopology(
                        "edge flips did not converge",
                    ));
                }
                stack.push((t0, 0));
                stack.push((t0, 2));
                stack.push((t1, 0));
                stack.push((t1, 1));
            }
        }
        if flips > 0 {
            trace!("legalization performed {flips} edge flips");
        }
        Ok(())
    }

    /// Replace the diagonal of the quad formed by triangle `ti` and its
    /// neighbor across edge `ei`. Refuses to create inverted triangles.
    fn flip(&mut self, ti: usize, ei: usize) -> Option<(usize, usize)> {
        let nj = self.triangles[ti].neighbors[ei]?;
        let (a, b) = self.triangles[ti].edge(ei);
        let c = self.triangles[ti].vertices[(ei + 2) % 3];
        let ej = self.triangles[nj].directed_edge_slot(b, a)?;
        let d = self.triangles[nj].vertices[(ej + 2) % 3];

        if orient2d(&self.points[a], &self.points[d], &self.points[c]) <= T::zero()
            || orient2d(&self.points[d], &self.points[b], &self.points[c]) <= T::zero()
        {
            return None;
        }

        let n_bc = self.triangles[ti].neighbors[(ei + 1) % 3];
        let n_ca = self.triangles[ti].neighbors[(ei + 2) % 3];
        let n_ad = self.triangles[nj].neighbors[(ej + 1) % 3];
        let n_db = self.triangles[nj].neighbors[(ej + 2) % 3];

        self.triangles[ti] = Triangle {
            vertices: [a, d, c],
            neighbors: [n_ad, Some(nj), n_ca],
        };
        self.triangles[nj] = Triangle {
            vertices: [d, b, c],
            neighbors: [n_db, n_bc, Some(ti)],
        };

        self.relink(n_ad, nj, ti);
        self.relink(n_bc, ti, nj);
        Some((ti, nj))
    }

    /// Point any link in `tri` that referenced triangle `from` at `to`.
    fn relink(&mut self, tri: Option<usize>, from: usize, to: usize) {
        if let Some(t) = tri {
            for n in &mut self.triangles[t].neighbors {
                if *n == Some(from) {
                    *n = Some(to);
                }
            }
        }
    }

    /// Remove the triangle fan around `index` and re-triangulate the hole,
    /// leaving the point slot itself in place.
    fn detach(&mut self, index: usize) -> Result<(), TriangulationError> {
        let incident: Vec<usize> = self
            .triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.has_vertex(index))
            .map(|(i, _)| i)
            .collect();
        if incident.is_empty() {
            return Err(TriangulationError::BrokenTopology(
                "vertex has no incident triangles",
            ));
        }

        let hole = self.hole_boundary(index, &incident)?;
        let new_tris = if hole.len() >= 3 {
            self.ear_clip(&hole)?
        } else {
            Vec::new()
        };

        for (k, &tv) in new_tris.iter().enumerate() {
            self.triangles[incident[k]] = Triangle::new(tv);
        }
        let mut dead: Vec<usize> = incident[new_tris.len()..].to_vec();
        dead.sort_unstable_by(|x, y| y.cmp(x));
        for s in dead {
            self.triangles.swap_remove(s);
        }

        self.rebuild_neighbors()?;
        self.hint.set(0);
        self.legalize_all()
    }

    /// Order the hole boundary left by removing `index`: a closed CCW loop
    /// for an interior point, an open chain for a point sitting on a box
    /// edge (the chain is implicitly closed through that box edge).
    fn hole_boundary(
        &self,
        index: usize,
        incident: &[usize],
    ) -> Result<Vec<usize>, TriangulationError> {
        let mut succ: AHashMap<usize, usize> = AHashMap::with_capacity(incident.len());
        for &ti in incident {
            let t = &self.triangles[ti];
            let s = t
                .vertex_slot(index)
                .ok_or(TriangulationError::BrokenTopology(
                    "fan triangle lost its vertex",
                ))?;
            let (u, w) = t.edge((s + 1) % 3);
            if succ.insert(u, w).is_some() {
                return Err(TriangulationError::BrokenTopology(
                    "fan boundary is not a simple chain",
                ));
            }
        }

        // a vertex with no incoming edge starts an open chain
        let start = succ
            .keys()
            .copied()
            .find(|u| !succ.values().any(|w| w == u))
            .or_else(|| succ.keys().copied().next())
            .ok_or(TriangulationError::BrokenTopology("empty fan boundary"))?;

        let mut poly = vec![start];
        let mut cur = start;
        while let Some(&next) = succ.get(&cur) {
            if next == start {
                break;
            }
            poly.push(next);
            cur = next;
            if poly.len() > succ.len() + 1 {
                return Err(TriangulationError::BrokenTopology(
                    "fan boundary is not a simple chain",
                ));
            }
        }
        if poly.len() < succ.len() {
            return Err(TriangulationError::BrokenTopology(
                "fan boundary is disconnected",
            ));
        }
        Ok(poly)
    }

    /// Triangulate a simple CCW polygon by ear clipping. Legalization
    /// afterwards restores the Delaunay property; this only has to produce
    /// a valid triangulation of the hole.
    fn ear_clip(&self, boundary: &[usize]) -> Result<Vec<[usize; 3]>, TriangulationError> {
        let mut poly = boundary.to_vec();
        let mut out = Vec::with_capacity(poly.len().saturating_sub(2));

        while poly.len() > 3 {
            let n = poly.len();
            let mut clipped = false;
            for i in 0..n {
                let prev = poly[(i + n - 1) % n];
                let cur = poly[i];
                let next = poly[(i + 1) % n];
                let (pa, pb, pc) = (&self.points[prev], &self.points[cur], &self.points[next]);
                if orient2d(pa, pb, pc) <= T::zero() {
                    continue;
                }
                // the candidate ear must not contain any other hole vertex,
                // boundary included
                let blocked = poly.iter().any(|&q| {
                    q != prev && q != cur && q != next && point_in_triangle(pa, pb, pc, &self.points[q])
                });
                if blocked {
                    continue;
                }
                out.push([prev, cur, next]);
                poly.remove(i);
                clipped = true;
                break;
            }
            if !clipped {
                return Err(TriangulationError::BrokenTopology(
                    "hole boundary is not a simple polygon",
                ));
            }
        }

        let (a, b, c) = (poly[0], poly[1], poly[2]);
        if orient2d(&self.points[a], &self.points[b], &self.points[c]) <= T::zero() {
            return Err(TriangulationError::BrokenTopology(
                "degenerate hole remainder",
            ));
        }
        out.push([a, b, c]);
        Ok(out)
    }

    /// Recompute every neighbor link from scratch via an undirected edge
    /// map. Used after hole surgery, where local rewiring would be fiddlier
    /// than it is worth.
    fn rebuild_neighbors(&mut self) -> Result<(), TriangulationError> {
        let mut edge_map: AHashMap<Edge, SmallVec<[usize; 2]>> =
            AHashMap::with_capacity(self.triangles.len() * 2);
        for (ti, t) in self.triangles.iter().enumerate() {
            for i in 0..3 {
                let (a, b) = t.edge(i);
                let entry = edge_map.entry(Edge::new(a, b)).or_default();
                if entry.len() == 2 {
                    return Err(TriangulationError::BrokenTopology(
                        "edge shared by more than two triangles",
                    ));
                }
                entry.push(ti);
            }
        }
        for ti in 0..self.triangles.len() {
            for i in 0..3 {
                let (a, b) = self.triangles[ti].edge(i);
                let tris = edge_map
                    .get(&Edge::new(a, b))
                    .ok_or(TriangulationError::BrokenTopology("edge map lost an edge"))?;
                self.triangles[ti].neighbors[i] = tris.iter().copied().find(|&x| x != ti);
            }
        }
        Ok(())
    }

    /// Seed legalization with every edge. The mesh is Delaunay away from
    /// the surgery site, so almost all tests are immediate rejects.
    fn legalize_all(&mut self) -> Result<(), TriangulationError> {
        let mut seeds = Vec::with_capacity(self.triangles.len() * 3);
        for ti in 0..self.triangles.len() {
            for i in 0..3 {
                seeds.push((ti, i));
            }
        }
        self.legalize(seeds)
    }
}
