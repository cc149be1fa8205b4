//! Exact geometric overlap predicate between heterogeneous shapes
//!
//! Every shape is reduced once, at insert time, to one of three outline
//! forms: a chain of round-capped capsules (lines, flattened arcs), a
//! circle (padstack copper), or a triangle fan (polygons via earcut, text
//! rectangles). Overlap between any two shapes then reduces to a small
//! set of capsule/circle/triangle kernels.

use crate::board::{Point, Shape};

/// Triangle with a precomputed box for fast rejection
#[derive(Clone, Debug)]
pub struct Tri {
    pub v: [Point; 3],
    min: Point,
    max: Point,
}

impl Tri {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            v: [a, b, c],
            min: Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            max: Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        }
    }

    fn boxes_apart(&self, other: &Tri, slack: f64) -> bool {
        self.min.x - slack > other.max.x
            || other.min.x - slack > self.max.x
            || self.min.y - slack > other.max.y
            || other.min.y - slack > self.max.y
    }

    fn edges(&self) -> [(Point, Point); 3] {
        [
            (self.v[0], self.v[1]),
            (self.v[1], self.v[2]),
            (self.v[2], self.v[0]),
        ]
    }
}

/// Precomputed intersection form of a shape
#[derive(Clone, Debug)]
pub enum Outline {
    /// Round-capped strokes of the given radius
    Capsules(Vec<(Point, Point)>, f64),
    /// Filled disc
    Circle(Point, f64),
    /// Filled region as a triangle set
    Tris(Vec<Tri>),
}

impl Outline {
    pub fn of(shape: &Shape) -> Outline {
        match shape {
            Shape::Line(l) => Outline::Capsules(vec![(l.p1, l.p2)], l.width / 2.0),
            Shape::Arc(a) => Outline::Capsules(a.flatten(), a.width / 2.0),
            Shape::Polygon(p) => Outline::Tris(triangulate(&p.outer, &p.holes)),
            Shape::Text(t) => {
                let a = t.at;
                let b = Point::new(t.at.x + t.width, t.at.y);
                let c = Point::new(t.at.x + t.width, t.at.y + t.height);
                let d = Point::new(t.at.x, t.at.y + t.height);
                Outline::Tris(vec![Tri::new(a, b, c), Tri::new(a, c, d)])
            }
            Shape::Padstack(p) => Outline::Circle(p.at, p.diameter / 2.0),
        }
    }
}

/// Triangulate a ring-with-holes polygon into a triangle list
fn triangulate(outer: &[Point], holes: &[Vec<Point>]) -> Vec<Tri> {
    let mut flat: Vec<f64> = Vec::with_capacity(outer.len() * 2);
    let mut hole_indices: Vec<usize> = Vec::new();
    let mut verts: Vec<Point> = Vec::with_capacity(outer.len());

    for p in outer {
        flat.push(p.x);
        flat.push(p.y);
        verts.push(*p);
    }
    for hole in holes {
        if hole.len() < 3 {
            continue;
        }
        hole_indices.push(flat.len() / 2);
        for p in hole {
            flat.push(p.x);
            flat.push(p.y);
            verts.push(*p);
        }
    }

    let indices = earcutr::earcut(&flat, &hole_indices, 2).unwrap_or_default();
    indices
        .chunks_exact(3)
        .map(|c| Tri::new(verts[c[0]], verts[c[1]], verts[c[2]]))
        .collect()
}

/// Exact overlap test between two precomputed outlines
pub fn intersects(a: &Outline, b: &Outline) -> bool {
    use Outline::*;
    match (a, b) {
        (Capsules(sa, ra), Capsules(sb, rb)) => sa.iter().any(|&(a1, a2)| {
            sb.iter()
                .any(|&(b1, b2)| seg_seg_dist(a1, a2, b1, b2) <= ra + rb)
        }),
        (Capsules(segs, r), Circle(c, cr)) | (Circle(c, cr), Capsules(segs, r)) => segs
            .iter()
            .any(|&(p1, p2)| point_seg_dist(*c, p1, p2) <= r + cr),
        (Circle(c1, r1), Circle(c2, r2)) => c1.dist(c2) <= r1 + r2,
        (Tris(tris), Capsules(segs, r)) | (Capsules(segs, r), Tris(tris)) => tris
            .iter()
            .any(|t| segs.iter().any(|&(p1, p2)| tri_hits_capsule(t, p1, p2, *r))),
        (Tris(tris), Circle(c, r)) | (Circle(c, r), Tris(tris)) => {
            tris.iter().any(|t| tri_hits_circle(t, *c, *r))
        }
        (Tris(ta), Tris(tb)) => ta
            .iter()
            .any(|t1| tb.iter().any(|t2| tri_tri_overlap(t1, t2))),
    }
}

/// Containment probe used by point lookup: does the outline come within
/// `slop` of the given point?
pub fn hits_point(outline: &Outline, x: f64, y: f64, slop: f64) -> bool {
    intersects(outline, &Outline::Circle(Point::new(x, y), slop))
}

/// Point-to-segment minimum distance
pub fn point_seg_dist(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 < 1e-18 {
        // degenerate segment
        return p.dist(&a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.dist(&Point::new(a.x + t * abx, a.y + t * aby))
}

/// Segment-to-segment minimum distance; zero when they cross
pub fn seg_seg_dist(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    if segs_cross(a1, a2, b1, b2) {
        return 0.0;
    }
    point_seg_dist(a1, b1, b2)
        .min(point_seg_dist(a2, b1, b2))
        .min(point_seg_dist(b1, a1, a2))
        .min(point_seg_dist(b2, a1, a2))
}

fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Proper or touching segment intersection
pub fn segs_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // collinear / endpoint touches
    (d1 == 0.0 && on_seg(b1, b2, a1))
        || (d2 == 0.0 && on_seg(b1, b2, a2))
        || (d3 == 0.0 && on_seg(a1, a2, b1))
        || (d4 == 0.0 && on_seg(a1, a2, b2))
}

fn on_seg(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Point-in-triangle, winding independent, boundary inclusive
pub fn point_in_tri(p: Point, t: &Tri) -> bool {
    let d1 = orient(t.v[0], t.v[1], p);
    let d2 = orient(t.v[1], t.v[2], p);
    let d3 = orient(t.v[2], t.v[0], p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Filled triangle vs round-capped stroke of radius `r`
fn tri_hits_capsule(t: &Tri, p1: Point, p2: Point, r: f64) -> bool {
    // stroke endpoint inside the filled region
    if point_in_tri(p1, t) || point_in_tri(p2, t) {
        return true;
    }
    t.edges()
        .iter()
        .any(|&(e1, e2)| seg_seg_dist(p1, p2, e1, e2) <= r)
}

/// Filled triangle vs filled disc
fn tri_hits_circle(t: &Tri, c: Point, r: f64) -> bool {
    if point_in_tri(c, t) {
        return true;
    }
    t.edges()
        .iter()
        .any(|&(e1, e2)| point_seg_dist(c, e1, e2) <= r)
}

/// Filled triangle vs filled triangle
fn tri_tri_overlap(a: &Tri, b: &Tri) -> bool {
    if a.boxes_apart(b, 0.0) {
        return false;
    }
    if a.v.iter().any(|&p| point_in_tri(p, b)) || b.v.iter().any(|&p| point_in_tri(p, a)) {
        return true;
    }
    a.edges().iter().any(|&(a1, a2)| {
        b.edges()
            .iter()
            .any(|&(b1, b2)| segs_cross(a1, a2, b1, b2))
    })
}
