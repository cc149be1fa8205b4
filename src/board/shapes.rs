//! Drawing primitives that participate in connectivity
//!
//! All conductive shapes are round-capped strokes, filled polygons or
//! padstacks. Text takes part as its extent rectangle only.

use serde::Serialize;

use super::layers::LayerId;

/// A 2D point in board units (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn dist(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Round-capped thick segment (a trace)
#[derive(Debug, Clone)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub width: f64,
}

/// Round-capped thick arc stroke
///
/// Angles are in degrees, counter-clockwise from the positive x axis.
#[derive(Debug, Clone)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub width: f64,
}

impl Arc {
    /// Point on the arc curve at the given angle
    pub fn point_at(&self, angle_deg: f64) -> Point {
        let a = angle_deg.to_radians();
        Point::new(
            self.center.x + self.radius * a.cos(),
            self.center.y + self.radius * a.sin(),
        )
    }

    /// Flatten the curve into a chain of straight segments, at most 15
    /// degrees of sweep each
    pub fn flatten(&self) -> Vec<(Point, Point)> {
        let steps = ((self.sweep_deg.abs() / 15.0).ceil() as usize).max(1);
        let step = self.sweep_deg / steps as f64;
        let mut segs = Vec::with_capacity(steps);
        let mut prev = self.point_at(self.start_deg);
        for i in 1..=steps {
            let next = self.point_at(self.start_deg + step * i as f64);
            segs.push((prev, next));
            prev = next;
        }
        segs
    }
}

/// Filled polygon with optional holes
#[derive(Debug, Clone)]
pub struct Polygon {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

/// Text extents; connectivity treats text as its rectangle
#[derive(Debug, Clone)]
pub struct Text {
    pub at: Point,
    pub width: f64,
    pub height: f64,
    pub value: String,
}

/// Layers a padstack carries copper on
#[derive(Debug, Clone)]
pub enum PadstackSpan {
    /// Plated through-hole: copper on every layer
    All,
    /// Blind/buried: copper only on the listed layers
    Layers(Vec<LayerId>),
}

impl PadstackSpan {
    pub fn on_layer(&self, layer: LayerId) -> bool {
        match self {
            PadstackSpan::All => true,
            PadstackSpan::Layers(ids) => ids.contains(&layer),
        }
    }

    /// Whether two spans have at least one layer in common
    pub fn overlaps(&self, other: &PadstackSpan) -> bool {
        match (self, other) {
            (PadstackSpan::All, _) | (_, PadstackSpan::All) => true,
            (PadstackSpan::Layers(a), PadstackSpan::Layers(b)) => {
                a.iter().any(|l| b.contains(l))
            }
        }
    }
}

/// Multi-layer connector (via or through-hole pad), owned by the board
/// rather than any single layer
#[derive(Debug, Clone)]
pub struct Padstack {
    pub at: Point,
    pub diameter: f64,
    pub hole: f64,
    pub span: PadstackSpan,
}

/// Closed set of drawing primitives the search understands
#[derive(Debug, Clone)]
pub enum Shape {
    Line(Line),
    Arc(Arc),
    Polygon(Polygon),
    Text(Text),
    Padstack(Padstack),
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Arc(_) => "arc",
            Shape::Polygon(_) => "polygon",
            Shape::Text(_) => "text",
            Shape::Padstack(_) => "padstack",
        }
    }

    /// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]`
    pub fn bounds(&self) -> [f64; 4] {
        match self {
            Shape::Line(l) => {
                let r = l.width / 2.0;
                [
                    l.p1.x.min(l.p2.x) - r,
                    l.p1.y.min(l.p2.y) - r,
                    l.p1.x.max(l.p2.x) + r,
                    l.p1.y.max(l.p2.y) + r,
                ]
            }
            Shape::Arc(a) => arc_bounds(a),
            Shape::Polygon(p) => points_bounds(&p.outer),
            Shape::Text(t) => [t.at.x, t.at.y, t.at.x + t.width, t.at.y + t.height],
            Shape::Padstack(p) => {
                let r = p.diameter / 2.0;
                [p.at.x - r, p.at.y - r, p.at.x + r, p.at.y + r]
            }
        }
    }
}

fn points_bounds(pts: &[Point]) -> [f64; 4] {
    let mut b = [f64::MAX, f64::MAX, f64::MIN, f64::MIN];
    for p in pts {
        b[0] = b[0].min(p.x);
        b[1] = b[1].min(p.y);
        b[2] = b[2].max(p.x);
        b[3] = b[3].max(p.y);
    }
    b
}

/// Tight arc box: endpoints plus any axis extreme the sweep passes,
/// bloated by half the stroke width
fn arc_bounds(a: &Arc) -> [f64; 4] {
    let mut pts = vec![a.point_at(a.start_deg), a.point_at(a.start_deg + a.sweep_deg)];
    let (lo, hi) = if a.sweep_deg >= 0.0 {
        (a.start_deg, a.start_deg + a.sweep_deg)
    } else {
        (a.start_deg + a.sweep_deg, a.start_deg)
    };
    // axis crossings at multiples of 90 degrees
    let mut ang = (lo / 90.0).ceil() * 90.0;
    while ang <= hi {
        pts.push(a.point_at(ang));
        ang += 90.0;
    }
    let mut b = points_bounds(&pts);
    let r = a.width / 2.0;
    b[0] -= r;
    b[1] -= r;
    b[2] += r;
    b[3] += r;
    b
}
