// Wave Geometry
// Pure outline builder for the bar silhouette and its wave notch

/// A point in bar-local coordinates (x to the right, y growing downward, top edge at y = 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    fn translated(self, dx: f64) -> Point {
        Point { x: self.x + dx, y: self.y }
    }
}

/// One drawing command of a closed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathSegment {
    fn same_kind(&self, other: &PathSegment) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn map(self, f: impl Fn(Point) -> Point) -> PathSegment {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }

    fn zip(self, other: PathSegment, f: impl Fn(Point, Point) -> Point) -> PathSegment {
        match (self, other) {
            (PathSegment::MoveTo(a), PathSegment::MoveTo(b)) => PathSegment::MoveTo(f(a, b)),
            (PathSegment::LineTo(a), PathSegment::LineTo(b)) => PathSegment::LineTo(f(a, b)),
            (
                PathSegment::CubicTo { ctrl1: a1, ctrl2: a2, to: at },
                PathSegment::CubicTo { ctrl1: b1, ctrl2: b2, to: bt },
            ) => PathSegment::CubicTo {
                ctrl1: f(a1, b1),
                ctrl2: f(a2, b2),
                to: f(at, bt),
            },
            _ => PathSegment::Close,
        }
    }
}

/// Immutable closed outline of the bar including its notch
///
/// Produced fresh by [`WaveGeometry::outline`]; never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveOutline {
    segments: Vec<PathSegment>,
    /// Number of leading segments tracing the top edge (notch included)
    top_edge_len: usize,
}

impl WaveOutline {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True when both outlines have the same segment sequence, so they can be interpolated
    pub fn same_topology(&self, other: &WaveOutline) -> bool {
        self.segments.len() == other.segments.len()
            && self.top_edge_len == other.top_edge_len
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.same_kind(b))
    }

    /// Copy of this outline shifted horizontally by `dx`
    pub fn translated(&self, dx: f64) -> WaveOutline {
        WaveOutline {
            segments: self.segments.iter().map(|s| s.map(|p| p.translated(dx))).collect(),
            top_edge_len: self.top_edge_len,
        }
    }

    /// Point-for-point interpolation between two outlines
    ///
    /// Returns `None` when the topologies differ.
    pub fn interpolate(&self, target: &WaveOutline, t: f64) -> Option<WaveOutline> {
        if !self.same_topology(target) {
            return None;
        }
        let segments = self
            .segments
            .iter()
            .zip(&target.segments)
            .map(|(a, b)| a.zip(*b, |p, q| p.lerp(q, t)))
            .collect();
        Some(WaveOutline {
            segments,
            top_edge_len: self.top_edge_len,
        })
    }

    /// Flatten only the top edge, from the top-left corner to the top-right corner
    pub fn top_edge(&self, curve_steps: usize) -> Vec<Point> {
        flatten_segments(&self.segments[..self.top_edge_len], curve_steps)
    }
}

/// Each cubic contributes `curve_steps` points
fn flatten_segments(segments: &[PathSegment], curve_steps: usize) -> Vec<Point> {
    let steps = curve_steps.max(1);
    let mut points = Vec::new();
    let mut current = Point::new(0.0, 0.0);

    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                current = p;
                points.push(p);
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                for step in 1..=steps {
                    let t = step as f64 / steps as f64;
                    points.push(cubic_point(current, ctrl1, ctrl2, to, t));
                }
                current = to;
            }
            PathSegment::Close => {}
        }
    }

    points
}

/// Evaluate a cubic Bézier at `t`
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point {
        x: a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        y: a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    }
}

/// Notch shape constants
///
/// Every outline of one engine uses the same profile so outlines stay congruent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveProfile {
    /// Depth of the notch below the top edge
    pub depth: f64,
    /// Horizontal distance from the notch center to where it leaves the top edge
    pub half_width: f64,
    /// Offset of the control point lying on the top edge
    pub shoulder: f64,
    /// Offset of the control point lying on the notch floor
    pub trough: f64,
}

impl WaveProfile {
    /// Profile derived from a single depth: half-width `2H`, shoulder `H`, trough `0.75H`
    pub fn from_depth(depth: f64) -> Self {
        Self {
            depth,
            half_width: depth * 2.0,
            shoulder: depth,
            trough: depth * 0.75,
        }
    }
}

impl Default for WaveProfile {
    fn default() -> Self {
        Self::from_depth(crate::core::app_config::compiled::NOTCH_DEPTH)
    }
}

/// Stateless outline builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    profile: WaveProfile,
}

impl WaveGeometry {
    pub const fn new(profile: WaveProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> WaveProfile {
        self.profile
    }

    /// Build the bar outline with the notch centered at `center_x`
    ///
    /// No clamping is done; a center near the bar ends produces a notch that leaves the bar.
    pub fn outline(&self, center_x: f64, bar_width: f64, bar_height: f64) -> WaveOutline {
        let WaveProfile {
            depth,
            half_width,
            shoulder,
            trough,
        } = self.profile;

        let segments = vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(center_x - half_width, 0.0)),
            PathSegment::CubicTo {
                ctrl1: Point::new(center_x - shoulder, 0.0),
                ctrl2: Point::new(center_x - trough, depth),
                to: Point::new(center_x, depth),
            },
            PathSegment::CubicTo {
                ctrl1: Point::new(center_x + trough, depth),
                ctrl2: Point::new(center_x + shoulder, 0.0),
                to: Point::new(center_x + half_width, 0.0),
            },
            PathSegment::LineTo(Point::new(bar_width, 0.0)),
            PathSegment::LineTo(Point::new(bar_width, bar_height)),
            PathSegment::LineTo(Point::new(0.0, bar_height)),
            PathSegment::Close,
        ];

        WaveOutline {
            segments,
            top_edge_len: 5,
        }
    }
}

impl Default for WaveGeometry {
    fn default() -> Self {
        Self::new(WaveProfile::default())
    }
}
