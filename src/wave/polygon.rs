use crate::foundation::core::{BezPath, Point};

/// Closed outline of the filled wave.
///
/// Layout: the wave points from left to right, the bottom-right corner, the bottom-left corner,
/// then the first wave point again. An empty polygon means there is nothing to paint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WavePolygon {
    points: Vec<Point>,
    wave_len: usize,
}

impl WavePolygon {
    /// Polygon with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the closed outline from wave points and the surface bottom edge.
    ///
    /// An empty `wave` yields an empty polygon.
    pub(crate) fn from_wave(wave: Vec<Point>, width: f64, height: f64) -> Self {
        let Some(&first) = wave.first() else {
            return Self::empty();
        };
        let wave_len = wave.len();
        let mut points = wave;
        points.reserve_exact(3);
        points.push(Point::new(width, height));
        points.push(Point::new(0.0, height));
        points.push(first);
        Self { points, wave_len }
    }

    /// All points in drawing order, including the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Only the sampled wave points, left to right.
    pub fn wave_points(&self) -> &[Point] {
        &self.points[..self.wave_len]
    }

    /// The bottom-right and bottom-left corners, if the polygon is non-empty.
    pub fn bottom_corners(&self) -> Option<(Point, Point)> {
        if self.points.is_empty() {
            return None;
        }
        Some((self.points[self.wave_len], self.points[self.wave_len + 1]))
    }

    /// Return `true` when there is nothing to paint.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points, including the closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// First and last points coincide. Trivially true for the empty polygon.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }

    /// Convert to a closed `kurbo` path suitable for non-zero fill.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((&first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close_path();
        path
    }
}
