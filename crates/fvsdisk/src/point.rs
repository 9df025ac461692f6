//! Exact-value 2D points and an insertion-ordered point set.
//!
//! - `Point`: coordinate pair compared and hashed by exact value. Two input
//!   points with identical coordinates are the same vertex to every algorithm
//!   in this crate.
//! - `PointSet`: deduplicating container that remembers first-insertion order.
//!   Scan orders in greedy construction and local search follow that order.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality, not proximity.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm()
    }

    // -0.0 and 0.0 share a key; NaN keys by bit pattern so sets stay well formed.
    #[inline]
    fn key(self) -> (u64, u64) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 {
                0.0f64.to_bits()
            } else {
                v.to_bits()
            }
        }
        (bits(self.x), bits(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered set of distinct points. Duplicates collapse onto the first occurrence.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    items: Vec<Point>,
    index: HashSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p`; returns false if an equal point is already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.index.insert(p) {
            self.items.push(p);
            true
        } else {
            false
        }
    }

    /// Remove `p` keeping the order of the remaining points.
    pub fn remove(&mut self, p: &Point) -> bool {
        if self.index.remove(p) {
            self.items.retain(|q| q != p);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.index.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.items
    }

    /// True if every point of `self` is in `other`.
    pub fn is_subset(&self, other: &PointSet) -> bool {
        self.items.iter().all(|p| other.contains(p))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl From<&[Point]> for PointSet {
    fn from(points: &[Point]) -> Self {
        points.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_keeping_first_order() {
        let pts = [
            Point::new(3.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(-0.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        let set = PointSet::from(&pts[..]);
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.as_slice(),
            &[Point::new(3.0, 1.0), Point::new(0.0, 0.0), Point::new(2.0, 2.0)]
        );
    }

    #[test]
    fn remove_preserves_order() {
        let mut set: PointSet = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();
        assert!(set.remove(&Point::new(2.0, 0.0)));
        assert!(!set.remove(&Point::new(2.0, 0.0)));
        let xs: Vec<f64> = set.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn distance_matches_pythagoras() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn nan_point_is_equal_to_itself() {
        let p = Point::new(f64::NAN, 1.0);
        let mut set = PointSet::new();
        assert!(set.insert(p));
        assert!(!set.insert(p));
    }
}
