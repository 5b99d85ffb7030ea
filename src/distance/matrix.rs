//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row and column `i` correspond to the `i`-th point of the scenario. The
/// base is not part of the matrix; use [`Point::distance_to_base`] for the
/// base legs. The matrix is never updated in place: when the point set
/// changes, build a new one.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::Point;
/// use pickup_routing::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0).unwrap(),
///     Point::new(1, 3.0, 4.0).unwrap(),
///     Point::new(2, 6.0, 8.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of the complete graph over
    /// `points`. An empty slice yields an empty matrix.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "index ({from}, {to}) out of bounds for {n}x{n} matrix",
            n = self.size
        );
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Index of the point closest to the base, first index on ties.
///
/// Returns `None` for an empty slice.
pub fn closest_to_base(points: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_to_base();
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0, 0.0, 0.0).expect("finite"),
            Point::new(1, 3.0, 4.0).expect("finite"),
            Point::new(2, 0.0, 8.0).expect("finite"),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert!(dm.is_empty());
        assert_eq!(dm.size(), 0);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let points = sample_points();
        assert_eq!(
            DistanceMatrix::from_points(&points),
            DistanceMatrix::from_points(&points)
        );
    }

    #[test]
    fn test_row() {
        let dm = DistanceMatrix::from_points(&sample_points());
        let row = dm.row(1);
        assert_eq!(row.len(), 3);
        assert!((row[0] - 5.0).abs() < 1e-10);
        assert_eq!(row[1], 0.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let dm = DistanceMatrix::from_points(&sample_points());
        dm.get(0, 3);
    }

    #[test]
    fn test_closest_to_base() {
        let points = vec![
            Point::new(0, 5.0, 5.0).expect("finite"),
            Point::new(1, 1.0, 0.0).expect("finite"),
            Point::new(2, 0.0, 1.0).expect("finite"),
        ];
        // Tie between 1 and 2 goes to the lower index
        assert_eq!(closest_to_base(&points), Some(1));
        assert_eq!(closest_to_base(&[]), None);
    }
}
