//! Dense row-major matrix used for spectrograms and cepstral features

/// `rows × cols` grid; rows are coefficients or frequency bins, cols are frames
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl FeatureMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build from row-major data; `None` if the length does not match the shape
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn map_in_place(&mut self, f: impl Fn(f32) -> f32) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Arithmetic mean of each row across all frames
    pub fn row_means(&self) -> Vec<f32> {
        if self.cols == 0 {
            return vec![0.0; self.rows];
        }
        (0..self.rows)
            .map(|r| {
                let sum: f64 = self.row(r).iter().map(|&v| v as f64).sum();
                (sum / self.cols as f64) as f32
            })
            .collect()
    }

    /// (min, max) over all cells, `None` for an empty matrix
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.data.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_means() {
        let m = FeatureMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, -1.0, -1.0, 2.0]).unwrap();
        let means = m.row_means();
        assert_eq!(means.len(), 2);
        assert!((means[0] - 2.0).abs() < 1e-6);
        assert!(means[1].abs() < 1e-6);
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(FeatureMatrix::from_vec(2, 2, vec![0.0; 3]).is_none());
    }

    #[test]
    fn test_column_and_min_max() {
        let m = FeatureMatrix::from_vec(2, 2, vec![1.0, 5.0, -3.0, 2.0]).unwrap();
        assert_eq!(m.column(1), vec![5.0, 2.0]);
        assert_eq!(m.min_max(), Some((-3.0, 5.0)));
        assert_eq!(FeatureMatrix::zeros(0, 0).min_max(), None);
    }
}
