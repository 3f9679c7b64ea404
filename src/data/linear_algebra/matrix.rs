//! # Dense matrices
//!
//! The simplex tableau is stored in a single dense, row-major matrix. Rows can be combined with
//! the elementary row operations that Gauss-Jordan elimination needs, and rows and columns can be
//! removed once they are no longer relevant.
use std::slice::Iter;

use index_utils::remove_indices;
use num_traits::Zero;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Rows all have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided rows.
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);

        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![f64::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Divide all values in row `i` by `divisor`.
    ///
    /// The value at a position that equals `divisor` becomes exactly one.
    pub fn divide_row(&mut self, i: usize, divisor: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert_ne!(divisor, 0f64);

        for value in &mut self.data[i] {
            *value /= divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read_value = self.data[read_row][j];
            self.data[write_row][j] += factor * read_value;
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Remove row `i`.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows);

        self.data.remove(i);
        self.nr_rows -= 1;
    }

    /// Remove a set of rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, unique row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted_by(|a, b| a < b));
        debug_assert!(indices.last().map_or(true, |&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Remove a set of columns from every row.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, unique column indices.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted_by(|a, b| a < b));
        debug_assert!(indices.last().map_or(true, |&j| j < self.nr_columns));

        for row in &mut self.data {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// If all row lengths agree, return the dimensions of the vector `data`.
fn get_data_dimensions(data: &[Vec<f64>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
