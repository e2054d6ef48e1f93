//! Dense integer matrix multiplication.

use crate::error::{KataError, Result};

/// Row-major matrix.
pub type Matrix = Vec<Vec<i64>>;

/// Multiply `left` (n×m) by `right` (m×p), producing an n×p matrix.
///
/// Rows of each operand must have equal length. An empty `left` yields an
/// empty product.
pub fn matrix_product(left: &[Vec<i64>], right: &[Vec<i64>]) -> Result<Matrix> {
    let Some(inner) = uniform_width(left)? else {
        return Ok(Vec::new());
    };
    if inner != right.len() {
        return Err(KataError::DimensionMismatch {
            left_cols: inner,
            right_rows: right.len(),
        });
    }
    let columns = uniform_width(right)?.unwrap_or(0);

    let mut product = Vec::with_capacity(left.len());
    for row in left {
        let mut cells = Vec::with_capacity(columns);
        for column in 0..columns {
            cells.push(dot(row, right, column)?);
        }
        product.push(cells);
    }
    Ok(product)
}

/// Dot product of `row` with column `column` of `right`.
fn dot(row: &[i64], right: &[Vec<i64>], column: usize) -> Result<i64> {
    row.iter()
        .zip(right)
        .try_fold(0i64, |acc, (value, right_row)| {
            value
                .checked_mul(right_row[column])
                .and_then(|term| acc.checked_add(term))
        })
        .ok_or(KataError::Overflow {
            operation: "matrix product",
        })
}

/// Width shared by every row, or `None` when there are no rows.
fn uniform_width(matrix: &[Vec<i64>]) -> Result<Option<usize>> {
    let Some(first) = matrix.first() else {
        return Ok(None);
    };
    let expected = first.len();
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != expected {
            return Err(KataError::RaggedMatrix {
                row,
                expected,
                got: values.len(),
            });
        }
    }
    Ok(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_matrix_unchanged() {
        let identity = vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
        let m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(matrix_product(&identity, &m), Ok(m));
    }

    #[test]
    fn row_times_column_is_dot_product() {
        let row = vec![vec![1, 2, 3]];
        let column = vec![vec![4], vec![5], vec![6]];
        assert_eq!(matrix_product(&row, &column), Ok(vec![vec![32]]));
    }

    #[test]
    fn column_times_row_is_outer_product() {
        let column = vec![vec![1], vec![2]];
        let row = vec![vec![3, 4, 5]];
        assert_eq!(
            matrix_product(&column, &row),
            Ok(vec![vec![3, 4, 5], vec![6, 8, 10]])
        );
    }

    #[test]
    fn non_square_product_has_outer_dimensions() {
        let left = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let right = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
        assert_eq!(
            matrix_product(&left, &right),
            Ok(vec![vec![58, 64], vec![139, 154]])
        );
    }

    #[test]
    fn empty_left_gives_empty_product() {
        assert_eq!(matrix_product(&[], &[vec![1]]), Ok(Vec::new()));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let left = vec![vec![1, 2]];
        let right = vec![vec![1], vec![2], vec![3]];
        assert_eq!(
            matrix_product(&left, &right),
            Err(KataError::DimensionMismatch {
                left_cols: 2,
                right_rows: 3,
            })
        );
    }

    #[test]
    fn reports_overflowing_term() {
        assert_eq!(
            matrix_product(&[vec![i64::MAX]], &[vec![2]]),
            Err(KataError::Overflow {
                operation: "matrix product"
            })
        );
    }

    #[test]
    fn reports_overflowing_sum() {
        let left = vec![vec![i64::MAX, 1]];
        let right = vec![vec![1], vec![1]];
        assert_eq!(
            matrix_product(&left, &right),
            Err(KataError::Overflow {
                operation: "matrix product"
            })
        );
    }

    #[test]
    fn large_values_that_fit_are_kept() {
        let left = vec![vec![i64::MAX, -1]];
        let right = vec![vec![1], vec![1]];
        assert_eq!(matrix_product(&left, &right), Ok(vec![vec![i64::MAX - 1]]));
    }

    #[test]
    fn rejects_ragged_rows() {
        let left = vec![vec![1, 2], vec![3]];
        let right = vec![vec![1], vec![2]];
        assert_eq!(
            matrix_product(&left, &right),
            Err(KataError::RaggedMatrix {
                row: 1,
                expected: 2,
                got: 1,
            })
        );
    }
}
