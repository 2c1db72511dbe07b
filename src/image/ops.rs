//! Whole-grid rearrangements on nested row vectors.
//!
//! These work on any `Vec<Vec<T>>`: pixel matrices, weight rows, or plain
//! numbers in tests. All functions consume their input and return the
//! rearranged grid.
use crate::error::PixelError;

/// Mirror each row left-to-right.
pub fn reverse_columns<T>(mut grid: Vec<Vec<T>>) -> Vec<Vec<T>> {
    for row in &mut grid {
        row.reverse();
    }
    grid
}

/// Rotate by 180°: `out[r][c] == in[h-1-r][w-1-c]`.
pub fn rotate_180<T>(grid: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let mut grid = reverse_columns(grid);
    grid.reverse();
    grid
}

/// Concatenate `right` onto `left` row by row.
pub fn join_horizontal<T>(
    left: Vec<Vec<T>>,
    right: Vec<Vec<T>>,
) -> Result<Vec<Vec<T>>, PixelError> {
    if left.len() != right.len() {
        return Err(PixelError::ShapeMismatch(format!(
            "cannot join {} rows with {} rows",
            left.len(),
            right.len()
        )));
    }
    Ok(left
        .into_iter()
        .zip(right)
        .map(|(mut l, r)| {
            l.extend(r);
            l
        })
        .collect())
}

/// Assemble four quadrants into one grid:
///
/// ```text
/// top_left    | top_right
/// ------------+-------------
/// bottom_left | bottom_right
/// ```
pub fn join_quadrants<T>(
    top_left: Vec<Vec<T>>,
    top_right: Vec<Vec<T>>,
    bottom_left: Vec<Vec<T>>,
    bottom_right: Vec<Vec<T>>,
) -> Result<Vec<Vec<T>>, PixelError> {
    let mut top = join_horizontal(top_left, top_right)?;
    let bottom = join_horizontal(bottom_left, bottom_right)?;
    if let (Some(t), Some(b)) = (top.first(), bottom.first()) {
        if t.len() != b.len() {
            return Err(PixelError::ShapeMismatch(format!(
                "top half is {} wide, bottom half is {} wide",
                t.len(),
                b.len()
            )));
        }
    }
    top.extend(bottom);
    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[i32]]) -> Vec<Vec<i32>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn reverse_columns_mirrors_rows() {
        let g = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(
            reverse_columns(g),
            grid(&[&[3, 2, 1], &[6, 5, 4], &[9, 8, 7]])
        );
    }

    #[test]
    fn rotate_180_reverses_both_axes() {
        let g = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(rotate_180(g), grid(&[&[9, 8, 7], &[6, 5, 4], &[3, 2, 1]]));
    }

    #[test]
    fn join_horizontal_appends_rows() {
        let left = grid(&[&[1, 2, 3], &[7, 8, 9], &[13, 14, 15]]);
        let right = grid(&[&[4, 5, 6], &[10, 11, 12], &[16, 17, 18]]);
        assert_eq!(
            join_horizontal(left, right).unwrap(),
            grid(&[
                &[1, 2, 3, 4, 5, 6],
                &[7, 8, 9, 10, 11, 12],
                &[13, 14, 15, 16, 17, 18]
            ])
        );
    }

    #[test]
    fn join_quadrants_builds_square() {
        let joined = join_quadrants(
            grid(&[&[1, 2, 3], &[7, 8, 9], &[13, 14, 15]]),
            grid(&[&[4, 5, 6], &[10, 11, 12], &[16, 17, 18]]),
            grid(&[&[19, 20, 21], &[25, 26, 27], &[31, 32, 33]]),
            grid(&[&[22, 23, 24], &[28, 29, 30], &[34, 35, 36]]),
        )
        .unwrap();
        let expected: Vec<Vec<i32>> = (0..6)
            .map(|r| (1..=6).map(|c| r * 6 + c).collect())
            .collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn mismatched_joins_fail() {
        assert!(join_horizontal(grid(&[&[1]]), grid(&[&[2], &[3]])).is_err());
        assert!(join_quadrants(
            grid(&[&[1]]),
            grid(&[&[2]]),
            grid(&[&[3]]),
            grid(&[&[4, 5]])
        )
        .is_err());
    }
}
