// src/data_input/matrix_loader.rs

use ndarray::Array2;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ViewerError, ViewerResult};

/// Reads a whitespace-delimited numeric text file into a 2-D array.
///
/// Each non-empty line is one row; tokens on a line are the columns.
/// Everything from a `#` to the end of its line is a comment. A file with a single
/// data line yields a `1 x M` matrix.
///
/// Fails with [`ViewerError::FileNotFound`] before any read is attempted
/// when `path` is not an existing file.
pub fn load_matrix(path: &Path) -> ViewerResult<Array2<f64>> {
    if !path.is_file() {
        return Err(ViewerError::FileNotFound(path.to_path_buf()));
    }

    let io_err = |source: io::Error| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut values: Vec<f64> = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut n_rows = 0usize;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(io_err)?;
        let data = line.split('#').next().unwrap_or("");
        let trimmed_line = data.trim();

        // Skip empty and comment-only lines
        if trimmed_line.is_empty() {
            continue;
        }

        let row_start = values.len();
        for (col_idx, token) in trimmed_line.split_whitespace().enumerate() {
            let value = token.parse::<f64>().map_err(|_| ViewerError::Parse {
                path: path.to_path_buf(),
                line: line_idx + 1,
                column: col_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }

        let found = values.len() - row_start;
        match n_cols {
            None => n_cols = Some(found),
            Some(expected) if expected != found => {
                return Err(ViewerError::RaggedRow {
                    path: path.to_path_buf(),
                    line: line_idx + 1,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        n_rows += 1;
    }

    let n_cols = match n_cols {
        Some(cols) => cols,
        None => return Err(ViewerError::EmptyMatrix(path.to_path_buf())),
    };

    tracing::debug!(path = %path.display(), rows = n_rows, cols = n_cols, "matrix loaded");

    // Every row was checked against n_cols above, so the shape always fits
    Array2::from_shape_vec((n_rows, n_cols), values).map_err(|_| ViewerError::RaggedRow {
        path: path.to_path_buf(),
        line: n_rows,
        expected: n_cols,
        found: 0,
    })
}
