//! Output type for stratified sampling.

/// Sampled pixel positions as two parallel index sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleIndices {
    /// Row index of every sample.
    rows: Vec<usize>,
    /// Column index of every sample.
    cols: Vec<usize>,
}

impl SampleIndices {
    /// Creates a new `SampleIndices`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` and `cols` differ in length.
    pub fn new(rows: Vec<usize>, cols: Vec<usize>) -> Self {
        assert_eq!(rows.len(), cols.len(), "rows and cols must have equal length");
        Self { rows, cols }
    }

    /// Creates an empty `SampleIndices` with room for `capacity` samples.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, row: usize, col: usize) {
        self.rows.push(row);
        self.cols.push(col);
    }

    /// Returns the sampled row indices.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns the sampled column indices.
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no samples were drawn.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(row, col)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Consumes the result, returning `(rows, cols)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.rows, self.cols)
    }
}
