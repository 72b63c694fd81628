use crate::*;

/// Summary of an execution outcome: per result set row and column counts,
/// never the data itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultShape {
    pub statement_count: usize,
    pub row_counts: Vec<usize>,
    pub column_counts: Vec<usize>,
}

impl ResultShape {
    pub fn new(row_counts: Vec<usize>, column_counts: Vec<usize>) -> Self {
        Self {
            statement_count: row_counts.len(),
            row_counts,
            column_counts,
        }
    }

    /// Reduce executed result sets to their counts.
    pub fn from_results(results: &[ResultSet]) -> Self {
        Self::new(
            results.iter().map(ResultSet::row_count).collect(),
            results.iter().map(ResultSet::column_count).collect(),
        )
    }

    /// Shape of a single result set.
    pub fn single(rows: usize, columns: usize) -> Self {
        Self::new(vec![rows], vec![columns])
    }

    /// Rows in the first result set; zero when nothing was returned.
    pub fn first_row_count(&self) -> usize {
        self.row_counts.first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.first_row_count() == 0
    }
}
