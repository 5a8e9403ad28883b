use ndarray::{Array1, Array2, Axis};

use crate::utils::max_score;

/// Site localization scores of one peptide, one row per PSM and one column per residue.
///
/// Columns are 0-based, column `j` holds the score of residue site `j + 1`.
/// `None` marks a site which was not evaluated, as opposed to a score of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteScores {
    pub delta_scores: Array2<Option<f64>>,
    pub probabilistic_scores: Array2<Option<f64>>,
}

impl SiteScores {
    /// Creates unset score matrices.
    ///
    /// # Arguments
    /// * `number_of_psms` - Number of rows
    /// * `sequence_length` - Number of residues (columns)
    ///
    pub fn unset(number_of_psms: usize, sequence_length: usize) -> Self {
        Self {
            delta_scores: Array2::from_elem((number_of_psms, sequence_length), None),
            probabilistic_scores: Array2::from_elem((number_of_psms, sequence_length), None),
        }
    }

    pub fn number_of_psms(&self) -> usize {
        self.delta_scores.nrows()
    }

    pub fn sequence_length(&self) -> usize {
        self.delta_scores.ncols()
    }

    /// Delta score of the PSM in `row` at the 1-based `site`
    pub fn delta_score(&self, row: usize, site: usize) -> Option<f64> {
        cell(&self.delta_scores, row, site)
    }

    /// Probabilistic score of the PSM in `row` at the 1-based `site`
    pub fn probabilistic_score(&self, row: usize, site: usize) -> Option<f64> {
        cell(&self.probabilistic_scores, row, site)
    }

    /// True if no site of the given row was scored.
    pub fn is_row_empty(&self, row: usize) -> bool {
        if row >= self.number_of_psms() {
            return true;
        }
        self.delta_scores.row(row).iter().all(Option::is_none)
            && self.probabilistic_scores.row(row).iter().all(Option::is_none)
    }

    /// Number of PSMs with at least one scored site.
    pub fn number_of_scored_psms(&self) -> usize {
        (0..self.number_of_psms())
            .filter(|&row| !self.is_row_empty(row))
            .count()
    }

    /// Highest delta score per site over all PSMs.
    pub fn best_delta_scores(&self) -> Array1<Option<f64>> {
        column_max(&self.delta_scores)
    }

    /// Highest probabilistic score per site over all PSMs.
    pub fn best_probabilistic_scores(&self) -> Array1<Option<f64>> {
        column_max(&self.probabilistic_scores)
    }
}

fn cell(scores: &Array2<Option<f64>>, row: usize, site: usize) -> Option<f64> {
    site.checked_sub(1)
        .and_then(|column| scores.get((row, column)))
        .copied()
        .flatten()
}

fn column_max(scores: &Array2<Option<f64>>) -> Array1<Option<f64>> {
    scores.map_axis(Axis(0), |column| {
        column
            .iter()
            .flatten()
            .fold(None, |best, &score| max_score(best, score))
    })
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn scores() -> SiteScores {
        SiteScores {
            delta_scores: array![
                [None, Some(55.0), None, Some(10.0), None],
                [None, Some(70.0), None, None, None],
                [None, None, None, None, None],
            ],
            probabilistic_scores: array![
                [None, Some(20.0), None, Some(0.0), None],
                [None, Some(33.0), None, None, None],
                [None, None, None, None, None],
            ],
        }
    }

    #[test]
    fn test_unset() {
        let scores = SiteScores::unset(2, 4);
        assert_eq!(scores.number_of_psms(), 2);
        assert_eq!(scores.sequence_length(), 4);
        assert!(scores.delta_scores.iter().all(Option::is_none));
        assert!(scores.is_row_empty(0) && scores.is_row_empty(1));
    }

    #[test]
    fn test_site_access() {
        let scores = scores();
        assert_eq!(scores.delta_score(0, 2), Some(55.0));
        assert_eq!(scores.delta_score(0, 1), None);
        assert_eq!(scores.delta_score(0, 0), None);
        assert_eq!(scores.delta_score(0, 6), None);
        assert_eq!(scores.delta_score(3, 2), None);
        assert_eq!(scores.probabilistic_score(0, 4), Some(0.0));
        assert_eq!(scores.probabilistic_score(1, 4), None);
    }

    #[test]
    fn test_is_row_empty() {
        let scores = scores();
        assert!(!scores.is_row_empty(0));
        assert!(!scores.is_row_empty(1));
        assert!(scores.is_row_empty(2));
        assert!(scores.is_row_empty(10));
        assert_eq!(scores.number_of_scored_psms(), 2);
        assert_eq!(SiteScores::unset(4, 3).number_of_scored_psms(), 0);
    }

    #[test]
    fn test_best_scores() {
        let scores = scores();
        assert_eq!(
            scores.best_delta_scores(),
            array![None, Some(70.0), None, Some(10.0), None]
        );
        assert_eq!(
            scores.best_probabilistic_scores(),
            array![None, Some(33.0), None, Some(0.0), None]
        );
    }
}
