use ndarray::ArrayViewMut1;
use std::collections::BTreeMap;

use crate::{
    configuration::Configuration,
    error::Error,
    modification::{ModificationCatalog, ModificationDefinition},
    peptide::Peptide,
    score_record::{validate_score, ModificationScoreRecord},
    site_scores::SiteScores,
    utils::{masses_are_equivalent, max_score},
};

pub struct SiteScoreAggregator<'a> {
    config: &'a Configuration,
    catalog: &'a ModificationCatalog,
}

impl SiteScoreAggregator<'_> {
    /// Creates a new aggregator.
    ///
    /// Arguments:
    /// * `config` - Configuration, controls the mass equivalence of modifications
    /// * `catalog` - Resolves the mass of every modification name found in the score records
    ///
    pub fn new<'a>(
        config: &'a Configuration,
        catalog: &'a ModificationCatalog,
    ) -> SiteScoreAggregator<'a> {
        SiteScoreAggregator { config, catalog }
    }

    /// Reduces the site scores of all PSMs of a peptide to the best delta and probabilistic
    /// score per PSM and site, considering every modification with the same mass as `target`.
    ///
    /// The rows of the result follow `psm_score_records`. PSMs without a record keep an unset row.
    /// A zero length peptide results in matrices without columns.
    ///
    /// # Arguments
    /// * `sequence_length` - Number of residues of the peptide
    /// * `target` - Modification to show the localization for
    /// * `psm_score_records` - Modification scores, one entry per PSM
    ///
    pub fn aggregate(
        &self,
        sequence_length: usize,
        target: &ModificationDefinition,
        psm_score_records: &[Option<ModificationScoreRecord>],
    ) -> Result<SiteScores, Error> {
        let mut site_scores = SiteScores::unset(psm_score_records.len(), sequence_length);
        if sequence_length == 0 {
            return Ok(site_scores);
        }

        for (row, record) in psm_score_records.iter().enumerate() {
            let Some(record) = record else {
                continue;
            };
            for (modification, scoring) in record.iter() {
                let mass = self.catalog.mass(modification)?;
                if !masses_are_equivalent(mass, target.mass, self.config.mass_tolerance()) {
                    tracing::trace!(
                        "Skipping `{}` ({}) in row {}, not equivalent to `{}` ({})",
                        modification,
                        mass,
                        row,
                        target.name,
                        target.mass
                    );
                    continue;
                }

                update_row(
                    site_scores.delta_scores.row_mut(row),
                    scoring.delta_scores(),
                )?;
                update_row(
                    site_scores.probabilistic_scores.row_mut(row),
                    scoring.probabilistic_scores(),
                )?;
            }
        }

        tracing::debug!(
            "Aggregated site scores of `{}` for {} PSMs ({} with scores) over {} residues",
            target.name,
            psm_score_records.len(),
            site_scores.number_of_scored_psms(),
            sequence_length
        );

        Ok(site_scores)
    }

    /// Same as [`SiteScoreAggregator::aggregate`] using the peptide's sequence length.
    ///
    /// # Arguments
    /// * `peptide` - Peptide the PSMs belong to
    /// * `target` - Modification to show the localization for
    /// * `psm_score_records` - Modification scores, one entry per PSM
    ///
    pub fn aggregate_peptide(
        &self,
        peptide: &Peptide,
        target: &ModificationDefinition,
        psm_score_records: &[Option<ModificationScoreRecord>],
    ) -> Result<SiteScores, Error> {
        self.aggregate(peptide.len(), target, psm_score_records)
    }
}

/// Merges the sparse 1-based site scores into a matrix row, keeping the maximum.
fn update_row(
    mut row: ArrayViewMut1<Option<f64>>,
    site_scores: &BTreeMap<usize, f64>,
) -> Result<(), Error> {
    let length = row.len();
    for (&site, &score) in site_scores {
        if site == 0 || site > length {
            return Err(Error::SiteOutOfRange { site, length });
        }
        validate_score(score)?;
        let cell = &mut row[site - 1];
        *cell = max_score(*cell, score);
    }
    Ok(())
}
