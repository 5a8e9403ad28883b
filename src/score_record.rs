use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Highest delta or probabilistic score
pub const MAX_SCORE: f64 = 100.0;

/// Localization scores of one modification within one PSM.
///
/// Both maps are keyed by the 1-based site. A site which is missing was not evaluated,
/// which is not the same as a score of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSiteScoring")]
pub struct SiteScoring {
    delta_scores: BTreeMap<usize, f64>,
    probabilistic_scores: BTreeMap<usize, f64>,
}

/// Unchecked serde representation of [`SiteScoring`]
#[derive(Deserialize)]
struct RawSiteScoring {
    #[serde(default)]
    delta_scores: BTreeMap<usize, f64>,
    #[serde(default)]
    probabilistic_scores: BTreeMap<usize, f64>,
}

impl TryFrom<RawSiteScoring> for SiteScoring {
    type Error = Error;

    fn try_from(raw: RawSiteScoring) -> Result<Self, Self::Error> {
        let scoring = raw
            .delta_scores
            .into_iter()
            .try_fold(Self::new(), |scoring, (site, score)| {
                scoring.add_delta_score(site, score)
            })?;
        raw.probabilistic_scores
            .into_iter()
            .try_fold(scoring, |scoring, (site, score)| {
                scoring.add_probabilistic_score(site, score)
            })
    }
}

impl SiteScoring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta scores keyed by 1-based site
    pub fn delta_scores(&self) -> &BTreeMap<usize, f64> {
        &self.delta_scores
    }

    /// Probabilistic scores keyed by 1-based site
    pub fn probabilistic_scores(&self) -> &BTreeMap<usize, f64> {
        &self.probabilistic_scores
    }

    /// Adds (or replaces) the delta score of a site.
    ///
    /// # Arguments
    /// * `site` - 1-based residue position
    /// * `score` - Delta score in [0, 100]
    ///
    pub fn add_delta_score(mut self, site: usize, score: f64) -> Result<Self, Error> {
        validate(site, score)?;
        self.delta_scores.insert(site, score);
        Ok(self)
    }

    /// Adds (or replaces) the probabilistic score of a site.
    ///
    /// # Arguments
    /// * `site` - 1-based residue position
    /// * `score` - Probabilistic score in [0, 100]
    ///
    pub fn add_probabilistic_score(mut self, site: usize, score: f64) -> Result<Self, Error> {
        validate(site, score)?;
        self.probabilistic_scores.insert(site, score);
        Ok(self)
    }
}

fn validate(site: usize, score: f64) -> Result<(), Error> {
    if site == 0 {
        return Err(Error::InvalidSite(site));
    }
    validate_score(score)
}

/// Fails on scores outside of [0, 100], NaN included.
pub(crate) fn validate_score(score: f64) -> Result<(), Error> {
    if !(0.0..=MAX_SCORE).contains(&score) {
        return Err(Error::ScoreOutOfRange(score));
    }
    Ok(())
}

/// Site scorings of a single PSM, keyed by modification name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModificationScoreRecord {
    scorings: BTreeMap<String, SiteScoring>,
}

impl ModificationScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scoring for a modification, returning the replaced one.
    pub fn insert(&mut self, modification: &str, scoring: SiteScoring) -> Option<SiteScoring> {
        self.scorings.insert(modification.to_string(), scoring)
    }

    /// Builder variant of [`ModificationScoreRecord::insert`]
    pub fn with_scoring(mut self, modification: &str, scoring: SiteScoring) -> Self {
        self.insert(modification, scoring);
        self
    }

    pub fn get(&self, modification: &str) -> Option<&SiteScoring> {
        self.scorings.get(modification)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SiteScoring> {
        self.scorings.iter()
    }

    pub fn len(&self) -> usize {
        self.scorings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scorings.is_empty()
    }
}
