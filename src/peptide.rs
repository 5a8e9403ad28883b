use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A variable modification placed on a residue of a peptide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModificationOccurrence {
    pub modification: String,
    /// 1-based residue position
    pub site: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPeptide")]
pub struct Peptide {
    sequence: String,
    variable_modifications: Vec<ModificationOccurrence>,
}

/// Unchecked serde representation of [`Peptide`]
#[derive(Deserialize)]
struct RawPeptide {
    sequence: String,
    #[serde(default)]
    variable_modifications: Vec<ModificationOccurrence>,
}

impl TryFrom<RawPeptide> for Peptide {
    type Error = Error;

    fn try_from(raw: RawPeptide) -> Result<Self, Self::Error> {
        let peptide = Peptide::new(&raw.sequence)?;
        raw.variable_modifications
            .into_iter()
            .try_fold(peptide, |peptide, occurrence| {
                peptide.with_modification(&occurrence.modification, occurrence.site)
            })
    }
}

impl Peptide {
    /// Creates a new unmodified peptide. Residues are upper cased.
    ///
    /// # Arguments
    /// * `sequence` - One letter amino acid sequence
    ///
    pub fn new(sequence: &str) -> Result<Self, Error> {
        if let Some(invalid) = sequence.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidPeptideSequence(format!(
                "`{sequence}` contains `{invalid}`"
            )));
        }
        Ok(Self {
            sequence: sequence.to_ascii_uppercase(),
            variable_modifications: Vec::new(),
        })
    }

    /// Adds a variable modification.
    ///
    /// # Arguments
    /// * `modification` - Modification name
    /// * `site` - 1-based residue position
    ///
    pub fn with_modification(mut self, modification: &str, site: usize) -> Result<Self, Error> {
        if site == 0 || site > self.len() {
            return Err(Error::SiteOutOfRange {
                site,
                length: self.len(),
            });
        }
        self.variable_modifications.push(ModificationOccurrence {
            modification: modification.to_string(),
            site,
        });
        Ok(self)
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn variable_modifications(&self) -> &[ModificationOccurrence] {
        &self.variable_modifications
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Residue at the given 1-based site.
    pub fn residue(&self, site: usize) -> Option<char> {
        site.checked_sub(1)
            .and_then(|index| self.sequence.as_bytes().get(index))
            .map(|&residue| residue as char)
    }

    /// Column headers for a site score table, residue letter followed by its 1-based position, e.g. `S3`.
    pub fn site_labels(&self) -> Vec<String> {
        self.sequence
            .chars()
            .enumerate()
            .map(|(index, residue)| format!("{residue}{}", index + 1))
            .collect()
    }

    /// Sorted 1-based sites carrying the given variable modification.
    pub fn modification_sites(&self, modification: &str) -> Vec<usize> {
        let mut sites: Vec<usize> = self
            .variable_modifications
            .iter()
            .filter(|occurrence| occurrence.modification == modification)
            .map(|occurrence| occurrence.site)
            .collect();
        sites.sort_unstable();
        sites.dedup();
        sites
    }
}
