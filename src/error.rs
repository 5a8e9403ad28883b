use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Modification `{0}` is not part of the modification catalog")]
    UnknownModification(String),
    #[error("Invalid peptide sequence: {0}")]
    InvalidPeptideSequence(String),
    #[error("Site {site} is outside of the peptide (length {length})")]
    SiteOutOfRange { site: usize, length: usize },
    #[error("Sites are 1-based, got {0}")]
    InvalidSite(usize),
    #[error("Score {0} is outside of [0, 100]")]
    ScoreOutOfRange(f64),
    #[error("Mass tolerance must not be negative, got {0}")]
    NegativeMassTolerance(f64),
}
