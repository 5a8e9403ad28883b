/// Crate wide error type
pub mod error;
pub mod configuration;
/// Modification definitions and the name based catalog
pub mod modification;
pub mod peptide;
pub mod score_record;
pub mod site_scores;
/// Max reduction of site localization scores over mass-equivalent modifications
pub mod aggregation;
// Various utilities
pub mod utils;
