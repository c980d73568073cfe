// Career prediction: pluggable classifier backends plus response enrichment.
// The classifier is pure math; no model artifacts are loaded at runtime.

pub mod classifier;
pub mod enrich;
pub mod handlers;
