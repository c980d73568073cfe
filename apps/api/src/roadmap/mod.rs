// Roadmap Personalization Engine.
// Implements: career resolution with explicit fallback, per-step status
// derivation, remedial/ambition injections, and phase-level enrichment from
// the embedded content catalog. Pure and total; no I/O anywhere in here.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod phase_meta;
