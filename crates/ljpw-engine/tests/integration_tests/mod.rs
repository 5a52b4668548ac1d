//! Integration tests for the LJPW engine
//!
//! These tests run the full pipeline against the fixture dataset in
//! `tests/fixtures/concepts.json` (no mocks):
//! - Signature detection calibration and context sensitivity
//! - Phrase composition, negation and missing components
//! - Resonance ranking, determinism and harmonic bands
//! - Loading, configuration and concurrent use of the engine

mod helpers;
mod compose_tests;
mod detect_tests;
mod end_to_end_tests;
mod resonance_tests;
