//! oncograph-web — HTTP facade over the clinical graph.
//! Thin transport layer: parses requests, calls the registrar and the
//! recommender, presents results. All scoring logic lives below it.

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
