//! Shared application state for the web server.

use std::sync::Arc;

use tokio::sync::RwLock;

use oncograph_common::error::Result;
use oncograph_graph::seed::seed_demo_patients;
use oncograph_graph::{ClinicalGraph, PatientRegistrar};

/// Shared state injected into every Axum handler.
///
/// The graph is behind a read-write lock: registrations take the write
/// lock, scoring and lookups run concurrently under read locks. The
/// registrar's id counter is atomic and lives outside the lock.
pub struct AppState {
    pub graph: RwLock<ClinicalGraph>,
    pub registrar: PatientRegistrar,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(ClinicalGraph::new()),
            registrar: PatientRegistrar::new(),
        }
    }

    /// State pre-loaded with the three-patient demo dataset.
    pub fn with_demo_data() -> Result<Self> {
        let mut graph = ClinicalGraph::new();
        seed_demo_patients(&mut graph)?;
        let registrar = PatientRegistrar::for_graph(&graph);
        Ok(Self {
            graph: RwLock::new(graph),
            registrar,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
