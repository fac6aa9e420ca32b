//! oncograph-graph — Clinical graph store and patient registration.
//! Patients, treatments, and clinical parameters are nodes; weighted
//! undirected edges carry baseline treatment affinity.

pub mod store;
pub mod registrar;
pub mod seed;

pub use registrar::PatientRegistrar;
pub use store::{ClinicalGraph, Node, NodeKind};
