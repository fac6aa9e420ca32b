//! In-memory clinical graph store.
//!
//! Node iteration order is insertion order; the scorer walks treatment
//! nodes in exactly the order they were seeded, so the node map must
//! preserve it. All state is in-memory only and lives for the serving
//! process; there is no persistence layer.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;

use oncograph_common::entities::{NodeVariant, Parameter, PatientAttributes, Treatment};
use oncograph_common::error::{OncographError, Result};

/// Tagged per-variant payload. Treatment and parameter nodes carry no
/// mutable attributes; a patient node carries its full record.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Patient(Box<PatientAttributes>),
    Treatment(Treatment),
    Parameter(Parameter),
}

impl NodeKind {
    pub fn variant(&self) -> NodeVariant {
        match self {
            NodeKind::Patient(_)   => NodeVariant::Patient,
            NodeKind::Treatment(_) => NodeVariant::Treatment,
            NodeKind::Parameter(_) => NodeVariant::Parameter,
        }
    }
}

/// Common node metadata factored out of the variant payload.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub created_at: DateTime<Utc>,
}

/// Undirected edge key: endpoints stored in sorted order so that
/// (a, b) and (b, a) address the same edge.
fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// The clinical graph: insertion-ordered nodes plus weighted edges.
#[derive(Debug, Clone)]
pub struct ClinicalGraph {
    nodes: IndexMap<String, Node>,
    edges: HashMap<(String, String), f64>,
}

impl ClinicalGraph {
    /// A fresh graph holding exactly the fixed treatment and parameter
    /// nodes, no patients, no edges.
    pub fn new() -> Self {
        let mut graph = Self {
            nodes: IndexMap::new(),
            edges: HashMap::new(),
        };
        for treatment in Treatment::ALL {
            graph.insert_node(treatment.as_str(), NodeKind::Treatment(treatment));
        }
        for parameter in Parameter::ALL {
            graph.insert_node(parameter.as_str(), NodeKind::Parameter(parameter));
        }
        graph
    }

    fn insert_node(&mut self, id: &str, kind: NodeKind) {
        self.nodes.insert(
            id.to_string(),
            Node {
                id: id.to_string(),
                kind,
                created_at: Utc::now(),
            },
        );
    }

    /// Insert a node, rejecting duplicate identifiers.
    pub fn add_node(&mut self, id: &str, kind: NodeKind) -> Result<()> {
        if self.nodes.contains_key(id) {
            return Err(OncographError::Validation(format!(
                "node identifier already in use: {id}"
            )));
        }
        self.insert_node(id, kind);
        Ok(())
    }

    /// Attach an undirected weighted edge between two existing nodes.
    /// Weights are baseline affinities and must lie in [0, 1].
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        if !self.nodes.contains_key(a) {
            return Err(OncographError::Validation(format!("unknown node: {a}")));
        }
        if !self.nodes.contains_key(b) {
            return Err(OncographError::Validation(format!("unknown node: {b}")));
        }
        if !(0.0..=1.0).contains(&weight) {
            return Err(OncographError::Validation(format!(
                "edge weight must be in [0, 1], got {weight}"
            )));
        }
        self.edges.insert(edge_key(a, b), weight);
        Ok(())
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Edge weight between two nodes, 0.0 when no edge exists.
    pub fn edge_weight(&self, a: &str, b: &str) -> f64 {
        self.edges.get(&edge_key(a, b)).copied().unwrap_or(0.0)
    }

    /// Node identifiers of a given variant, in insertion order.
    pub fn nodes_of_variant(&self, variant: NodeVariant) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|n| n.kind.variant() == variant)
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Treatment nodes in insertion order.
    pub fn treatments(&self) -> impl Iterator<Item = Treatment> + '_ {
        self.nodes.values().filter_map(|n| match &n.kind {
            NodeKind::Treatment(t) => Some(*t),
            _ => None,
        })
    }

    /// Resolve a patient node's attributes, or report it missing.
    pub fn patient(&self, patient_id: &str) -> Result<&PatientAttributes> {
        match self.nodes.get(patient_id).map(|n| &n.kind) {
            Some(NodeKind::Patient(attrs)) => Ok(attrs),
            _ => Err(OncographError::PatientNotFound(patient_id.to_string())),
        }
    }

    pub fn patient_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| matches!(n.kind, NodeKind::Patient(_)))
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for ClinicalGraph {
    fn default() -> Self {
        Self::new()
    }
}
