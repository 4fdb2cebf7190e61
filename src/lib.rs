//! Random Forest classification with flat, id-addressed tree storage.
//!
//! Trees are built by exhaustive Gini split search over per-tree subsets of
//! the training data and stored as one append-only node array shared by the
//! whole forest, with children referenced by integer id. The finalized
//! model is a plain value: serializable to JSON, reusable for prediction
//! without retraining, and safe to read concurrently.

mod config;
mod error;
mod forest;
mod model;
mod node;
mod predict;
mod sample;
mod serialize;
mod split;
mod tree;

pub use config::RandomForestConfig;
pub use error::ForestError;
pub use model::RandomForestModel;
pub use node::{FeatureIndex, Node, NodeId, NodeKind};
pub use sample::{Sample, filter_by_class};
