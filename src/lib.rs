//! # coref
//!
//! Entity coreference clustering for detected mentions.
//!
//! Given mentions already located in documents, groups the ones that name
//! the same entity:
//!
//! - **Acronyms**: `"Support Vector Machine (SVM)"` links the whole span,
//!   `"Support Vector Machine"` and `"SVM"`
//! - **Surface similarity**: character-bigram Jaccard similarity at or above
//!   a threshold, found with an exact prefix-filtered similarity join
//! - **Connectivity**: clusters are the connected components of the
//!   resulting graph, ordered deterministically
//!
//! ## Quick Start
//!
//! ```rust
//! use coref::{basic_cluster, Mention, MentionClass};
//!
//! let mentions = vec![
//!     Mention::new(1, 0, "Neural Network", MentionClass::Method),
//!     Mention::new(2, 0, "neural network", MentionClass::Method),
//!     Mention::new(2, 40, "Apple", MentionClass::Org),
//! ];
//! let clusters = basic_cluster(&mentions, 0.75).unwrap();
//! assert_eq!(clusters.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `coref` binary
//! - `parallel`: verify similarity candidates on the rayon pool

#![warn(missing_docs)]

pub mod acronym;
pub mod cluster;
pub mod clusterer;
pub mod config;
pub mod graph;
pub mod shingle;
pub mod similarity;

#[cfg(feature = "cli")]
pub mod cli;

pub use cluster::Clusters;
pub use clusterer::{basic_cluster, ClusterMethod, Clusterer};
pub use config::CorefConfig;
pub use coref_core::{AnnotatedDocument, Error, Mention, MentionClass, Result};
