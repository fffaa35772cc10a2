//! The clustering pipeline and its entry points.
//!
//! ```text
//! mentions ──split──▶ mentions + derived ──shingles──▶ sets
//!                         │                              │
//!                   acronym pairs                  similarity join
//!                         └──────────▶ graph ◀───────────┘
//!                                        │
//!                               connected components ──▶ clusters
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use coref_core::{Error, Mention, Result};

use crate::acronym;
use crate::cluster::{self, Clusters};
use crate::config::CorefConfig;
use crate::graph;
use crate::shingle::shingles;
use crate::similarity::SimilarityIndex;

/// Clustering method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClusterMethod {
    /// Acronym expansion plus shingle similarity.
    Basic,
    /// Whichever method currently performs best.
    #[default]
    Best,
}

impl ClusterMethod {
    /// The concrete method `self` stands for.
    pub fn resolve(self) -> Self {
        match self {
            ClusterMethod::Basic | ClusterMethod::Best => ClusterMethod::Basic,
        }
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterMethod::Basic => "basic",
            ClusterMethod::Best => "best",
        }
    }
}

impl fmt::Display for ClusterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ClusterMethod::Basic),
            "best" => Ok(ClusterMethod::Best),
            other => Err(Error::invalid_config(format!(
                "unknown clustering method '{other}' (expected 'basic' or 'best')"
            ))),
        }
    }
}

/// Input mentions followed by the mentions derived from them, and the
/// acronym links between them as index pairs into `mentions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Originals first, in input order, then derived mentions.
    pub mentions: Vec<Mention>,
    /// `(full, acronym)`, `(original, full)`, `(original, acronym)` per split.
    pub acronym_pairs: Vec<(usize, usize)>,
}

/// Split every mention that has the `Full Name (ACRONYM)` shape.
pub fn expand_acronyms(mentions: &[Mention]) -> Expansion {
    let mut all = mentions.to_vec();
    let mut acronym_pairs = Vec::new();
    for (original, mention) in mentions.iter().enumerate() {
        let Some((full, acronym)) = acronym::split(mention) else {
            continue;
        };
        let full_idx = all.len();
        let acronym_idx = full_idx + 1;
        all.push(full);
        all.push(acronym);
        acronym_pairs.extend([
            (full_idx, acronym_idx),
            (original, full_idx),
            (original, acronym_idx),
        ]);
    }
    Expansion {
        mentions: all,
        acronym_pairs,
    }
}

/// Expanded mentions and every linked pair (acronym pairs first, then
/// similarity pairs in ascending order), as indices into the mentions.
///
/// # Errors
///
/// `Error::InvalidConfig` if `config` does not validate.
pub fn mention_pairs(
    mentions: &[Mention],
    config: &CorefConfig,
) -> Result<(Vec<Mention>, Vec<(usize, usize)>)> {
    config.validate()?;

    let Expansion {
        mentions: all,
        acronym_pairs,
    } = expand_acronyms(mentions);
    log::debug!(
        "{} mentions, {} derived from acronyms",
        mentions.len(),
        all.len() - mentions.len()
    );

    let sets: Vec<BTreeSet<String>> = all
        .iter()
        .map(|m| shingles(m.text(), config.shingle_len, config.shingle_stride))
        .collect();
    let index = SimilarityIndex::build(&sets, config.similarity_threshold)?;
    let similar = if index.is_empty() {
        BTreeSet::new()
    } else {
        similar_pairs(&index, config.parallel)
    };

    let mut pairs = acronym_pairs;
    pairs.extend(similar);
    Ok((all, pairs))
}

#[cfg(feature = "parallel")]
fn similar_pairs(index: &SimilarityIndex, parallel: bool) -> BTreeSet<(usize, usize)> {
    if parallel {
        index.par_pairs()
    } else {
        index.pairs()
    }
}

#[cfg(not(feature = "parallel"))]
fn similar_pairs(index: &SimilarityIndex, parallel: bool) -> BTreeSet<(usize, usize)> {
    if parallel {
        log::warn!("parallel similarity join requested but the `parallel` feature is off");
    }
    index.pairs()
}

/// Groups mentions that refer to the same entity.
///
/// ```
/// use coref::{Clusterer, ClusterMethod, Mention, MentionClass};
///
/// let mentions = vec![Mention::new(1, 0, "Support Vector Machine (SVM)", MentionClass::Method)];
/// let clusters = Clusterer::new(ClusterMethod::Best).cluster(&mentions).unwrap();
///
/// let texts: Vec<&str> = clusters[&0].iter().map(|m| m.text()).collect();
/// assert_eq!(texts, ["SVM", "Support Vector Machine", "Support Vector Machine (SVM)"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Clusterer {
    method: ClusterMethod,
    config: CorefConfig,
}

impl Clusterer {
    /// Clusterer using `method` with the default configuration.
    pub fn new(method: ClusterMethod) -> Self {
        Self {
            method,
            config: CorefConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: CorefConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &CorefConfig {
        &self.config
    }

    /// Configured method.
    pub fn method(&self) -> ClusterMethod {
        self.method
    }

    /// Partition `mentions` (plus anything derived from them) into clusters.
    ///
    /// Empty input gives an empty map.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if the configuration does not validate; no
    /// work is done in that case.
    pub fn cluster(&self, mentions: &[Mention]) -> Result<Clusters> {
        match self.method.resolve() {
            ClusterMethod::Basic | ClusterMethod::Best => self.basic(mentions),
        }
    }

    fn basic(&self, mentions: &[Mention]) -> Result<Clusters> {
        let (all, pairs) = mention_pairs(mentions, &self.config)?;
        let graph = graph::build(&all, pairs.iter().map(|&(a, b)| (&all[a], &all[b])));
        let clusters = cluster::extract(&graph, mentions, self.config.include_singletons);
        log::info!(
            "clustered {} mentions into {} clusters",
            mentions.len(),
            clusters.len()
        );
        Ok(clusters)
    }
}

/// Cluster with the basic method at `similarity_threshold`, other settings
/// at their defaults.
pub fn basic_cluster(mentions: &[Mention], similarity_threshold: f64) -> Result<Clusters> {
    Clusterer::new(ClusterMethod::Basic)
        .with_config(CorefConfig::default().with_threshold(similarity_threshold))
        .cluster(mentions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coref_core::MentionClass;

    #[test]
    fn test_expand_acronyms() {
        let mentions = vec![
            Mention::new(1, 0, "Apple", MentionClass::Org),
            Mention::new(1, 10, "Long Short-Term Memory (LSTM)", MentionClass::Method),
        ];
        let exp = expand_acronyms(&mentions);
        assert_eq!(exp.mentions.len(), 4);
        assert_eq!(exp.mentions[2].text(), "Long Short-Term Memory");
        assert_eq!(exp.mentions[3].text(), "LSTM");
        assert_eq!(exp.mentions[3].start(), 34);
        assert_eq!(exp.acronym_pairs, vec![(2, 3), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("BEST".parse::<ClusterMethod>().unwrap(), ClusterMethod::Best);
        assert_eq!(ClusterMethod::Best.resolve(), ClusterMethod::Basic);
        assert!("fancy".parse::<ClusterMethod>().is_err());
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let clusterer = Clusterer::new(ClusterMethod::Basic)
            .with_config(CorefConfig::default().with_threshold(1.5));
        assert!(matches!(clusterer.cluster(&[]), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(basic_cluster(&[], 0.75).unwrap().is_empty());
    }

    #[test]
    fn test_pairs_include_similarity() {
        let mentions = vec![
            Mention::new(1, 0, "Neural Network", MentionClass::Method),
            Mention::new(2, 0, "neural network", MentionClass::Method),
        ];
        let (all, pairs) = mention_pairs(&mentions, &CorefConfig::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(pairs, vec![(0, 1)]);
    }
}
