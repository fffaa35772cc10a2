//! Exact set-similarity join over shingle sets.
//!
//! Finds every pair of sets whose Jaccard similarity reaches a threshold
//! without comparing all pairs, using the prefix-filtering scheme of
//! All-Pairs / PPJoin:
//!
//! 1. Tokens are renamed to dense ids ordered by ascending frequency, so the
//!    front of every sorted set holds its rarest tokens.
//! 2. For a set of size `n` and threshold `t`, any partner with
//!    `J >= t` shares at least `ceil(t * n)` tokens, so it must share one
//!    of the first `n - ceil(t * n) + 1` tokens. Only those prefix tokens are
//!    indexed and probed.
//! 3. Candidates sharing a prefix token, and whose size ratio can still
//!    reach `t`, are verified with an exact intersection.
//!
//! Filtering only prunes pairs that provably cannot qualify; the result is
//! exactly the set of pairs with `J >= t`.

use std::collections::{BTreeSet, HashMap};

use coref_core::{Error, Result};

/// Slack applied to the filters so float rounding can only widen the
/// candidate set, never drop a qualifying pair.
const FILTER_EPSILON: f64 = 1e-9;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`; 0 when both sets are empty.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    ratio(intersection, a.len() + b.len() - intersection)
}

fn ratio(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Reject thresholds outside `[0, 1]` (including NaN).
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "similarity threshold must be in [0, 1], got {threshold}"
        )))
    }
}

/// Count of common elements of two ascending slices.
fn sorted_intersection(a: &[u32], b: &[u32]) -> usize {
    let (mut i, mut j, mut n) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                n += 1;
                i += 1;
                j += 1;
            }
        }
    }
    n
}

/// Inverted prefix index over a fixed collection of sets.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    threshold: f64,
    /// Token ids of each set, ascending.
    sets: Vec<Vec<u32>>,
    /// Position of each set in (size, index) order. A set only probes for
    /// partners ranked before it, so each pair is examined from one side.
    rank: Vec<usize>,
    postings: HashMap<u32, Vec<usize>>,
}

impl SimilarityIndex {
    /// Index `sets` for a join at `threshold`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `threshold` is not in `[0, 1]`.
    pub fn build<S: AsRef<str>>(sets: &[BTreeSet<S>], threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for set in sets {
            for token in set {
                *frequency.entry(token.as_ref()).or_insert(0) += 1;
            }
        }
        let mut vocabulary: Vec<(&str, usize)> = frequency.into_iter().collect();
        vocabulary.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        let token_ids: HashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(id, (token, _))| (*token, id as u32))
            .collect();

        let encoded: Vec<Vec<u32>> = sets
            .iter()
            .map(|set| {
                let mut ids: Vec<u32> = set.iter().map(|t| token_ids[t.as_ref()]).collect();
                ids.sort_unstable();
                ids
            })
            .collect();

        let mut order: Vec<usize> = (0..encoded.len()).collect();
        order.sort_by_key(|&i| (encoded[i].len(), i));
        let mut rank = vec![0; encoded.len()];
        for (position, &i) in order.iter().enumerate() {
            rank[i] = position;
        }

        let mut postings: HashMap<u32, Vec<usize>> = HashMap::new();
        if threshold > 0.0 {
            for (i, ids) in encoded.iter().enumerate() {
                for &token in &ids[..prefix_len(ids.len(), threshold)] {
                    postings.entry(token).or_default().push(i);
                }
            }
        }

        log::debug!(
            "similarity index: {} sets, {} distinct shingles, {} posting lists",
            encoded.len(),
            vocabulary.len(),
            postings.len()
        );

        Ok(Self {
            threshold,
            sets: encoded,
            rank,
            postings,
        })
    }

    /// Number of indexed sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True if no sets were indexed.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// All pairs `(i, j)`, `i < j`, with Jaccard similarity at or above the
    /// threshold.
    pub fn pairs(&self) -> BTreeSet<(usize, usize)> {
        if self.threshold <= 0.0 {
            return self.all_pairs();
        }
        let pairs: BTreeSet<(usize, usize)> =
            (0..self.len()).flat_map(|x| self.probe(x)).collect();
        log::debug!("similarity join: {} pairs at t={}", pairs.len(), self.threshold);
        pairs
    }

    /// Same result as [`pairs`](Self::pairs), verifying candidates on the
    /// rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn par_pairs(&self) -> BTreeSet<(usize, usize)> {
        use rayon::prelude::*;

        if self.threshold <= 0.0 {
            return self.all_pairs();
        }
        let pairs: BTreeSet<(usize, usize)> = (0..self.len())
            .into_par_iter()
            .flat_map_iter(|x| self.probe(x))
            .collect();
        log::debug!(
            "similarity join (parallel): {} pairs at t={}",
            pairs.len(),
            self.threshold
        );
        pairs
    }

    // Every pair has J >= 0.
    fn all_pairs(&self) -> BTreeSet<(usize, usize)> {
        let n = self.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect()
    }

    /// Qualifying partners of `x` that rank before it.
    fn probe(&self, x: usize) -> Vec<(usize, usize)> {
        let probe_set = &self.sets[x];
        let min_size = self.threshold * probe_set.len() as f64 - FILTER_EPSILON;

        let mut candidates: Vec<usize> = probe_set[..prefix_len(probe_set.len(), self.threshold)]
            .iter()
            .filter_map(|token| self.postings.get(token))
            .flatten()
            .copied()
            .filter(|&y| self.rank[y] < self.rank[x])
            .filter(|&y| self.sets[y].len() as f64 >= min_size)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        candidates
            .into_iter()
            .filter(|&y| {
                let other = &self.sets[y];
                let intersection = sorted_intersection(probe_set, other);
                let union = probe_set.len() + other.len() - intersection;
                ratio(intersection, union) >= self.threshold
            })
            .map(|y| (x.min(y), x.max(y)))
            .collect()
    }
}

/// Prefix length that guarantees any partner at `threshold` shares a token
/// with it. Zero for the empty set.
fn prefix_len(size: usize, threshold: f64) -> usize {
    if size == 0 {
        return 0;
    }
    let required = ((threshold * size as f64) - FILTER_EPSILON).ceil().max(1.0) as usize;
    size - required.min(size) + 1
}

/// Indices `(i, j)`, `i < j`, of all pairs in `sets` with Jaccard similarity
/// `>= threshold`.
///
/// # Errors
///
/// `Error::InvalidConfig` if `threshold` is not in `[0, 1]`.
pub fn find_similar_pairs<S: AsRef<str>>(
    sets: &[BTreeSet<S>],
    threshold: f64,
) -> Result<BTreeSet<(usize, usize)>> {
    Ok(SimilarityIndex::build(sets, threshold)?.pairs())
}
