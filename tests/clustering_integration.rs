//! End-to-end clustering behaviour.
//!
//! Covers the documented scenarios plus the partition, acronym-closure and
//! determinism guarantees.

use std::collections::HashSet;

use coref::{basic_cluster, ClusterMethod, Clusterer, Clusters, CorefConfig, Mention, MentionClass};

fn texts(clusters: &Clusters) -> Vec<Vec<&str>> {
    clusters
        .values()
        .map(|members| members.iter().map(|m| m.text()).collect())
        .collect()
}

fn cluster_of<'a>(clusters: &'a Clusters, text: &str) -> &'a Vec<Mention> {
    clusters
        .values()
        .find(|members| members.iter().any(|m| m.text() == text))
        .unwrap_or_else(|| panic!("no cluster contains {text:?}"))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_acronym_scenario() {
    let mentions = vec![Mention::new(
        1,
        0,
        "Support Vector Machine (SVM)",
        MentionClass::Method,
    )];
    let clusters = basic_cluster(&mentions, 0.75).unwrap();

    assert_eq!(
        texts(&clusters),
        vec![vec!["SVM", "Support Vector Machine", "Support Vector Machine (SVM)"]]
    );
    let svm = &clusters[&0][0];
    assert_eq!(svm.start(), 24);
    assert_eq!(svm.class(), MentionClass::Method);
}

#[test]
fn test_unrelated_scenario() {
    let mentions = vec![
        Mention::new(1, 0, "Apple", MentionClass::Org),
        Mention::new(1, 10, "Banana", MentionClass::Org),
    ];
    let clusters = basic_cluster(&mentions, 0.75).unwrap();
    assert_eq!(texts(&clusters), vec![vec!["Apple"], vec!["Banana"]]);
}

#[test]
fn test_near_duplicate_scenario() {
    let mentions = vec![
        Mention::new(1, 0, "Neural Network", MentionClass::Method),
        Mention::new(2, 0, "neural network", MentionClass::Method),
    ];
    let clusters = basic_cluster(&mentions, 0.75).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(
        clusters[&0],
        vec![
            Mention::new(1, 0, "Neural Network", MentionClass::Method),
            Mention::new(2, 0, "neural network", MentionClass::Method),
        ]
    );
}

#[test]
fn test_acronym_links_across_documents() {
    // The acronym in doc 2 reaches the expanded form in doc 1 through the
    // derived "SVM" mention.
    let mentions = vec![
        Mention::new(1, 0, "Support Vector Machine (SVM)", MentionClass::Method),
        Mention::new(2, 30, "SVM", MentionClass::Method),
        Mention::new(3, 5, "support vector machines", MentionClass::Method),
        Mention::new(3, 50, "Random Forest", MentionClass::Method),
    ];
    let clusters = basic_cluster(&mentions, 0.75).unwrap();

    let svm = cluster_of(&clusters, "Support Vector Machine (SVM)");
    let svm_texts: HashSet<&str> = svm.iter().map(|m| m.text()).collect();
    assert!(svm_texts.contains("SVM"));
    assert!(svm_texts.contains("Support Vector Machine"));
    assert!(svm_texts.contains("support vector machines"));
    assert!(svm.contains(&Mention::new(2, 30, "SVM", MentionClass::Method)));
    assert!(!svm_texts.contains("Random Forest"));
}

// =============================================================================
// Properties
// =============================================================================

fn corpus() -> Vec<Mention> {
    vec![
        Mention::new(1, 0, "Convolutional Neural Network (CNN)", MentionClass::Method),
        Mention::new(1, 60, "CNN", MentionClass::Method),
        Mention::new(2, 4, "convolutional neural networks", MentionClass::Method),
        Mention::new(2, 70, "IEEE", MentionClass::Org),
        Mention::new(3, 0, "Institute of Electrical and Electronics Engineers (IEEE)", MentionClass::Org),
        Mention::new(3, 90, "TensorFlow", MentionClass::Product),
        Mention::new(4, 12, "Tensorflow", MentionClass::Product),
        Mention::new(4, 40, "PyTorch", MentionClass::Product),
        Mention::new(5, 0, "x", MentionClass::None),
        Mention::new(5, 3, "y", MentionClass::None),
    ]
}

#[test]
fn test_every_input_mention_in_exactly_one_cluster() {
    let mentions = corpus();
    let clusters = basic_cluster(&mentions, 0.75).unwrap();

    for mention in &mentions {
        let hits: usize = clusters
            .values()
            .map(|members| members.iter().filter(|m| *m == mention).count())
            .sum();
        assert_eq!(hits, 1, "{mention:?} appears {hits} times");
    }
}

#[test]
fn test_ids_are_dense_and_members_sorted() {
    let clusters = basic_cluster(&corpus(), 0.75).unwrap();
    let ids: Vec<usize> = clusters.keys().copied().collect();
    assert_eq!(ids, (0..clusters.len()).collect::<Vec<_>>());

    for members in clusters.values() {
        assert!(members.windows(2).all(|w| w[0] < w[1]));
    }
    let lists: Vec<&Vec<Mention>> = clusters.values().collect();
    assert!(lists.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_output_ignores_input_order() {
    let forward = corpus();
    let mut backward = corpus();
    backward.reverse();

    let a = basic_cluster(&forward, 0.75).unwrap();
    let b = basic_cluster(&backward, 0.75).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&basic_cluster(&forward, 0.75).unwrap()).unwrap()
    );
}

#[test]
fn test_single_character_mentions_stay_apart() {
    let clusters = basic_cluster(&corpus(), 0.75).unwrap();
    assert_eq!(cluster_of(&clusters, "x").len(), 1);
    assert_eq!(cluster_of(&clusters, "y").len(), 1);
}

#[test]
fn test_duplicate_inputs_collapse() {
    let m = Mention::new(1, 0, "Apple", MentionClass::Org);
    let clusters = basic_cluster(&[m.clone(), m.clone()], 0.75).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[&0], vec![m]);
}

#[test]
fn test_offsets_near_usize_max_do_not_split() {
    let m = Mention::new(1, usize::MAX - 3, "Support Vector Machine (SVM)", MentionClass::Method);
    let clusters = basic_cluster(std::slice::from_ref(&m), 0.75).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[&0], vec![m]);
}

#[test]
fn test_without_singletons() {
    let clusterer = Clusterer::new(ClusterMethod::Basic)
        .with_config(CorefConfig::default().with_singletons(false));
    let clusters = clusterer.cluster(&corpus()).unwrap();
    assert!(clusters.values().all(|members| members.len() > 1));
}

#[test]
fn test_threshold_one_keeps_only_identical_bigrams() {
    let mentions = vec![
        Mention::new(1, 0, "TensorFlow", MentionClass::Product),
        Mention::new(2, 0, "tensorflow", MentionClass::Product),
        Mention::new(3, 0, "TensorFlows", MentionClass::Product),
    ];
    let clusters = basic_cluster(&mentions, 1.0).unwrap();
    assert_eq!(texts(&clusters), vec![vec!["TensorFlow", "tensorflow"], vec!["TensorFlows"]]);
}

#[test]
fn test_zero_threshold_joins_everything() {
    let clusters = basic_cluster(&corpus(), 0.0).unwrap();
    assert_eq!(clusters.len(), 1);
}

#[test]
fn test_bad_threshold_is_an_error() {
    assert!(basic_cluster(&corpus(), 1.01).is_err());
    assert!(basic_cluster(&corpus(), -1.0).is_err());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_same_as_sequential() {
    let mentions: Vec<Mention> = (0..300)
        .map(|i| {
            Mention::new(
                i % 7,
                i as usize,
                format!("model variant {} rev {}", i % 23, i % 3),
                MentionClass::Method,
            )
        })
        .collect();
    let sequential = basic_cluster(&mentions, 0.7).unwrap();
    let parallel = Clusterer::new(ClusterMethod::Basic)
        .with_config(CorefConfig::default().with_threshold(0.7).with_parallel(true))
        .cluster(&mentions)
        .unwrap();
    assert_eq!(sequential, parallel);
}
