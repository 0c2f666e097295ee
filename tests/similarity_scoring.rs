use content_tracker::similarity::{
    preprocess, SimilarityScorer, TfIdfScorer, TfIdfVectorizer, VectorizeError,
};

#[test]
fn preprocess_strips_urls_mentions_and_hashtags() {
    let cleaned = preprocess("Check this out https://example.com/x?y=1 @alice #rust — Great!!");
    assert_eq!(cleaned, "check this out great");
}

#[test]
fn preprocess_collapses_whitespace_and_punctuation() {
    assert_eq!(preprocess("  Hello,\n\tworld...  again "), "hello world again");
    assert_eq!(preprocess("@only #tags https://x.io"), "");
}

#[test]
fn analyze_drops_stop_words_and_short_tokens_then_builds_bigrams() {
    let vectorizer = TfIdfVectorizer::default();
    assert_eq!(
        vectorizer.analyze("The quick brown fox"),
        vec!["quick", "brown", "fox", "quick brown", "brown fox"]
    );
    assert_eq!(vectorizer.analyze("x y cd"), vec!["cd"]);
}

#[test]
fn empty_vocabulary_is_an_error() {
    let vectorizer = TfIdfVectorizer::default();
    let result = vectorizer.fit_transform(&["it is what it is", "we are here"]);
    assert_eq!(result.unwrap_err(), VectorizeError::EmptyVocabulary);
}

#[test]
fn max_features_keeps_most_frequent_terms() {
    // With one feature only "alpha" survives, so both documents are identical.
    let vectors = TfIdfVectorizer::new(1)
        .fit_transform(&["alpha beta", "alpha gamma"])
        .unwrap();
    assert_eq!(vectors.len(), 2);
    assert!((vectors[0].cosine(&vectors[1]) - 1.0).abs() < 1e-9);

    let vectors = TfIdfVectorizer::new(1000)
        .fit_transform(&["alpha beta", "alpha gamma"])
        .unwrap();
    assert!(vectors[0].cosine(&vectors[1]) < 1.0);
}

#[test]
fn vectors_are_unit_length() {
    let vectors = TfIdfVectorizer::default()
        .fit_transform(&["rust ownership rules", "borrow checker rules", ""])
        .unwrap();
    assert!((vectors[0].norm() - 1.0).abs() < 1e-9);
    assert!((vectors[1].norm() - 1.0).abs() < 1e-9);
    assert!(vectors[2].is_zero());
}

#[test]
fn identical_text_scores_one() {
    let scorer = TfIdfScorer::default();
    let text = "Here's a lesson I learned building my startup";
    let score = scorer.max_similarity(text, &[text]).unwrap();
    assert!((score - 1.0).abs() < 1e-9, "score {score}");
}

#[test]
fn paraphrase_scores_above_default_threshold() {
    let scorer = TfIdfScorer::default();
    let score = scorer
        .max_similarity(
            "A lesson I learned while building my company",
            &["Here's a lesson I learned building my startup"],
        )
        .unwrap();
    assert!(score > 0.15, "score {score}");
}

#[test]
fn unrelated_text_scores_zero() {
    let scorer = TfIdfScorer::default();
    let score = scorer
        .max_similarity(
            "Morning coffee tastes better on rainy days",
            &["Here's a lesson I learned building my startup"],
        )
        .unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn best_match_across_corpus_wins() {
    let scorer = TfIdfScorer::default();
    let candidate = "Shipping small releases beats big rewrites";
    let score = scorer
        .max_similarity(
            candidate,
            &["Morning coffee tastes better on rainy days", candidate],
        )
        .unwrap();
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn empty_corpus_scores_zero() {
    let scorer = TfIdfScorer::default();
    assert_eq!(scorer.max_similarity("anything at all", &[]).unwrap(), 0.0);
}

#[test]
fn urls_and_mentions_do_not_create_similarity() {
    let scorer = TfIdfScorer::default();
    let score = scorer
        .max_similarity(
            "Morning coffee https://example.com/post @alice #growth",
            &["Keyboard shortcuts https://example.com/post @alice #growth"],
        )
        .unwrap();
    assert_eq!(score, 0.0);
}
