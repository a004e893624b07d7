use quality_scorer::models::{load_all_batches, RATING_TABLE};
use quality_scorer::utils::logging;
use quality_scorer::{
    detect, score, score_many, score_many_concurrent, score_submission, Dimension,
    FormatCategory, QualityRating, ScoringResult,
};

/// 各种格式和边界情况的样本
fn corpus() -> Vec<String> {
    let mut samples: Vec<String> = vec![
        String::new(),
        " ".to_string(),
        "\n\n\n".to_string(),
        "a".to_string(),
        "{".to_string(),
        "[]".to_string(),
        "{}".to_string(),
        "null".to_string(),
        "[null, \"\", {}, []]".to_string(),
        r#"{"id":"1","name":"Test","value":100,"type":"example","data":{}}"#.to_string(),
        "# Title\n\nParagraph with **bold**.\n\n- Item 1\n\n[link](url)".to_string(),
        "def calculate(x):\n    return x * 2\n\n# Main\nprint(calculate(5))".to_string(),
        "#Bad\n```\n**unclosed\n[x](".to_string(),
        "function f() {}\n\tlet x = [1, 2;\n    const y = {".to_string(),
        "teh teh teh teh  adn wiht. lower case. again".to_string(),
        "ÜNÏCÖDË tëxt — 多维度质量评分。 Ça va? Oui!".to_string(),
        "API SDK CLI HTTP JSON YAML TOML HTML CSS URL REST GRPC".to_string(),
    ];
    samples.push("word ".repeat(5000));
    samples.push(format!("{}1{}", "[".repeat(200), "]".repeat(200)));
    samples.push(format!("{}\"x\"{}", "{\"a\":".repeat(100), "}".repeat(100)));
    samples.push("x".repeat(10_000));
    samples
}

fn assert_bounds(result: &ScoringResult) {
    assert!(
        (0.0..=1.0).contains(&result.weighted_score),
        "加权得分越界: {}",
        result.weighted_score
    );
    assert_eq!(result.scores.len(), 5);
    for (name, value) in &result.scores {
        assert!((0.0..=1.0).contains(value), "{} 越界: {}", name, value);
    }
    assert!(!result.feedback.is_empty());
}

#[test]
fn test_scores_stay_in_bounds() {
    logging::init(false);
    for sample in corpus() {
        assert_bounds(&score(&sample));
    }
}

#[test]
fn test_weight_table_sums_to_one() {
    let total: f64 = Dimension::ALL.iter().map(|d| d.weight()).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_rating_table_is_descending_and_total() {
    for pair in RATING_TABLE.windows(2) {
        assert!(pair[0].0 > pair[1].0);
        assert!(pair[0].1 > pair[1].1);
    }
    assert_eq!(RATING_TABLE[RATING_TABLE.len() - 1].0, 0.0);
}

#[test]
fn test_rating_monotonicity() {
    let scores: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
    for s1 in &scores {
        for s2 in scores.iter().filter(|s2| *s2 >= s1) {
            assert!(QualityRating::from_score(*s1) <= QualityRating::from_score(*s2));
        }
    }
}

#[test]
fn test_idempotence() {
    for sample in corpus() {
        let first = serde_json::to_string(&score(&sample)).unwrap();
        let second = serde_json::to_string(&score(&sample)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_threshold_consistency() {
    for sample in corpus() {
        for threshold in [0.0, 0.3, 0.5, 0.6, 0.813, 1.0] {
            let result = score_submission(&sample, threshold);
            assert_eq!(result.passes_threshold, result.weighted_score >= threshold);
        }
    }
}

#[test]
fn test_rating_matches_weighted_score() {
    for sample in corpus() {
        let result = score(&sample);
        assert_eq!(
            result.quality_rating,
            QualityRating::from_score(result.weighted_score)
        );
    }
}

#[test]
fn test_broken_brace_is_not_structured() {
    for content in ["{", "{ not json", "[1, 2", "{\"a\": }"] {
        assert_ne!(detect(content), FormatCategory::Structured, "{}", content);
        assert_ne!(score(content).format_detected, FormatCategory::Structured);
    }
}

#[test]
fn test_structured_scenario() {
    let result = score(r#"{"id":"1","name":"Test","value":100,"type":"example","data":{}}"#);
    assert_eq!(result.format_detected, FormatCategory::Structured);
    assert_eq!(result.score_of(Dimension::Completeness), Some(1.0));
}

#[test]
fn test_markup_scenario() {
    let result = score("# Title\n\nParagraph with **bold**.\n\n- Item 1\n\n[link](url)");
    assert_eq!(result.format_detected, FormatCategory::Markup);
    assert!(result.weighted_score > 0.0);
}

#[test]
fn test_code_scenario() {
    let result = score("def calculate(x):\n    return x * 2\n\n# Main\nprint(calculate(5))");
    assert_eq!(result.format_detected, FormatCategory::Code);
    assert!(result.score_of(Dimension::Completeness).is_some());
}

#[test]
fn test_empty_scenario() {
    let result = score("");
    assert_eq!(result.format_detected, FormatCategory::PlainText);
    assert!(result.weighted_score < 0.6);
    assert!(!result.passes_threshold);
    assert_eq!(result.quality_rating, QualityRating::NeedsImprovement);
}

#[test]
fn test_batch_scenario() {
    let inputs = ["a", "b", "c"];
    let results = score_many(&inputs, 0.6);
    assert_eq!(results.len(), 3);
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(result, &score_submission(input, 0.6));
    }
}

#[test]
fn test_batch_runner_has_no_cross_item_state() {
    let corpus = corpus();
    let forward = score_many(&corpus[..], 0.6);
    let mut reversed_input = corpus.clone();
    reversed_input.reverse();
    let mut backward = score_many(&reversed_input[..], 0.6);
    backward.reverse();
    assert_eq!(forward, backward);
}

#[tokio::test]
async fn test_concurrent_batch_preserves_order() {
    let corpus = corpus();
    let sequential = score_many(&corpus[..], 0.6);
    let concurrent = score_many_concurrent(corpus, 0.6, 4).await.unwrap();
    assert_eq!(sequential, concurrent);
}

#[test]
fn test_concurrent_batch_from_sync_context() {
    let results = tokio_test::block_on(score_many_concurrent(
        vec!["x".to_string(), "[1]".to_string()],
        0.6,
        2,
    ))
    .unwrap();
    assert_eq!(results[1].format_detected, FormatCategory::Structured);
}

#[test]
fn test_result_serializes_to_flat_record() {
    let result = score(r#"{"id": 1}"#);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["format_detected"], "structured");
    assert!(value["weighted_score"].is_f64());
    assert!(value["quality_rating"].is_string());
    assert!(value["passes_threshold"].is_boolean());
    assert!(value["feedback"].is_array());

    let scores = value["scores"].as_object().unwrap();
    let mut keys: Vec<&str> = scores.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["clarity", "completeness", "coverage", "format_compliance", "validity"]
    );

    let back: ScoringResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_scores_serialize_in_dimension_order() {
    let json = serde_json::to_string(&score("# Title\n\nSome text.")).unwrap();
    let positions: Vec<usize> = Dimension::ALL
        .iter()
        .map(|d| json.find(&format!("\"{}\":", d.name())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{}", json);
}

#[test]
fn test_weighted_score_near_midpoint_at_threshold() {
    let content = r#"{"name": [1]}"#;
    let result = score_submission(content, 0.533);
    assert_eq!(result.weighted_score, 0.532);
    assert!(!result.passes_threshold);
    assert!(score_submission(content, 0.532).passes_threshold);
}

#[test]
fn test_feedback_is_prefixed_by_dimension() {
    let result = score("#Bad\n\n```\n- item\n**x");
    assert_eq!(result.format_detected, FormatCategory::Markup);
    assert!(result
        .feedback
        .iter()
        .any(|f| f.starts_with("format_compliance: ")));
    assert!(result.feedback.iter().any(|f| f.starts_with("validity: ")));
}

#[tokio::test]
async fn test_load_batches_from_folder() {
    let dir = std::env::temp_dir().join(format!("quality_scorer_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("batch.toml"),
        "name = \"it\"\npass_threshold = 0.5\n\n[[submissions]]\nid = \"one\"\ncontent = \"[1, 2, 3]\"\n",
    )
    .unwrap();

    let batches = load_all_batches(dir.to_str().unwrap()).await.unwrap();
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    let contents: Vec<&str> = batch.submissions.iter().map(|s| s.content.as_str()).collect();
    let results = score_many(&contents[..], batch.threshold_or(0.6));
    assert_eq!(results[0].format_detected, FormatCategory::Structured);

    std::fs::remove_dir_all(&dir).unwrap();
}
