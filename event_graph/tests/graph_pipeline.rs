//! Extraction, serialization, graph building and persistence end to end.

use event_extraction::{DependencyParser, EventExtractor, ExtractionError, Token};
use event_graph::{EventGraphBuilder, GraphError, GraphFormat, GraphKind};
use tempfile::TempDir;

/// Parser for two-word sentences: subject then root verb.
struct SubjectVerbParser;

impl DependencyParser for SubjectVerbParser {
    type Token = Token;

    fn parse_batch(&mut self, sentences: &[String]) -> Result<Vec<Vec<Token>>, ExtractionError> {
        sentences
            .iter()
            .map(|sentence| {
                let words: Vec<&str> = sentence.trim_end_matches('.').split_whitespace().collect();
                match words.as_slice() {
                    [subject, verb] => Ok(vec![
                        Token::new(*subject, 0, "nsubj", *verb),
                        Token::new(*verb, 1, "ROOT", *verb),
                    ]),
                    _ => Err(ExtractionError::Parser(format!(
                        "unsupported sentence `{sentence}`"
                    ))),
                }
            })
            .collect()
    }
}

fn corpus_lines() -> Vec<String> {
    let extractor = EventExtractor::with_defaults();
    let stories = vec![
        "Tom woke. Tom ran. Tom woke.",
        "Tom woke. Ann sang.",
    ];
    extractor
        .extract_corpus(&mut SubjectVerbParser, &stories)
        .unwrap()
}

#[test]
fn test_pipeline_builds_expected_graph() {
    let extractor = EventExtractor::with_defaults();
    let mut builder = EventGraphBuilder::new(GraphKind::Directed);
    builder
        .build_from_serialized(corpus_lines(), extractor.formatter())
        .unwrap();

    let graph = builder.get().unwrap();
    assert_eq!(graph.frequency("Tom woke"), Some(3));
    assert_eq!(graph.frequency("Tom ran"), Some(1));
    assert_eq!(graph.frequency("Ann sang"), Some(1));
    assert_eq!(graph.weight("Tom woke", "Tom ran"), Some(1));
    assert_eq!(graph.weight("Tom ran", "Tom woke"), Some(1));
    assert_eq!(graph.weight("Tom woke", "Ann sang"), Some(1));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_pipeline_persistence_round_trip() {
    let dir = TempDir::new().unwrap();
    let extractor = EventExtractor::with_defaults();

    let mut builder = EventGraphBuilder::new(GraphKind::Undirected);
    builder
        .build_from_serialized(corpus_lines(), extractor.formatter())
        .unwrap();
    let built = builder.get().unwrap().clone();

    let native = builder.save(dir.path().join("graphs/events"), GraphFormat::Native).unwrap();
    let exchange = builder.save(dir.path().join("graphs/events"), GraphFormat::Exchange).unwrap();

    let mut restored = EventGraphBuilder::default();
    assert_eq!(restored.kind(), GraphKind::Directed);
    assert_eq!(restored.load(&native, GraphFormat::Native).unwrap(), &built);
    assert_eq!(restored.kind(), GraphKind::Undirected);

    // Loading replaces a populated graph.
    assert_eq!(restored.load(&exchange, GraphFormat::Exchange).unwrap(), &built);
    assert!(matches!(
        restored.build(vec![vec!["x"]]),
        Err(GraphError::AlreadyBuilt)
    ));
}

#[test]
fn test_parser_failure_propagates() {
    let extractor = EventExtractor::with_defaults();
    let result = extractor.extract_story(&mut SubjectVerbParser, "Three words here.");
    assert!(matches!(result, Err(ExtractionError::Parser(_))));
}
