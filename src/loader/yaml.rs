//! YAML dependency documents.
//!
//! ```yaml
//! dependencies:
//!   - [foundation, walls]
//!   - [walls, roof]
//! ```
//!
//! Like CSV records, entries may carry more than two fields; anything after
//! the successor is ignored.

use serde::Deserialize;

use crate::graph::DependencyPair;

use super::LoadError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PairDocument {
    #[serde(default)]
    dependencies: Vec<Vec<String>>,
}

/// Parse dependency pairs from a YAML document.
///
/// Pairs keep their document order.
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] when the document is not valid YAML or does not
/// have the expected shape, and [`LoadError::MalformedEntry`] when an entry
/// names fewer than two steps.
pub fn from_yaml_str(input: &str) -> Result<Vec<DependencyPair>, LoadError> {
    let doc: PairDocument = serde_saphyr::from_str(input).map_err(|err| LoadError::Yaml {
        message: err.to_string(),
    })?;
    doc.dependencies
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| parse_entry(idx + 1, entry))
        .collect()
}

fn parse_entry(entry: usize, fields: Vec<String>) -> Result<DependencyPair, LoadError> {
    let count = fields.len();
    let mut iter = fields.into_iter();
    match (iter.next(), iter.next()) {
        (Some(predecessor), Some(successor)) => Ok(DependencyPair::new(predecessor, successor)),
        _ => Err(LoadError::MalformedEntry {
            entry,
            fields: count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_pairs_in_document_order() {
        let yaml = "dependencies:\n  - [foundation, walls]\n  - [walls, roof]\n";
        let pairs = from_yaml_str(yaml).expect("valid document");
        assert_eq!(
            pairs,
            vec![
                DependencyPair::new("foundation", "walls"),
                DependencyPair::new("walls", "roof"),
            ]
        );
    }

    #[rstest]
    fn missing_dependencies_key_is_empty() {
        assert!(from_yaml_str("{}").expect("empty mapping").is_empty());
    }

    #[rstest]
    fn extra_fields_are_ignored() {
        let pairs = from_yaml_str("dependencies:\n  - [a, b, c]\n").expect("valid document");
        assert_eq!(pairs, vec![DependencyPair::new("a", "b")]);
    }

    #[rstest]
    #[case("dependencies:\n  - [a, b]\n  - [only]\n", 2, 1)]
    #[case("dependencies:\n  - []\n", 1, 0)]
    fn short_entries_are_rejected(
        #[case] yaml: &str,
        #[case] expected_entry: usize,
        #[case] expected_fields: usize,
    ) {
        let err = from_yaml_str(yaml).expect_err("short entry");
        match err {
            LoadError::MalformedEntry { entry, fields } => {
                assert_eq!(entry, expected_entry);
                assert_eq!(fields, expected_fields);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case("steps: []\n")]
    #[case("dependencies: [\n")]
    fn rejects_unexpected_shapes(#[case] yaml: &str) {
        let err = from_yaml_str(yaml).expect_err("invalid document");
        assert!(matches!(err, LoadError::Yaml { .. }));
    }
}
