use rebranch::{Derivation, Sentence, parse_derivation, read_derivations};

pub(crate) fn get_test_data_path() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    manifest_dir.join("test_data").join("ccgbank")
}

/// Reads a corpus file from the test data directory, panicking on any
/// unreadable derivation.
pub(crate) fn read_corpus(name: &str) -> Vec<Sentence> {
    let text = std::fs::read_to_string(get_test_data_path().join(name)).unwrap();
    read_derivations(&text)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

pub(crate) fn tree(text: &str) -> Derivation {
    parse_derivation(text).unwrap_or_else(|e| panic!("failed to parse `{text}`: {e}"))
}

/// Asserts that two derivations cover the same words with the same leaf
/// categories, in order.
pub(crate) fn assert_same_leaves(before: &Derivation, after: &Derivation) {
    let leaves = |tree: &Derivation| {
        tree.leaves()
            .into_iter()
            .map(|leaf| (leaf.category().to_string(), leaf.token().cloned()))
            .collect::<Vec<_>>()
    };
    assert_eq!(leaves(before), leaves(after), "leaf sequence changed");
}
