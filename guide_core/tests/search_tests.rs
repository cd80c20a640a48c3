// Matcher behavior over the full built-in catalog.

use guide_core::catalog::catalog;
use guide_core::matcher::search;

#[test]
fn results_keep_catalog_order() {
    let hits = search("install show file", catalog());
    assert!(!hits.is_empty());

    // Each hit must appear later in the catalog than the one before it
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| {
            catalog()
                .iter()
                .position(|e| e.command == hit.command && e.description == hit.description)
                .expect("hit not found in catalog")
        })
        .collect();

    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "results out of catalog order");
    }
}

#[test]
fn token_order_does_not_matter() {
    assert_eq!(
        search("storage check space", catalog()),
        search("check storage space", catalog())
    );
}

#[test]
fn search_is_idempotent() {
    assert_eq!(
        search("install homebrew", catalog()),
        search("install homebrew", catalog())
    );
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(search("DF -H", catalog()), search("df -h", catalog()));
}

#[test]
fn empty_query_returns_full_catalog() {
    // "".split(' ') yields one empty token, and every string contains ""
    assert_eq!(search("", catalog()).len(), catalog().len());
}

#[test]
fn whitespace_only_query_returns_full_catalog() {
    assert_eq!(search("   ", catalog()).len(), catalog().len());
}

#[test]
fn storage_query_finds_exactly_df() {
    let hits = search("check storage space", catalog());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].command, "df -h");
    assert_eq!(
        hits[0].description,
        "Shows available disk space in human-readable format"
    );
}

#[test]
fn install_query_finds_all_install_entries() {
    let hits = search("install", catalog());

    // homebrew install/update, app install/uninstall, git, node, python, vscode
    assert_eq!(hits.len(), 8);
    assert!(hits[0].command.contains("Homebrew/install"));
    assert!(hits.iter().any(|h| h.command == "brew install git"));
    assert!(hits.iter().any(|h| h.command == "brew install node"));
    assert!(hits.iter().any(|h| h.command == "brew install python"));
    assert!(hits
        .iter()
        .any(|h| h.command == "brew install --cask visual-studio-code"));
}

#[test]
fn nonsense_query_matches_nothing() {
    assert!(search("zzzznonexistent", catalog()).is_empty());
}
