//! Integration tests for end-to-end match scoring.
//!
//! Scenarios mirror real migration flows: the same work listed on two
//! content sources with varying metadata quality, from identical records
//! down to listings that share nothing.

use titleshift::catalog::{CatalogItem, PublicationStatus};
use titleshift::confidence::Confidence;
use titleshift::scoring::{breakdown, score, MatchWeights};

#[test]
fn test_identical_listing_scores_full_confidence() {
    let listing = create_listing(
        "Solo Leveling",
        "Chugong",
        PublicationStatus::Completed,
        &["Action", "Adventure", "Fantasy"],
    );

    let confidence = score(&listing, &listing);

    assert_eq!(
        confidence.value(),
        1.0,
        "Fully matching metadata should max out the scale, got {}",
        confidence
    );
}

#[test]
fn test_strong_partial_match_lands_near_point_seven_seven() {
    // The sequel listing on the target source: contained title, same
    // author, same status, two of three genres shared
    let source = create_listing(
        "Solo Leveling",
        "Chugong",
        PublicationStatus::Completed,
        &["Action", "Adventure", "Fantasy"],
    );
    let candidate = create_listing(
        "Solo Leveling: Ragnarok",
        "CHUGONG",
        PublicationStatus::Completed,
        &["Action", "Fantasy", "Webtoon"],
    );

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    println!("\n=== Strong partial match ===");
    println!(
        "title={:.3} author={:.3} status={:.3} genres={:.4} total={}",
        result.title, result.author, result.status, result.genres, result.total
    );

    assert_eq!(result.title, 0.3, "Containment should earn the partial weight");
    assert_eq!(result.author, 0.3, "Author casing should not matter");
    assert_eq!(result.status, 0.1);
    assert!(
        (result.genres - 0.0667).abs() < 0.001,
        "Two shared tags out of three should scale the genre weight, got {:.4}",
        result.genres
    );
    assert!(
        (result.total.value() - 0.7667).abs() < 0.001,
        "Expected a confidence near 0.7667, got {}",
        result.total
    );
}

#[test]
fn test_title_casing_never_affects_the_score() {
    let base = create_listing("Naruto", "", PublicationStatus::Unknown, &[]);
    let variants = ["Naruto", "NARUTO", "naruto", "nArUtO"];

    for variant in variants {
        let candidate = create_listing(variant, "", PublicationStatus::Unknown, &[]);
        let result = breakdown(&base, &candidate, &MatchWeights::default());

        assert_eq!(
            result.title, 0.5,
            "Casing variant '{}' should still be an exact title match",
            variant
        );
    }
}

#[test]
fn test_containment_scores_below_exact() {
    let source = create_listing("Attack on Titan", "", PublicationStatus::Ongoing, &[]);
    let exact = create_listing("Attack on Titan", "", PublicationStatus::Hiatus, &[]);
    let contained = create_listing("Titan", "", PublicationStatus::Hiatus, &[]);

    let exact_result = breakdown(&source, &exact, &MatchWeights::default());
    let contained_result = breakdown(&source, &contained, &MatchWeights::default());

    assert_eq!(exact_result.title, 0.5);
    assert_eq!(contained_result.title, 0.3);
    assert!(exact_result.total > contained_result.total);
}

#[test]
fn test_containment_works_in_both_directions() {
    let short = create_listing("Titan", "", PublicationStatus::Unknown, &[]);
    let long = create_listing("Attack on Titan", "", PublicationStatus::Unknown, &[]);

    let forward = breakdown(&long, &short, &MatchWeights::default());
    let reverse = breakdown(&short, &long, &MatchWeights::default());

    assert_eq!(forward.title, 0.3);
    assert_eq!(reverse.title, 0.3);
}

#[test]
fn test_blank_authors_on_both_sides_earn_nothing() {
    // Two listings with no author must not collect the author weight for
    // agreeing on emptiness
    let source = create_listing("Berserk", "", PublicationStatus::Hiatus, &["Seinen"]);
    let candidate = create_listing("Berserk", "", PublicationStatus::Hiatus, &["Seinen"]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    assert_eq!(result.author, 0.0, "Blank-for-blank is not an author match");
    assert!(
        (result.total.value() - 0.7).abs() < 1e-9,
        "Title, status, and genres should still add up, got {}",
        result.total
    );
}

#[test]
fn test_whitespace_author_counts_as_blank() {
    let source = create_listing("Berserk", "   ", PublicationStatus::Hiatus, &[]);
    let candidate = create_listing("Berserk", "   ", PublicationStatus::Hiatus, &[]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    assert_eq!(result.author, 0.0);
}

#[test]
fn test_author_mismatch_earns_nothing_either_way() {
    let oda = create_listing("One Piece", "Eiichiro Oda", PublicationStatus::Ongoing, &[]);
    let anonymous = create_listing("One Piece", "", PublicationStatus::Ongoing, &[]);

    let listed_source = breakdown(&oda, &anonymous, &MatchWeights::default());
    let blank_source = breakdown(&anonymous, &oda, &MatchWeights::default());

    assert_eq!(listed_source.author, 0.0);
    assert_eq!(blank_source.author, 0.0);
}

#[test]
fn test_genre_overlap_scales_with_the_larger_set() {
    let source = create_listing(
        "Frieren",
        "",
        PublicationStatus::Ongoing,
        &["Action", "Fantasy"],
    );
    let candidate = create_listing("Frieren", "", PublicationStatus::Ongoing, &["Action"]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    // One shared tag against a largest set of two
    assert_eq!(result.genres, 0.05);
}

#[test]
fn test_empty_genre_sets_earn_nothing() {
    let source = create_listing("Planetes", "", PublicationStatus::Completed, &[]);
    let candidate = create_listing("Planetes", "", PublicationStatus::Completed, &[]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    assert_eq!(
        result.genres, 0.0,
        "Two empty genre sets must not score as perfect overlap"
    );
}

#[test]
fn test_disjoint_listings_score_zero() {
    let source = create_listing(
        "Monster",
        "Naoki Urasawa",
        PublicationStatus::Completed,
        &["Thriller", "Mystery"],
    );
    let candidate = create_listing(
        "Yotsuba",
        "Kiyohiko Azuma",
        PublicationStatus::Ongoing,
        &["Comedy", "Slice of Life"],
    );

    let confidence = score(&source, &candidate);

    assert_eq!(confidence, Confidence::new(0.0));
}

#[test]
fn test_shared_unknown_status_still_counts() {
    // Sources that report no status at all still agree on "unknown"
    let source = create_listing("Dorohedoro", "", PublicationStatus::Unknown, &[]);
    let candidate = create_listing("Dorohedoro: Reissue", "", PublicationStatus::Unknown, &[]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());

    assert_eq!(result.status, 0.1);
    assert!((result.total.value() - 0.4).abs() < 1e-9);
}

#[test]
fn test_missing_metadata_only_lowers_confidence() {
    let rich = create_listing(
        "Vinland Saga",
        "Makoto Yukimura",
        PublicationStatus::Ongoing,
        &["Action", "Historical"],
    );
    let bare = CatalogItem::new("Vinland Saga");

    let rich_confidence = score(&rich, &rich);
    let bare_confidence = score(&rich, &bare);

    assert!(bare_confidence < rich_confidence);
    assert!(
        bare_confidence.value() >= 0.5,
        "The exact title hit should survive missing metadata, got {}",
        bare_confidence
    );
}

#[test]
fn test_breakdown_serializes_for_review_tooling() {
    let source = create_listing("Solo Leveling", "Chugong", PublicationStatus::Completed, &[]);
    let candidate = create_listing("Solo Leveling", "Chugong", PublicationStatus::Ongoing, &[]);

    let result = breakdown(&source, &candidate, &MatchWeights::default());
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains("\"title\":0.5"));
    assert!(json.contains("\"author\":0.3"));
    assert!(json.contains("\"total\""));
}

fn create_listing(
    title: &str,
    author: &str,
    status: PublicationStatus,
    genres: &[&str],
) -> CatalogItem {
    CatalogItem::new(title)
        .with_author(author)
        .with_status(status)
        .with_genres(genres.iter().copied())
}
