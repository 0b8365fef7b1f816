//! Sliding-window chunking: exact window formula, overlap, and edge cases.

use proptest::prelude::*;
use ragdoc::{Chunker, Document, FixedSizeChunker, RagError};

fn doc(pages: Vec<&str>) -> Document {
    Document::from_pages("test.txt", pages.into_iter().map(str::to_string).collect())
}

/// **Chunking property: sliding-window formula**
/// *For any* page of L characters and valid `chunk_size > chunk_overlap >= 0`,
/// chunking SHALL produce one window per start offset `i * (size - overlap)`
/// below L, each window at most `chunk_size` characters, with consecutive
/// windows sharing the text the sliding formula dictates.
mod prop_sliding_window {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn window_count_length_and_overlap(
            text in "[a-zéλ ]{0,200}",
            chunk_size in 1usize..60,
            overlap_frac in 0usize..60,
        ) {
            let chunk_overlap = overlap_frac % chunk_size;
            let step = chunk_size - chunk_overlap;

            let chunker = FixedSizeChunker::new(chunk_size, chunk_overlap).unwrap();
            let chunks = chunker.chunk(&doc(vec![&text]));

            let char_len = text.chars().count();

            // One window per start offset below the text length: ceil(L / step).
            let expected_count = char_len.div_ceil(step);
            prop_assert_eq!(chunks.len(), expected_count);

            for chunk in &chunks {
                prop_assert!(chunk.text.chars().count() <= chunk_size);
                prop_assert!(!chunk.text.is_empty());
            }

            // Window i+1 re-reads window i's text from offset `step` onward;
            // for full windows that shared run is exactly `chunk_overlap` chars.
            for pair in chunks.windows(2) {
                let prev: Vec<char> = pair[0].text.chars().collect();
                let next: Vec<char> = pair[1].text.chars().collect();
                let shared: Vec<char> = prev[step.min(prev.len())..].to_vec();
                prop_assert!(next.starts_with(&shared));
                if prev.len() == chunk_size {
                    prop_assert_eq!(shared.len(), chunk_overlap);
                }
            }
        }

        #[test]
        fn chunking_is_idempotent(
            text in "[a-z .]{0,150}",
            chunk_size in 1usize..40,
        ) {
            let chunker = FixedSizeChunker::new(chunk_size, chunk_size / 3).unwrap();
            let document = doc(vec![&text]);
            prop_assert_eq!(chunker.chunk(&document), chunker.chunk(&document));
        }
    }
}

#[test]
fn empty_page_yields_no_chunks() {
    let chunker = FixedSizeChunker::new(100, 10).unwrap();
    assert!(chunker.chunk(&doc(vec![""])).is_empty());
}

#[test]
fn pages_are_never_merged() {
    // Two tiny pages stay two chunks even though both would fit in one window.
    let chunker = FixedSizeChunker::new(100, 10).unwrap();
    let chunks = chunker.chunk(&doc(vec!["first page", "second page"]));

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "first page");
    assert_eq!(chunks[1].text, "second page");
    assert_eq!(chunks[0].source.page, 0);
    assert_eq!(chunks[1].source.page, 1);
}

#[test]
fn empty_page_between_others_is_skipped() {
    let chunker = FixedSizeChunker::new(100, 10).unwrap();
    let chunks = chunker.chunk(&doc(vec!["a", "", "b"]));

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].source.page, 0);
    assert_eq!(chunks[1].source.page, 2);
}

#[test]
fn chunk_ids_and_metadata_carry_sequence_index() {
    let chunker = FixedSizeChunker::new(4, 0).unwrap();
    let chunks = chunker.chunk(&doc(vec!["abcdefgh"]));

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].id, "test.txt_0");
    assert_eq!(chunks[1].id, "test.txt_1");
    assert_eq!(chunks[1].metadata.get("chunk_index").map(String::as_str), Some("1"));
    assert_eq!(chunks[1].document_id, "test.txt");
}

#[test]
fn multibyte_text_splits_on_character_boundaries() {
    // 2- and 3-byte characters; byte slicing at size 3 would panic here.
    let chunker = FixedSizeChunker::new(3, 1).unwrap();
    let text = "héllo wörld ∂x∂y";
    let chunks = chunker.chunk(&doc(vec![text]));

    for chunk in &chunks {
        assert!(chunk.text.chars().count() <= 3);
    }
    // First window is the first three characters.
    assert_eq!(chunks[0].text, "hél");
}

#[test]
fn overlap_equal_to_size_is_a_configuration_error() {
    assert!(matches!(FixedSizeChunker::new(10, 10), Err(RagError::Config(_))));
}

#[test]
fn overlap_greater_than_size_is_a_configuration_error() {
    assert!(matches!(FixedSizeChunker::new(10, 25), Err(RagError::Config(_))));
}

#[test]
fn zero_chunk_size_is_a_configuration_error() {
    assert!(matches!(FixedSizeChunker::new(0, 0), Err(RagError::Config(_))));
}
