//! In-memory vector store: search ordering, dimensionality enforcement, and
//! atomic replace semantics.

use std::collections::HashMap;

use proptest::prelude::*;
use ragdoc::{Chunk, InMemoryVectorStore, RagError, SourceRef, VectorStore};

fn chunk_with_embedding(id: &str, embedding: Vec<f32>) -> Chunk {
    Chunk {
        id: id.to_string(),
        text: format!("text for {id}"),
        embedding,
        source: SourceRef::new("test.txt", 0),
        metadata: HashMap::new(),
        document_id: "test.txt".to_string(),
    }
}

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map("non-zero embedding", |mut v| {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm < 1e-8 {
            return None;
        }
        for val in &mut v {
            *val /= norm;
        }
        Some(v)
    })
}

/// **Store property: search ordering**
/// *For any* set of stored embeddings, search SHALL return results ordered by
/// descending cosine similarity, with at most `k` of them.
mod prop_search_ordering {
    use super::*;

    const DIM: usize = 16;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn results_ordered_descending_and_bounded_by_k(
            embeddings in proptest::collection::vec(arb_normalized_embedding(DIM), 1..20),
            query in arb_normalized_embedding(DIM),
            k in 1usize..25,
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let (results, stored) = rt.block_on(async {
                let store = InMemoryVectorStore::new();
                store.create_collection("test", DIM).await.unwrap();

                let chunks: Vec<Chunk> = embeddings
                    .iter()
                    .enumerate()
                    .map(|(i, e)| chunk_with_embedding(&format!("c{i}"), e.clone()))
                    .collect();
                store.upsert("test", &chunks).await.unwrap();

                (store.search("test", &query, k).await.unwrap(), chunks.len())
            });

            prop_assert!(results.len() <= k);
            prop_assert!(results.len() <= stored);

            for window in results.windows(2) {
                prop_assert!(
                    window[0].score >= window[1].score,
                    "results not in descending order: {} < {}",
                    window[0].score,
                    window[1].score,
                );
            }
        }
    }
}

#[tokio::test]
async fn empty_collection_returns_empty_not_error() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 4).await.unwrap();

    let results = store.search("docs", &[1.0, 0.0, 0.0, 0.0], 5).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn missing_collection_is_an_error() {
    let store = InMemoryVectorStore::new();
    let err = store.search("never-built", &[1.0, 0.0], 5).await.unwrap_err();
    assert!(matches!(err, RagError::VectorStore { .. }));
}

#[tokio::test]
async fn k_larger_than_collection_returns_all_records() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 2).await.unwrap();
    store
        .upsert(
            "docs",
            &[
                chunk_with_embedding("a", vec![1.0, 0.0]),
                chunk_with_embedding("b", vec![0.0, 1.0]),
            ],
        )
        .await
        .unwrap();

    let results = store.search("docs", &[1.0, 0.0], 100).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn ties_break_by_insertion_order() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 2).await.unwrap();
    // Identical embeddings score identically against any query.
    store
        .upsert(
            "docs",
            &[
                chunk_with_embedding("first", vec![1.0, 0.0]),
                chunk_with_embedding("second", vec![1.0, 0.0]),
                chunk_with_embedding("third", vec![1.0, 0.0]),
            ],
        )
        .await
        .unwrap();

    let results = store.search("docs", &[0.5, 0.5], 3).await.unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.chunk.id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[tokio::test]
async fn query_dimension_mismatch_is_rejected() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 4).await.unwrap();

    let err = store.search("docs", &[1.0, 0.0], 5).await.unwrap_err();
    assert!(matches!(err, RagError::DimensionMismatch { expected: 4, actual: 2 }));
}

#[tokio::test]
async fn record_dimension_mismatch_is_rejected_on_upsert() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 4).await.unwrap();

    let err =
        store.upsert("docs", &[chunk_with_embedding("a", vec![1.0, 0.0])]).await.unwrap_err();
    assert!(matches!(err, RagError::DimensionMismatch { expected: 4, actual: 2 }));
}

#[tokio::test]
async fn replace_collection_swaps_contents_entirely() {
    let store = InMemoryVectorStore::new();
    store
        .replace_collection("docs", 2, &[chunk_with_embedding("old", vec![1.0, 0.0])])
        .await
        .unwrap();
    assert!(store.collection_exists("docs").await);

    store
        .replace_collection(
            "docs",
            2,
            &[
                chunk_with_embedding("new-1", vec![0.0, 1.0]),
                chunk_with_embedding("new-2", vec![1.0, 0.0]),
            ],
        )
        .await
        .unwrap();

    let results = store.search("docs", &[1.0, 1.0], 10).await.unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.chunk.id.as_str()).collect();
    assert_eq!(results.len(), 2);
    assert!(!ids.contains(&"old"));
}

#[tokio::test]
async fn replace_with_empty_leaves_collection_present_but_empty() {
    let store = InMemoryVectorStore::new();
    store
        .replace_collection("docs", 2, &[chunk_with_embedding("old", vec![1.0, 0.0])])
        .await
        .unwrap();

    store.replace_collection("docs", 2, &[]).await.unwrap();
    assert!(store.collection_exists("docs").await);
    assert!(store.search("docs", &[1.0, 0.0], 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_collection_makes_it_absent() {
    let store = InMemoryVectorStore::new();
    store.create_collection("docs", 2).await.unwrap();
    store.delete_collection("docs").await.unwrap();
    assert!(!store.collection_exists("docs").await);
}
