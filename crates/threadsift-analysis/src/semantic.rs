//! Semantic map stage - 2-D projection and clustering of documents

use crate::config::SemanticConfig;
use crate::error::AnalysisError;
use crate::vectorize::TfidfVectorizer;
use threadsift_domain::{Post, SemanticMapArtifact, SemanticPoint};
use tracing::{info, warn};

/// Project qualifying documents into 2-D coordinates and cluster them.
///
/// The projection (principal components) and the cluster assignment
/// (k-means) are fit independently over the same TF-IDF matrix; they
/// need not agree and no reconciliation is performed. Fewer than the
/// configured minimum of qualifying documents makes the stage a no-op.
pub fn compute_semantic_map(
    posts: &[Post],
    config: &SemanticConfig,
    seed: u64,
) -> Result<Option<SemanticMapArtifact>, AnalysisError> {
    let qualifying: Vec<&Post> = posts
        .iter()
        .filter(|post| post.text.chars().count() > config.min_text_chars)
        .collect();

    if qualifying.len() < config.min_documents {
        warn!(
            documents = qualifying.len(),
            required = config.min_documents,
            "too few documents for a semantic map, skipping stage"
        );
        return Ok(None);
    }

    let texts: Vec<&str> = qualifying.iter().map(|post| post.text.as_str()).collect();
    let vectorizer = TfidfVectorizer::new(config.max_df, config.min_df, config.max_features);
    let Some((vocabulary, weighted)) = vectorizer.fit_transform(&texts) else {
        warn!("vectorization left no usable vocabulary, skipping semantic map");
        return Ok(None);
    };
    if vocabulary.len() < 2 {
        warn!(
            vocabulary = vocabulary.len(),
            "vocabulary too small to project into 2 dimensions, skipping semantic map"
        );
        return Ok(None);
    }

    let mut pca = threadsift_numeric::Pca::new(2);
    let coordinates = pca.fit_transform(&weighted)?;

    let mut kmeans = threadsift_numeric::KMeans::new(config.n_clusters)
        .with_n_init(config.n_init)
        .with_random_state(seed);
    kmeans.fit(&weighted)?;
    let labels = kmeans
        .labels()
        .ok_or(threadsift_numeric::NumericError::NotFitted)?;

    let points: Vec<SemanticPoint> = qualifying
        .iter()
        .enumerate()
        .map(|(row, post)| SemanticPoint {
            id: post.id.clone(),
            x: coordinates.get(row, 0),
            y: coordinates.get(row, 1),
            cluster: labels[row],
            author: post.author.clone(),
            text: snippet(&post.text, config.snippet_chars),
        })
        .collect();

    info!(
        points = points.len(),
        clusters = config.n_clusters,
        "built semantic map"
    );

    Ok(Some(SemanticMapArtifact {
        points,
        clusters: config.n_clusters,
    }))
}

/// First `limit` characters of a text with an ellipsis suffix.
fn snippet(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            author: "alice".to_string(),
            subreddit: "rust".to_string(),
            date: "2024-01-01".to_string(),
            text: text.to_string(),
        }
    }

    fn config() -> SemanticConfig {
        SemanticConfig {
            n_clusters: 2,
            min_documents: 10,
            min_df: 1,
            max_df: 1.0,
            ..SemanticConfig::default()
        }
    }

    fn corpus() -> Vec<Post> {
        let mut posts = Vec::new();
        for i in 0..6 {
            posts.push(post(
                &format!("sport{}", i),
                "football match score goal stadium crowd tonight",
            ));
            posts.push(post(
                &format!("lang{}", i),
                "compiler borrow checker lifetime trait generics",
            ));
        }
        posts
    }

    #[test]
    fn one_point_per_qualifying_document() {
        let artifact = compute_semantic_map(&corpus(), &config(), 42)
            .unwrap()
            .unwrap();
        assert_eq!(artifact.points.len(), 12);
        assert_eq!(artifact.clusters, 2);
        assert!(artifact.points.iter().all(|p| p.cluster < 2));
        // input order preserved
        assert_eq!(artifact.points[0].id, "sport0");
        assert_eq!(artifact.points[1].id, "lang0");
    }

    #[test]
    fn too_few_documents_is_a_no_op() {
        let posts: Vec<Post> = corpus().into_iter().take(5).collect();
        assert!(compute_semantic_map(&posts, &config(), 42).unwrap().is_none());
    }

    #[test]
    fn short_texts_do_not_qualify() {
        let mut posts = corpus();
        posts.push(post("tiny", "short"));
        let artifact = compute_semantic_map(&posts, &config(), 42)
            .unwrap()
            .unwrap();
        assert!(artifact.points.iter().all(|p| p.id != "tiny"));
    }

    #[test]
    fn distinct_vocabularies_separate_into_clusters() {
        let artifact = compute_semantic_map(&corpus(), &config(), 42)
            .unwrap()
            .unwrap();
        let sport = artifact.points[0].cluster;
        let lang = artifact.points[1].cluster;
        assert_ne!(sport, lang);
        for point in &artifact.points {
            let expected = if point.id.starts_with("sport") { sport } else { lang };
            assert_eq!(point.cluster, expected);
        }
    }

    #[test]
    fn snippet_is_truncated_with_ellipsis() {
        let long_text = "x".repeat(150);
        assert_eq!(snippet(&long_text, 100).chars().count(), 103);
        assert!(snippet(&long_text, 100).ends_with("..."));
        assert_eq!(snippet("short", 100), "short...");
    }

    #[test]
    fn same_seed_reproduces_the_map() {
        let a = compute_semantic_map(&corpus(), &config(), 42).unwrap().unwrap();
        let b = compute_semantic_map(&corpus(), &config(), 42).unwrap().unwrap();
        assert_eq!(a, b);
    }
}
