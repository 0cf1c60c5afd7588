//! Network stage - author co-occurrence graph

use crate::config::NetworkConfig;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use threadsift_domain::{NetworkArtifact, NetworkLink, NetworkNode, Post};
use tracing::{info, warn};

/// Build the undirected weighted graph of authors who were active in the
/// same subreddit on the same day.
///
/// Every unordered pair of distinct authors within one (subreddit, date)
/// bucket accumulates edge weight. Pair fan-out is quadratic in the
/// bucket's distinct-author count; an optional cap bounds pathological
/// buckets. Only the top-N authors by post count become nodes, and only
/// edges between retained nodes at or above the weight threshold are
/// kept.
pub fn compute_network(posts: &[Post], config: &NetworkConfig) -> NetworkArtifact {
    let mut buckets: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
    let mut post_counts: BTreeMap<String, (usize, u64)> = BTreeMap::new();
    let mut next_rank = 0usize;

    for post in posts {
        if !post.has_author() || post.subreddit.is_empty() || !post.has_date() {
            continue;
        }
        buckets
            .entry((post.subreddit.clone(), post.date.clone()))
            .or_default()
            .insert(post.author.clone());
        let entry = post_counts
            .entry(post.author.clone())
            .or_insert((next_rank, 0));
        if entry.1 == 0 {
            next_rank += 1;
        }
        entry.1 += 1;
    }

    let mut edge_weights: BTreeMap<(String, String), u64> = BTreeMap::new();
    for ((subreddit, _), authors) in &buckets {
        if let Some(cap) = config.max_bucket_authors {
            if authors.len() > cap {
                warn!(
                    subreddit = subreddit.as_str(),
                    authors = authors.len(),
                    cap,
                    "capping oversized co-occurrence bucket"
                );
            }
        }
        let authors: Vec<&String> = match config.max_bucket_authors {
            Some(cap) => authors.iter().take(cap).collect(),
            None => authors.iter().collect(),
        };
        // BTreeSet iteration is sorted, so (i, j) pairs are canonical
        for i in 0..authors.len() {
            for j in (i + 1)..authors.len() {
                *edge_weights
                    .entry((authors[i].clone(), authors[j].clone()))
                    .or_insert(0) += 1;
            }
        }
    }

    // Top authors by post count, first-seen order on ties
    let mut ranked: Vec<(&String, &(usize, u64))> = post_counts.iter().collect();
    ranked.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.1 .0.cmp(&b.1 .0)));
    ranked.truncate(config.max_nodes);

    let retained: HashSet<&str> = ranked.iter().map(|(author, _)| author.as_str()).collect();

    let nodes: Vec<NetworkNode> = ranked
        .iter()
        .map(|(author, &(_, count))| NetworkNode {
            id: (*author).clone(),
            name: (*author).clone(),
            val: count,
            posts: count,
        })
        .collect();

    let links: Vec<NetworkLink> = edge_weights
        .into_iter()
        .filter(|((source, target), weight)| {
            *weight >= config.min_edge_weight
                && retained.contains(source.as_str())
                && retained.contains(target.as_str())
        })
        .map(|((source, target), value)| NetworkLink {
            source,
            target,
            value,
        })
        .collect();

    info!(
        nodes = nodes.len(),
        links = links.len(),
        "built co-occurrence network"
    );

    NetworkArtifact { nodes, links }
}
