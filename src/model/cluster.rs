// src/model/cluster.rs
use eframe::egui::Color32;
use rand::Rng;

use crate::model::dataset::ClusterSummary;

/// Display state for one cluster: the API label, how many students landed
/// in it, and the color the charts use for it this session.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub name: String,
    pub count: u64,
    pub color: Color32,
}

/// Build the display clusters for a summary, each with a freshly rolled
/// color. Called on dataset install and again by "Change Colors".
pub fn derive(summary: &ClusterSummary) -> Vec<Cluster> {
    let mut rng = rand::thread_rng();
    let mut clusters: Vec<Cluster> = summary
        .cluster_count
        .iter()
        .map(|(name, &count)| Cluster {
            name: name.clone(),
            count,
            color: Color32::from_rgb(rng.gen(), rng.gen(), rng.gen()),
        })
        .collect();
    // The API labels clusters "Cluster N"; sort by that trailing number so
    // Cluster 10 lands after Cluster 9. The sorted position also matches
    // the zero-based id the filters send.
    clusters.sort_by_key(|cluster| label_number(&cluster.name).unwrap_or(u64::MAX));
    clusters
}

/// The number a cluster label ends with ("Cluster 10" -> 10). Bare numeric
/// labels parse whole; a label without one yields None.
fn label_number(name: &str) -> Option<u64> {
    let start = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    name[start..].parse().ok()
}

pub fn total_students(clusters: &[Cluster]) -> u64 {
    clusters.iter().map(|cluster| cluster.count).sum()
}

/// Each cluster's share of the total, in percent. A zero total gives all
/// zeros instead of NaN.
pub fn percentages(clusters: &[Cluster]) -> Vec<f64> {
    let total = total_students(clusters);
    clusters
        .iter()
        .map(|cluster| {
            if total == 0 {
                0.0
            } else {
                cluster.count as f64 / total as f64 * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn summary(counts: &[(&str, u64)]) -> ClusterSummary {
        ClusterSummary {
            optimal_k: counts.len() as u32,
            cluster_count: counts
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
        }
    }

    #[test]
    fn derive_orders_labels_numerically() {
        let clusters = derive(&summary(&[
            ("Cluster 10", 1),
            ("Cluster 2", 2),
            ("Cluster 1", 3),
        ]));
        let names: Vec<&str> = clusters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Cluster 1", "Cluster 2", "Cluster 10"]);
        assert_eq!(total_students(&clusters), 6);
    }

    #[test]
    fn bare_numeric_labels_also_order_numerically() {
        let clusters = derive(&summary(&[("10", 1), ("2", 2), ("0", 3)]));
        let names: Vec<&str> = clusters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["0", "2", "10"]);
    }

    #[test]
    fn percentages_follow_counts() {
        let clusters = derive(&summary(&[("0", 30), ("1", 70)]));
        let pcts = percentages(&clusters);
        assert!((pcts[0] - 30.0).abs() < 1e-9);
        assert!((pcts[1] - 70.0).abs() < 1e-9);
        assert!((pcts.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_and_zero_totals_are_safe() {
        assert!(percentages(&[]).is_empty());
        let clusters = derive(&summary(&[("0", 0), ("1", 0)]));
        assert!(percentages(&clusters).iter().all(|pct| *pct == 0.0));
    }

    #[test]
    fn derive_is_empty_for_empty_summary() {
        let clusters = derive(&ClusterSummary {
            optimal_k: 0,
            cluster_count: BTreeMap::new(),
        });
        assert!(clusters.is_empty());
    }
}
