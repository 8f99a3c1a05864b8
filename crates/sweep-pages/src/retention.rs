use crate::Deployment;
use chrono::{DateTime, Utc};

/// Deployments split at the retention boundary, newest first on both sides.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub retained: Vec<Deployment>,
    pub expired: Vec<Deployment>,
}

// Unparseable timestamps sort below every parseable one and fall back to a
// plain string comparison among themselves.
fn recency_key(deployment: &Deployment) -> (Option<DateTime<Utc>>, &str) {
    (deployment.created_at(), deployment.created_on.as_str())
}

/// Stable sort, newest deployment first. Equal timestamps keep input order.
pub fn sort_newest_first(deployments: &mut [Deployment]) {
    deployments.sort_by(|a, b| recency_key(b).cmp(&recency_key(a)));
}

pub fn partition_by_recency(mut deployments: Vec<Deployment>, keep: usize) -> Partition {
    sort_newest_first(&mut deployments);
    let expired = deployments.split_off(keep.min(deployments.len()));

    Partition {
        retained: deployments,
        expired,
    }
}

/// Everything past the `keep` most recent deployments.
pub fn select_for_deletion(deployments: Vec<Deployment>, keep: usize) -> Vec<Deployment> {
    partition_by_recency(deployments, keep).expired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(id: &str, created_on: &str) -> Deployment {
        Deployment {
            id: id.to_string(),
            created_on: created_on.to_string(),
            environment: None,
        }
    }

    fn ids(deployments: &[Deployment]) -> Vec<&str> {
        deployments.iter().map(|d| d.id.as_str()).collect()
    }

    fn sample() -> Vec<Deployment> {
        vec![
            deployment("d2", "2024-01-02T00:00:00Z"),
            deployment("d5", "2024-01-05T00:00:00Z"),
            deployment("d1", "2024-01-01T00:00:00Z"),
            deployment("d4", "2024-01-04T00:00:00Z"),
            deployment("d3", "2024-01-03T00:00:00Z"),
        ]
    }

    #[test]
    fn test_selects_everything_past_keep() {
        let selected = select_for_deletion(sample(), 3);
        assert_eq!(ids(&selected), vec!["d2", "d1"]);
    }

    #[test]
    fn test_retained_are_the_most_recent() {
        for keep in 0..=6 {
            let partition = partition_by_recency(sample(), keep);
            let mut sorted = sample();
            sort_newest_first(&mut sorted);

            let boundary = keep.min(sorted.len());
            assert_eq!(partition.retained, sorted[..boundary]);
            assert_eq!(partition.expired, sorted[boundary..]);
            for kept in &partition.retained {
                assert!(!partition.expired.contains(kept));
            }
        }
    }

    #[test]
    fn test_nothing_selected_when_at_or_below_keep() {
        assert!(select_for_deletion(Vec::new(), 3).is_empty());
        assert!(select_for_deletion(sample()[..3].to_vec(), 3).is_empty());
        assert!(select_for_deletion(sample(), 5).is_empty());
    }

    #[test]
    fn test_keep_zero_selects_all() {
        assert_eq!(
            ids(&select_for_deletion(sample(), 0)),
            vec!["d5", "d4", "d3", "d2", "d1"]
        );
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let deployments = vec![
            deployment("first", "2024-01-01T00:00:00Z"),
            deployment("newest", "2024-02-01T00:00:00Z"),
            deployment("second", "2024-01-01T00:00:00Z"),
            deployment("third", "2024-01-01T00:00:00Z"),
        ];
        let selected = select_for_deletion(deployments, 1);
        assert_eq!(ids(&selected), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_compares_chronologically() {
        let mut deployments = vec![
            // As strings "00Z" sorts after "00.5Z" ('Z' > '.'), yet it is earlier.
            deployment("whole-second", "2024-01-01T00:00:00Z"),
            deployment("half-second", "2024-01-01T00:00:00.5Z"),
            // 23:00 UTC on the previous day, though the string looks newest.
            deployment("offset", "2024-01-01T01:00:00+02:00"),
        ];
        sort_newest_first(&mut deployments);
        assert_eq!(
            ids(&deployments),
            vec!["half-second", "whole-second", "offset"]
        );
    }

    #[test]
    fn test_unparseable_timestamps_sort_oldest() {
        let mut deployments = vec![
            deployment("junk-a", "aaa"),
            deployment("valid", "2020-01-01T00:00:00Z"),
            deployment("junk-b", "bbb"),
        ];
        sort_newest_first(&mut deployments);
        assert_eq!(ids(&deployments), vec!["valid", "junk-b", "junk-a"]);
    }
}
