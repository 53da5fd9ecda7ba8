//! Pod label filtering
//!
//! Narrows a list of pods (as returned by the Kubernetes API) to those
//! matching a label selector.

use std::collections::HashMap;

use crate::pod::Pod;

/// Filter pods by their labels.
///
/// A pod is retained iff it carries a labels map and every `(key, value)`
/// pair in the selector is present in that map with an identical value.
/// A pod without a labels map is always excluded, even for an empty
/// selector: missing label metadata is "unknown", not "matches
/// trivially". Input order is preserved.
pub fn filter_pods<'a>(pods: &'a [Pod], labels: &HashMap<String, String>) -> Vec<&'a Pod> {
    pods.iter()
        .filter(|pod| match &pod.metadata.labels {
            Some(pod_labels) => labels.iter().all(|(k, v)| pod_labels.get(k) == Some(v)),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod_with_labels(name: &str, labels: serde_json::Value) -> Pod {
        serde_json::from_value(serde_json::json!({
            "metadata": {"name": name, "labels": labels}
        }))
        .unwrap()
    }

    fn pod_without_labels(name: &str) -> Pod {
        serde_json::from_value(serde_json::json!({
            "metadata": {"name": name}
        }))
        .unwrap()
    }

    fn selector(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_selector_matches_labelled_pods() {
        let pods = vec![
            pod_with_labels("a", serde_json::json!({"app": "web"})),
            pod_with_labels("b", serde_json::json!({})),
        ];

        let matched = filter_pods(&pods, &HashMap::new());

        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_pod_without_labels_always_excluded() {
        let pods = vec![pod_without_labels("a")];

        assert!(filter_pods(&pods, &HashMap::new()).is_empty());
        assert!(filter_pods(&pods, &selector(&[("app", "web")])).is_empty());
    }

    #[test]
    fn test_all_selector_pairs_must_match() {
        let pods = vec![pod_with_labels(
            "a",
            serde_json::json!({"app": "web", "tier": "frontend"}),
        )];

        assert_eq!(filter_pods(&pods, &selector(&[("app", "web")])).len(), 1);
        assert_eq!(
            filter_pods(&pods, &selector(&[("app", "web"), ("tier", "frontend")])).len(),
            1
        );
        assert!(filter_pods(&pods, &selector(&[("app", "web"), ("tier", "backend")])).is_empty());
        assert!(filter_pods(&pods, &selector(&[("missing", "x")])).is_empty());
    }

    #[test]
    fn test_value_comparison_is_exact() {
        let pods = vec![pod_with_labels("a", serde_json::json!({"app": "web"}))];

        assert!(filter_pods(&pods, &selector(&[("app", "Web")])).is_empty());
        assert!(filter_pods(&pods, &selector(&[("app", "web ")])).is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let pods = vec![
            pod_with_labels("first", serde_json::json!({"app": "web"})),
            pod_without_labels("skipped"),
            pod_with_labels("second", serde_json::json!({"app": "web"})),
            pod_with_labels("third", serde_json::json!({"app": "web"})),
        ];

        let matched = filter_pods(&pods, &selector(&[("app", "web")]));

        let names: Vec<_> = matched
            .iter()
            .map(|p| p.metadata.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_pods(&[], &selector(&[("app", "web")])).is_empty());
    }
}
