use crate::classification_client::interface::PredictionItem;
use crate::label_registry::label_set::LabelSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrigin {
    Item,
    Cached,
    Placeholder,
}

/// A prediction whose probabilities are paired index-by-index with labels of
/// the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPrediction {
    pub predicted_class: String,
    pub labels: Vec<String>,
    pub probabilities: Vec<f64>,
    pub origin: LabelOrigin,
}

pub fn normalize(items: &[PredictionItem], label_set: &LabelSet) -> Vec<NormalizedPrediction> {
    items
        .iter()
        .map(|item| {
            let (labels, origin) = select_labels(item, label_set);
            NormalizedPrediction {
                predicted_class: item.predicted_class.clone(),
                labels,
                probabilities: item.class_probability.clone(),
                origin,
            }
        })
        .collect()
}

/// Item labels win, then the cached set if its length matches, then
/// synthesized `Class {i}` names. A selected sequence whose length differs
/// from the probability vector is never used.
pub fn select_labels(item: &PredictionItem, label_set: &LabelSet) -> (Vec<String>, LabelOrigin) {
    let width = item.class_probability.len();

    match &item.item_labels {
        Some(item_labels) if !item_labels.is_empty() => {
            if item_labels.len() == width {
                (item_labels.clone(), LabelOrigin::Item)
            } else {
                (placeholder_labels(width), LabelOrigin::Placeholder)
            }
        }
        _ if label_set.labels().len() == width => {
            (label_set.labels().to_vec(), LabelOrigin::Cached)
        }
        _ => (placeholder_labels(width), LabelOrigin::Placeholder),
    }
}

pub fn placeholder_labels(width: usize) -> Vec<String> {
    (0..width).map(|i| format!("Class {}", i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn cached() -> LabelSet {
        LabelSet::from_registry(names(&[
            "lionel_messi",
            "maria_sharapova",
            "roger_federer",
            "serena_williams",
            "virat_kohli",
        ]))
        .unwrap()
    }

    fn item(probabilities: &[f64], item_labels: Option<&[&str]>) -> PredictionItem {
        PredictionItem {
            predicted_class: "virat_kohli".to_string(),
            class_probability: probabilities.to_vec(),
            item_labels: item_labels.map(names),
        }
    }

    #[test]
    fn test_item_labels_take_priority() {
        let item = item(&[10.0, 90.0], Some(&["serena_williams", "virat_kohli"]));
        let (labels, origin) = select_labels(&item, &cached());
        assert_eq!(labels, names(&["serena_williams", "virat_kohli"]));
        assert_eq!(origin, LabelOrigin::Item);
    }

    #[test]
    fn test_empty_item_labels_fall_back_to_cache() {
        let item = item(&[91.2, 3.1, 2.0, 1.5, 2.2], Some(&[]));
        let (labels, origin) = select_labels(&item, &cached());
        assert_eq!(labels, cached().labels().to_vec());
        assert_eq!(origin, LabelOrigin::Cached);
    }

    #[test]
    fn test_cache_length_mismatch_yields_placeholders() {
        let item = item(&[50.0, 30.0, 20.0], None);
        let (labels, origin) = select_labels(&item, &cached());
        assert_eq!(labels, names(&["Class 0", "Class 1", "Class 2"]));
        assert_eq!(origin, LabelOrigin::Placeholder);
    }

    #[test]
    fn test_item_label_length_mismatch_yields_placeholders() {
        let item = item(&[50.0, 50.0], Some(&["a", "b", "c"]));
        let (labels, origin) = select_labels(&item, &cached());
        assert_eq!(labels, names(&["Class 0", "Class 1"]));
        assert_eq!(origin, LabelOrigin::Placeholder);
    }

    #[test]
    fn test_each_item_resolved_independently() {
        let items = vec![
            item(&[91.2, 3.1, 2.0, 1.5, 2.2], None),
            item(&[60.0, 40.0], Some(&["x", "y"])),
            item(&[100.0], None),
        ];
        let normalized = normalize(&items, &cached());

        assert_eq!(normalized[0].origin, LabelOrigin::Cached);
        assert_eq!(normalized[1].origin, LabelOrigin::Item);
        assert_eq!(normalized[2].labels, names(&["Class 0"]));
        for prediction in &normalized {
            assert_eq!(prediction.labels.len(), prediction.probabilities.len());
        }
    }

    #[test]
    fn test_empty_probability_vector() {
        let item = item(&[], None);
        let (labels, origin) = select_labels(&item, &cached());
        assert!(labels.is_empty());
        assert_eq!(origin, LabelOrigin::Placeholder);
    }
}
