use crate::result_normalizer::{LabelOrigin, NormalizedPrediction};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    pub label: String,
    pub probability: f64,
    pub percentage: String,
    /// Bar fill in percent, always within 0..=100.
    pub bar_fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderCard {
    pub title: String,
    pub rows: Vec<RenderRow>,
    /// Rows are labelled `Class {i}` because no matching label list existed.
    pub placeholder_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    pub cards: Vec<RenderCard>,
}

pub fn project(predictions: &[NormalizedPrediction]) -> RenderModel {
    RenderModel {
        cards: predictions.iter().map(project_card).collect(),
    }
}

fn project_card(prediction: &NormalizedPrediction) -> RenderCard {
    RenderCard {
        title: pretty_name(&prediction.predicted_class),
        rows: prediction
            .labels
            .iter()
            .zip(&prediction.probabilities)
            .map(|(label, &probability)| RenderRow {
                label: pretty_name(label),
                probability,
                percentage: format_percentage(probability),
                bar_fraction: clamp_bar(probability),
            })
            .collect(),
        placeholder_labels: prediction.origin == LabelOrigin::Placeholder,
    }
}

/// `roger_federer` -> `Roger Federer`
pub fn pretty_name(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_percentage(probability: f64) -> String {
    format!("{}%", probability)
}

pub fn clamp_bar(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 100.0)
    }
}

pub fn project_roster(labels: &[String]) -> Vec<String> {
    labels.iter().map(|label| pretty_name(label)).collect()
}
