use serde_json::Value;

use crate::domain::{
    catalog::FoodCatalog,
    food_analysis::entities::{ClassificationResult, ClassifierPrediction, FoodMatch},
};

/// Returns the base64 payload of a data URI, or the input when it has no prefix.
pub fn strip_data_uri(image_data: &str) -> &str {
    match image_data.split_once(',') {
        Some((_, payload)) => payload,
        None => image_data,
    }
}

/// Extracts the first `{label, score}` element of a classifier response.
///
/// Anything other than a non-empty JSON array whose head has those two fields
/// yields `None`.
pub fn first_prediction(body: &Value) -> Option<ClassifierPrediction> {
    let head = body.as_array()?.first()?;
    serde_json::from_value(head.clone()).ok()
}

/// `score * weight * 100`
pub fn match_score(result: &ClassificationResult) -> f64 {
    result.score * result.weight * 100.0
}

/// Maps classifier labels onto the catalog.
///
/// Results are visited in order. For each one only the first catalog entry that
/// overlaps its label is considered, and it replaces the current best match when
/// its match score is strictly higher. Ties keep the earlier classifier.
pub fn reconcile(results: &[ClassificationResult], catalog: &FoodCatalog) -> Option<FoodMatch> {
    let mut best: Option<FoodMatch> = None;
    let mut best_score = 0.0;

    for result in results {
        let Some(entry) = catalog.first_match(&result.label) else {
            continue;
        };

        let score = match_score(result);
        if score > best_score {
            best_score = score;
            best = Some(FoodMatch {
                label: entry.to_string(),
                confidence: result.score,
                score,
                model: result.model.clone(),
            });
        }
    }

    best
}

/// The result with the highest raw score; the first one wins a tie.
pub fn strongest_result(results: &[ClassificationResult]) -> Option<&ClassificationResult> {
    results
        .iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}
