use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::{AnalysisOutcome, ClassificationResult, ClassifierModel, FoodIdentification},
        helpers::{first_prediction, reconcile, strip_data_uri, strongest_result},
        ports::{FoodAnalysisService, ImageClassifier, ImageEnhancer},
    },
    scraper::ports::{DatasetStore, ImageDownloader, ImageSearchSource},
};

impl<IC, IE, BS, AS, DL, DS> FoodAnalysisService for Service<IC, IE, BS, AS, DL, DS>
where
    IC: ImageClassifier,
    IE: ImageEnhancer,
    BS: ImageSearchSource,
    AS: ImageSearchSource,
    DL: ImageDownloader,
    DS: DatasetStore,
{
    async fn enhance_image(&self, image_data: String) -> String {
        let payload = strip_data_uri(&image_data).to_string();
        let enhancer = Arc::clone(&self.image_enhancer);
        let input = payload.clone();

        match tokio::task::spawn_blocking(move || enhancer.enhance(&input)).await {
            Ok(Ok(enhanced)) => {
                info!("Image enhanced");
                enhanced
            }
            Ok(Err(e)) => {
                error!("Image enhancement failed, using original image: {}", e);
                payload
            }
            Err(e) => {
                error!("Image enhancement task failed, using original image: {}", e);
                payload
            }
        }
    }

    async fn analyze_with_model(
        &self,
        model: ClassifierModel,
        image_b64: String,
    ) -> Option<ClassificationResult> {
        let response = self
            .image_classifier
            .classify(model.clone(), image_b64)
            .await;

        match response {
            Ok(body) => match first_prediction(&body) {
                Some(prediction) => Some(ClassificationResult {
                    label: prediction.label,
                    score: prediction.score,
                    model: model.name,
                    weight: model.weight,
                }),
                None => {
                    warn!(model = %model.name, "Classifier returned an unexpected response");
                    None
                }
            },
            Err(CoreError::UnexpectedStatus(status)) => {
                warn!(model = %model.name, status, "Classifier returned an unexpected response");
                None
            }
            Err(e) => {
                error!(model = %model.name, "Classifier call failed: {}", e);
                None
            }
        }
    }

    async fn supreme_analysis(&self, image_data: String) -> Result<AnalysisOutcome, CoreError> {
        info!(models = self.models.len(), "Starting food analysis");

        let enhanced = self.enhance_image(image_data).await;

        let mut results = Vec::with_capacity(self.models.len());
        for model in self.models.iter() {
            if let Some(result) = self
                .analyze_with_model(model.clone(), enhanced.clone())
                .await
            {
                info!(
                    model = %result.model,
                    label = %result.label,
                    score = result.score,
                    "Classifier answered"
                );
                results.push(result);
            }
        }

        if results.is_empty() {
            warn!("No classifier produced a result");
            return Ok(AnalysisOutcome::no_model_available());
        }

        let dataset_size = self.catalog.len();
        let scraped_images = self.progress.scraped_images();

        if let Some(found) = reconcile(&results, &self.catalog) {
            info!(
                label = %found.label,
                score = found.score,
                model = %found.model,
                "Matched catalog entry"
            );
            return Ok(AnalysisOutcome::Identified(FoodIdentification::matched(
                found,
                dataset_size,
                scraped_images,
            )));
        }

        let strongest = strongest_result(&results).ok_or(CoreError::InternalServerError)?;
        info!(
            label = %strongest.label,
            model = %strongest.model,
            "No catalog match, using strongest classifier label"
        );

        Ok(AnalysisOutcome::Identified(FoodIdentification::unmatched(
            strongest,
            dataset_size,
            scraped_images,
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{
        catalog::FoodCatalog,
        common::test_support::{MockPorts, MockService},
    };

    fn passthrough_enhancer(ports: &mut MockPorts) {
        ports
            .enhancer
            .expect_enhance()
            .returning(|image| Ok(image.to_string()));
    }

    /// Only the named model answers with `body`; every other one fails with 503.
    fn single_answer(name: &'static str, body: Value) -> MockPorts {
        let mut ports = MockPorts::default();
        passthrough_enhancer(&mut ports);
        ports.classifier.expect_classify().returning(move |model, _| {
            let response = if model.name == name {
                Ok(body.clone())
            } else {
                Err(CoreError::UnexpectedStatus(503))
            };
            Box::pin(async move { response })
        });
        ports
    }

    fn world_service(ports: MockPorts) -> MockService {
        ports.into_service(FoodCatalog::world())
    }

    #[tokio::test]
    async fn matches_classifier_label_to_catalog() {
        let service = world_service(single_answer(
            "Food Expert",
            json!([{ "label": "Sushi roll", "score": 0.87 }]),
        ));

        let outcome = service
            .supreme_analysis("data:image/jpeg;base64,AAAA".to_string())
            .await
            .unwrap();

        let AnalysisOutcome::Identified(found) = outcome else {
            panic!("expected an identification");
        };
        assert_eq!(found.label, "sushi");
        assert_eq!(found.confidence, 0.87);
        assert!((found.score.unwrap() - 34.8).abs() < 1e-9);
        assert_eq!(found.dataset_size, 611);
        assert_eq!(found.scraped_images, 0);
        assert!(found.success);
    }

    #[tokio::test]
    async fn falls_back_to_raw_label_without_score() {
        let service = world_service(single_answer(
            "Vision Master",
            json!([{ "label": "spaceship", "score": 0.9 }]),
        ));

        let outcome = service.supreme_analysis("AAAA".to_string()).await.unwrap();
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["label"], "spaceship");
        assert_eq!(value["confidence"], 0.9);
        assert_eq!(value["success"], true);
        assert!(value.get("score").is_none());
    }

    #[tokio::test]
    async fn reports_unavailable_when_every_classifier_fails() {
        let mut ports = MockPorts::default();
        passthrough_enhancer(&mut ports);
        ports.classifier.expect_classify().times(4).returning(|model, _| {
            let response = if model.name == "ResNet Ultra" {
                Err(CoreError::ExternalServiceError("connection refused".to_string()))
            } else {
                Err(CoreError::UnexpectedStatus(500))
            };
            Box::pin(async move { response })
        });

        let outcome = world_service(ports)
            .supreme_analysis("AAAA".to_string())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({ "error": "Nessun modello disponibile" })
        );
    }

    #[tokio::test]
    async fn consults_models_in_order_with_enhanced_image() {
        let mut ports = MockPorts::default();
        ports
            .enhancer
            .expect_enhance()
            .times(1)
            .returning(|image| {
                assert_eq!(image, "AAAA");
                Ok("ENHANCED".to_string())
            });

        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        ports
            .classifier
            .expect_classify()
            .times(4)
            .returning(move |model, image| {
                sink.lock().unwrap().push((model.name.clone(), image));
                Box::pin(async { Ok(json!([{ "label": "pizza", "score": 0.5 }])) })
            });

        let outcome = world_service(ports)
            .supreme_analysis("data:image/png;base64,AAAA".to_string())
            .await
            .unwrap();

        let calls = calls.lock().unwrap().clone();
        let names: Vec<_> = calls.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["Food Expert", "Vision Master", "ResNet Ultra", "MobileNet Pro"]
        );
        assert!(calls.iter().all(|(_, image)| image == "ENHANCED"));

        // Identical labels: the heaviest model wins.
        let AnalysisOutcome::Identified(found) = outcome else {
            panic!("expected an identification");
        };
        assert_eq!(found.label, "pizza");
        assert!((found.score.unwrap() - 20.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn enhancement_failure_passes_original_payload_through() {
        let mut ports = MockPorts::default();
        ports
            .enhancer
            .expect_enhance()
            .returning(|_| Err(CoreError::InvalidImage("not an image".to_string())));

        let service = world_service(ports);
        let image = service
            .enhance_image("data:image/jpeg;base64,bm90IGFuIGltYWdl".to_string())
            .await;

        assert_eq!(image, "bm90IGFuIGltYWdl");
    }

    #[tokio::test]
    async fn unexpected_shapes_count_as_no_vote() {
        let mut ports = MockPorts::default();
        ports.classifier.expect_classify().returning(|model, _| {
            let body = match model.name.as_str() {
                "Food Expert" => json!({ "error": "Model is loading" }),
                "Vision Master" => json!([]),
                _ => json!([{ "label": "tea" }]),
            };
            Box::pin(async move { Ok(body) })
        });

        let service = world_service(ports);
        for model in ClassifierModel::defaults("http://models.test") {
            assert!(service.analyze_with_model(model, "AAAA".to_string()).await.is_none());
        }
    }

    #[tokio::test]
    async fn analyze_with_model_tags_result_with_model() {
        let service = world_service(single_answer(
            "MobileNet Pro",
            json!([{ "label": "Espresso", "score": 0.66 }, { "label": "cup", "score": 0.2 }]),
        ));
        let model = ClassifierModel::defaults("http://models.test").remove(3);

        let result = service
            .analyze_with_model(model, "AAAA".to_string())
            .await
            .unwrap();

        assert_eq!(
            result,
            ClassificationResult {
                label: "Espresso".to_string(),
                score: 0.66,
                model: "MobileNet Pro".to_string(),
                weight: 0.1,
            }
        );
    }
}
