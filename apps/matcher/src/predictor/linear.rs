use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::predictor::features::{FeatureEncoder, FeatureVector};
use crate::predictor::{PredictionError, RolePredictor};

/// On-disk classifier artifact: the encoder vocabularies plus one weight row per role.
///
/// Every class list must be strictly ascending (sorted, no duplicates); a
/// category's code is its index in that list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub skill_classes: Vec<String>,
    pub degree_classes: Vec<String>,
    pub domain_classes: Vec<String>,
    pub roles: Vec<String>,
    /// `roles.len()` rows of `skill_classes.len() + 3` columns: one per skill class
    /// in `skill_classes` order, then experience, degree code, domain code.
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

/// Linear one-vs-rest role classifier. Loaded once, then read-only.
#[derive(Debug, Clone)]
pub struct LinearRolePredictor {
    roles: Vec<String>,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl LinearRolePredictor {
    /// Reads an artifact from disk and returns the matching encoder alongside the model.
    pub fn load(path: &Path) -> Result<(FeatureEncoder, Self), PredictionError> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let (encoder, model) = Self::from_artifact(artifact)?;
        info!(
            path = %path.display(),
            roles = model.roles.len(),
            features = encoder.width(),
            "role model loaded"
        );
        Ok((encoder, model))
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<(FeatureEncoder, Self), PredictionError> {
        // The encoder sorts its vocabularies; weight columns must already agree.
        for (kind, classes) in [
            ("skill", &artifact.skill_classes),
            ("degree", &artifact.degree_classes),
            ("domain", &artifact.domain_classes),
        ] {
            if let Some(pair) = classes.windows(2).find(|w| w[0] >= w[1]) {
                return Err(PredictionError::InvalidModel(format!(
                    "{kind} classes must be sorted and unique, found '{}' before '{}'",
                    pair[0], pair[1]
                )));
            }
        }

        let encoder = FeatureEncoder::new(
            artifact.skill_classes,
            artifact.degree_classes,
            artifact.domain_classes,
        );
        let width = encoder.width();

        if artifact.roles.is_empty() {
            return Err(PredictionError::InvalidModel("model has no roles".to_string()));
        }
        if artifact.weights.len() != artifact.roles.len() || artifact.bias.len() != artifact.roles.len() {
            return Err(PredictionError::InvalidModel(format!(
                "{} roles but {} weight rows and {} bias terms",
                artifact.roles.len(),
                artifact.weights.len(),
                artifact.bias.len()
            )));
        }
        if let Some(row) = artifact.weights.iter().find(|row| row.len() != width) {
            return Err(PredictionError::InvalidModel(format!(
                "weight row has {} columns, expected {width}",
                row.len()
            )));
        }

        Ok((
            encoder,
            Self {
                roles: artifact.roles,
                weights: artifact.weights,
                bias: artifact.bias,
            },
        ))
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    fn best_role(&self, features: &FeatureVector) -> Result<&str, PredictionError> {
        let expected = self.weights.first().map(Vec::len).unwrap_or_default();
        if features.len() != expected {
            return Err(PredictionError::FeatureWidth {
                expected,
                actual: features.len(),
            });
        }

        let mut best: Option<(usize, f32)> = None;
        for (idx, (row, bias)) in self.weights.iter().zip(&self.bias).enumerate() {
            let score: f32 = row
                .iter()
                .zip(features.values())
                .map(|(w, x)| w * x)
                .sum::<f32>()
                + bias;
            // Strictly greater: the first role wins a tie.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, _)| self.roles[idx].as_str())
            .ok_or_else(|| PredictionError::InvalidModel("model has no roles".to_string()))
    }
}

#[async_trait]
impl RolePredictor for LinearRolePredictor {
    async fn predict(&self, features: &FeatureVector) -> Result<String, PredictionError> {
        self.best_role(features).map(str::to_string)
    }
}
