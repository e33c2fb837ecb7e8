//! Role prediction. Shapes a `CandidateProfile` into the classifier's feature
//! contract and asks an injected `RolePredictor` for a label.
//!
//! The classifier is opaque to this module. `AppError::PredictionUnavailable` is
//! what callers see when it fails; no default label is ever substituted.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::CandidateProfile;

pub mod features;
pub mod linear;

pub use features::{parse_experience_label, FeatureEncoder, FeatureVector};
pub use linear::{LinearRolePredictor, ModelArtifact};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown {kind} category '{value}'")]
    UnknownCategory { kind: &'static str, value: String },

    #[error("Feature vector has {actual} columns, model expects {expected}")]
    FeatureWidth { expected: usize, actual: usize },

    #[error("Classifier backend error: {0}")]
    Backend(String),
}

/// The classifier capability. Implement this to swap model backends.
#[async_trait]
pub trait RolePredictor: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<String, PredictionError>;
}

/// Owns the feature-shaping contract; the model itself is injected.
#[derive(Clone)]
pub struct RolePredictorAdapter {
    encoder: FeatureEncoder,
    predictor: Arc<dyn RolePredictor>,
}

impl RolePredictorAdapter {
    pub fn new(encoder: FeatureEncoder, predictor: Arc<dyn RolePredictor>) -> Self {
        Self { encoder, predictor }
    }

    /// Loads a `LinearRolePredictor` artifact and wires it into an adapter.
    pub fn from_model_file(path: &std::path::Path) -> Result<Self, PredictionError> {
        let (encoder, model) = LinearRolePredictor::load(path)?;
        Ok(Self::new(encoder, Arc::new(model)))
    }

    pub async fn predict_role(&self, profile: &CandidateProfile) -> Result<String, PredictionError> {
        let features = self.encoder.encode(profile)?;
        self.run(features).await
    }

    /// Uses a caller-supplied experience figure (in years) instead of the extracted one.
    pub async fn predict_role_with_experience(
        &self,
        profile: &CandidateProfile,
        experience_years: f64,
    ) -> Result<String, PredictionError> {
        let features = self.encoder.encode_with_experience(profile, experience_years)?;
        self.run(features).await
    }

    async fn run(&self, features: FeatureVector) -> Result<String, PredictionError> {
        let role = self.predictor.predict(&features).await?;
        info!(role = %role, features = features.len(), "role predicted");
        Ok(role)
    }
}
