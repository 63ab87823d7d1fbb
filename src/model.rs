//! Trained rating model and the cached model handle.
//!
//! The model is an externally trained linear regressor; this crate only
//! loads its parameters and evaluates the predict contract. Training is
//! out of scope.

use crate::error::{Result, SaborError};
use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::serialization::{SbrMetadata, SbrReader};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Fixed relative path of the model artifact.
pub const MODEL_FILE: &str = "restaurant_rating_model.sbr";

/// Trained rating regressor.
///
/// Evaluates `dot(coefficients, features) + intercept`, the single output
/// of the artifact's predict contract. Inference never mutates the model.
///
/// # Examples
///
/// ```
/// use sabor::model::RatingModel;
/// use sabor::features::{encode, RestaurantInput};
///
/// let model = RatingModel::from_parts(vec![0.0; 11], 4.2).unwrap();
/// let rating = model.predict(&encode(&RestaurantInput::default()));
/// assert_eq!(rating, 4.2);
/// ```
#[derive(Debug, Clone)]
pub struct RatingModel {
    coefficients: Vec<f32>,
    intercept: f32,
    metadata: SbrMetadata,
}

impl RatingModel {
    /// Builds a model from raw parameters.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly [`FEATURE_COUNT`] coefficients are
    /// given.
    pub fn from_parts(coefficients: Vec<f32>, intercept: f32) -> Result<Self> {
        if coefficients.len() != FEATURE_COUNT {
            return Err(SaborError::InvalidModel {
                message: format!(
                    "expected {FEATURE_COUNT} coefficients, got {}",
                    coefficients.len()
                ),
            });
        }
        Ok(Self {
            coefficients,
            intercept,
            metadata: SbrMetadata::new(),
        })
    }

    /// Loads the model from an SBR artifact.
    ///
    /// # Errors
    ///
    /// Returns [`SaborError::ModelNotFound`] when the artifact is absent,
    /// and format/checksum errors when it is unreadable or does not carry
    /// exactly [`FEATURE_COUNT`] coefficients.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SaborError::ModelNotFound {
                path: path.to_path_buf(),
            },
            _ => SaborError::Io(e),
        })?;
        let reader = SbrReader::from_bytes(data)?;

        let mut model = Self::from_parts(reader.coefficients().to_vec(), reader.intercept())?;
        model.metadata = reader.metadata;
        debug!(
            "loaded rating model from {}: {} coefficients, intercept {}",
            path.display(),
            model.coefficients.len(),
            model.intercept
        );
        Ok(model)
    }

    /// Predicts a raw (unclamped) rating for an encoded feature row.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f32 {
        let dot: f32 = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(c, x)| c * x)
            .sum();
        dot + self.intercept
    }

    /// Number of feature columns the model consumes.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Coefficients in feature column order.
    #[must_use]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Artifact metadata.
    #[must_use]
    pub fn metadata(&self) -> &SbrMetadata {
        &self.metadata
    }
}

/// Process-wide cached loader for the model artifact.
///
/// Exactly one load attempt happens per handle regardless of how many
/// callers ask; the outcome (model or error) is cached and every caller
/// observes it. There is no retry, reload, or hot-swap. `OnceLock`
/// guarantees single initialization under concurrent first access.
///
/// Own one handle in the application context and pass it to whatever
/// performs predictions.
#[derive(Debug)]
pub struct ModelHandle {
    path: PathBuf,
    cell: OnceLock<Result<RatingModel>>,
}

impl ModelHandle {
    /// Creates a handle for an artifact path. Nothing is loaded yet.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Handle for the fixed artifact path [`MODEL_FILE`] in the working
    /// directory.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(MODEL_FILE)
    }

    /// Artifact path this handle loads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded model, loading it on first call.
    ///
    /// # Errors
    ///
    /// Returns the (cached) load error; failures are sticky for the life
    /// of the handle.
    pub fn get(&self) -> std::result::Result<&RatingModel, &SaborError> {
        self.cell
            .get_or_init(|| RatingModel::load(&self.path))
            .as_ref()
    }
}

impl Default for ModelHandle {
    fn default() -> Self {
        Self::with_default_path()
    }
}
