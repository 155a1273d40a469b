use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ModelError;
use crate::types::Label;

/// Fitted TF-IDF vectorizer: term -> feature index plus per-feature idf
/// weights.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

/// Fitted linear classifier: one coefficient row and one intercept per class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Pretrained sentiment model, loaded once at startup and read-only
/// thereafter.
///
/// `classify` is a pure function of its input: vectorize (term frequency *
/// idf, L2-normalized), score each class, take the argmax. The label set is
/// whatever the artifacts were trained on; this crate never assumes specific
/// label names.
pub struct SentimentModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    classes: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl SentimentModel {
    /// Assemble a model from already-deserialized artifacts, validating that
    /// their shapes agree.
    pub fn from_artifacts(
        vectorizer: VectorizerArtifact,
        classifier: ClassifierArtifact,
    ) -> Result<Self, ModelError> {
        let features = vectorizer.idf.len();

        if vectorizer.vocabulary.len() != features {
            return Err(ModelError::Shape(format!(
                "vocabulary has {} terms but idf has {} weights",
                vectorizer.vocabulary.len(),
                features
            )));
        }
        if let Some((term, &index)) = vectorizer
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= features)
        {
            return Err(ModelError::Shape(format!(
                "term {term:?} maps to feature {index}, but there are only {features} features"
            )));
        }
        if classifier.classes.is_empty() {
            return Err(ModelError::Shape("classifier has no classes".to_string()));
        }
        if classifier.coefficients.len() != classifier.classes.len() {
            return Err(ModelError::Shape(format!(
                "{} classes but {} coefficient rows",
                classifier.classes.len(),
                classifier.coefficients.len()
            )));
        }
        if classifier.intercepts.len() != classifier.classes.len() {
            return Err(ModelError::Shape(format!(
                "{} classes but {} intercepts",
                classifier.classes.len(),
                classifier.intercepts.len()
            )));
        }
        if let Some(row) = classifier
            .coefficients
            .iter()
            .find(|row| row.len() != features)
        {
            return Err(ModelError::Shape(format!(
                "coefficient row has {} entries, expected {features}",
                row.len()
            )));
        }

        Ok(Self {
            vocabulary: vectorizer.vocabulary,
            idf: vectorizer.idf,
            classes: classifier.classes,
            coefficients: classifier.coefficients,
            intercepts: classifier.intercepts,
        })
    }

    /// Load the vectorizer and classifier artifacts from disk.
    pub fn load(
        vectorizer_path: impl AsRef<Path>,
        classifier_path: impl AsRef<Path>,
    ) -> Result<Self, ModelError> {
        let vectorizer_json =
            std::fs::read_to_string(&vectorizer_path).map_err(|source| ModelError::Io {
                path: vectorizer_path.as_ref().display().to_string(),
                source,
            })?;
        let classifier_json =
            std::fs::read_to_string(&classifier_path).map_err(|source| ModelError::Io {
                path: classifier_path.as_ref().display().to_string(),
                source,
            })?;

        let vectorizer: VectorizerArtifact = serde_json::from_str(&vectorizer_json)?;
        let classifier: ClassifierArtifact = serde_json::from_str(&classifier_json)?;

        Self::from_artifacts(vectorizer, classifier)
    }

    /// The model shipped with the crate, compiled in from `model/`.
    pub fn bundled() -> Result<Self, ModelError> {
        let vectorizer: VectorizerArtifact =
            serde_json::from_str(include_str!("../../model/vectorizer.json"))?;
        let classifier: ClassifierArtifact =
            serde_json::from_str(include_str!("../../model/classifier.json"))?;
        Self::from_artifacts(vectorizer, classifier)
    }

    /// The label set this model can produce, in class order.
    pub fn labels(&self) -> &[String] {
        &self.classes
    }

    /// Classify already-normalized text.
    ///
    /// Total over strings: out-of-vocabulary tokens are ignored and empty
    /// input falls through to the intercepts, so this always yields a label.
    pub fn classify(&self, normalized_text: &str) -> Label {
        let vector = self.vectorize(normalized_text);

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class_index, (row, intercept)) in self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .enumerate()
        {
            let score = intercept
                + vector
                    .iter()
                    .map(|&(feature, weight)| row[feature] * weight)
                    .sum::<f64>();
            // Strict comparison keeps ties on the first class, so the result
            // is stable across calls
            if score > best_score {
                best_score = score;
                best = class_index;
            }
        }

        Label::new(self.classes[best].clone())
    }

    /// Sparse TF-IDF vector over the fitted vocabulary, L2-normalized.
    fn vectorize(&self, normalized_text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in normalized_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();

        let norm = vector
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for entry in &mut vector {
                entry.1 /= norm;
            }
        }

        vector
    }
}
