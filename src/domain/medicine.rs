//! Medicine - Catalog Record Types

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;

/// A medicine record as served by the backend.
///
/// The match fields (`similarity`, `confidence`, `match_type`, `dosage`) are
/// only populated on image-search responses and stay `None` on catalog rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Unique ID
    pub id: String,
    /// Medicine name (English)
    pub name: String,
    /// Medicine name (Bangla)
    #[serde(default)]
    pub name_bn: Option<String>,
    /// Brand name (English)
    #[serde(default)]
    pub brand: Option<String>,
    /// Brand name (Bangla)
    #[serde(default)]
    pub brand_bn: Option<String>,
    /// Description / composition details (English)
    #[serde(default)]
    pub details: Option<String>,
    /// Description / composition details (Bangla)
    #[serde(default)]
    pub details_bn: Option<String>,
    /// Country or manufacturer origin (English)
    #[serde(default)]
    pub origin: Option<String>,
    /// Country or manufacturer origin (Bangla)
    #[serde(default)]
    pub origin_bn: Option<String>,
    /// Known side effects (English)
    #[serde(default)]
    pub side_effects: Option<String>,
    /// Known side effects (Bangla)
    #[serde(default)]
    pub side_effects_bn: Option<String>,
    /// Indications / what it is used for (English)
    #[serde(default)]
    pub usage: Option<String>,
    /// Indications / what it is used for (Bangla)
    #[serde(default)]
    pub usage_bn: Option<String>,
    /// Dosage instructions (English)
    #[serde(default)]
    pub how_to_use: Option<String>,
    /// Dosage instructions (Bangla)
    #[serde(default)]
    pub how_to_use_bn: Option<String>,
    /// Uploaded image filenames (served under `/uploads/...`)
    #[serde(default)]
    pub images: Vec<String>,
    /// Created timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Match score (0..1) on image-search responses
    #[serde(default)]
    pub similarity: Option<f64>,
    /// Match confidence label on image-search responses
    #[serde(default)]
    pub confidence: Option<String>,
    /// Medicine type (tablet, syrup, ...) on image-search responses
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
    /// Dosage hint on image-search responses
    #[serde(default)]
    pub dosage: Option<String>,
}

impl Default for Medicine {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            name_bn: None,
            brand: None,
            brand_bn: None,
            details: None,
            details_bn: None,
            origin: None,
            origin_bn: None,
            side_effects: None,
            side_effects_bn: None,
            usage: None,
            usage_bn: None,
            how_to_use: None,
            how_to_use_bn: None,
            images: Vec::new(),
            created_at: None,
            updated_at: None,
            similarity: None,
            confidence: None,
            match_type: None,
            dosage: None,
        }
    }
}

impl Medicine {
    /// Pick the Bangla variant when the locale asks for it and the field has
    /// one, otherwise the English value.
    fn localized<'a>(locale: Locale, en: &'a str, bn: Option<&'a str>) -> &'a str {
        match (locale, bn) {
            (Locale::BnBD, Some(bn)) if !bn.is_empty() => bn,
            _ => en,
        }
    }

    /// Display name for the given locale
    pub fn display_name(&self, locale: Locale) -> String {
        Self::localized(locale, &self.name, self.name_bn.as_deref()).to_string()
    }

    /// Display brand for the given locale, empty when unknown
    pub fn display_brand(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.brand.as_deref().unwrap_or_default(),
            self.brand_bn.as_deref(),
        )
        .to_string()
    }

    /// Display details for the given locale, empty when unknown
    pub fn display_details(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.details.as_deref().unwrap_or_default(),
            self.details_bn.as_deref(),
        )
        .to_string()
    }

    /// Display origin for the given locale, empty when unknown
    pub fn display_origin(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.origin.as_deref().unwrap_or_default(),
            self.origin_bn.as_deref(),
        )
        .to_string()
    }

    /// Display side effects for the given locale, empty when unknown
    pub fn display_side_effects(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.side_effects.as_deref().unwrap_or_default(),
            self.side_effects_bn.as_deref(),
        )
        .to_string()
    }

    /// Display usage for the given locale, empty when unknown
    pub fn display_usage(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.usage.as_deref().unwrap_or_default(),
            self.usage_bn.as_deref(),
        )
        .to_string()
    }

    /// Display how-to-use for the given locale, empty when unknown
    pub fn display_how_to_use(&self, locale: Locale) -> String {
        Self::localized(
            locale,
            self.how_to_use.as_deref().unwrap_or_default(),
            self.how_to_use_bn.as_deref(),
        )
        .to_string()
    }

    /// Match score as a whole percentage, present only on image-search rows
    pub fn similarity_percent(&self) -> Option<u32> {
        self.similarity.map(|s| (s * 100.0).round() as u32)
    }
}

/// Editable medicine fields, the payload for create and update.
///
/// Serialized as multipart text parts with the backend's camelCase part
/// names; empty fields are skipped the way the web form skips blank inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineDraft {
    pub name: String,
    pub name_bn: String,
    pub brand: String,
    pub brand_bn: String,
    pub details: String,
    pub details_bn: String,
    pub origin: String,
    pub origin_bn: String,
    pub side_effects: String,
    pub side_effects_bn: String,
    pub usage: String,
    pub usage_bn: String,
    pub how_to_use: String,
    pub how_to_use_bn: String,
    /// Local image files to upload alongside the text fields
    pub image_paths: Vec<PathBuf>,
}

impl MedicineDraft {
    /// Pre-fill the form from an existing record for editing
    pub fn from_medicine(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            name_bn: medicine.name_bn.clone().unwrap_or_default(),
            brand: medicine.brand.clone().unwrap_or_default(),
            brand_bn: medicine.brand_bn.clone().unwrap_or_default(),
            details: medicine.details.clone().unwrap_or_default(),
            details_bn: medicine.details_bn.clone().unwrap_or_default(),
            origin: medicine.origin.clone().unwrap_or_default(),
            origin_bn: medicine.origin_bn.clone().unwrap_or_default(),
            side_effects: medicine.side_effects.clone().unwrap_or_default(),
            side_effects_bn: medicine.side_effects_bn.clone().unwrap_or_default(),
            usage: medicine.usage.clone().unwrap_or_default(),
            usage_bn: medicine.usage_bn.clone().unwrap_or_default(),
            how_to_use: medicine.how_to_use.clone().unwrap_or_default(),
            how_to_use_bn: medicine.how_to_use_bn.clone().unwrap_or_default(),
            image_paths: Vec::new(),
        }
    }

    /// Require the fields the backend requires
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Name is required".to_string(),
            });
        }
        if self.details.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Details are required".to_string(),
            });
        }
        Ok(())
    }

    /// Text parts for the multipart request, blanks skipped
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("name", &self.name),
            ("nameBn", &self.name_bn),
            ("brand", &self.brand),
            ("brandBn", &self.brand_bn),
            ("details", &self.details),
            ("detailsBn", &self.details_bn),
            ("origin", &self.origin),
            ("originBn", &self.origin_bn),
            ("sideEffects", &self.side_effects),
            ("sideEffectsBn", &self.side_effects_bn),
            ("usage", &self.usage),
            ("usageBn", &self.usage_bn),
            ("howToUse", &self.how_to_use),
            ("howToUseBn", &self.how_to_use_bn),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| (key, value.trim().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": "med-001",
            "name": "Napa",
            "nameBn": "নাপা",
            "brand": "Beximco",
            "details": "Paracetamol 500mg",
            "origin": "Bangladesh",
            "images": ["napa-front.jpg", "napa-back.jpg"],
            "createdAt": "2024-03-18T09:30:00.000Z"
        })
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let medicine: Medicine = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(medicine.id, "med-001");
        assert_eq!(medicine.name, "Napa");
        assert_eq!(medicine.name_bn.as_deref(), Some("নাপা"));
        assert_eq!(medicine.brand.as_deref(), Some("Beximco"));
        assert_eq!(medicine.images.len(), 2);
        assert!(medicine.created_at.is_some());
        assert!(medicine.similarity.is_none());
    }

    #[test]
    fn test_deserialize_search_match_fields() {
        let medicine: Medicine = serde_json::from_value(json!({
            "id": "med-002",
            "name": "Seclo",
            "similarity": 0.873,
            "confidence": "high",
            "type": "capsule",
            "dosage": "20mg"
        }))
        .unwrap();
        assert_eq!(medicine.similarity_percent(), Some(87));
        assert_eq!(medicine.match_type.as_deref(), Some("capsule"));
    }

    #[test]
    fn test_localized_display_falls_back_to_english() {
        let medicine: Medicine = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(medicine.display_name(Locale::BnBD), "নাপা");
        assert_eq!(medicine.display_name(Locale::EnUS), "Napa");
        // No Bangla brand, so both locales see the English one.
        assert_eq!(medicine.display_brand(Locale::BnBD), "Beximco");
        assert_eq!(medicine.display_origin(Locale::BnBD), "Bangladesh");
        // Absent either way renders empty.
        assert_eq!(medicine.display_usage(Locale::EnUS), "");
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = MedicineDraft {
            name: "Napa".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());

        draft.details = "Paracetamol 500mg".to_string();
        assert!(draft.validate().is_ok());

        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_text_parts_skip_blanks() {
        let draft = MedicineDraft {
            name: "Napa".to_string(),
            name_bn: "নাপা".to_string(),
            details: "Paracetamol 500mg".to_string(),
            brand: "  ".to_string(),
            ..Default::default()
        };
        let parts = draft.text_parts();
        assert_eq!(parts.len(), 3);
        assert!(parts.contains(&("name", "Napa".to_string())));
        assert!(parts.contains(&("nameBn", "নাপা".to_string())));
        assert!(!parts.iter().any(|(key, _)| *key == "brand"));
    }

    #[test]
    fn test_draft_round_trip_from_medicine() {
        let medicine: Medicine = serde_json::from_value(sample_json()).unwrap();
        let draft = MedicineDraft::from_medicine(&medicine);
        assert_eq!(draft.name, "Napa");
        assert_eq!(draft.brand, "Beximco");
        assert_eq!(draft.side_effects, "");
        assert!(draft.image_paths.is_empty());
    }
}
