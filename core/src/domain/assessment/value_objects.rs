use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the caller knows about the product. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisInput {
    pub text: String,
    pub image_name: String,
    pub location: String,
}

impl AnalysisInput {
    pub fn new(
        text: impl Into<String>,
        image_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            image_name: image_name.into(),
            location: location.into(),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_name.is_empty()
    }

    /// No description and no photo.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.image_name.trim().is_empty()
    }

    /// Text the eco pass inspects: the description, or the image name when
    /// no description was given.
    pub fn eco_text(&self) -> &str {
        if self.text.is_empty() {
            &self.image_name
        } else {
            &self.text
        }
    }
}
