use serde::{Deserialize, Serialize};

/// The eight facial attributes scored by every analysis, in instruction order.
pub const SCORED_ATTRIBUTES: [&str; 8] = [
    "Skin Clarity",
    "Facial Symmetry",
    "Eye Radiance",
    "Lip Volume",
    "Brow Definition",
    "Jawline Contour",
    "Cheek Fullness",
    "Facial Harmony",
];

/// Category grouping for scored attributes.
///
/// Serialized as the wire strings the model is instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    #[serde(rename = "Symmetry & Harmony")]
    SymmetryHarmony,
    #[serde(rename = "Skin Health")]
    SkinHealth,
    #[serde(rename = "Key Features")]
    KeyFeatures,
}

impl ScoreCategory {
    /// Wire/display name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::SymmetryHarmony => "Symmetry & Harmony",
            ScoreCategory::SkinHealth => "Skin Health",
            ScoreCategory::KeyFeatures => "Key Features",
        }
    }

    /// Category for one of the eight scored attributes.
    ///
    /// Pure and total over [`SCORED_ATTRIBUTES`]; returns `None` for names
    /// outside the fixed set.
    pub fn for_attribute(name: &str) -> Option<ScoreCategory> {
        match name {
            "Facial Symmetry" | "Facial Harmony" => Some(ScoreCategory::SymmetryHarmony),
            "Skin Clarity" => Some(ScoreCategory::SkinHealth),
            "Eye Radiance" | "Lip Volume" | "Brow Definition" | "Jawline Contour"
            | "Cheek Fullness" => Some(ScoreCategory::KeyFeatures),
            _ => None,
        }
    }
}

/// A single scored facial attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    /// 0–100, higher is better.
    pub value: u8,
    pub category: ScoreCategory,
}

/// One actionable suggestion within an enhancement area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementSolution {
    pub title: String,
    /// May embed `**…**` emphasis markers. Preserved verbatim here;
    /// only the presentation layer interprets them.
    pub description: String,
}

/// An area for improvement with its identified problem and 2–3 solutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enhancement {
    pub area: String,
    pub problem: String,
    pub solutions: Vec<EnhancementSolution>,
}

/// The complete analysis document returned by the model.
///
/// Immutable once produced. Deserialization is the validation step: a
/// document missing any required field, top-level or nested, is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Holistic score, 0–100.
    pub overall_score: u8,
    /// Per-attribute scores; eight expected by instruction convention.
    pub scores: Vec<Score>,
    /// Improvement areas; three expected by instruction convention.
    pub enhancements: Vec<Enhancement>,
    pub summary: String,
}
