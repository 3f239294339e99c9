//! Fixed instruction text and the structured-output schema declared to the
//! model on every analysis request.
//!
//! The instruction enumerates the eight scored attributes and states the
//! categorization rule; it is never templated per user. Schema adherence is
//! requested, not guaranteed by the protocol, which is why the client
//! re-validates the reply.

use serde_json::{json, Value};

/// Instruction text sent alongside the image on every call.
pub const INSTRUCTION: &str = "You are 'Lumira', a world-class AI beauty analyst. Your tone is always positive, empowering, and scientific.
Analyze this facial photo. Provide a detailed beauty analysis covering these 8 metrics: Skin Clarity, Facial Symmetry, Eye Radiance, Lip Volume, Brow Definition, Jawline Contour, Cheek Fullness, and Facial Harmony.
- Categorize 'Facial Symmetry' and 'Facial Harmony' as 'Symmetry & Harmony'.
- Categorize 'Skin Clarity' as 'Skin Health'.
- Categorize the rest ('Eye Radiance', 'Lip Volume', 'Brow Definition', 'Jawline Contour', 'Cheek Fullness') as 'Key Features'.
- For each of the 3 'enhancements', provide a short 'problem' description. Then provide 2-3 specific 'solutions'. Each solution should have a 'title' and a detailed 'description'. In the description, wrap the most important keywords (like ingredients or techniques) in double asterisks for highlighting (e.g., **hyaluronic acid** or **blending upwards**).
- Conclude with an uplifting summary celebrating the user's best features.";

/// The `responseSchema` declaration for the generateContent call.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": {
                "type": "INTEGER",
                "description": "An overall beauty score from 0 to 100, where 100 is best. This should be a holistic assessment.",
            },
            "scores": {
                "type": "ARRAY",
                "description": "An array of scores for 8 specific facial attributes, categorized.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The name of the attribute being scored (e.g., 'Skin Clarity', 'Facial Symmetry', 'Eye Radiance', 'Lip Volume', 'Brow Definition', 'Jawline Contour', 'Cheek Fullness', 'Facial Harmony').",
                        },
                        "value": {
                            "type": "INTEGER",
                            "description": "The score for this attribute, from 0 to 100.",
                        },
                        "category": {
                            "type": "STRING",
                            "description": "The category for this attribute. Must be one of: 'Symmetry & Harmony', 'Skin Health', or 'Key Features'.",
                        },
                    },
                    "required": ["name", "value", "category"],
                },
            },
            "enhancements": {
                "type": "ARRAY",
                "description": "An array of 3 key areas for improvement with constructive advice.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "area": {
                            "type": "STRING",
                            "description": "The name of the area for enhancement (e.g., 'Improving Skin Texture', 'Brightening the Under-eye Area').",
                        },
                        "problem": {
                            "type": "STRING",
                            "description": "A one-sentence description of the problem identified.",
                        },
                        "solutions": {
                            "type": "ARRAY",
                            "description": "An array of 2-3 detailed, actionable solutions.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "title": {
                                        "type": "STRING",
                                        "description": "A short title for the solution (e.g., 'Hydration Routine', 'Concealer Technique').",
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "Detailed advice. Wrap key, actionable words or product types in double asterisks for highlighting, for example: 'Use a **vitamin C** serum in the morning.'.",
                                    },
                                },
                                "required": ["title", "description"],
                            },
                        },
                    },
                    "required": ["area", "problem", "solutions"],
                },
            },
            "summary": {
                "type": "STRING",
                "description": "A brief, positive and encouraging summary of the analysis, highlighting the best features.",
            },
        },
        "required": ["overallScore", "scores", "enhancements", "summary"],
    })
}
