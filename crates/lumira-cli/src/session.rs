//! Analysis session state machine.
//!
//! One attempt at a time: idle → loading → success | error, cycling under
//! user control. The two pipeline stages (encode, then the model call) are
//! awaited sequentially and each fails with its own type; every failure
//! collapses to a user-facing message here while the detail goes to the log.

use std::path::Path;

use lumira_core::{encode_image_file, AnalysisProvider, AnalysisResult, EncodedImage, EncoderError};

/// Shown when the selected file is not a supported image.
const UNSUPPORTED_MESSAGE: &str = "Please upload a valid image file (JPEG, PNG).";
/// Shown when the file cannot be read at all.
const READ_ERROR_MESSAGE: &str = "Failed to read the selected file.";
/// Shown for any failure of the model call itself.
const ANALYSIS_ERROR_MESSAGE: &str =
    "Sorry, something went wrong during the analysis. Please try a different photo.";

/// Session lifecycle state.
///
/// A single tagged union: an in-flight attempt can never coexist with a
/// previous result or error.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Loading,
    Success {
        result: AnalysisResult,
        /// The encoded upload, kept for display alongside the result.
        image: EncodedImage,
    },
    Error {
        message: String,
    },
}

/// Drives one analysis attempt at a time against an [`AnalysisProvider`].
///
/// `upload` takes `&mut self` and is awaited to completion, so a second
/// attempt cannot start while one is in flight and a completion is only
/// ever applied to the attempt that produced it.
pub struct AnalysisSession<P> {
    provider: P,
    state: SessionState,
}

impl<P: AnalysisProvider> AnalysisSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run one analysis attempt: encode the file, then call the model.
    ///
    /// Clears any previous result or error on entry. Always settles in
    /// exactly one of `Success` or `Error`.
    pub async fn upload(&mut self, path: &Path) -> &SessionState {
        self.state = SessionState::Loading;

        let image = match encode_image_file(path).await {
            Ok(image) => image,
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "image encoding failed");
                let message = match err {
                    EncoderError::UnsupportedType => UNSUPPORTED_MESSAGE,
                    EncoderError::ReadFailure(_) => READ_ERROR_MESSAGE,
                };
                self.state = SessionState::Error {
                    message: message.to_string(),
                };
                return &self.state;
            }
        };

        match self.provider.analyze(&image).await {
            Ok(result) => {
                tracing::info!(overall = result.overall_score, "analysis complete");
                self.state = SessionState::Success { result, image };
            }
            Err(err) => {
                tracing::error!(error = %err, "analysis failed");
                self.state = SessionState::Error {
                    message: ANALYSIS_ERROR_MESSAGE.to_string(),
                };
            }
        }
        &self.state
    }

    /// Discard any result or error and return to idle.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::{ImageFormat, Rgb, RgbImage};
    use lumira_core::ClientError;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum MockBehavior {
        Succeed,
        FailSchema,
        FailRequest,
    }

    /// Provider double: counts calls and settles with a canned outcome.
    struct MockProvider {
        behavior: MockBehavior,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisProvider for MockProvider {
        async fn analyze(&self, _image: &EncodedImage) -> Result<AnalysisResult, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                MockBehavior::Succeed => Ok(sample_result()),
                MockBehavior::FailSchema => Err(ClientError::SchemaFailure(
                    "missing field `summary`".to_string(),
                )),
                MockBehavior::FailRequest => Err(ClientError::RequestFailure(
                    "model endpoint returned 503".to_string(),
                )),
            }
        }
    }

    fn sample_result() -> AnalysisResult {
        let names = lumira_core::SCORED_ATTRIBUTES;
        serde_json::from_value(serde_json::json!({
            "overallScore": 82,
            "scores": names.iter().map(|&n| serde_json::json!({
                "name": n,
                "value": 80,
                "category": lumira_core::ScoreCategory::for_attribute(n)
                    .map(|c| c.as_str())
                    .unwrap_or("Key Features"),
            })).collect::<Vec<_>>(),
            "enhancements": (0..3).map(|i| serde_json::json!({
                "area": format!("Area {i}"),
                "problem": "A small thing.",
                "solutions": [
                    {"title": "Routine", "description": "Use a **vitamin C** serum"},
                    {"title": "Technique", "description": "Blend **upwards**"},
                ],
            })).collect::<Vec<_>>(),
            "summary": "Radiant.",
        }))
        .unwrap()
    }

    fn write_jpeg(dir: &tempfile::TempDir) -> PathBuf {
        let img = RgbImage::from_pixel(8, 8, Rgb([200, 160, 140]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg).unwrap();
        let path = dir.path().join("face.jpg");
        std::fs::write(&path, buf).unwrap();
        path
    }

    #[tokio::test]
    async fn test_upload_success() {
        // Scenario A: JPEG in, complete document back → Success with 82
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(&dir);

        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::Succeed));
        session.upload(&path).await;

        match session.state() {
            SessionState::Success { result, image } => {
                assert_eq!(result.overall_score, 82);
                assert_eq!(result.scores.len(), 8);
                assert_eq!(result.enhancements.len(), 3);
                assert_eq!(image.mime_type, "image/jpeg");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_non_image_never_reaches_provider() {
        // Scenario B: a .txt file is rejected before any model call
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let provider = MockProvider::new(MockBehavior::Succeed);
        let mut session = AnalysisSession::new(provider);
        session.upload(&path).await;

        match session.state() {
            SessionState::Error { message } => {
                assert_eq!(message, UNSUPPORTED_MESSAGE);
            }
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(session.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_read_error() {
        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::Succeed));
        session.upload(Path::new("/nonexistent/face.jpg")).await;

        match session.state() {
            SessionState::Error { message } => assert_eq!(message, READ_ERROR_MESSAGE),
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(session.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_schema_failure_collapses_to_generic_message() {
        // Scenario C: the raw field name never reaches the user
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(&dir);

        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::FailSchema));
        session.upload(&path).await;

        match session.state() {
            SessionState::Error { message } => {
                assert_eq!(message, ANALYSIS_ERROR_MESSAGE);
                assert!(!message.contains("summary"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(session.provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_failure_collapses_to_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(&dir);

        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::FailRequest));
        session.upload(&path).await;

        match session.state() {
            SessionState::Error { message } => {
                assert_eq!(message, ANALYSIS_ERROR_MESSAGE);
                assert!(!message.contains("503"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_from_success_returns_to_idle() {
        // Scenario D: nothing residual after reset
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(&dir);

        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::Succeed));
        session.upload(&path).await;
        assert!(matches!(session.state(), SessionState::Success { .. }));

        session.reset();
        assert!(matches!(session.state(), SessionState::Idle));
    }

    #[tokio::test]
    async fn test_new_upload_clears_previous_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("notes.txt");
        std::fs::write(&bad, "not an image").unwrap();
        let good = write_jpeg(&dir);

        let mut session = AnalysisSession::new(MockProvider::new(MockBehavior::Succeed));
        session.upload(&bad).await;
        assert!(matches!(session.state(), SessionState::Error { .. }));

        session.upload(&good).await;
        assert!(matches!(session.state(), SessionState::Success { .. }));
    }
}
