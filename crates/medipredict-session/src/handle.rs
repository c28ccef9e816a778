use std::sync::Arc;

use medipredict_core::models::disease::DiseaseType;
use medipredict_gemini::error::PredictionError;
use medipredict_gemini::service::PredictionService;
use medipredict_gemini::transaction::predict;
use tokio::sync::Mutex;

use crate::error::SessionError;
use crate::render::ResultView;
use crate::state::{Session, View};

/// Shared, cloneable access to one [`Session`].
///
/// The lock is never held across the model call, so other intents (and a
/// rejected second submit) proceed while a prediction is in flight.
#[derive(Clone, Default)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub async fn view(&self) -> View {
        self.session.lock().await.view().clone()
    }

    pub async fn banner(&self) -> Option<String> {
        self.session.lock().await.banner().map(str::to_string)
    }

    pub async fn is_submitting(&self) -> bool {
        self.session.lock().await.is_submitting()
    }

    pub async fn result_view(&self) -> Option<ResultView> {
        self.session.lock().await.result_view()
    }

    pub async fn select(&self, disease: DiseaseType) -> Result<(), SessionError> {
        self.session.lock().await.select(disease)
    }

    pub async fn edit_field(&self, field_id: &str, raw: &str) -> Result<(), SessionError> {
        self.session.lock().await.edit_field(field_id, raw)
    }

    pub async fn cancel(&self) -> Result<(), SessionError> {
        self.session.lock().await.cancel()
    }

    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    pub async fn dismiss_banner(&self) {
        self.session.lock().await.dismiss_banner();
    }

    /// Submit the current form through `service` and return the view that
    /// results.
    ///
    /// Prediction failures are not returned here; they surface as the
    /// session banner. Errors are only for submits that never started.
    ///
    /// The call runs on its own task and always reaches
    /// [`Session::finish_submit`], even if this future is dropped first.
    pub async fn submit<S>(&self, service: Arc<S>) -> Result<View, SessionError>
    where
        S: PredictionService + 'static,
    {
        let request = self.session.lock().await.begin_submit()?;

        let session = Arc::clone(&self.session);
        let call = tokio::spawn(async move {
            let outcome = predict(service.as_ref(), &request).await;
            let mut session = session.lock().await;
            session.finish_submit(outcome);
            session.view().clone()
        });

        match call.await {
            Ok(view) => Ok(view),
            Err(e) => {
                let mut session = self.session.lock().await;
                session.finish_submit(Err(PredictionError::Transport(format!(
                    "prediction task did not complete: {e}"
                ))));
                Ok(session.view().clone())
            }
        }
    }
}
