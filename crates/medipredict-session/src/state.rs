//! Dashboard → Form → Result state machine.
//!
//! A [`Session`] owns everything one user sees: the current view, the
//! in-flight flag and the error banner. Each intent is a method; submitting
//! is split into [`Session::begin_submit`] and [`Session::finish_submit`] so
//! the network call can happen with the session unlocked.

use medipredict_catalog::controller::FormController;
use medipredict_catalog::{DiseaseConfig, all_diseases, get_disease};
use medipredict_core::models::disease::DiseaseType;
use medipredict_core::models::patient::PatientData;
use medipredict_core::models::prediction::{PredictionRequest, PredictionResult};
use medipredict_core::models::transaction::PredictionTransaction;
use medipredict_gemini::error::PredictionError;
use medipredict_gemini::prompt::build_request;
use medipredict_gemini::transaction::TransactionResult;
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::error::SessionError;
use crate::render::ResultView;

/// Shown for every failed submission, whatever the cause.
pub const PREDICTION_FAILED_BANNER: &str =
    "Failed to generate prediction. Please ensure your API key is configured and try again.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(tag = "view", rename_all = "snake_case")]
#[ts(export)]
pub enum View {
    #[default]
    Dashboard,
    Form {
        disease: DiseaseType,
        data: PatientData,
    },
    Result {
        disease: DiseaseType,
        result: PredictionResult,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Form { .. } => "form",
            View::Result { .. } => "result",
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    view: View,
    controller: FormController,
    submitting: bool,
    /// Set when the user leaves the form while a request is in flight; the
    /// late outcome is then dropped.
    abandoned: bool,
    banner: Option<String>,
    last_transaction: Option<PredictionTransaction>,
}

impl Session {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            ..Self::default()
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn last_transaction(&self) -> Option<&PredictionTransaction> {
        self.last_transaction.as_ref()
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Cards for the dashboard, in catalog order.
    pub fn dashboard(&self) -> Vec<DiseaseConfig> {
        all_diseases().iter().map(|d| d.config()).collect()
    }

    /// The presentation model for the result view, if showing one.
    pub fn result_view(&self) -> Option<ResultView> {
        match &self.view {
            View::Result { disease, result } => Some(ResultView::new(*disease, result)),
            _ => None,
        }
    }

    /// Open the form for `disease` with every field at its default.
    pub fn select(&mut self, disease: DiseaseType) -> Result<(), SessionError> {
        self.require_dashboard("select")?;

        let data = self.controller.initialize(get_disease(disease).as_ref())?;
        self.view = View::Form { disease, data };
        self.banner = None;
        debug!(disease = %disease, "disease selected");
        Ok(())
    }

    /// Apply one raw form edit. Invalid input is ignored by the controller.
    pub fn edit_field(&mut self, field_id: &str, raw: &str) -> Result<(), SessionError> {
        let view = self.view.name();
        let View::Form { data, .. } = &mut self.view else {
            return Err(SessionError::InvalidIntent {
                intent: "edit_field",
                view,
            });
        };
        *data = self.controller.set_field(data, field_id, raw);
        Ok(())
    }

    /// Mark a request as in flight and build it from the current form.
    pub fn begin_submit(&mut self) -> Result<PredictionRequest, SessionError> {
        if self.submitting {
            return Err(SessionError::AlreadySubmitting);
        }
        let View::Form { disease, data } = &self.view else {
            return Err(SessionError::InvalidIntent {
                intent: "submit",
                view: self.view.name(),
            });
        };

        let request = build_request(*disease, data.clone())?;
        self.submitting = true;
        self.abandoned = false;
        self.banner = None;
        Ok(request)
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Success moves to the result view. Any failure is logged, replaced by
    /// [`PREDICTION_FAILED_BANNER`], and leaves the form as it was.
    pub fn finish_submit(
        &mut self,
        outcome: Result<TransactionResult<PredictionResult>, PredictionError>,
    ) {
        if !self.submitting {
            warn!("prediction outcome arrived with no request in flight");
            return;
        }
        self.submitting = false;

        if std::mem::take(&mut self.abandoned) {
            debug!(ok = outcome.is_ok(), "discarding outcome of abandoned submission");
            return;
        }

        match outcome {
            Ok(TransactionResult {
                transaction,
                output,
            }) => {
                info!(
                    transaction_id = %transaction.id,
                    risk_level = %output.risk_level,
                    "showing prediction result"
                );
                self.view = View::Result {
                    disease: transaction.disease_type,
                    result: output,
                };
                self.last_transaction = Some(transaction);
            }
            Err(e) => {
                warn!(error = %e, "prediction failed");
                self.banner = Some(PREDICTION_FAILED_BANNER.to_string());
            }
        }
    }

    /// Leave the form without submitting.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if !matches!(self.view, View::Form { .. }) {
            return Err(SessionError::InvalidIntent {
                intent: "cancel",
                view: self.view.name(),
            });
        }
        self.leave();
        Ok(())
    }

    /// Return to the dashboard from anywhere, dropping form data, result
    /// and banner.
    pub fn reset(&mut self) {
        self.leave();
        self.banner = None;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn leave(&mut self) {
        if self.submitting {
            self.abandoned = true;
        }
        self.view = View::Dashboard;
    }

    fn require_dashboard(&self, intent: &'static str) -> Result<(), SessionError> {
        match self.view {
            View::Dashboard => Ok(()),
            _ => Err(SessionError::InvalidIntent {
                intent,
                view: self.view.name(),
            }),
        }
    }
}
