use medipredict_core::models::prediction::{PredictionRequest, PredictionResult};
use medipredict_core::models::transaction::PredictionTransaction;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PredictionError;
use crate::prompt::build_prompt;
use crate::response::parse_response;
use crate::schema::response_schema;
use crate::service::PredictionService;

/// The outcome of a successful prediction transaction.
#[derive(Debug, Clone)]
pub struct TransactionResult<T> {
    pub transaction: PredictionTransaction,
    pub output: T,
}

/// Run one prediction: render the prompt, make exactly one call to
/// `service`, and validate the reply.
///
/// Nothing is retried. Every failure is returned to the caller unchanged.
pub async fn predict<S: PredictionService>(
    service: &S,
    request: &PredictionRequest,
) -> Result<TransactionResult<PredictionResult>, PredictionError> {
    let transaction_id = Uuid::new_v4();
    let started_at = jiff::Timestamp::now();
    let model_id = service.model_id().to_string();
    let disease_type = request.disease_type();

    info!(
        transaction_id = %transaction_id,
        model = %model_id,
        disease = %disease_type,
        "starting prediction"
    );

    let prompt = build_prompt(request);
    let schema = response_schema();

    let outcome = async {
        let output = service.generate(&prompt, &schema).await?;
        if output.text.trim().is_empty() {
            return Err(PredictionError::EmptyResponse);
        }
        let result = parse_response(&output.text)?;
        Ok::<_, PredictionError>((result, output.usage))
    }
    .await;

    let (result, usage) = match outcome {
        Ok(ok) => ok,
        Err(e) => {
            warn!(transaction_id = %transaction_id, error = %e, "prediction failed");
            return Err(e);
        }
    };

    info!(
        transaction_id = %transaction_id,
        risk_level = %result.risk_level,
        risk_score = result.risk_score,
        input_tokens = usage.input,
        output_tokens = usage.output,
        "prediction complete"
    );

    Ok(TransactionResult {
        transaction: PredictionTransaction {
            id: transaction_id,
            disease_type,
            model_id,
            usage,
            started_at,
            completed_at: jiff::Timestamp::now(),
        },
        output: result,
    })
}
