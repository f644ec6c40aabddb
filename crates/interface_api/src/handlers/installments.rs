//! Installment handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::dto::installments::*;
use crate::{error::ApiError, AppState};

/// Computes an installment plan
///
/// Nothing is stored; the plan is returned for display and the caller
/// decides what to keep.
pub async fn calculate_installments(
    State(state): State<AppState>,
    payload: Result<Json<CalculateInstallmentsRequest>, JsonRejection>,
) -> Result<Json<InstallmentPlanResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Malformed installment request");
        ApiError::from(rejection)
    })?;

    let plan = request
        .into_domain()
        .and_then(|request| state.calculator.calculate(&request))
        .map_err(|e| {
            warn!(error = %e, field = e.field().unwrap_or("-"), "Installment request rejected");
            ApiError::from(e)
        })?;

    info!(
        installments = plan.len(),
        residual = %plan.residual().amount(),
        "Installment plan computed"
    );

    Ok(Json(InstallmentPlanResponse::from(plan)))
}
