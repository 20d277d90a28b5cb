use crate::errors::AppError;
use crate::export::{export_file_name, render_csv};
use crate::models::{Aggregates, EntryRecord, EntrySubmission};
use crate::state::AppState;
use crate::stats::derive_aggregates;
use crate::storage::persist_ledger;
use crate::ticket::CHILD_AGE_LIMIT;
use crate::ui::render_index;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::Local;

pub const MAX_AGE: u8 = 120;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ledger = state.ledger.lock().await;
    let aggregates = derive_aggregates(ledger.entries());
    Html(render_index(&aggregates))
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntryRecord>>, AppError> {
    let ledger = state.ledger.lock().await;
    let mut entries = ledger.entries().to_vec();
    entries.reverse();
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(submission): Json<EntrySubmission>,
) -> Result<(StatusCode, Json<EntryRecord>), AppError> {
    validate(&submission)?;

    let mut ledger = state.ledger.lock().await;
    let record = ledger.append(submission);
    persist_ledger(&state.data_path, &ledger).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Aggregates>, AppError> {
    let ledger = state.ledger.lock().await;
    Ok(Json(derive_aggregates(ledger.entries())))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<Aggregates>, AppError> {
    let mut ledger = state.ledger.lock().await;
    ledger.clear();
    persist_ledger(&state.data_path, &ledger).await?;
    Ok(Json(derive_aggregates(ledger.entries())))
}

pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ledger = state.ledger.lock().await;
    let body = render_csv(ledger.entries());
    let file_name = export_file_name(Local::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

/// Form-boundary validation. Everything past this point is a valid
/// submission; the ledger itself has no error paths.
fn validate(submission: &EntrySubmission) -> Result<(), AppError> {
    if submission.age > MAX_AGE {
        return Err(AppError::bad_request(
            "Please enter a valid age between 0 and 120",
        ));
    }
    if submission.student_card_verified && !submission.is_student {
        return Err(AppError::bad_request(
            "Student card can only be verified for students",
        ));
    }
    if submission.is_student && !submission.student_card_verified && submission.age >= CHILD_AGE_LIMIT
    {
        return Err(AppError::bad_request(
            "Please verify the student card or uncheck the student option",
        ));
    }
    Ok(())
}
