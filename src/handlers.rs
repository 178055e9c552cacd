use crate::errors::AppError;
use crate::models::{DayStat, GoalForm, LogForm, LogRequest, LogResponse, StatsQuery};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};

// Clamping ranges carried over from the original tracker: a single sip is
// at least a mouthful, a single log at most a large bottle.
const MIN_LOG_ML: i64 = 50;
const MAX_LOG_ML: i64 = 2000;
const MIN_GOAL_ML: i64 = 250;
const MAX_GOAL_ML: i64 = 10_000;

const MAX_STATS_DAYS: u32 = 365;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = stats::today();
    let data = state.data.lock().await;
    let snapshot = stats::day_snapshot(&data, today);
    Html(render_index(&stats::date_key(today), &snapshot))
}

pub async fn api_log(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let response = apply_log(&state, payload.amount_ml).await?;
    Ok(Json(response))
}

pub async fn log_form(
    State(state): State<AppState>,
    Form(form): Form<LogForm>,
) -> Result<Redirect, AppError> {
    apply_log(&state, form.amount_ml).await?;
    Ok(Redirect::to("/"))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Form(form): Form<GoalForm>,
) -> Result<Redirect, AppError> {
    let goal = form.daily_goal_ml.clamp(MIN_GOAL_ML, MAX_GOAL_ML) as u32;
    let mut data = state.data.lock().await;
    data.goal_ml = goal;
    persist_data(&state.data_path, &data).await?;
    Ok(Redirect::to("/"))
}

pub async fn api_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Vec<DayStat>>, AppError> {
    let days = query.days.unwrap_or(7);
    if days == 0 || days > MAX_STATS_DAYS {
        return Err(AppError::bad_request(format!(
            "days must be between 1 and {MAX_STATS_DAYS}"
        )));
    }

    let data = state.data.lock().await;
    Ok(Json(stats::history(&data, stats::today(), days)))
}

pub async fn api_reset(State(state): State<AppState>) -> Result<Json<LogResponse>, AppError> {
    let today = stats::today();
    let mut data = state.data.lock().await;
    data.days.remove(&stats::date_key(today));

    persist_data(&state.data_path, &data).await?;

    Ok(Json(stats::day_snapshot(&data, today)))
}

async fn apply_log(state: &AppState, amount_ml: i64) -> Result<LogResponse, AppError> {
    let amount = amount_ml.clamp(MIN_LOG_ML, MAX_LOG_ML) as u64;
    let today = stats::today();
    let mut data = state.data.lock().await;
    {
        let entry = data.days.entry(stats::date_key(today)).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    persist_data(&state.data_path, &data).await?;

    Ok(stats::day_snapshot(&data, today))
}
