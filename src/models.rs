use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_GOAL_ML: u32 = 3000;

fn default_goal_ml() -> u32 {
    DEFAULT_GOAL_ML
}

/// Everything the app persists: the daily goal and per-day intake totals
/// in millilitres, keyed by `YYYY-MM-DD` (server-local calendar day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default = "default_goal_ml")]
    pub goal_ml: u32,
    #[serde(default)]
    pub days: BTreeMap<String, u64>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            goal_ml: DEFAULT_GOAL_ML,
            days: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub amount_ml: i64,
}

#[derive(Debug, Deserialize)]
pub struct LogForm {
    pub amount_ml: i64,
}

#[derive(Debug, Deserialize)]
pub struct GoalForm {
    pub daily_goal_ml: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub days: Option<u32>,
}

/// Snapshot returned after every log/reset; also what the page widget
/// consumes to refresh its display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub ok: bool,
    pub today_total: u64,
    pub goal: u32,
    pub pct: u8,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayStat {
    pub date: String,
    pub total: u64,
    pub goal: u32,
}
