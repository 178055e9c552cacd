use crate::models::{AppData, DayStat, LogResponse};
use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn total_for_day(data: &AppData, date: NaiveDate) -> u64 {
    data.days.get(&date_key(date)).copied().unwrap_or(0)
}

/// Progress toward the daily goal, capped at 100.
pub fn progress_pct(total_ml: u64, goal_ml: u32) -> u8 {
    if goal_ml == 0 {
        return 0;
    }
    let pct = (total_ml as f64 / f64::from(goal_ml) * 100.0).round() as u64;
    pct.min(100) as u8
}

/// Consecutive days ending today on which the goal was met. A day with no
/// entry counts as zero intake, so the walk always terminates; a zero goal
/// would make every such day qualify, hence the guard.
pub fn streak_days(data: &AppData, today: NaiveDate) -> u32 {
    if data.goal_ml == 0 {
        return 0;
    }
    let goal = u64::from(data.goal_ml);
    let mut streak = 0;
    let mut day = today;
    while total_for_day(data, day) >= goal {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

pub fn day_snapshot(data: &AppData, date: NaiveDate) -> LogResponse {
    let total = total_for_day(data, date);
    LogResponse {
        ok: true,
        today_total: total,
        goal: data.goal_ml,
        pct: progress_pct(total, data.goal_ml),
        streak: streak_days(data, date),
    }
}

/// Daily totals for the last `days` days, oldest first, today last.
pub fn history(data: &AppData, today: NaiveDate, days: u32) -> Vec<DayStat> {
    let mut out = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let date = today - Duration::days(i64::from(offset));
        out.push(DayStat {
            date: date.to_string(),
            total: total_for_day(data, date),
            goal: data.goal_ml,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with(goal_ml: u32, entries: &[(NaiveDate, u64)]) -> AppData {
        let mut data = AppData {
            goal_ml,
            ..AppData::default()
        };
        for (date, total) in entries {
            data.days.insert(date_key(*date), *total);
        }
        data
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pct_rounds_and_caps_at_100() {
        assert_eq!(progress_pct(0, 3000), 0);
        assert_eq!(progress_pct(1250, 3000), 42);
        assert_eq!(progress_pct(2999, 3000), 100);
        assert_eq!(progress_pct(9000, 3000), 100);
        assert_eq!(progress_pct(500, 0), 0);
    }

    #[test]
    fn streak_counts_consecutive_goal_days() {
        let today = day(2026, 3, 10);
        let data = data_with(
            2000,
            &[
                (today, 2400),
                (today - Duration::days(1), 2000),
                (today - Duration::days(2), 3100),
                // gap on day -3 breaks the run
                (today - Duration::days(4), 2500),
            ],
        );
        assert_eq!(streak_days(&data, today), 3);
    }

    #[test]
    fn streak_is_zero_when_today_unmet() {
        let today = day(2026, 3, 10);
        let data = data_with(2000, &[(today, 1999), (today - Duration::days(1), 2500)]);
        assert_eq!(streak_days(&data, today), 0);
    }

    #[test]
    fn streak_is_zero_for_zero_goal() {
        let data = data_with(0, &[]);
        assert_eq!(streak_days(&data, day(2026, 3, 10)), 0);
    }

    #[test]
    fn history_is_oldest_first_and_padded() {
        let today = day(2026, 3, 10);
        let data = data_with(3000, &[(today - Duration::days(2), 750)]);

        let points = history(&data, today, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, (today - Duration::days(6)).to_string());
        assert_eq!(points[6].date, today.to_string());
        assert_eq!(points[4].total, 750);
        assert!(points.iter().all(|p| p.goal == 3000));
        assert_eq!(points.iter().map(|p| p.total).sum::<u64>(), 750);
    }

    #[test]
    fn snapshot_reflects_today() {
        let today = day(2026, 3, 10);
        let data = data_with(3000, &[(today, 1250)]);
        let snap = day_snapshot(&data, today);
        assert!(snap.ok);
        assert_eq!(snap.today_total, 1250);
        assert_eq!(snap.goal, 3000);
        assert_eq!(snap.pct, 42);
        assert_eq!(snap.streak, 0);
    }
}
