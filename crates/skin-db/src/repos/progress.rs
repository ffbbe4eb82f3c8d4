//! Progress repository: the dated skin-condition log.

use chrono::NaiveDate;

use skin_core::entities::{NewProgressEntry, ProgressEntry};
use skin_core::progress::{ProgressChart, compute_stats};
use skin_core::responses::ProgressResponse;

use crate::error::DatabaseError;
use crate::helpers::{DATE_FORMAT, get_opt_string, get_u8, parse_date};
use crate::service::SkinService;

fn row_to_entry(row: &libsql::Row) -> Result<ProgressEntry, DatabaseError> {
    Ok(ProgressEntry {
        id: row.get::<i64>(0)?,
        user_id: row.get::<String>(1)?,
        date: parse_date(&row.get::<String>(2)?)?,
        satisfaction_rating: get_u8(row, 3)?,
        hydration_level: get_u8(row, 4)?,
        clarity: get_u8(row, 5)?,
        breakouts: get_u8(row, 6)?,
        redness: get_u8(row, 7)?,
        notes: get_opt_string(row, 8)?,
        routine_followed: row.get::<i64>(9)? != 0,
    })
}

impl SkinService {
    /// Record a progress entry for `user_id` dated `date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` (wrapped) when a rating is outside 1-10.
    pub async fn log_progress(
        &self,
        user_id: &str,
        entry: &NewProgressEntry,
        date: NaiveDate,
    ) -> Result<ProgressEntry, DatabaseError> {
        entry.validate()?;
        let notes = entry.notes.as_deref().filter(|n| !n.trim().is_empty());
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO progress_entries
             (user_id, date, satisfaction_rating, hydration_level, clarity, breakouts, redness, notes, routine_followed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            libsql::params![
                user_id,
                date.format(DATE_FORMAT).to_string(),
                i64::from(entry.satisfaction_rating),
                i64::from(entry.hydration_level),
                i64::from(entry.clarity),
                i64::from(entry.breakouts),
                i64::from(entry.redness),
                notes,
                i64::from(entry.routine_followed)
            ],
        )
        .await?;

        tracing::debug!(user = user_id, %date, "progress logged");
        Ok(ProgressEntry {
            id: conn.last_insert_rowid(),
            user_id: user_id.to_string(),
            date,
            satisfaction_rating: entry.satisfaction_rating,
            hydration_level: entry.hydration_level,
            clarity: entry.clarity,
            breakouts: entry.breakouts,
            redness: entry.redness,
            notes: notes.map(String::from),
            routine_followed: entry.routine_followed,
        })
    }

    /// The user's most recent entries, newest first (same-day entries by
    /// insertion, latest first).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn recent_progress(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<ProgressEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, date, satisfaction_rating, hydration_level, clarity,
                        breakouts, redness, notes, routine_followed
                 FROM progress_entries WHERE user_id = ?1
                 ORDER BY date DESC, id DESC LIMIT ?2",
                libsql::params![user_id, i64::from(limit)],
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Whether `user_id` already logged an entry on `date`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn has_progress_on(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<bool, DatabaseError> {
        let count = self
            .db()
            .count(
                "SELECT COUNT(*) FROM progress_entries WHERE user_id = ?1 AND date = ?2",
                libsql::params![user_id, date.format(DATE_FORMAT).to_string()],
            )
            .await?;
        Ok(count > 0)
    }

    /// Entries, stats and chart series over the latest `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn progress_report(
        &self,
        user_id: &str,
        limit: u32,
        today: NaiveDate,
    ) -> Result<ProgressResponse, DatabaseError> {
        let entries = self.recent_progress(user_id, limit).await?;
        let logged_today = self.has_progress_on(user_id, today).await?;
        Ok(ProgressResponse {
            stats: compute_stats(&entries),
            chart: ProgressChart::from_entries(&entries),
            entries,
            logged_today,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use skin_core::enums::ProgressTrend;
    use skin_core::errors::CoreError;

    use super::*;
    use crate::test_support::helpers::test_service;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn ratings(satisfaction: u8, followed: bool) -> NewProgressEntry {
        NewProgressEntry {
            satisfaction_rating: satisfaction,
            hydration_level: 6,
            clarity: 7,
            breakouts: 8,
            redness: 6,
            notes: None,
            routine_followed: followed,
        }
    }

    #[tokio::test]
    async fn log_and_read_back() {
        let svc = test_service().await;
        let entry = NewProgressEntry {
            notes: Some("Tried the new serum".into()),
            ..ratings(7, false)
        };
        let logged = svc.log_progress("local", &entry, day(3)).await.unwrap();

        let entries = svc.recent_progress("local", 30).await.unwrap();
        assert_eq!(entries, vec![logged]);
        assert!(!entries[0].routine_followed);
        assert_eq!(entries[0].notes.as_deref(), Some("Tried the new serum"));
    }

    #[tokio::test]
    async fn blank_notes_are_stored_as_null() {
        let svc = test_service().await;
        let entry = NewProgressEntry {
            notes: Some("   ".into()),
            ..ratings(5, true)
        };
        let logged = svc.log_progress("local", &entry, day(1)).await.unwrap();
        assert_eq!(logged.notes, None);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(u8::MAX)]
    #[tokio::test]
    async fn out_of_range_rating_is_rejected(#[case] satisfaction: u8) {
        let svc = test_service().await;
        let err = svc
            .log_progress("local", &ratings(satisfaction, true), day(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
        assert!(svc.recent_progress("local", 30).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_are_newest_first_and_limited() {
        let svc = test_service().await;
        for d in 1..=5 {
            svc.log_progress("local", &ratings(5, true), day(d)).await.unwrap();
        }
        svc.log_progress("someone-else", &ratings(9, true), day(9))
            .await
            .unwrap();

        let entries = svc.recent_progress("local", 3).await.unwrap();
        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(5), day(4), day(3)]);
    }

    #[tokio::test]
    async fn report_includes_stats_and_today_flag() {
        let svc = test_service().await;
        svc.log_progress("local", &ratings(4, true), day(1)).await.unwrap();
        svc.log_progress("local", &ratings(8, false), day(2)).await.unwrap();

        let report = svc.progress_report("local", 30, day(2)).await.unwrap();
        assert!(report.logged_today);
        let stats = report.stats.unwrap();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.trend, Some(ProgressTrend::Improving));
        assert_eq!(report.chart.satisfaction, vec![4, 8]);

        let report = svc.progress_report("local", 30, day(3)).await.unwrap();
        assert!(!report.logged_today);
    }

    #[tokio::test]
    async fn empty_log_reports_no_stats() {
        let svc = test_service().await;
        let report = svc.progress_report("local", 30, day(1)).await.unwrap();
        assert!(report.entries.is_empty());
        assert!(report.stats.is_none());
    }
}
