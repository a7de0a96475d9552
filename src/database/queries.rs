use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use rusqlite::Connection;

use crate::models::{AnalysisResult, DreamFilter, DreamRecord, NewDream};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn insert_dream(conn: &Connection, dream: &NewDream) -> Result<i64> {
    dream.validate()?;

    let now = chrono::Utc::now().timestamp();
    conn.execute(
        "INSERT INTO dream_entries
         (user_id, dream_text, dream_date, sleep_quality, lucidity_level, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            dream.user_id,
            &dream.dream_text,
            dream.dream_date.format(DATE_FORMAT).to_string(),
            dream.sleep_quality,
            dream.lucidity_level,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_all_dreams(conn: &Connection, user_id: i64) -> Result<Vec<DreamRecord>> {
    get_dreams(conn, user_id, None, DreamFilter::All)
}

/// Fetch a user's dreams newest-first, optionally narrowed by a text search
/// and a range/quality filter. The WHERE clause is built dynamically, one
/// numbered parameter per condition.
pub fn get_dreams(
    conn: &Connection,
    user_id: i64,
    search: Option<&str>,
    filter: DreamFilter,
) -> Result<Vec<DreamRecord>> {
    let mut sql = String::from(
        "SELECT id, user_id, dream_text, dream_date, sleep_quality, lucidity_level
         FROM dream_entries
         WHERE user_id = ?1",
    );
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id)];
    let mut param_idx = 2;

    if let Some(text) = search.map(str::trim).filter(|t| !t.is_empty()) {
        sql.push_str(&format!(" AND dream_text LIKE ?{}", param_idx));
        params.push(Box::new(format!("%{}%", text)));
        param_idx += 1;
    }

    match filter {
        DreamFilter::All => {}
        DreamFilter::LastSevenDays => {
            let cutoff = Local::now().date_naive() - Duration::days(7);
            sql.push_str(&format!(" AND dream_date >= ?{}", param_idx));
            params.push(Box::new(cutoff.format(DATE_FORMAT).to_string()));
        }
        DreamFilter::LastThirtyDays => {
            let cutoff = Local::now().date_naive() - Duration::days(30);
            sql.push_str(&format!(" AND dream_date >= ?{}", param_idx));
            params.push(Box::new(cutoff.format(DATE_FORMAT).to_string()));
        }
        DreamFilter::HighLucidity => sql.push_str(" AND lucidity_level >= 3"),
        DreamFilter::VividDreams => sql.push_str(" AND sleep_quality >= 8"),
    }

    sql.push_str(" ORDER BY dream_date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let param_refs: Vec<&dyn rusqlite::types::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let dreams = stmt
        .query_map(param_refs.as_slice(), map_dream_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(dreams)
}

pub fn dream_exists(conn: &Connection, dream_id: i64) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM dream_entries WHERE id = ?1",
        [dream_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn delete_dream(conn: &Connection, dream_id: i64) -> Result<bool> {
    let affected = conn.execute("DELETE FROM dream_entries WHERE id = ?1", [dream_id])?;
    Ok(affected > 0)
}

/// Persist an analysis result. The structured columns (emotion breakdown,
/// symbol list) are stored as JSON blobs; `created_at` is stamped here so the
/// engine output itself stays clock-free.
pub fn insert_analysis(conn: &Connection, analysis: &AnalysisResult) -> Result<i64> {
    if !dream_exists(conn, analysis.dream_id)? {
        anyhow::bail!(
            "cannot save analysis: dream {} does not exist",
            analysis.dream_id
        );
    }

    let breakdown_blob = serde_json::to_vec(&analysis.emotion_breakdown)?;
    let symbols_blob = serde_json::to_vec(&analysis.symbols)?;
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO dream_analysis
         (dream_id, dominant_emotion, emotion_score, emotion_breakdown,
          symbols, interpretation, confidence_score, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            analysis.dream_id,
            analysis.dominant_emotion.as_str(),
            analysis.emotion_score,
            &breakdown_blob,
            &symbols_blob,
            &analysis.interpretation,
            analysis.confidence_score,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_analysis_history(conn: &Connection, user_id: i64) -> Result<Vec<AnalysisResult>> {
    let mut stmt = conn.prepare(
        "SELECT da.dream_id, da.dominant_emotion, da.emotion_score, da.emotion_breakdown,
                da.symbols, da.interpretation, da.confidence_score
         FROM dream_analysis da
         JOIN dream_entries de ON da.dream_id = de.id
         WHERE de.user_id = ?1
         ORDER BY da.created_at DESC, da.id DESC",
    )?;

    let results = stmt
        .query_map([user_id], |row| {
            let dominant: String = row.get(1)?;
            let breakdown_blob: Vec<u8> = row.get(3)?;
            let symbols_blob: Vec<u8> = row.get(4)?;
            Ok(AnalysisResult {
                dream_id: row.get(0)?,
                dominant_emotion: dominant.parse().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?,
                emotion_score: row.get(2)?,
                emotion_breakdown: serde_json::from_slice(&breakdown_blob).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Blob,
                        Box::new(e),
                    )
                })?,
                symbols: serde_json::from_slice(&symbols_blob).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Blob,
                        Box::new(e),
                    )
                })?,
                interpretation: row.get(5)?,
                confidence_score: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

fn map_dream_row(row: &rusqlite::Row) -> rusqlite::Result<DreamRecord> {
    let date_str: String = row.get(3)?;
    let dream_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(DreamRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        dream_text: row.get(2)?,
        dream_date,
        sleep_quality: row.get(4)?,
        lucidity_level: row.get(5)?,
    })
}
