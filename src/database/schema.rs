use anyhow::Result;
use rusqlite::Connection;

pub fn create_tables(conn: &Connection) -> Result<()> {
    // Dream entries table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS dream_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            dream_text TEXT NOT NULL,
            dream_date TEXT NOT NULL,
            sleep_quality INTEGER NOT NULL,
            lucidity_level INTEGER NOT NULL,
            created_at INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_dream_entries_user_id ON dream_entries(user_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_dream_entries_dream_date ON dream_entries(dream_date)",
        [],
    )?;

    // Analysis results table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS dream_analysis (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dream_id INTEGER NOT NULL,
            dominant_emotion TEXT NOT NULL,
            emotion_score REAL NOT NULL,
            emotion_breakdown BLOB NOT NULL,
            symbols BLOB NOT NULL,
            interpretation TEXT NOT NULL,
            confidence_score REAL NOT NULL,
            created_at INTEGER NOT NULL,
            FOREIGN KEY (dream_id) REFERENCES dream_entries(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_dream_analysis_dream_id ON dream_analysis(dream_id)",
        [],
    )?;

    Ok(())
}
