//! Quote storage queries.
//!
//! Both queries run on a connection the caller has already acquired, so a
//! request handler holds exactly one pooled connection for its whole
//! lifetime and returns it when the handle drops.

use sqlx::SqliteConnection;

use crate::models::quote::{NewQuote, Quote};

/// Fetch every quote, newest first.
///
/// `CURRENT_TIMESTAMP` only has second resolution, so quotes written in the
/// same second are ordered by id to keep the newest one on top.
/// Rows without a timestamp (only possible in tables created before the
/// schema was tracked) sort last. A timestamp that is not a date-time text
/// fails to decode and fails the whole listing.
pub async fn list_quotes(conn: &mut SqliteConnection) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT id, text, person, context, timestamp
        FROM quotes
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .fetch_all(conn)
    .await
}

/// Insert a quote and return its assigned id.
///
/// `id` and `timestamp` come from the table definition.
pub async fn insert_quote(
    conn: &mut SqliteConnection,
    quote: &NewQuote,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO quotes (text, person, context) VALUES (?, ?, ?)")
        .bind(&quote.text)
        .bind(&quote.person)
        .bind(&quote.context)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}
