use models::release::{NewRelease, Release, ReleaseUpdate};
use sqlx::SqlitePool;

pub mod route;

pub async fn fetch_releases(pool: &SqlitePool) -> Result<Vec<Release>, sqlx::Error> {
    sqlx::query_as::<_, Release>(
        "
        SELECT * FROM release
        ORDER BY id
        ",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_release_by_id(
    release_id: i64,
    pool: &SqlitePool,
) -> Result<Option<Release>, sqlx::Error> {
    sqlx::query_as::<_, Release>(
        "
        SELECT * FROM release
        WHERE id = ?
        ",
    )
    .bind(release_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_release(
    new_release: &NewRelease,
    pool: &SqlitePool,
) -> Result<Release, sqlx::Error> {
    sqlx::query_as::<_, Release>(
        "
        INSERT INTO release (release_id, short, name, version, release_date, eol_date, sigkey)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        ",
    )
    .bind(&new_release.release_id)
    .bind(&new_release.short)
    .bind(&new_release.name)
    .bind(new_release.version)
    .bind(new_release.release_date)
    .bind(new_release.eol_date)
    .bind(&new_release.sigkey)
    .fetch_one(pool)
    .await
}

/// Replaces every field of the addressed release (PUT semantics).
pub async fn replace_release(
    release_id: i64,
    new_release: &NewRelease,
    pool: &SqlitePool,
) -> Result<Option<Release>, sqlx::Error> {
    sqlx::query_as::<_, Release>(
        "
        UPDATE release
        SET release_id = ?, short = ?, name = ?, version = ?,
            release_date = ?, eol_date = ?, sigkey = ?
        WHERE id = ?
        RETURNING *
        ",
    )
    .bind(&new_release.release_id)
    .bind(&new_release.short)
    .bind(&new_release.name)
    .bind(new_release.version)
    .bind(new_release.release_date)
    .bind(new_release.eol_date)
    .bind(&new_release.sigkey)
    .bind(release_id)
    .fetch_optional(pool)
    .await
}

/// Overwrites only the fields present in the update (PATCH semantics).
/// Runs in a transaction so a partially applied update is never observable.
pub async fn patch_release(
    release_id: i64,
    update: &ReleaseUpdate,
    pool: &SqlitePool,
) -> Result<Option<Release>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    if let Some(new_release_id) = &update.release_id {
        sqlx::query("UPDATE release SET release_id = ? WHERE id = ?")
            .bind(new_release_id)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(short) = &update.short {
        sqlx::query("UPDATE release SET short = ? WHERE id = ?")
            .bind(short)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(name) = &update.name {
        sqlx::query("UPDATE release SET name = ? WHERE id = ?")
            .bind(name)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(version) = update.version {
        sqlx::query("UPDATE release SET version = ? WHERE id = ?")
            .bind(version)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(release_date) = update.release_date {
        sqlx::query("UPDATE release SET release_date = ? WHERE id = ?")
            .bind(release_date)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(eol_date) = update.eol_date {
        sqlx::query("UPDATE release SET eol_date = ? WHERE id = ?")
            .bind(eol_date)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(sigkey) = &update.sigkey {
        sqlx::query("UPDATE release SET sigkey = ? WHERE id = ?")
            .bind(sigkey)
            .bind(release_id)
            .execute(&mut *tx)
            .await?;
    }
    let release = sqlx::query_as::<_, Release>("SELECT * FROM release WHERE id = ?")
        .bind(release_id)
        .fetch_optional(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(release)
}

pub async fn delete_release_by_id(release_id: i64, pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM release WHERE id = ?")
        .bind(release_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
