//! Consumption Repository

use shared::models::{ConsumptionCreate, ConsumptionRecord};
use sqlx::SqlitePool;

use super::RepoResult;

const SELECT: &str =
    "SELECT id, session_id, guest_id, item_name, unit_price, quantity, created_at FROM consumption";

pub async fn find_by_session(pool: &SqlitePool, session_id: &str) -> RepoResult<Vec<ConsumptionRecord>> {
    let sql = format!("{SELECT} WHERE session_id = ? ORDER BY created_at, id");
    let rows = sqlx::query_as::<_, ConsumptionRecord>(&sql)
        .bind(session_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_guest(
    pool: &SqlitePool,
    session_id: &str,
    guest_id: &str,
) -> RepoResult<Vec<ConsumptionRecord>> {
    let sql = format!("{SELECT} WHERE session_id = ? AND guest_id = ? ORDER BY created_at, id");
    let rows = sqlx::query_as::<_, ConsumptionRecord>(&sql)
        .bind(session_id)
        .bind(guest_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    session_id: &str,
    data: ConsumptionCreate,
) -> RepoResult<ConsumptionRecord> {
    let guest_id = data.guest_id.trim().to_string();
    let item_name = data.item_name.trim().to_string();
    let created_at = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO consumption (session_id, guest_id, item_name, unit_price, quantity, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(session_id)
    .bind(&guest_id)
    .bind(&item_name)
    .bind(data.unit_price)
    .bind(data.quantity)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(ConsumptionRecord {
        id,
        session_id: session_id.to_string(),
        guest_id,
        item_name,
        unit_price: data.unit_price,
        quantity: data.quantity,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn item(guest_id: &str, name: &str, price: f64, quantity: i32) -> ConsumptionCreate {
        ConsumptionCreate {
            guest_id: guest_id.to_string(),
            item_name: name.to_string(),
            unit_price: price,
            quantity,
        }
    }

    #[tokio::test]
    async fn records_are_scoped_by_session_and_guest() {
        let db = DbService::in_memory().await.unwrap();
        create(&db.pool, "lan-42", item("g1", "Cola", 35.0, 2)).await.unwrap();
        create(&db.pool, "lan-42", item("g2", "Pizza", 189.0, 1)).await.unwrap();
        create(&db.pool, "lan-43", item("g1", "Chips", 45.0, 1)).await.unwrap();

        assert_eq!(find_by_session(&db.pool, "lan-42").await.unwrap().len(), 2);

        let g1 = find_by_guest(&db.pool, "lan-42", "g1").await.unwrap();
        assert_eq!(g1.len(), 1);
        assert_eq!(g1[0].item_name, "Cola");
        assert_eq!(g1[0].quantity, 2);
        assert_eq!(g1[0].unit_price, 35.0);
    }

    #[tokio::test]
    async fn create_trims_text_fields() {
        let db = DbService::in_memory().await.unwrap();
        let record = create(&db.pool, "lan-42", item(" g1 ", "  Energy drink ", 49.9, 1))
            .await
            .unwrap();
        assert_eq!(record.guest_id, "g1");
        assert_eq!(record.item_name, "Energy drink");

        let stored = find_by_guest(&db.pool, "lan-42", "g1").await.unwrap();
        assert_eq!(stored, vec![record]);
    }
}
