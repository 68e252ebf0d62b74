//! SQLite-backed saved-deal repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::{params, Row};
use uuid::Uuid;

use cookincapital_core::deals::{Deal, DealInput, DealRepositoryTrait, NewDeal};
use cookincapital_core::errors::{DatabaseError, Error, Result, ValidationError};

use crate::db::SqliteStore;

pub struct SqliteDealRepository {
    store: SqliteStore,
}

impl SqliteDealRepository {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    fn row_to_deal(row: &Row<'_>) -> rusqlite::Result<(String, String, String, String, String, String)> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }

    fn hydrate(
        (id, user_id, name, input_json, created_at, updated_at): (
            String,
            String,
            String,
            String,
            String,
            String,
        ),
    ) -> Result<Deal> {
        let input: DealInput = serde_json::from_str(&input_json).map_err(|e| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "stored deal input is not valid JSON: {e}"
            )))
        })?;
        Ok(Deal {
            id,
            user_id,
            name,
            input,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "invalid stored timestamp '{raw}': {e}"
        )))
    })
}

#[async_trait]
impl DealRepositoryTrait for SqliteDealRepository {
    fn get_deal(&self, deal_id: &str) -> Result<Deal> {
        let raw = self.store.with_conn(|conn| {
            conn.query_row(
                "SELECT id, user_id, name, input_json, created_at, updated_at
                 FROM deals WHERE id = ?1",
                params![deal_id],
                Self::row_to_deal,
            )
        });
        match raw {
            Ok(columns) => Self::hydrate(columns),
            Err(Error::Database(DatabaseError::NotFound(_))) => Err(Error::Database(
                DatabaseError::NotFound(format!("deal {deal_id}")),
            )),
            Err(other) => Err(other),
        }
    }

    fn list_deals_for_user(&self, user_id: &str) -> Result<Vec<Deal>> {
        let rows = self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, name, input_json, created_at, updated_at
                 FROM deals WHERE user_id = ?1 ORDER BY updated_at DESC",
            )?;
            let mapped = stmt.query_map(params![user_id], Self::row_to_deal)?;
            mapped.collect::<rusqlite::Result<Vec<_>>>()
        })?;
        rows.into_iter().map(Self::hydrate).collect()
    }

    async fn save_deal(&self, new_deal: NewDeal) -> Result<Deal> {
        let id = new_deal.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = Utc::now();
        // Raw input only; derived calculations are never persisted.
        let input_json = serde_json::to_string(&new_deal.input)?;

        debug!("Saving deal {} for user {}", id, new_deal.user_id);
        self.store.with_conn(|conn| {
            conn.execute(
                "INSERT INTO deals (id, user_id, name, input_json, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                    user_id = excluded.user_id,
                    name = excluded.name,
                    input_json = excluded.input_json,
                    updated_at = excluded.updated_at",
                params![
                    id,
                    new_deal.user_id,
                    new_deal.name,
                    input_json,
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                ],
            )
        })?;

        self.get_deal(&id)
    }

    async fn delete_deal(&self, deal_id: &str) -> Result<()> {
        let affected = self
            .store
            .with_conn(|conn| conn.execute("DELETE FROM deals WHERE id = ?1", params![deal_id]))?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "deal {deal_id}"
            ))));
        }
        Ok(())
    }
}
