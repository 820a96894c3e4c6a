use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Beer, BeerId, BeerType, NewBeer, Result, StoreError, store::BeerStore};

const BEER_COLUMNS: &str = "id, name, brand, max, quantity, beer_type";

/// PostgreSQL-backed beer store implementation.
#[derive(Clone)]
pub struct PostgresBeerStore {
    pool: PgPool,
}

impl PostgresBeerStore {
    /// Creates a new PostgreSQL beer store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_beer(row: PgRow) -> Result<Beer> {
        let beer_type: String = row.try_get("beer_type")?;
        let beer_type: BeerType = beer_type
            .parse()
            .map_err(|e: common::ParseBeerTypeError| StoreError::InvalidRow(e.to_string()))?;

        Ok(Beer {
            id: BeerId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            brand: row.try_get("brand")?,
            max: row.try_get("max")?,
            quantity: row.try_get("quantity")?,
            beer_type,
        })
    }
}

#[async_trait]
impl BeerStore for PostgresBeerStore {
    async fn insert(&self, beer: NewBeer) -> Result<Beer> {
        let sql = format!(
            "INSERT INTO beers (name, brand, max, quantity, beer_type) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {BEER_COLUMNS}"
        );

        let row = sqlx::query(&sql)
            .bind(&beer.name)
            .bind(&beer.brand)
            .bind(beer.max)
            .bind(beer.quantity)
            .bind(beer.beer_type.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.constraint() == Some("unique_beer_name")
                {
                    return StoreError::DuplicateName(beer.name.clone());
                }
                StoreError::Database(e)
            })?;

        let beer = Self::row_to_beer(row)?;
        tracing::debug!(id = %beer.id, name = %beer.name, "beer inserted");
        Ok(beer)
    }

    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers WHERE id = $1");

        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_beer).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers WHERE name = $1");

        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_beer).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Beer>> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers ORDER BY id ASC");

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(Self::row_to_beer).collect()
    }

    async fn update_quantity(&self, id: BeerId, expected: i32, quantity: i32) -> Result<Beer> {
        let mut tx = self.pool.begin().await?;

        // Row lock holds until commit, so the reported quantity is the one compared
        let actual: Option<i32> =
            sqlx::query_scalar("SELECT quantity FROM beers WHERE id = $1 FOR UPDATE")
                .bind(id.as_i64())
                .fetch_optional(&mut *tx)
                .await?;

        match actual {
            None => return Err(StoreError::NotFound(id)),
            Some(actual) if actual != expected => {
                return Err(StoreError::ConcurrencyConflict {
                    id,
                    expected,
                    actual,
                });
            }
            Some(_) => {}
        }

        let sql = format!("UPDATE beers SET quantity = $2 WHERE id = $1 RETURNING {BEER_COLUMNS}");
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .bind(quantity)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Self::row_to_beer(row)
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM beers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}
