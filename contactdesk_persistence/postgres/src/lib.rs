use std::{collections::HashSet, fmt::Write, time::Duration};

use anyhow::{anyhow, Context};
use bb8::{Pool, PooledConnection};
use bb8_postgres::{
    tokio_postgres::{self, NoTls},
    PostgresConnectionManager,
};
use contactdesk_persistence_contracts::{Database, Transaction};
use contactdesk_utils::trace_instrument;
use ouroboros::self_referencing;
use tracing::{debug, trace};

pub mod contact;

type PgClient = tokio_postgres::Client;
type PgManager = PostgresConnectionManager<NoTls>;
type PgConnection<'a> = PooledConnection<'a, PgManager>;
type PgTransaction<'a> = tokio_postgres::Transaction<'a>;

#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    pool: Pool<PgManager>,
}

#[derive(Debug)]
pub struct PostgresDatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl PostgresDatabase {
    pub async fn connect(config: &PostgresDatabaseConfig) -> anyhow::Result<Self> {
        let manager = PgManager::new(
            config.url.parse().context("Invalid database url")?,
            NoTls,
        );
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_connections))
            .connection_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .build(manager)
            .await
            .context("Failed to create connection pool")?;

        Ok(Self { pool })
    }

    /// Creates a database handle that never connects. Only useful where a
    /// `PostgresDatabase` is required but never used.
    #[cfg(feature = "dummy")]
    pub fn dummy() -> Self {
        let manager = PgManager::new(tokio_postgres::Config::new(), NoTls);
        Self {
            pool: Pool::builder().build_unchecked(manager),
        }
    }

    async fn acquire(&self) -> anyhow::Result<PgConnection<'_>> {
        self.pool
            .get()
            .await
            .context("Failed to acquire database connection")
    }

    pub async fn list_migrations(&self) -> anyhow::Result<Vec<MigrationStatus>> {
        let conn = self.acquire().await?;
        create_migrations_table(&conn).await?;
        list_migrations(&conn).await
    }

    /// Applies up to `cnt` pending migrations (all if `None`), oldest first,
    /// and returns the names of those that have been applied.
    pub async fn run_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.acquire().await?;
        create_migrations_table(&conn).await?;

        let pending = list_migrations(&conn)
            .await?
            .into_iter()
            .filter(|status| !status.applied)
            .map(|status| status.migration)
            .take(cnt.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        let mut applied = Vec::with_capacity(pending.len());
        for migration in pending {
            debug!(name = migration.name, "apply migration");
            let txn = conn
                .transaction()
                .await
                .context("Failed to begin transaction")?;
            txn.batch_execute(migration.up)
                .await
                .with_context(|| format!("Failed to run migration {}", migration.name))?;
            txn.execute(
                "insert into _migrations (name) values ($1)",
                &[&migration.name],
            )
            .await
            .with_context(|| format!("Failed to mark migration {} as run", migration.name))?;
            txn.commit().await.context("Failed to commit transaction")?;
            applied.push(migration.name);
        }

        Ok(applied)
    }

    /// Reverts up to `cnt` applied migrations (all if `None`), newest first,
    /// and returns the names of those that have been reverted.
    pub async fn revert_migrations(
        &self,
        cnt: Option<usize>,
    ) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.acquire().await?;
        create_migrations_table(&conn).await?;

        let applied = list_migrations(&conn)
            .await?
            .into_iter()
            .rev()
            .filter(|status| status.applied)
            .map(|status| status.migration)
            .take(cnt.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        let mut reverted = Vec::with_capacity(applied.len());
        for migration in applied {
            debug!(name = migration.name, "revert migration");
            let txn = conn
                .transaction()
                .await
                .context("Failed to begin transaction")?;
            txn.batch_execute(migration.down)
                .await
                .with_context(|| format!("Failed to revert migration {}", migration.name))?;
            txn.execute("delete from _migrations where name=$1", &[&migration.name])
                .await
                .with_context(|| {
                    format!("Failed to mark migration {} as reverted", migration.name)
                })?;
            txn.commit().await.context("Failed to commit transaction")?;
            reverted.push(migration.name);
        }

        Ok(reverted)
    }

    /// Drops everything stored in the database.
    pub async fn reset(&self) -> anyhow::Result<()> {
        self.execute("drop schema public cascade; create schema public;")
            .await
            .context("Failed to drop and recreate schema public")
    }

    pub async fn execute(&self, query: &str) -> anyhow::Result<()> {
        self.acquire()
            .await?
            .batch_execute(query)
            .await
            .context("Failed to execute query")
    }
}

impl Database for PostgresDatabase {
    type Transaction = PostgresTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        trace!("begin transaction");

        let conn = self
            .pool
            .get_owned()
            .await
            .context("Failed to acquire database connection")?;

        PostgresTransactionAsyncSendTryBuilder {
            conn,
            txn_builder: |conn| Box::pin(async move { conn.transaction().await.map(Some) }),
        }
        .try_build()
        .await
        .context("Failed to begin transaction")
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let conn = self.acquire().await?;
        let res: i32 = conn
            .query_one("select 1", &[])
            .await
            .context("Failed to ping database")?
            .get(0);
        (res == 1)
            .then_some(())
            .ok_or_else(|| anyhow!("Expected a result of 1, got {res} instead"))
    }
}

#[self_referencing]
pub struct PostgresTransaction {
    conn: PgConnection<'static>,
    #[borrows(mut conn)]
    #[covariant]
    txn: Option<PgTransaction<'this>>,
}

impl PostgresTransaction {
    fn txn(&self) -> &PgTransaction<'_> {
        self.borrow_txn()
            .as_ref()
            .expect("transaction has already been finished")
    }
}

impl Transaction for PostgresTransaction {
    async fn commit(mut self) -> anyhow::Result<()> {
        trace!("commit transaction");
        self.with_txn_mut(|txn| txn.take())
            .expect("transaction has already been finished")
            .commit()
            .await
            .context("Failed to commit transaction")
    }

    async fn rollback(mut self) -> anyhow::Result<()> {
        trace!("rollback transaction");
        self.with_txn_mut(|txn| txn.take())
            .expect("transaction has already been finished")
            .rollback()
            .await
            .context("Failed to rollback transaction")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub name: &'static str,
    pub up: &'static str,
    pub down: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MigrationStatus {
    pub migration: Migration,
    pub applied: bool,
}

// generated by `build.rs` from the files in `migrations/`
pub const MIGRATIONS: &[Migration] = include!(env!("MIGRATIONS"));

async fn create_migrations_table(conn: &PgClient) -> anyhow::Result<()> {
    conn.execute(
        "create table if not exists _migrations (name text primary key)",
        &[],
    )
    .await
    .context("Failed to create migrations table")?;
    Ok(())
}

async fn list_migrations(conn: &PgClient) -> anyhow::Result<Vec<MigrationStatus>> {
    let applied = conn
        .query("select name from _migrations", &[])
        .await
        .context("Failed to list migrations")?
        .into_iter()
        .map(|row| row.get(0))
        .collect::<HashSet<String>>();

    Ok(MIGRATIONS
        .iter()
        .map(|&migration| MigrationStatus {
            migration,
            applied: applied.contains(migration.name),
        })
        .collect())
}

/// Declares the column list of a table for use in queries:
/// `<NAME>_CNT`, `<NAME>_COLS` (qualified with the alias) and
/// `<NAME>_COL_NAMES`.
macro_rules! columns {
    ($vis:vis $ident:ident as $alias:literal: $fst:literal $(, $col:literal)* $(,)?) => {
        ::paste::paste! {
            $vis const [< $ident:snake:upper _CNT >]: usize = [ $fst $(, $col)* ].len();
            $vis const [< $ident:snake:upper _COLS >]: &str = ::core::concat!( '"', $alias, "\".\"", $fst, '"' $(, ", \"" , $alias, "\".\"", $col, '"' )* );
            #[allow(unused, reason = "not every table is inserted into with all columns")]
            $vis const [< $ident:snake:upper _COL_NAMES >]: &str = ::core::concat!( '"', $fst, '"' $(, ", \"", $col, '"' )* );
        }
    };
}
use columns;

/// Formats query placeholders, e.g. `$2, $3, $4` for `2..=4`.
fn arg_indices(indices: impl IntoIterator<Item = usize>) -> String {
    let mut out = String::new();
    for (i, x) in indices.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(&mut out, "${x}");
    }
    out
}
