// src/infrastructure/repositories/postgres_branch.rs
use super::map_sqlx;
use crate::domain::branch::{
    Branch, BranchCatalog, BranchSummary, CatalogEntry, CatalogKind, CatalogStream, IfscCode,
    PageWindow,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::StreamExt;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow};

/// Normalized form of the `ifsc` column; must agree with `IfscCode::normalize`.
const NORMALIZED_IFSC: &str = "regexp_replace(upper(ifsc), '[^A-Z0-9]', '', 'g')";

#[derive(Clone)]
pub struct PostgresBranchCatalog {
    pool: PgPool,
}

impl PostgresBranchCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BranchRow {
    ifsc: String,
    bank: Option<String>,
    branch: Option<String>,
    address: Option<String>,
    city: Option<String>,
    district: Option<String>,
    state: Option<String>,
    centre: Option<String>,
    contact: Option<String>,
    micr: Option<String>,
    swift: Option<String>,
    iso3166: Option<String>,
    imps: Option<bool>,
    neft: Option<bool>,
    rtgs: Option<bool>,
    upi: Option<bool>,
}

impl TryFrom<BranchRow> for Branch {
    type Error = DomainError;

    fn try_from(row: BranchRow) -> Result<Self, Self::Error> {
        Ok(Branch {
            ifsc: IfscCode::parse(&row.ifsc)?,
            bank: row.bank,
            branch: row.branch,
            address: row.address,
            city: row.city,
            district: row.district,
            state: row.state,
            centre: row.centre,
            contact: row.contact,
            micr: row.micr,
            swift: row.swift,
            iso3166: row.iso3166,
            imps: row.imps,
            neft: row.neft,
            rtgs: row.rtgs,
            upi: row.upi,
        })
    }
}

#[derive(Debug, FromRow)]
struct BranchSummaryRow {
    ifsc: String,
    branch: Option<String>,
    address: Option<String>,
}

impl TryFrom<BranchSummaryRow> for BranchSummary {
    type Error = DomainError;

    fn try_from(row: BranchSummaryRow) -> Result<Self, Self::Error> {
        Ok(BranchSummary {
            ifsc: IfscCode::parse(&row.ifsc)?,
            branch: row.branch,
            address: row.address,
        })
    }
}

fn listing_sql(kind: CatalogKind) -> String {
    match kind {
        CatalogKind::Banks => {
            "SELECT DISTINCT bank FROM branches WHERE bank IS NOT NULL ORDER BY bank".to_string()
        }
        CatalogKind::States => "SELECT DISTINCT bank, state FROM branches
             WHERE bank IS NOT NULL AND state IS NOT NULL
             ORDER BY bank, state"
            .to_string(),
        CatalogKind::Cities => "SELECT DISTINCT bank, state, city FROM branches
             WHERE bank IS NOT NULL AND state IS NOT NULL AND city IS NOT NULL
             ORDER BY bank, state, city"
            .to_string(),
        CatalogKind::Branches => format!(
            "SELECT {NORMALIZED_IFSC} AS ifsc FROM branches
             WHERE {NORMALIZED_IFSC} <> ''
             ORDER BY 1"
        ),
    }
}

fn count_sql(kind: CatalogKind) -> String {
    match kind {
        CatalogKind::Branches => {
            format!("SELECT COUNT(*) FROM branches WHERE {NORMALIZED_IFSC} <> ''")
        }
        other => format!("SELECT COUNT(*) FROM ({}) AS listing", listing_sql(other)),
    }
}

fn decode_entry(kind: CatalogKind, row: &PgRow) -> Result<CatalogEntry, sqlx::Error> {
    Ok(match kind {
        CatalogKind::Banks => CatalogEntry::Bank {
            bank: row.try_get("bank")?,
        },
        CatalogKind::States => CatalogEntry::State {
            bank: row.try_get("bank")?,
            state: row.try_get("state")?,
        },
        CatalogKind::Cities => CatalogEntry::City {
            bank: row.try_get("bank")?,
            state: row.try_get("state")?,
            city: row.try_get("city")?,
        },
        CatalogKind::Branches => {
            let raw: String = row.try_get("ifsc")?;
            CatalogEntry::Branch {
                ifsc: IfscCode::parse(&raw).map_err(|err| sqlx::Error::Decode(err.into()))?,
            }
        }
    })
}

/// Exact match on the normalized code. Rows that normalize identically are
/// ordered by the raw column so the same one always wins.
fn find_by_code_sql() -> String {
    format!(
        "SELECT {NORMALIZED_IFSC} AS ifsc, bank, branch, address, city, district, state,
                centre, contact::text AS contact, micr::text AS micr, swift, iso3166,
                imps, neft, rtgs, upi
         FROM branches
         WHERE {NORMALIZED_IFSC} = $1
         ORDER BY branches.ifsc
         LIMIT 1"
    )
}

fn bind_value(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl BranchCatalog for PostgresBranchCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        let row = sqlx::query_as::<_, BranchRow>(&find_by_code_sql())
            .bind(code.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Branch::try_from).transpose()
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT bank FROM branches WHERE bank IS NOT NULL ORDER BY bank",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT state FROM branches
             WHERE bank = $1 AND state IS NOT NULL
             ORDER BY state",
        )
        .bind(bank)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT city FROM branches
             WHERE bank = $1 AND state = $2 AND city IS NOT NULL
             ORDER BY city",
        )
        .bind(bank)
        .bind(state)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        let sql = format!(
            "SELECT {NORMALIZED_IFSC} AS ifsc, branch, address FROM branches
             WHERE bank = $1 AND state = $2 AND city = $3 AND {NORMALIZED_IFSC} <> ''
             ORDER BY branch NULLS LAST, ifsc"
        );
        let rows = sqlx::query_as::<_, BranchSummaryRow>(&sql)
            .bind(bank)
            .bind(state)
            .bind(city)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(BranchSummary::try_from).collect()
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar(&count_sql(kind))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        let pool = self.pool.clone();
        let sql = match window {
            Some(_) => format!("{} OFFSET $1 LIMIT $2", listing_sql(kind)),
            None => listing_sql(kind),
        };

        Box::pin(async_stream::stream! {
            // Checked out for the whole stream; returned to the pool on drop.
            let mut conn = match pool.acquire().await {
                Ok(conn) => conn,
                Err(err) => {
                    yield Err(map_sqlx(err));
                    return;
                }
            };

            let mut query = sqlx::query(&sql);
            if let Some(window) = window {
                query = query
                    .bind(bind_value(window.offset))
                    .bind(bind_value(window.limit));
            }

            let mut rows = query.fetch(&mut *conn);
            while let Some(next) = rows.next().await {
                match next.and_then(|row| decode_entry(kind, &row)) {
                    Ok(entry) => yield Ok(entry),
                    Err(err) => {
                        yield Err(map_sqlx(err));
                        return;
                    }
                }
            }
        })
    }
}
