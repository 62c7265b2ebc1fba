//! Registrations Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::registrations::models::{
    NewRegistration, Registration, RegistrationStats, RegistrationStatus, RegistrationUuid,
};

const CREATE_REGISTRATION_SQL: &str = include_str!("sql/create_registration.sql");
const GET_REGISTRATION_SQL: &str = include_str!("sql/get_registration.sql");
const FIND_PENDING_BY_EMAIL_SQL: &str = include_str!("sql/find_pending_by_email.sql");
const SET_REGISTRATION_STATUS_SQL: &str = include_str!("sql/set_registration_status.sql");
const LIST_PENDING_REGISTRATIONS_SQL: &str = include_str!("sql/list_pending_registrations.sql");
const COUNT_REGISTRATIONS_SQL: &str = include_str!("sql/count_registrations.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRegistrationsRepository;

impl PgRegistrationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_registration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: &NewRegistration,
        customer_id: Option<&str>,
    ) -> Result<Registration, sqlx::Error> {
        query_as::<Postgres, Registration>(CREATE_REGISTRATION_SQL)
            .bind(RegistrationUuid::new().into_uuid())
            .bind(&registration.name)
            .bind(&registration.email)
            .bind(&registration.business_details)
            .bind(customer_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_registration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: RegistrationUuid,
    ) -> Result<Registration, sqlx::Error> {
        query_as::<Postgres, Registration>(GET_REGISTRATION_SQL)
            .bind(registration.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_pending_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<Registration>, sqlx::Error> {
        query_as::<Postgres, Registration>(FIND_PENDING_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Apply a decision to a registration that is still pending.
    ///
    /// Returns `None` when the row exists but has already left the pending
    /// state, so concurrent decisions cannot double-apply.
    pub(crate) async fn set_registration_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: RegistrationUuid,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, sqlx::Error> {
        query_as::<Postgres, Registration>(SET_REGISTRATION_STATUS_SQL)
            .bind(registration.into_uuid())
            .bind(status.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_pending_registrations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        query_as::<Postgres, Registration>(LIST_PENDING_REGISTRATIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_registrations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<RegistrationStats, sqlx::Error> {
        query_as::<Postgres, RegistrationStats>(COUNT_REGISTRATIONS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Registration {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<RegistrationStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: RegistrationUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            business_details: row.try_get("business_details")?,
            status,
            customer_id: row.try_get("customer_id")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            decided_at: row
                .try_get::<Option<SqlxTimestamp>, _>("decided_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RegistrationStats {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total: count_column(row, "total")?,
            pending: count_column(row, "pending")?,
            approved: count_column(row, "approved")?,
            rejected: count_column(row, "rejected")?,
        })
    }
}

fn count_column(row: &PgRow, index: &str) -> sqlx::Result<u64> {
    let count = row.try_get::<i64, _>(index)?;

    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}
