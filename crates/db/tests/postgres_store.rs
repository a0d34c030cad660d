//! Store contract tests against PostgreSQL.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p intake-db -- --ignored

mod common;

use intake_db::postgres::{AccountRepo, InquiryRepo};
use sqlx::PgPool;

macro_rules! inquiry_contract {
    ($($name:ident),* $(,)?) => {
        $(
            #[sqlx::test(migrations = "migrations/postgres")]
            #[ignore = "requires a PostgreSQL database"]
            async fn $name(pool: PgPool) {
                common::$name(&InquiryRepo::new(pool)).await;
            }
        )*
    };
}

macro_rules! credential_contract {
    ($($name:ident),* $(,)?) => {
        $(
            #[sqlx::test(migrations = "migrations/postgres")]
            #[ignore = "requires a PostgreSQL database"]
            async fn $name(pool: PgPool) {
                common::$name(&AccountRepo::new(pool)).await;
            }
        )*
    };
}

inquiry_contract!(
    create_defaults_status_and_date,
    create_round_trips_fields,
    list_is_newest_first,
    update_overwrites_only_editable_fields,
    patch_status_changes_only_status,
    delete_is_permanent,
    missing_id_mutations_affect_nothing,
    ids_are_not_reused_after_delete,
);

credential_contract!(account_lookup_is_exact, create_if_absent_keeps_existing_account);
