//! Engine-agnostic store contract checks shared by the SQLite and PostgreSQL
//! test suites.

#![allow(dead_code)]

use chrono::{SubsecRound, Utc};
use intake_db::models::account::CreateAccount;
use intake_db::models::inquiry::InquiryFields;
use intake_db::{CredentialStore, Database, InquiryStore};
use tempfile::TempDir;

/// Open a migrated SQLite database in a fresh temporary directory.
///
/// The returned [`TempDir`] must be kept alive for the duration of the test.
pub async fn sqlite_database() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let url = format!("sqlite://{}", dir.path().join("intake.db").display());
    let db = Database::connect(&url, 2)
        .await
        .expect("sqlite connection should succeed");
    db.run_migrations().await.expect("migrations should apply");
    (db, dir)
}

pub fn full_fields(client: &str) -> InquiryFields {
    InquiryFields {
        client_name: Some(client.to_string()),
        contact_person: Some("Dana Reyes".to_string()),
        email: Some("dana@example.com".to_string()),
        phone: Some("+1 555 0100".to_string()),
        project_name: Some(format!("{client} storefront")),
        project_description: Some("Replatform the online shop".to_string()),
        due_date: Some("2027-03-01".to_string()),
        budget: Some(12500.75),
        duration: Some(45),
    }
}

pub async fn create_defaults_status_and_date(store: &dyn InquiryStore) {
    let before = Utc::now().trunc_subsecs(6);
    let id = store.create(&full_fields("Acme")).await.unwrap();

    let all = store.list().await.unwrap();
    let row = all.iter().find(|i| i.id == id).expect("created row is listed");
    assert_eq!(row.status, "New");
    assert!(
        row.submission_date >= before,
        "submission date {} earlier than call time {before}",
        row.submission_date
    );
}

pub async fn create_round_trips_fields(store: &dyn InquiryStore) {
    let full = full_fields("Globex");
    let sparse = InquiryFields {
        client_name: Some("Initech".to_string()),
        email: Some("peter@initech.example".to_string()),
        ..Default::default()
    };

    let full_id = store.create(&full).await.unwrap();
    let sparse_id = store.create(&sparse).await.unwrap();

    let all = store.list().await.unwrap();
    let full_row = all.iter().find(|i| i.id == full_id).unwrap();
    let sparse_row = all.iter().find(|i| i.id == sparse_id).unwrap();
    assert_eq!(full_row.fields(), full);
    assert_eq!(sparse_row.fields(), sparse);
    assert_eq!(sparse_row.budget, None);
    assert_eq!(sparse_row.duration, None);
}

pub async fn list_is_newest_first(store: &dyn InquiryStore) {
    assert!(store.list().await.unwrap().is_empty(), "empty store lists nothing");

    let a = store.create(&full_fields("A")).await.unwrap();
    let b = store.create(&full_fields("B")).await.unwrap();
    let c = store.create(&full_fields("C")).await.unwrap();

    let ids: Vec<_> = store.list().await.unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![c, b, a]);
}

pub async fn update_overwrites_only_editable_fields(store: &dyn InquiryStore) {
    let id = store.create(&full_fields("Acme")).await.unwrap();
    store.patch_status(id, "Contacted").await.unwrap();
    let original = store.list().await.unwrap().remove(0);

    let replacement = InquiryFields {
        client_name: Some("Acme Corp".to_string()),
        budget: Some(9000.0),
        ..Default::default()
    };
    let changes = store.update(id, &replacement).await.unwrap();
    assert_eq!(changes, 1);

    let updated = store.list().await.unwrap().remove(0);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.submission_date, original.submission_date);
    assert_eq!(updated.status, "Contacted");
    assert_eq!(updated.fields(), replacement);
    assert_eq!(updated.contact_person, None, "full overwrite clears omitted fields");
}

pub async fn patch_status_changes_only_status(store: &dyn InquiryStore) {
    let fields = full_fields("Acme");
    let id = store.create(&fields).await.unwrap();

    assert_eq!(store.patch_status(id, "Quoted").await.unwrap(), 1);

    let row = store.list().await.unwrap().remove(0);
    assert_eq!(row.status, "Quoted");
    assert_eq!(row.fields(), fields);
}

pub async fn delete_is_permanent(store: &dyn InquiryStore) {
    let keep = store.create(&full_fields("Keep")).await.unwrap();
    let gone = store.create(&full_fields("Gone")).await.unwrap();

    assert_eq!(store.delete(gone).await.unwrap(), 1);
    assert_eq!(store.delete(gone).await.unwrap(), 0, "second delete is a no-op");

    let ids: Vec<_> = store.list().await.unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![keep]);
}

pub async fn missing_id_mutations_affect_nothing(store: &dyn InquiryStore) {
    let id = store.create(&full_fields("Acme")).await.unwrap();
    let missing = id + 1000;

    assert_eq!(store.update(missing, &full_fields("Nope")).await.unwrap(), 0);
    assert_eq!(store.patch_status(missing, "Won").await.unwrap(), 0);
    assert_eq!(store.delete(missing).await.unwrap(), 0);

    let all = store.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, "New");
    assert_eq!(all[0].fields(), full_fields("Acme"));
}

pub async fn ids_are_not_reused_after_delete(store: &dyn InquiryStore) {
    let first = store.create(&full_fields("First")).await.unwrap();
    store.delete(first).await.unwrap();
    let second = store.create(&full_fields("Second")).await.unwrap();
    assert!(second > first, "id {second} reused or renumbered (first was {first})");
}

pub async fn account_lookup_is_exact(store: &dyn CredentialStore) {
    let inserted = store
        .create_if_absent(&CreateAccount {
            username: "Admin".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role: None,
        })
        .await
        .unwrap();
    assert!(inserted);

    let account = store.find_by_username("Admin").await.unwrap().expect("account exists");
    assert_eq!(account.username, "Admin");
    assert_eq!(account.role, "admin");

    assert!(store.find_by_username("admin").await.unwrap().is_none(), "lookup is case-sensitive");
    assert!(store.find_by_username("nobody").await.unwrap().is_none());
}

pub async fn create_if_absent_keeps_existing_account(store: &dyn CredentialStore) {
    let original = CreateAccount {
        username: "owner".to_string(),
        password_hash: "first-hash".to_string(),
        role: Some("admin".to_string()),
    };
    let replacement = CreateAccount {
        password_hash: "second-hash".to_string(),
        ..original.clone()
    };

    assert!(store.create_if_absent(&original).await.unwrap());
    assert!(!store.create_if_absent(&replacement).await.unwrap());

    let account = store.find_by_username("owner").await.unwrap().unwrap();
    assert_eq!(account.password_hash, "first-hash");
}
