// Time-versioned fuel settings: append-only history, date-based
// resolution, deterministic tie-breaks, and per-user isolation.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use riderwatch::settings::repositories::SettingsRepository;
use riderwatch::users::repositories::UserRepository;

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

async fn seed_user(pool: &SqlitePool, email: &str) -> i64 {
    UserRepository::new(pool.clone())
        .create("Test Driver", email, "not-a-real-hash")
        .await
        .expect("seed user")
        .id
}

#[tokio::test]
async fn current_is_none_before_any_record() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    assert!(repo.current(user).await.unwrap().is_none());
    assert!(repo.for_date(user, "2025-01-01").await.unwrap().is_none());
    assert!(repo.history(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn for_date_resolves_latest_effective_record() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    repo.insert(user, 30.0, 350.0, "2024-01-01").await.unwrap();
    repo.insert(user, 32.0, 380.0, "2024-06-01").await.unwrap();

    // Between the two records the earlier one applies
    let march = repo.for_date(user, "2024-03-15").await.unwrap().unwrap();
    assert_eq!(march.fuel_efficiency_kmpl, 30.0);
    assert_eq!(march.effective_from, "2024-01-01");

    // On or after the second record's date the later one applies
    let june = repo.for_date(user, "2024-06-01").await.unwrap().unwrap();
    assert_eq!(june.fuel_efficiency_kmpl, 32.0);

    let july = repo.for_date(user, "2024-07-01").await.unwrap().unwrap();
    assert_eq!(july.fuel_price_per_liter, 380.0);

    // A date before all history has no settings
    assert!(repo.for_date(user, "2023-12-01").await.unwrap().is_none());
}

#[tokio::test]
async fn current_returns_latest_effective_from() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    repo.insert(user, 30.0, 350.0, "2024-06-01").await.unwrap();
    // Backdated record does not displace the latest one
    repo.insert(user, 28.0, 340.0, "2024-01-01").await.unwrap();

    let current = repo.current(user).await.unwrap().unwrap();
    assert_eq!(current.effective_from, "2024-06-01");
    assert_eq!(current.fuel_efficiency_kmpl, 30.0);
}

#[tokio::test]
async fn same_effective_date_resolves_to_latest_insert() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    let first = repo.insert(user, 30.0, 350.0, "2024-01-01").await.unwrap();
    let second = repo.insert(user, 31.0, 360.0, "2024-01-01").await.unwrap();
    assert!(second.id > first.id);

    let resolved = repo.for_date(user, "2024-02-01").await.unwrap().unwrap();
    assert_eq!(resolved.id, second.id);
    assert_eq!(resolved.fuel_efficiency_kmpl, 31.0);

    let current = repo.current(user).await.unwrap().unwrap();
    assert_eq!(current.id, second.id);
}

#[tokio::test]
async fn history_is_ordered_most_recent_first_and_append_only() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    repo.insert(user, 30.0, 350.0, "2024-01-01").await.unwrap();
    repo.insert(user, 32.0, 380.0, "2024-06-01").await.unwrap();
    repo.insert(user, 31.0, 370.0, "2024-03-01").await.unwrap();

    let history = repo.history(user).await.unwrap();
    let dates: Vec<&str> = history.iter().map(|s| s.effective_from.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-01", "2024-03-01", "2024-01-01"]);

    // Earlier records keep their original values
    assert_eq!(history[2].fuel_efficiency_kmpl, 30.0);
    assert_eq!(history[2].fuel_price_per_liter, 350.0);
}

#[tokio::test]
async fn settings_are_scoped_per_user() {
    let pool = setup_pool().await;
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;
    let repo = SettingsRepository::new(pool.clone());

    repo.insert(alice, 30.0, 350.0, "2024-01-01").await.unwrap();

    assert!(repo.current(bob).await.unwrap().is_none());
    assert!(repo.for_date(bob, "2024-06-01").await.unwrap().is_none());
    assert!(repo.history(bob).await.unwrap().is_empty());

    repo.insert(bob, 20.0, 500.0, "2024-01-01").await.unwrap();
    let alice_current = repo.current(alice).await.unwrap().unwrap();
    assert_eq!(alice_current.fuel_efficiency_kmpl, 30.0);
}
