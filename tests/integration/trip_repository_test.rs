// Trip repository behavior against an in-memory SQLite database:
// server-side profit persistence, ordering, filters, and strict per-user
// scoping of reads, updates, and deletes.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use riderwatch::core::AppError;
use riderwatch::trips::models::NewTrip;
use riderwatch::trips::repositories::{TripFilter, TripRepository};
use riderwatch::trips::services::profit::net_profit;
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

fn new_trip(date: &str, trip_time: &str, app_name: &str, amount: f64, fees: f64, fuel: f64) -> NewTrip {
    NewTrip {
        date: date.to_string(),
        trip_time: trip_time.to_string(),
        trip_id: String::new(),
        app_name: app_name.to_string(),
        trip_type: "Passenger".to_string(),
        distance_km: 10.0,
        amount_received: amount,
        fees,
        fuel_cost: fuel,
        net_profit: net_profit(amount, fees, fuel),
        notes: String::new(),
    }
}

#[tokio::test]
async fn create_persists_computed_net_profit() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = TripRepository::new(pool.clone());

    let trip = repo
        .create(user, &new_trip("2025-03-10", "08:15", "Uber", 1500.0, 150.0, 200.0))
        .await
        .unwrap();

    assert_eq!(trip.user_id, user);
    assert_eq!(trip.date, "2025-03-10");
    assert_eq!(trip.net_profit, 1150.0);
    assert!(!trip.created_at.is_empty());
}

#[tokio::test]
async fn list_orders_by_date_then_time_descending() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = TripRepository::new(pool.clone());

    repo.create(user, &new_trip("2025-03-09", "20:00", "Uber", 900.0, 90.0, 0.0))
        .await
        .unwrap();
    repo.create(user, &new_trip("2025-03-10", "07:00", "Pickme", 800.0, 80.0, 0.0))
        .await
        .unwrap();
    repo.create(user, &new_trip("2025-03-10", "18:30", "Uber", 1200.0, 120.0, 0.0))
        .await
        .unwrap();

    let trips = repo.list(user, &TripFilter::default()).await.unwrap();
    let order: Vec<(&str, &str)> = trips
        .iter()
        .map(|t| (t.date.as_str(), t.trip_time.as_str()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("2025-03-10", "18:30"),
            ("2025-03-10", "07:00"),
            ("2025-03-09", "20:00"),
        ]
    );
}

#[tokio::test]
async fn list_filters_by_app_and_date_range() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = TripRepository::new(pool.clone());

    repo.create(user, &new_trip("2025-03-01", "08:00", "Uber", 500.0, 50.0, 0.0))
        .await
        .unwrap();
    repo.create(user, &new_trip("2025-03-15", "09:00", "Pickme", 600.0, 60.0, 0.0))
        .await
        .unwrap();
    repo.create(user, &new_trip("2025-04-01", "10:00", "Uber", 700.0, 70.0, 0.0))
        .await
        .unwrap();

    let filter = TripFilter {
        app_name: Some("Uber".to_string()),
        ..TripFilter::default()
    };
    let uber_trips = repo.list(user, &filter).await.unwrap();
    assert_eq!(uber_trips.len(), 2);
    assert!(uber_trips.iter().all(|t| t.app_name == "Uber"));

    let filter = TripFilter {
        start_date: Some("2025-03-01".to_string()),
        end_date: Some("2025-03-31".to_string()),
        ..TripFilter::default()
    };
    let march_trips = repo.list(user, &filter).await.unwrap();
    assert_eq!(march_trips.len(), 2);

    // A lone start_date does not filter; both bounds are required
    let filter = TripFilter {
        start_date: Some("2025-04-01".to_string()),
        ..TripFilter::default()
    };
    assert_eq!(repo.list(user, &filter).await.unwrap().len(), 3);
}

#[tokio::test]
async fn empty_filter_values_are_ignored() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = TripRepository::new(pool.clone());

    repo.create(user, &new_trip("2025-03-10", "08:00", "Uber", 500.0, 50.0, 0.0))
        .await
        .unwrap();
    repo.create(user, &new_trip("2025-03-11", "09:00", "Pickme", 600.0, 60.0, 0.0))
        .await
        .unwrap();

    // `?app_name=&date=` style query strings deserialize to Some("")
    let filter = TripFilter {
        date: Some(String::new()),
        app_name: Some(String::new()),
        trip_type: Some(String::new()),
        start_date: Some(String::new()),
        end_date: Some(String::new()),
    };
    assert_eq!(repo.list(user, &filter).await.unwrap().len(), 2);
}

#[tokio::test]
async fn trips_are_invisible_to_other_users() {
    let pool = setup_pool().await;
    let owner = seed_user(&pool, "owner@example.com").await;
    let intruder = seed_user(&pool, "intruder@example.com").await;
    let repo = TripRepository::new(pool.clone());

    let trip = repo
        .create(owner, &new_trip("2025-03-10", "08:00", "Uber", 1000.0, 100.0, 0.0))
        .await
        .unwrap();

    assert!(repo.find_by_id(owner, trip.id).await.unwrap().is_some());
    assert!(repo.find_by_id(intruder, trip.id).await.unwrap().is_none());
    assert!(repo.list(intruder, &TripFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_fields_and_recomputes_profit() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "driver@example.com").await;
    let repo = TripRepository::new(pool.clone());

    let trip = repo
        .create(user, &new_trip("2025-03-10", "08:00", "Uber", 1000.0, 100.0, 0.0))
        .await
        .unwrap();

    let updated = repo
        .update(user, trip.id, &new_trip("2025-03-11", "09:30", "Pickme", 2000.0, 300.0, 150.0))
        .await
        .unwrap();

    assert_eq!(updated.id, trip.id);
    assert_eq!(updated.date, "2025-03-11");
    assert_eq!(updated.app_name, "Pickme");
    assert_eq!(updated.net_profit, 2000.0 - 300.0 - 150.0);
}

#[tokio::test]
async fn update_of_foreign_trip_is_not_found() {
    let pool = setup_pool().await;
    let owner = seed_user(&pool, "owner@example.com").await;
    let intruder = seed_user(&pool, "intruder@example.com").await;
    let repo = TripRepository::new(pool.clone());

    let trip = repo
        .create(owner, &new_trip("2025-03-10", "08:00", "Uber", 1000.0, 100.0, 0.0))
        .await
        .unwrap();

    let err = repo
        .update(intruder, trip.id, &new_trip("2025-03-11", "09:00", "Other", 1.0, 0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Owner's row is untouched
    let unchanged = repo.find_by_id(owner, trip.id).await.unwrap().unwrap();
    assert_eq!(unchanged.date, "2025-03-10");
    assert_eq!(unchanged.app_name, "Uber");
}

#[tokio::test]
async fn delete_of_missing_or_foreign_trip_is_not_found() {
    let pool = setup_pool().await;
    let owner = seed_user(&pool, "owner@example.com").await;
    let intruder = seed_user(&pool, "intruder@example.com").await;
    let repo = TripRepository::new(pool.clone());

    let trip = repo
        .create(owner, &new_trip("2025-03-10", "08:00", "Uber", 1000.0, 100.0, 0.0))
        .await
        .unwrap();

    let err = repo.delete(owner, trip.id + 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = repo.delete(intruder, trip.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Table is unchanged; the owner can still delete
    assert!(repo.find_by_id(owner, trip.id).await.unwrap().is_some());
    repo.delete(owner, trip.id).await.unwrap();
    assert!(repo.find_by_id(owner, trip.id).await.unwrap().is_none());
}
