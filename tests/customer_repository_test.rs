//! Customer repository tests

use checkout::db;
use checkout::domain::{Address, Customer, CustomerRepository, DomainError};
use checkout::infrastructure::SeaOrmCustomerRepository;
use checkout::models::customer as customer_model;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn address(n: i32) -> Address {
    Address::new(
        format!("Street {}", n),
        n,
        format!("Zipcode {}", n),
        format!("City {}", n),
    )
    .unwrap()
}

#[tokio::test]
async fn test_create_and_find_customer() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let mut customer = Customer::new("123", "Customer 1").unwrap();
    customer.change_address(address(1));
    repo.create(&customer).await.expect("Failed to create customer");

    let stored = repo.find("123").await.unwrap().expect("Customer not found");
    assert_eq!(stored, customer);
    assert_eq!(stored.address(), Some(&address(1)));
    assert!(!stored.is_active());
}

#[tokio::test]
async fn test_customer_without_address_round_trips() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let customer = Customer::new("123", "Customer 1").unwrap();
    repo.create(&customer).await.unwrap();

    let stored = repo.find("123").await.unwrap().unwrap();
    assert!(stored.address().is_none());
}

#[tokio::test]
async fn test_duplicate_customer_id_fails() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let customer = Customer::new("123", "Customer 1").unwrap();
    repo.create(&customer).await.unwrap();

    let twin = Customer::new("123", "Customer 2").unwrap();
    let err = repo.create(&twin).await.unwrap_err();
    assert!(matches!(err, DomainError::Database(_)), "got {:?}", err);

    let stored = repo.find("123").await.unwrap().unwrap();
    assert_eq!(stored.name(), "Customer 1");
}

#[tokio::test]
async fn test_update_customer() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let mut customer = Customer::new("123", "Customer 1").unwrap();
    repo.create(&customer).await.unwrap();

    customer.change_name("Customer 2").unwrap();
    customer.change_address(address(2));
    customer.activate().unwrap();
    customer.add_reward_points(15).unwrap();
    repo.update(&customer).await.expect("Failed to update customer");

    let stored = repo.find("123").await.unwrap().unwrap();
    assert_eq!(stored, customer);
    assert!(stored.is_active());
    assert_eq!(stored.reward_points(), 15);
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let customer = Customer::new("ghost", "Nobody").unwrap();
    assert_eq!(repo.update(&customer).await, Err(DomainError::NotFound));
}

#[tokio::test]
async fn test_find_unknown_customer_returns_none() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    assert!(repo.find("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_customers() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    let first = Customer::new("1", "Customer 1").unwrap().with_address(address(1));
    let second = Customer::new("2", "Customer 2").unwrap();
    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn test_stored_address_is_validated_on_read() {
    let db = setup_test_db().await;
    let repo = SeaOrmCustomerRepository::new(db.clone());

    // Row written behind the repository's back with a blank street
    let row = customer_model::ActiveModel {
        id: Set("broken".to_string()),
        name: Set("Customer 1".to_string()),
        street: Set(Some("".to_string())),
        number: Set(Some(1)),
        zipcode: Set(Some("Zipcode 1".to_string())),
        city: Set(Some("City 1".to_string())),
        active: Set(false),
        reward_points: Set(0),
    };
    customer_model::Entity::insert(row)
        .exec_without_returning(&db)
        .await
        .expect("Failed to insert raw customer");

    let err = repo.find("broken").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)), "got {:?}", err);
    assert!(repo.find_all().await.is_err());
}
