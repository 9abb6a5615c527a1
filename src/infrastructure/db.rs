use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Open the database and create the checkout schema.
///
/// The returned connection is meant to be opened once per process and
/// handed to the repositories (see [`crate::infrastructure::AppState`]).
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Order items rely on FK checks for customer/product existence
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    run_migrations(&db).await?;

    Ok(db)
}

/// Close the connection pool. Pending repository calls must be finished.
pub async fn close_db(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create customers table (address columns are NULL until an address is set)
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            street TEXT,
            number INTEGER,
            zipcode TEXT,
            city TEXT,
            active BOOLEAN NOT NULL DEFAULT 0,
            reward_points INTEGER NOT NULL DEFAULT 0
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create products table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            price REAL NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create orders table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY NOT NULL,
            customer_id TEXT NOT NULL,
            total REAL NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create order_items table; items go away with their order
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS order_items (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            quantity INTEGER NOT NULL,
            order_id TEXT NOT NULL,
            product_id TEXT NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE,
            FOREIGN KEY (product_id) REFERENCES products(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_orders_customer ON orders(customer_id)".to_owned(),
    ))
    .await?;

    tracing::info!("Checkout schema ready");

    Ok(())
}
