//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{Address, Customer, CustomerRepository, DomainError};
use crate::models::customer::{ActiveModel, Entity as CustomerEntity, Model};

/// SeaORM-based implementation of CustomerRepository
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply(active: &mut ActiveModel, customer: &Customer) {
    let address = customer.address();

    active.name = Set(customer.name().to_string());
    active.street = Set(address.map(|a| a.street().to_string()));
    active.number = Set(address.map(Address::number));
    active.zipcode = Set(address.map(|a| a.zip().to_string()));
    active.city = Set(address.map(|a| a.city().to_string()));
    active.active = Set(customer.is_active());
    active.reward_points = Set(customer.reward_points());
}

fn to_domain(model: Model) -> Result<Customer, DomainError> {
    let address = match (model.street, model.number, model.zipcode, model.city) {
        (Some(street), Some(number), Some(zip), Some(city)) => {
            Some(Address::new(street, number, zip, city)?)
        }
        _ => None,
    };

    Ok(Customer::restore(
        model.id,
        model.name,
        address,
        model.active,
        model.reward_points,
    ))
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut active = ActiveModel {
            id: Set(customer.id().to_string()),
            ..Default::default()
        };
        apply(&mut active, customer);

        active.insert(&self.db).await?;
        tracing::debug!(customer_id = %customer.id(), "Customer created");

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let existing = CustomerEntity::find_by_id(customer.id())
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                tracing::warn!(customer_id = %customer.id(), "Update target not found");
                DomainError::NotFound
            })?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, customer);

        active.update(&self.db).await?;
        tracing::debug!(customer_id = %customer.id(), "Customer updated");

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Customer>, DomainError> {
        CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        CustomerEntity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}
