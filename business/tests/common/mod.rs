use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::checkout::model::{InventoryDelta, OrderDraft};
use business::domain::checkout::repository::CheckoutRepository;
use business::domain::checkout::services::ShippingAddressProvider;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::order::model::{NewOrder, NewOrderItem, Order, OrderItem};
use business::domain::order::repository::OrderRepository;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::UserId;

#[derive(Default)]
struct State {
    products: BTreeMap<i64, Product>,
    orders: BTreeMap<i64, Order>,
    items: Vec<OrderItem>,
    next_product_id: i64,
    next_order_id: i64,
    next_item_id: i64,
}

impl State {
    fn insert_order(&mut self, order: &NewOrder) -> i64 {
        self.next_order_id += 1;
        let id = self.next_order_id;
        self.orders.insert(
            id,
            Order {
                id,
                user_id: order.user_id,
                total: order.total.clone(),
                status: order.status.clone(),
                address: order.address.clone(),
                created_at: Utc::now(),
            },
        );
        id
    }

    fn insert_item(&mut self, item: &NewOrderItem) -> i64 {
        self.next_item_id += 1;
        let id = self.next_item_id;
        self.items.push(OrderItem {
            id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price.clone(),
            created_at: Utc::now(),
        });
        id
    }
}

/// Thread-safe in-memory catalog and ledger.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, name: &str, price: &str, quantity: i32) -> i64 {
        let product = NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            image: String::new(),
            price: price.parse().unwrap(),
            quantity,
            created_at: Utc::now(),
        };
        self.create(&product).await.unwrap().id
    }

    pub async fn quantity_of(&self, product_id: i64) -> i32 {
        self.state.read().await.products[&product_id].quantity
    }

    pub async fn set_price(&self, product_id: i64, price: BigDecimal) {
        let mut state = self.state.write().await;
        if let Some(product) = state.products.get_mut(&product_id) {
            product.price = price;
        }
    }

    pub async fn set_quantity(&self, product_id: i64, quantity: i32) {
        let mut state = self.state.write().await;
        if let Some(product) = state.products.get_mut(&product_id) {
            product.quantity = quantity;
        }
    }

    pub async fn remove(&self, product_id: i64) {
        self.state.write().await.products.remove(&product_id);
    }

    pub async fn item_count(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.state
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .products
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        state.next_product_id += 1;
        let created = Product::from_repository(
            state.next_product_id,
            product.name.clone(),
            product.description.clone(),
            product.image.clone(),
            product.price.clone(),
            product.quantity,
            product.created_at,
        );
        state.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let slot = state
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create_order(&self, order: &NewOrder) -> Result<i64, RepositoryError> {
        Ok(self.state.write().await.insert_order(order))
    }

    async fn create_order_item(&self, item: &NewOrderItem) -> Result<i64, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.orders.contains_key(&item.order_id) {
            return Err(RepositoryError::NotFound);
        }
        Ok(state.insert_item(item))
    }

    async fn get_by_id(&self, id: i64) -> Result<Order, RepositoryError> {
        self.state
            .read()
            .await
            .orders
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CheckoutRepository for InMemoryStore {
    async fn commit_checkout(
        &self,
        draft: &OrderDraft,
        deltas: &[InventoryDelta],
    ) -> Result<i64, RepositoryError> {
        let mut state = self.state.write().await;

        for delta in deltas {
            let Some(product) = state.products.get(&delta.product_id) else {
                return Err(RepositoryError::MissingProduct(delta.product_id));
            };
            if product.quantity < delta.quantity {
                return Err(RepositoryError::StockConflict(delta.product_id));
            }
        }
        for delta in deltas {
            if let Some(product) = state.products.get_mut(&delta.product_id) {
                product.quantity -= delta.quantity;
            }
        }

        let order_id = state.insert_order(&draft.order);
        for item in &draft.items {
            state.insert_item(&NewOrderItem {
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price.clone(),
            });
        }
        Ok(order_id)
    }
}

pub struct FixedAddress;

#[async_trait]
impl ShippingAddressProvider for FixedAddress {
    async fn address_for(&self, _user_id: &UserId) -> Result<String, RepositoryError> {
        Ok("some address".to_string())
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
