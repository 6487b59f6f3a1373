mod common;

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use business::application::checkout::checkout::CheckoutUseCaseImpl;
use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::CartItem;
use business::domain::checkout::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::errors::RepositoryError;
use business::domain::order::model::{NewOrder, NewOrderItem};
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::UserId;

use common::{FixedAddress, InMemoryStore, SilentLogger};

fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn checkout_with(
    catalog: Arc<dyn ProductRepository>,
    store: &InMemoryStore,
) -> CheckoutUseCaseImpl {
    CheckoutUseCaseImpl {
        product_repository: catalog,
        checkout_repository: Arc::new(store.clone()),
        address_provider: Arc::new(FixedAddress),
        logger: Arc::new(SilentLogger),
    }
}

fn checkout(store: &InMemoryStore) -> CheckoutUseCaseImpl {
    checkout_with(Arc::new(store.clone()), store)
}

fn cart(user: i64, items: &[(i64, i32)]) -> CheckoutParams {
    CheckoutParams {
        user_id: UserId::new(user),
        items: items
            .iter()
            .map(|&(product_id, quantity)| CartItem::new(product_id, quantity))
            .collect(),
    }
}

#[tokio::test]
async fn should_create_order_and_decrement_stock() {
    let store = InMemoryStore::new();
    let id = store.seed("Keyboard", "10.00", 5).await;

    let receipt = checkout(&store).execute(cart(1, &[(id, 3)])).await.unwrap();

    assert_eq!(receipt.total_price, decimal("30.00"));
    assert_eq!(store.quantity_of(id).await, 2);

    let order = OrderRepository::get_by_id(&store, receipt.order_id)
        .await
        .unwrap();
    assert_eq!(order.user_id, UserId::new(1));
    assert_eq!(order.total, decimal("30.00"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.address, "some address");

    let items = store.get_items(receipt.order_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, id);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].price, decimal("10.00"));
}

#[tokio::test]
async fn should_leave_stock_untouched_when_quantity_exceeds_stock() {
    let store = InMemoryStore::new();
    let id = store.seed("Keyboard", "10.00", 5).await;

    let result = checkout(&store).execute(cart(1, &[(id, 6)])).await;

    assert!(matches!(result, Err(CheckoutError::InsufficientStock(_))));
    assert_eq!(store.quantity_of(id).await, 5);
    assert_eq!(store.order_count().await, 0);
}

#[tokio::test]
async fn should_write_nothing_when_any_line_is_invalid() {
    let store = InMemoryStore::new();
    let keyboard = store.seed("Keyboard", "10.00", 5).await;
    let mouse = store.seed("Mouse", "4.00", 1).await;

    let invalid_quantity = checkout(&store)
        .execute(cart(1, &[(keyboard, 1), (mouse, -1)]))
        .await;
    let missing_product = checkout(&store)
        .execute(cart(1, &[(keyboard, 1), (999, 1)]))
        .await;
    let one_line_short = checkout(&store)
        .execute(cart(1, &[(keyboard, 1), (mouse, 2)]))
        .await;

    assert!(matches!(
        invalid_quantity,
        Err(CheckoutError::InvalidQuantity(id)) if id == mouse
    ));
    assert!(matches!(
        missing_product,
        Err(CheckoutError::ProductUnavailable(999))
    ));
    assert!(matches!(
        one_line_short,
        Err(CheckoutError::InsufficientStock(name)) if name == "Mouse"
    ));
    assert_eq!(store.quantity_of(keyboard).await, 5);
    assert_eq!(store.quantity_of(mouse).await, 1);
    assert_eq!(store.order_count().await, 0);
}

#[tokio::test]
async fn should_reject_empty_cart() {
    let store = InMemoryStore::new();

    let result = checkout(&store).execute(cart(1, &[])).await;

    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
}

#[tokio::test]
async fn should_persist_one_item_per_line_for_multi_product_cart() {
    let store = InMemoryStore::new();
    let keyboard = store.seed("Keyboard", "10.00", 5).await;
    let mouse = store.seed("Mouse", "4.25", 3).await;

    let receipt = checkout(&store)
        .execute(cart(2, &[(keyboard, 2), (mouse, 3)]))
        .await
        .unwrap();

    assert_eq!(receipt.total_price, decimal("32.75"));
    assert_eq!(store.quantity_of(keyboard).await, 3);
    assert_eq!(store.quantity_of(mouse).await, 0);
    assert_eq!(store.get_items(receipt.order_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_not_be_idempotent_when_replayed() {
    let store = InMemoryStore::new();
    let id = store.seed("Keyboard", "10.00", 5).await;
    let use_case = checkout(&store);

    let first = use_case.execute(cart(1, &[(id, 2)])).await.unwrap();
    let second = use_case.execute(cart(1, &[(id, 2)])).await.unwrap();

    assert_ne!(first.order_id, second.order_id);
    assert_eq!(store.order_count().await, 2);
    assert_eq!(store.quantity_of(id).await, 1);
}

#[tokio::test]
async fn should_fail_replay_once_stock_runs_out() {
    let store = InMemoryStore::new();
    let id = store.seed("Keyboard", "10.00", 5).await;
    let use_case = checkout(&store);

    use_case.execute(cart(1, &[(id, 3)])).await.unwrap();
    let replay = use_case.execute(cart(1, &[(id, 3)])).await;

    assert!(matches!(replay, Err(CheckoutError::InsufficientStock(_))));
    assert_eq!(store.quantity_of(id).await, 2);
}

/// Catalog whose prices change right after they have been read, as if an
/// administrator edited the product while the checkout is running.
struct RepricingCatalog {
    store: InMemoryStore,
    new_price: BigDecimal,
}

#[async_trait]
impl ProductRepository for RepricingCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.store.get_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        ProductRepository::get_by_id(&self.store, id).await
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError> {
        let products = self.store.get_by_ids(ids).await?;
        for id in ids {
            self.store.set_price(*id, self.new_price.clone()).await;
        }
        Ok(products)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        self.store.create(product).await
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        self.store.update(product).await
    }
}

#[tokio::test]
async fn should_snapshot_unit_price_at_validation_time() {
    let store = InMemoryStore::new();
    let id = store.seed("Keyboard", "10.00", 5).await;
    let catalog = Arc::new(RepricingCatalog {
        store: store.clone(),
        new_price: decimal("99.99"),
    });

    let receipt = checkout_with(catalog, &store)
        .execute(cart(1, &[(id, 2)]))
        .await
        .unwrap();

    assert_eq!(receipt.total_price, decimal("20.00"));
    let items = store.get_items(receipt.order_id).await.unwrap();
    assert_eq!(items[0].price, decimal("10.00"));
    let current = ProductRepository::get_by_id(&store, id).await.unwrap();
    assert_eq!(current.price, decimal("99.99"));
}

#[tokio::test]
async fn should_link_standalone_ledger_writes_to_existing_order() {
    let store = InMemoryStore::new();

    let order_id = store
        .create_order(&NewOrder::pending(
            UserId::new(3),
            decimal("8.00"),
            "some address".to_string(),
        ))
        .await
        .unwrap();
    store
        .create_order_item(&NewOrderItem {
            order_id,
            product_id: 1,
            quantity: 2,
            price: decimal("4.00"),
        })
        .await
        .unwrap();
    let orphan = store
        .create_order_item(&NewOrderItem {
            order_id: order_id + 1,
            product_id: 1,
            quantity: 1,
            price: decimal("4.00"),
        })
        .await;

    assert_eq!(store.get_items(order_id).await.unwrap().len(), 1);
    assert!(matches!(orphan, Err(RepositoryError::NotFound)));
}

/// Catalog serving a snapshot taken earlier, so validation sees stock that
/// other checkouts have since consumed.
struct StaleCatalog {
    store: InMemoryStore,
    snapshot: Vec<Product>,
}

impl StaleCatalog {
    async fn capture(store: &InMemoryStore) -> Self {
        Self {
            store: store.clone(),
            snapshot: store.get_all().await.unwrap(),
        }
    }
}

#[async_trait]
impl ProductRepository for StaleCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.snapshot.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.snapshot
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .snapshot
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        self.store.create(product).await
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        self.store.update(product).await
    }
}

#[tokio::test]
async fn should_roll_back_whole_commit_when_stock_moved_after_validation() {
    let store = InMemoryStore::new();
    let first = store.seed("A", "3.00", 5).await;
    let second = store.seed("B", "7.00", 5).await;
    let catalog = Arc::new(StaleCatalog::capture(&store).await);
    store.set_quantity(second, 1).await;

    let result = checkout_with(catalog, &store)
        .execute(cart(1, &[(first, 2), (second, 3)]))
        .await;

    assert!(matches!(
        result,
        Err(CheckoutError::InsufficientStock(name)) if name == "B"
    ));
    assert_eq!(store.quantity_of(first).await, 5);
    assert_eq!(store.quantity_of(second).await, 1);
    assert_eq!(store.order_count().await, 0);
    assert_eq!(store.item_count().await, 0);
}

#[tokio::test]
async fn should_report_product_unavailable_when_removed_after_validation() {
    let store = InMemoryStore::new();
    let first = store.seed("A", "3.00", 5).await;
    let second = store.seed("B", "7.00", 5).await;
    let catalog = Arc::new(StaleCatalog::capture(&store).await);
    store.remove(second).await;

    let result = checkout_with(catalog, &store)
        .execute(cart(1, &[(first, 2), (second, 1)]))
        .await;

    assert!(matches!(
        result,
        Err(CheckoutError::ProductUnavailable(id)) if id == second
    ));
    assert_eq!(store.quantity_of(first).await, 5);
    assert_eq!(store.order_count().await, 0);
}
