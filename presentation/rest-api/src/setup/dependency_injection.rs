use std::sync::Arc;

use auth::password_hasher::Argon2PasswordHasher;
use logger::TracingLogger;
use persistence::address::StaticAddressProvider;
use persistence::checkout::repository::CheckoutRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::checkout::checkout::CheckoutUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::login::LoginUserUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let user_logger = Arc::new(TracingLogger::new("users"));
        let product_logger = Arc::new(TracingLogger::new("products"));
        let checkout_logger = Arc::new(TracingLogger::new("checkout"));
        let order_logger = Arc::new(TracingLogger::new("orders"));

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let checkout_repository = Arc::new(CheckoutRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let address_provider = Arc::new(StaticAddressProvider::new(
            config.shipping_address.clone(),
        ));
        let password_hasher = Arc::new(Argon2PasswordHasher::new());

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            hasher: password_hasher.clone(),
            logger: user_logger.clone(),
        });
        let login_use_case = Arc::new(LoginUserUseCaseImpl {
            repository: user_repository,
            hasher: password_hasher,
            logger: user_logger,
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger,
        });

        // Checkout and order use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            product_repository,
            checkout_repository,
            address_provider,
            logger: checkout_logger,
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository,
            logger: order_logger,
        });

        Self {
            health_api: HealthApi,
            user_api: UserApi::new(register_use_case, login_use_case, config.jwt.clone()),
            product_api: ProductApi::new(
                create_product_use_case,
                get_all_products_use_case,
                get_product_by_id_use_case,
                update_product_use_case,
            ),
            cart_api: CartApi::new(checkout_use_case),
            order_api: OrderApi::new(get_order_by_id_use_case),
        }
    }
}
