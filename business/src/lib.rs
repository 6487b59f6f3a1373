pub mod application {
    pub mod checkout {
        pub mod checkout;
    }
    pub mod order {
        pub mod get_by_id;
    }
    pub mod product {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod user {
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod checkout;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
}
