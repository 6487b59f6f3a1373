pub mod address;
pub mod db;
pub mod checkout {
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
