use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Users,
    Products,
    Cart,
    Orders,
}
