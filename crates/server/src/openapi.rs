use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    /// `invalid id`, `duplicate id`, `invalid date`, `malformed request` or `internal error`
    pub error: String,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(example = "2023-01-01")]
    pub start_date: String,
    #[schema(example = "2023-01-05")]
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct OrderInputDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(example = "01/01/2023")]
    pub start_date: String,
    #[schema(example = "01/05/2023")]
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    /// Required key; `null` while no executor is assigned.
    pub executor_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct OfferDoc {
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::offers::list,
        crate::routes::offers::create,
        crate::routes::offers::get,
        crate::routes::offers::update,
        crate::routes::offers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserDoc,
            OrderDoc,
            OrderInputDoc,
            OfferDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "orders"),
        (name = "offers")
    )
)]
pub struct ApiDoc;
