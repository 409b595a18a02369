pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod reconcile;
pub mod routes;
pub mod state;


pub use api::{
    authz::{require_admin, require_owner_or_admin},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::Identity,
    orders::{
        confirm_payment_request::ConfirmPaymentRequest,
        create_order_request::CreateOrderRequest,
        order_dto::OrderDto,
        order_list_response::OrderListResponse,
        order_response::OrderResponse,
        orders::{
            cancel_order, confirm_payment, get_order, list_orders, my_orders, place_order,
            ship_order,
        },
    },
    payments::{
        create_intent_request::CreateIntentRequest, intent_response::IntentResponse,
        payments::create_intent,
    },
    reviews::{
        create_review_request::CreateReviewRequest,
        review_dto::ReviewDto,
        review_list_response::ReviewListResponse,
        review_response::ReviewResponse,
        reviews::{create_review, list_reviews},
    },
    tools::{
        create_tool_request::CreateToolRequest,
        tool_dto::ToolDto,
        tool_list_response::ToolListResponse,
        tool_response::ToolResponse,
        tools::{create_tool, delete_tool, get_tool, list_tools},
    },
    update_response::UpdateResponse,
    users::{
        admin_status_response::AdminStatusResponse,
        sign_in_request::SignInRequest,
        sign_in_response::SignInResponse,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{admin_status, get_profile, list_users, make_admin, sign_in, update_profile},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
