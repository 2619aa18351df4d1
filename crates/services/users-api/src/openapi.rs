//! OpenAPI documentation.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use domain::{CreateUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::create_user,
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
            UserEnvelope,
            UserListEnvelope,
            MessageEnvelope,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

// Concrete shapes of `ApiResponse<T>` for the generated document.

/// Envelope carrying one user.
#[derive(Serialize, ToSchema)]
pub struct UserEnvelope {
    #[schema(example = true)]
    pub success: bool,
    pub data: UserResponse,
}

/// Envelope carrying every user.
#[derive(Serialize, ToSchema)]
pub struct UserListEnvelope {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<UserResponse>,
}

/// Envelope carrying a user-facing message.
#[derive(Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub success: bool,
    #[schema(example = "Usuário criado com sucesso")]
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));

        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("UserResponse"));
        assert!(components.schemas.contains_key("MessageEnvelope"));
    }
}
