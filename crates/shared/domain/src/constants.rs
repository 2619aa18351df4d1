//! Domain-level constants.
//!
//! Business rules and the user-facing messages returned in response envelopes.

// =============================================================================
// Business Rules
// =============================================================================

/// Age from which a user is considered of age
pub const ADULT_AGE: u32 = 18;

// =============================================================================
// User Messages
// =============================================================================

/// Lookup by id found no user
pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado";

/// User removed by the repository
pub const MSG_USER_DELETED: &str = "Usuário excluído com sucesso";

/// Repository refused to remove the user
pub const MSG_USER_DELETE_FAILED: &str = "Falha ao remover o usuário";

/// User stored by the repository
pub const MSG_USER_CREATED: &str = "Usuário criado com sucesso";

/// Repository refused to store the user
pub const MSG_USER_CREATE_FAILED: &str = "Falha ao criar o usuário";

/// Path id is not an integer
pub const MSG_INVALID_USER_ID: &str = "Identificador de usuário inválido";

/// Create payload is missing or malformed
pub const MSG_INVALID_USER_PAYLOAD: &str = "Dados do usuário inválidos";
