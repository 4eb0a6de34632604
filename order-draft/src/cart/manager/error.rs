use super::super::storage::StorageError;
use super::super::traits::CartError;
use shared::cart::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Meal unavailable: {0}")]
    MealUnavailable(String),

    #[error("No catalog configured")]
    CatalogUnavailable,

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl From<CartError> for ManagerError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidQuantity(msg) => ManagerError::InvalidQuantity(msg),
            CartError::InvalidPrice(msg) => ManagerError::InvalidPrice(msg),
            CartError::InvalidItem(msg) => ManagerError::InvalidItem(msg),
            CartError::MealNotFound(id) => ManagerError::MealNotFound(id),
            CartError::MealUnavailable(id) => ManagerError::MealUnavailable(id),
        }
    }
}

impl From<StorageError> for ManagerError {
    fn from(err: StorageError) -> Self {
        ManagerError::PersistenceUnavailable(err.to_string())
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let code = match &err {
            ManagerError::InvalidQuantity(_) => CommandErrorCode::InvalidQuantity,
            ManagerError::InvalidPrice(_) => CommandErrorCode::InvalidPrice,
            ManagerError::InvalidItem(_) => CommandErrorCode::InvalidItem,
            ManagerError::MealNotFound(_) => CommandErrorCode::MealNotFound,
            ManagerError::MealUnavailable(_) => CommandErrorCode::MealUnavailable,
            ManagerError::CatalogUnavailable => CommandErrorCode::InternalError,
            ManagerError::PersistenceUnavailable(_) => CommandErrorCode::PersistenceUnavailable,
        };
        CommandError::new(code, err.to_string())
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_maps_to_command_code() {
        let err: ManagerError =
            CartError::InvalidQuantity("quantity must be at least 1, got 0".into()).into();
        let cmd_err: CommandError = err.into();
        assert_eq!(cmd_err.code, CommandErrorCode::InvalidQuantity);
        assert!(cmd_err.message.contains("got 0"));
    }

    #[test]
    fn test_storage_error_is_persistence_unavailable() {
        let err: ManagerError = StorageError::Unavailable("disk gone".into()).into();
        assert!(matches!(err, ManagerError::PersistenceUnavailable(_)));
        let cmd_err: CommandError = err.into();
        assert_eq!(cmd_err.code, CommandErrorCode::PersistenceUnavailable);
    }
}
