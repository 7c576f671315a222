//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use healthz_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC Error Codes
///
/// Malformed parameters use the JSON-RPC standard `-32602` (Invalid params).
pub mod code {
    pub use jsonrpsee::types::error::INVALID_PARAMS_CODE;

    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::Config(msg) | AppError::Internal(msg) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>)
        }
    }
}

/// Error for a request whose shape parsed but whose content is unusable
pub fn invalid_params(msg: impl Into<String>) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code::INVALID_PARAMS_CODE, msg.into(), None::<()>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthz_core::domain::TargetUrl;

    #[test]
    fn test_invalid_url_maps_to_validation_error() {
        let err = AppError::from(TargetUrl::parse("example.com").unwrap_err());
        let rpc = to_rpc_error(err);
        assert_eq!(rpc.code(), code::VALIDATION_ERROR);
        assert!(rpc.message().contains("absolute URL"));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let rpc = to_rpc_error(AppError::NotFound("Website x not found".to_string()));
        assert_eq!(rpc.code(), code::NOT_FOUND);
        assert_eq!(rpc.message(), "Website x not found");
    }

    #[test]
    fn test_internal_errors_map_to_internal() {
        assert_eq!(
            to_rpc_error(AppError::Internal("boom".to_string())).code(),
            code::INTERNAL_ERROR
        );
        assert_eq!(
            to_rpc_error(AppError::Config("bad".to_string())).code(),
            code::INTERNAL_ERROR
        );
    }
}
