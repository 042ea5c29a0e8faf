//! Redis error mapping to CacheError.

use redis::{ErrorKind, RedisError};

use sessionstore_core::cache::CacheError;

/// Maps Redis errors to CacheError.
///
/// Refused, dropped and timed-out connections as well as rejected
/// credentials count as connection failures; everything else is a failed
/// operation.
pub fn map_redis_error(err: RedisError) -> CacheError {
    let unreachable =
        err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped();

    if unreachable || err.kind() == ErrorKind::AuthenticationFailed {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_connection_is_connection_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let mapped = map_redis_error(RedisError::from(io));
        assert!(matches!(mapped, CacheError::ConnectionFailed(_)));
    }

    #[test]
    fn test_bad_credentials_are_connection_failure() {
        let err = RedisError::from((ErrorKind::AuthenticationFailed, "invalid password"));
        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_type_errors_are_operation_failures() {
        let err = RedisError::from((ErrorKind::TypeError, "unexpected reply"));
        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }
}
