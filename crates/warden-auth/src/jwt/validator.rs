//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use warden_core::config::auth::AuthConfig;
use warden_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates session tokens.
///
/// Validation is pure computation: a signature check and a clock
/// comparison. It never blocks on I/O and needs no locking.
#[derive(Clone)]
pub struct TokenValidator {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::token_invalid(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::token_invalid(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    ///
    /// An expired-but-well-formed token is always reported as expired,
    /// never as invalid.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::token_invalid("Invalid token signature")
                    }
                    _ => AppError::token_invalid(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use warden_core::config::auth::AuthConfig;
    use warden_core::error::ErrorKind;
    use warden_entity::user::Role;

    use crate::jwt::claims::{Claims, TokenType};
    use crate::jwt::issuer::TokenIssuer;
    use crate::principal::Principal;

    use super::TokenValidator;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    fn principal() -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_issue_then_validate_round_trips_principal() {
        let config = config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);
        let principal = principal();

        let pair = issuer.issue_pair(&principal).unwrap();
        let claims = validator.decode_access(&pair.access).unwrap();

        assert_eq!(claims.principal(), principal);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let pair = issuer.issue_pair(&principal()).unwrap();
        let err = validator.decode_access(&pair.refresh).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);

        let err = validator.decode_refresh(&pair.access).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn test_expired_token_is_expired_not_invalid() {
        let config = config();
        let validator = TokenValidator::new(&config);
        let principal = principal();

        // Hand-sign a token whose expiry is an hour in the past, well
        // beyond the validator's clock-skew leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: principal.user_id,
            username: principal.username.clone(),
            role: principal.role,
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = validator.decode_access(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let config = config();
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let pair = issuer.issue_pair(&principal()).unwrap();
        let mut tampered = pair.access.clone();
        tampered.pop();
        tampered.push('x');

        let err = validator.decode_access(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn test_wrong_key_is_invalid() {
        let issuer = TokenIssuer::new(&config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let validator = TokenValidator::new(&other);

        let pair = issuer.issue_pair(&principal()).unwrap();
        let err = validator.decode_access(&pair.access).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let validator = TokenValidator::new(&config());
        let err = validator.decode_access("not.a.token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }
}
