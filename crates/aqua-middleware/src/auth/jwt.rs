use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// bearer token 的签发与校验，HS256 共享密钥
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

/// Token 载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 登录用户名
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl JwtAuth {
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 过期时间精确到秒，不留宽限
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: Duration::minutes(expiration_minutes),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        let issued_at = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (issued_at + self.lifetime).timestamp(),
            iat: issued_at.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// 校验签名与 exp，过期即失败
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }

    /// 返回给客户端的 `expires_in`
    pub fn expires_in_secs(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_carries_username_and_lifetime() {
        let auth = JwtAuth::new("test-secret".to_string(), 5);

        let token = auth.generate_token("operator").unwrap();
        let claims = auth.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "operator");
        assert_eq!(claims.exp - claims.iat, 300);
        assert_eq!(auth.expires_in_secs(), 300);
    }

    #[test]
    fn test_tokens_are_unique() {
        let auth = JwtAuth::new("test-secret".to_string(), 5);
        let a = auth.verify_token(&auth.generate_token("operator").unwrap()).unwrap();
        let b = auth.verify_token(&auth.generate_token("operator").unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let auth = JwtAuth::new("test-secret".to_string(), 5);
        assert!(auth.verify_token("invalid-token").is_err());
        assert!(auth.verify_token("").is_err());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = JwtAuth::new("secret-a".to_string(), 5);
        let verifier = JwtAuth::new("secret-b".to_string(), 5);

        let token = issuer.generate_token("operator").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = JwtAuth::new("test-secret".to_string(), -1);
        let token = auth.generate_token("operator").unwrap();
        assert!(auth.verify_token(&token).is_err());
    }
}
