use anyhow::Result;

/// bcrypt 哈希；测试里用低 cost 加速
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// 哈希格式非法时视为不匹配
pub fn verify_password(password: &str, hashed: &str) -> bool {
    match bcrypt::verify(password, hashed) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("Stored password hash is not valid bcrypt: {}", e);
            false
        }
    }
}
