use std::time::Duration;

const SUBMISSION_DELAY: Duration = Duration::from_secs(2);

/// Stand-in for a real authentication backend: requests take a fixed amount
/// of time and always succeed. The error plumbing is kept so callers handle
/// both outcomes through the same path.
#[derive(Debug, Clone)]
pub struct AuthClient {
    delay: Duration,
}

#[derive(Debug, Clone)]
pub struct AuthError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.error)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

impl AuthClient {
    pub fn new() -> Self {
        AuthClient {
            delay: SUBMISSION_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        AuthClient { delay }
    }

    pub async fn sign_in(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        tracing::debug!("Signing in {}", email);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    pub async fn register(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        tracing::debug!("Registering {}", email);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_stub_succeeds() {
        let client = AuthClient::with_delay(Duration::from_millis(1));
        assert!(client.sign_in("a@b.com", "abcdef").await.is_ok());
    }

    #[tokio::test]
    async fn register_stub_succeeds() {
        let client = AuthClient::with_delay(Duration::from_millis(1));
        assert!(client.register("a@b.com", "abcdef").await.is_ok());
    }
}
