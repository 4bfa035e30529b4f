/// Root endpoint
///
/// `GET /` answers with a plain-text welcome so a browser or curl against a
/// fresh deployment gets an immediate sign of life.

/// Welcome handler
pub async fn welcome() -> &'static str {
    "Welcome to the Task Management API"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_message() {
        assert_eq!(welcome().await, "Welcome to the Task Management API");
    }
}
