//! Standard constant values used across tests.

/// Email address for the default test account.
pub static TEST_EMAIL: &str = "test@example.com";

/// Plaintext password for the default test account.
///
/// Every user inserted by the fixtures stores a hash of this password, so
/// login tests can authenticate with it.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
