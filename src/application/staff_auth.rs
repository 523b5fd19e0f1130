use crate::config::StaffCredentials;
use crate::domain::ports::CredentialVerifier;

/// Checks staff logins against the credentials from configuration. With no
/// credentials configured every attempt is refused.
pub struct ConfiguredStaffVerifier {
    credentials: Option<StaffCredentials>,
}

impl ConfiguredStaffVerifier {
    pub fn new(credentials: Option<StaffCredentials>) -> Self {
        Self { credentials }
    }
}

impl CredentialVerifier for ConfiguredStaffVerifier {
    fn verify(&self, login: &str, password: &str) -> bool {
        match &self.credentials {
            Some(c) => c.login == login && c.password == password,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> ConfiguredStaffVerifier {
        ConfiguredStaffVerifier::new(Some(StaffCredentials {
            login: "func".to_string(),
            password: "1234".to_string(),
        }))
    }

    #[test]
    fn accepts_configured_pair() {
        assert!(verifier().verify("func", "1234"));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!verifier().verify("func", "4321"));
    }

    #[test]
    fn unconfigured_rejects_everything() {
        assert!(!ConfiguredStaffVerifier::new(None).verify("", ""));
    }
}
