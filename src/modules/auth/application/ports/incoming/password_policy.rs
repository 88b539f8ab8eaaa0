pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PasswordPolicyError {
    TooShort,
    TooLong,
}
