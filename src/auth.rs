/// Minimal admin authentication seam.
///
/// The controller only ever asks "does this input verify?", so the secret's
/// storage (config file, env var, secret manager, hashed credential) can be
/// swapped without touching it.
pub trait AdminAuth {
    fn verify(&self, input: &str) -> bool;
}

/// Single shared plaintext secret held in process memory. No user accounts,
/// no lockout, no throttling.
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AdminAuth for SharedSecret {
    fn verify(&self, input: &str) -> bool {
        !self.secret.is_empty() && self.secret == input
    }
}
