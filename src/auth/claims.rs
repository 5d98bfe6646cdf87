use serde::{Deserialize, Serialize};

/// JWT payload issued by the identity provider. The `sub` claim is the user
/// id; this service treats it as an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
    pub exp: usize,  // expires at (unix timestamp)
    pub iat: usize,  // issued at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}
