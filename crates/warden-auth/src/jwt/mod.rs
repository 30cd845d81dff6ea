//! Session token encoding, decoding, and claims management.

pub mod claims;
pub mod issuer;
pub mod validator;

pub use claims::{Claims, TokenType};
pub use issuer::{TokenIssuer, TokenPair};
pub use validator::TokenValidator;
