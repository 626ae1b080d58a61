pub mod gate;
pub mod jwt;
pub mod password;
pub mod revocation;

pub use gate::{check_token, resolve_user, AuthError, AuthenticatedUser};
pub use jwt::{decode_access_token, mint_access_token, Claims};
pub use revocation::RevocationSet;
