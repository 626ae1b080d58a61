pub mod current_user;
pub mod form_or_json;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use form_or_json::FormOrJson;
pub use validated_json::ValidatedJson;
