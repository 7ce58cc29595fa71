mod f_anonym;
mod f_oauth;

pub use f_anonym::anonym;
pub use f_oauth::{fetch_user, try_oauth, OAuthCache};
