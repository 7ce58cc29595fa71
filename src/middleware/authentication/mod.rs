mod extractor;
mod getheader;
mod manager;
mod manager_middleware;
pub mod method;

pub use extractor::AuthUser;
pub use getheader::get_header;
pub use manager::*;
pub use manager_middleware::*;
pub use method::OAuthCache;
