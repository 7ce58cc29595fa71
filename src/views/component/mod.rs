mod detail;
mod listed;

pub use detail::Detail;
pub use listed::Listed;
