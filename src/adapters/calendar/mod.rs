//! Calendar feed adapter: HTTP fetch plus interchange-format parsing.

pub mod feed;
pub mod parser;

pub use feed::HttpCalendarFeed;
pub use parser::parse_feed;
