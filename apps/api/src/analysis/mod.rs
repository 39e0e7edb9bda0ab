//! Analysis Stage — scores résumé text against a job description via the
//! remote model and normalizes the free-text reply into a JSON response.

pub mod handlers;
pub mod prompts;
pub mod scrape;

pub use scrape::scrape_analysis;
