//! Helios News
//!
//! Headless Rust client for the Spaceflight News API: typed network
//! outcomes with retry, the SNAPI REST client, and article browsing state.

pub use articles;
pub use net_client;
pub use snapi_client;
