mod client;
mod throttle;

pub use client::RateLimitedClient;
