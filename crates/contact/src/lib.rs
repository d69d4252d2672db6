//! Contact domain module: customer inquiries submitted from the site.

pub mod message;

pub use message::{ContactMessage, NewContactMessage};
