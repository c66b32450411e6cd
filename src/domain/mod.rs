//! Domain records exchanged with the Freeshopps backend.

pub mod article;
pub mod dashboard;
pub mod faq;
pub mod product;
pub mod session;
pub mod types;
pub mod user;
