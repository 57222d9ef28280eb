//! Route handlers for the storefront admin API.

pub mod admin;
pub mod health;
pub mod root;
