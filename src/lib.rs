//! The library code for the `blogview` blog front end. The architecture can
//! be generally broken down into two distinct steps:
//!
//! 1. Fetching the post collection from the deployed blog's API
//!    ([`crate::api`])
//! 2. Binding the fetched collection to view state for rendering
//!    ([`crate::controller`])
//!
//! The first step is the only one that touches the network: the blog
//! publishes its posts as a single JSON array at a fixed path, and the
//! client fetches it wholesale, with no pagination, authentication, or
//! caching. The second step owns the result as transient view state: each
//! activation starts from an empty collection, fetches once, and replaces
//! the state with whatever came back (or records the failure).
//!
//! The [`crate::nav`] module is an independent utility modeling the
//! navigation menu's show/hide marker class.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod api;
pub mod config;
pub mod controller;
pub mod nav;
pub mod post;
