//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `plan` - Subscription plans and the default catalog
//! - `tenant` - Tenant account view
//! - `calculator` - Calculator entity, types and management errors
//! - `pricing` - Layered, distance and mortgage pricing
//! - `usage` - Quota policy and usage figures

pub mod calculator;
pub mod foundation;
pub mod plan;
pub mod pricing;
pub mod tenant;
pub mod usage;
