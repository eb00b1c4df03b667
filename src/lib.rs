//! saas-calc - Multi-tenant pricing calculators
//!
//! Tenants publish layered, distance and mortgage calculators through public
//! links. Every computation is metered against the owning tenant's plan and
//! announced to the tenant's bot chat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
