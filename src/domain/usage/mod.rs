//! Usage accounting against plan quotas.

mod quota;

pub use quota::{QuotaExceeded, QuotaGuard, TenantUsage};
