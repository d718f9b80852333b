pub mod memory_tenant_repo;
pub mod postgres_tenant_repo;
pub mod sqlite_tenant_repo;
