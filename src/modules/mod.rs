pub mod books;

use std::sync::Arc;

use bookshelf_db::DbPool;
use bookshelf_kernel::ModuleRegistry;

/// Register every application module, wiring each to its storage
pub fn register_all(registry: &mut ModuleRegistry, pool: &DbPool) {
    let store = Arc::new(books::store::SqlBookStore::new(pool.clone()));
    registry.register(books::create_module(store));
}
