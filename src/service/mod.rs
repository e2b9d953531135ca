//! CrudService: typed single-row CRUD using the safe SQL builder.

mod crud;
pub use crud::CrudService;
