/// Entity CRUD interface
pub mod entity;

pub use entity::EntityService;
