use crate::core::library::LibraryResult;

pub trait Repository<Entity>: Sync + Send {
    // create an entity at the end of the collection
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity, returns number of removed entities
    fn delete(&self, id: &str) -> LibraryResult<usize>;
}
