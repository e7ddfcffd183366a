use crate::game::Entity;

/// `query_by_tag` is a deliberate linear scan, not an index — entity
/// counts in a GB-scale game are small enough that a tag index would be
/// pure overhead.
pub trait EntityService {
    fn register_entity(&mut self, entity: Entity);
    fn get_entities(&self) -> Vec<Entity>;
    fn query_by_tag(&self, tag: &str) -> Vec<Entity>;
}

#[derive(Debug, Default)]
pub struct DefaultEntityService {
    entities: Vec<Entity>,
}

impl EntityService for DefaultEntityService {
    fn register_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    fn get_entities(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    fn query_by_tag(&self, tag: &str) -> Vec<Entity> {
        self.entities.iter().filter(|e| e.tag.as_deref() == Some(tag)).cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct MockEntityService {
    entities: Vec<Entity>,
    pub registered_entities: Vec<String>,
}

impl MockEntityService {
    pub fn reset(&mut self) {
        self.entities.clear();
        self.registered_entities.clear();
    }
}

impl EntityService for MockEntityService {
    fn register_entity(&mut self, entity: Entity) {
        self.registered_entities.push(entity.name.clone());
        self.entities.push(entity);
    }

    fn get_entities(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    fn query_by_tag(&self, tag: &str) -> Vec<Entity> {
        self.entities.iter().filter(|e| e.tag.as_deref() == Some(tag)).cloned().collect()
    }
}
