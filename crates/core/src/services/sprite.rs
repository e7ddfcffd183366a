use crate::game::Sprite;

/// Registers sprites and hands out monotonically increasing OAM slot
/// indices starting at 0. Slot allocation here is provisional — the
/// validator (not this registry) is the authority on whether the total
/// fits the hardware's 40-slot budget.
pub trait SpriteService {
    fn allocate_slot(&mut self) -> u32;
    fn register_sprite(&mut self, sprite: Sprite);
    fn get_sprites(&self) -> Vec<Sprite>;
}

#[derive(Debug, Default)]
pub struct DefaultSpriteService {
    next_slot: u32,
    sprites: Vec<Sprite>,
}

impl SpriteService for DefaultSpriteService {
    fn allocate_slot(&mut self) -> u32 {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    fn register_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    fn get_sprites(&self) -> Vec<Sprite> {
        self.sprites.clone()
    }
}

#[derive(Debug, Default)]
pub struct MockSpriteService {
    next_slot: u32,
    sprites: Vec<Sprite>,
    pub registered_sprites: Vec<String>,
}

impl MockSpriteService {
    pub fn reset(&mut self) {
        self.next_slot = 0;
        self.sprites.clear();
        self.registered_sprites.clear();
    }

    pub fn allocated_slots(&self) -> u32 {
        self.next_slot
    }
}

impl SpriteService for MockSpriteService {
    fn allocate_slot(&mut self) -> u32 {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    fn register_sprite(&mut self, sprite: Sprite) {
        self.registered_sprites.push(sprite.name.clone());
        self.sprites.push(sprite);
    }

    fn get_sprites(&self) -> Vec<Sprite> {
        self.sprites.clone()
    }
}
