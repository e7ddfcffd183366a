//! The `Game` aggregate: everything a compilation unit knows about, plus
//! the name-indexed lookups the validator, interpreter and code generator
//! all need.

use indexmap::IndexMap;

use super::animation::Animation;
use super::camera::Camera;
use super::dialog::Dialog;
use super::entity::Entity;
use super::input_buffer::InputBuffer;
use super::palette::Palette;
use super::physics::PhysicsWorld;
use super::scene::Scene;
use super::sound::{Music, SoundEffect};
use super::sprite::{Pool, Sprite};
use super::state_machine::StateMachine;
use super::tilemap::TileMap;
use super::tween::Tween;
use super::variable::GBVar;

/// The one author-tunable build flag: whether to target GBC-only hardware
/// features (double-speed mode, the full 15-bit palette range) or stay
/// DMG-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub gbc_support: bool,
}

/// Total OAM demand across named sprites and sprite pools, as counted by
/// [`Game::all_oam_consumers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OamUsage<'a> {
    pub sprites: Vec<&'a Sprite>,
    pub pools: Vec<&'a Pool>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Game {
    pub name: String,
    pub config: GameConfig,
    pub variables: Vec<GBVar>,
    pub sprites: Vec<Sprite>,
    pub pools: Vec<Pool>,
    pub scenes: IndexMap<String, Scene>,
    pub start_scene: Option<String>,
    pub entities: Vec<Entity>,
    pub state_machines: IndexMap<String, StateMachine>,
    pub tilemaps: IndexMap<String, TileMap>,
    pub palettes: Vec<Palette>,
    pub physics_world: Option<PhysicsWorld>,
    pub camera: Option<Camera>,
    pub dialogs: IndexMap<String, Dialog>,
    pub sound_effects: IndexMap<String, SoundEffect>,
    pub music: IndexMap<String, Music>,
    pub input_buffers: IndexMap<String, InputBuffer>,
    pub tweens: IndexMap<String, Tween>,
    pub animations: IndexMap<String, Animation>,
}

impl Game {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn lookup_scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn lookup_variable(&self, name: &str) -> Option<&GBVar> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn lookup_sprite(&self, name: &str) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn lookup_tilemap(&self, name: &str) -> Option<&TileMap> {
        self.tilemaps.get(name)
    }

    pub fn lookup_dialog(&self, name: &str) -> Option<&Dialog> {
        self.dialogs.get(name)
    }

    pub fn lookup_sound_effect(&self, name: &str) -> Option<&SoundEffect> {
        self.sound_effects.get(name)
    }

    pub fn lookup_music(&self, name: &str) -> Option<&Music> {
        self.music.get(name)
    }

    pub fn lookup_input_buffer(&self, name: &str) -> Option<&InputBuffer> {
        self.input_buffers.get(name)
    }

    /// Every OAM-consuming declaration and the total slot count they
    /// request, used by the `OAM_LIMIT` validation check (spec.md §4.5: 40
    /// hardware slots total).
    pub fn all_oam_consumers(&self) -> OamUsage<'_> {
        let sprites: Vec<&Sprite> = self.sprites.iter().collect();
        let pools: Vec<&Pool> = self.pools.iter().collect();
        let total = sprites.len() as u32 + pools.iter().map(|p| p.count).sum::<u32>();
        OamUsage { sprites, pools, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sprite::Sprite;

    #[test]
    fn oam_usage_counts_sprites_and_pool_slots() {
        let mut game = Game::new("demo");
        game.sprites.push(Sprite {
            name: "player".into(),
            asset: "player.png".into(),
            width: 16,
            height: 16,
            oam_slot: 0,
        });
        game.pools.push(Pool {
            name: "bullets".into(),
            asset: "bullet.png".into(),
            width: 8,
            height: 8,
            count: 8,
        });

        let usage = game.all_oam_consumers();
        assert_eq!(usage.sprites.len(), 1);
        assert_eq!(usage.pools.len(), 1);
        assert_eq!(usage.total, 9);
    }

    #[test]
    fn lookup_scene_finds_inserted_entry() {
        let mut game = Game::new("demo");
        game.scenes.insert("title".into(), Scene::default());
        assert!(game.lookup_scene("title").is_some());
        assert!(game.lookup_scene("missing").is_none());
    }
}
