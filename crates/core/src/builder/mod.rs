//! The shape a fluent author-facing DSL must produce.
//!
//! This crate does not implement that DSL — it owns [`GameBuilder`], the
//! terminal `.build()` step, and the scoped ambient slot ([`scope`]) a
//! higher-level surface can push a builder into while it is recording
//! author calls.

pub mod scope;

use indexmap::IndexMap;
use log::debug;

use crate::error::BuildError;
use crate::game::{
    Animation, Camera, Dialog, Entity, GBVar, Game, GameConfig, InputBuffer, Music, Palette,
    PhysicsWorld, Pool, Scene, SoundEffect, Sprite, StateMachine, TileMap, Tween,
};
use crate::ir::visit::walk_statement;
use crate::ir::{Expression, Literal, Statement};
use crate::value::U8;

/// Appends statements to one of a [`Scene`]'s three hooks.
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    fn new() -> Self {
        Self { scene: Scene::default() }
    }

    pub fn on_enter(&mut self, stmt: Statement) -> &mut Self {
        self.scene.on_enter.push(stmt);
        self
    }

    pub fn on_exit(&mut self, stmt: Statement) -> &mut Self {
        self.scene.on_exit.push(stmt);
        self
    }

    pub fn on_frame(&mut self, stmt: Statement) -> &mut Self {
        self.scene.on_frame.push(stmt);
        self
    }
}

#[derive(Default)]
pub struct GameBuilder {
    name: String,
    config: GameConfig,
    variables: Vec<GBVar>,
    sprites: Vec<Sprite>,
    pools: Vec<Pool>,
    scenes: IndexMap<String, Scene>,
    start_scene: Option<String>,
    entities: Vec<Entity>,
    state_machines: IndexMap<String, StateMachine>,
    tilemaps: IndexMap<String, TileMap>,
    palettes: Vec<Palette>,
    physics_world: Option<PhysicsWorld>,
    camera: Option<Camera>,
    dialogs: IndexMap<String, Dialog>,
    sound_effects: IndexMap<String, SoundEffect>,
    music: IndexMap<String, Music>,
    input_buffers: IndexMap<String, InputBuffer>,
    tweens: IndexMap<String, Tween>,
    animations: IndexMap<String, Animation>,
}

impl GameBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn gbc_support(mut self, enabled: bool) -> Self {
        self.config.gbc_support = enabled;
        self
    }

    pub fn variable(mut self, var: GBVar) -> Self {
        self.variables.push(var);
        self
    }

    pub fn sprite(mut self, sprite: Sprite) -> Self {
        self.sprites.push(sprite);
        self
    }

    pub fn pool(mut self, pool: Pool) -> Self {
        self.pools.push(pool);
        self
    }

    pub fn scene(mut self, name: impl Into<String>, build: impl FnOnce(&mut SceneBuilder)) -> Self {
        let mut builder = SceneBuilder::new();
        build(&mut builder);
        self.scenes.insert(name.into(), builder.scene);
        self
    }

    pub fn start_scene(mut self, name: impl Into<String>) -> Self {
        self.start_scene = Some(name.into());
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn state_machine(mut self, owner: impl Into<String>, machine: StateMachine) -> Self {
        self.state_machines.insert(owner.into(), machine);
        self
    }

    pub fn tilemap(mut self, name: impl Into<String>, tilemap: TileMap) -> Self {
        self.tilemaps.insert(name.into(), tilemap);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palettes.push(palette);
        self
    }

    pub fn physics_world(mut self, world: PhysicsWorld) -> Self {
        self.physics_world = Some(world);
        self
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn dialog(mut self, dialog: Dialog) -> Self {
        self.dialogs.insert(dialog.name.clone(), dialog);
        self
    }

    pub fn sound_effect(mut self, name: impl Into<String>, effect: SoundEffect) -> Self {
        self.sound_effects.insert(name.into(), effect);
        self
    }

    pub fn music(mut self, name: impl Into<String>, music: Music) -> Self {
        self.music.insert(name.into(), music);
        self
    }

    pub fn input_buffer(
        mut self,
        name: impl Into<String>,
        button: crate::game::Button,
        window: U8,
        custom_name: Option<String>,
    ) -> Self {
        let name = name.into();
        let id = self.input_buffers.len();
        self.input_buffers
            .insert(name.clone(), InputBuffer { name, button, window, id, custom_name });
        self
    }

    pub fn tween(mut self, name: impl Into<String>, tween: Tween) -> Self {
        self.tweens.insert(name.into(), tween);
        self
    }

    pub fn animation(mut self, name: impl Into<String>, animation: Animation) -> Self {
        self.animations.insert(name.into(), animation);
        self
    }

    /// Finalizes the game, running the DSL-time checks spec.md §7 raises
    /// immediately rather than deferring to the validator: literal array
    /// index bounds, input-buffer window range, and duplicate declaration
    /// names.
    pub fn build(self) -> Result<Game, BuildError> {
        check_duplicates("variable", self.variables.iter().map(|v| v.name.as_str()))?;
        check_duplicates("sprite", self.sprites.iter().map(|s| s.name.as_str()))?;
        check_duplicates("pool", self.pools.iter().map(|p| p.name.as_str()))?;
        check_duplicates("entity", self.entities.iter().map(|e| e.name.as_str()))?;
        check_duplicates("palette", self.palettes.iter().map(|p| p.name.as_str()))?;

        for buffer in self.input_buffers.values() {
            let window = buffer.window.to_int() as i64;
            if !(1..=255).contains(&window) {
                return Err(BuildError::InputBufferWindowOutOfRange { window });
            }
        }

        check_array_bounds(&self.variables, self.scenes.values())?;
        check_array_bounds(
            &self.variables,
            self.state_machines.values().flat_map(|sm| sm.states.iter()),
        )?;

        if !self.scenes.is_empty() && self.start_scene.is_none() {
            return Err(BuildError::MissingStartScene);
        }

        debug!(
            "built game {:?}: {} scenes, {} variables, {} entities",
            self.name,
            self.scenes.len(),
            self.variables.len(),
            self.entities.len()
        );

        Ok(Game {
            name: self.name,
            config: self.config,
            variables: self.variables,
            sprites: self.sprites,
            pools: self.pools,
            scenes: self.scenes,
            start_scene: self.start_scene,
            entities: self.entities,
            state_machines: self.state_machines,
            tilemaps: self.tilemaps,
            palettes: self.palettes,
            physics_world: self.physics_world,
            camera: self.camera,
            dialogs: self.dialogs,
            sound_effects: self.sound_effects,
            music: self.music,
            input_buffers: self.input_buffers,
            tweens: self.tweens,
            animations: self.animations,
        })
    }
}

fn check_duplicates<'a>(kind: &'static str, names: impl Iterator<Item = &'a str>) -> Result<(), BuildError> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(BuildError::DuplicateName { kind, name: name.to_string() });
        }
    }
    Ok(())
}

trait StatementSource {
    fn statements(&self) -> Vec<&Statement>;
    fn guards(&self) -> Vec<&Expression> {
        Vec::new()
    }
}

impl StatementSource for Scene {
    fn statements(&self) -> Vec<&Statement> {
        self.on_enter.iter().chain(&self.on_exit).chain(&self.on_frame).collect()
    }
}

impl StatementSource for crate::game::State {
    fn statements(&self) -> Vec<&Statement> {
        self.on_enter.iter().chain(&self.on_exit).chain(&self.on_tick).collect()
    }

    fn guards(&self) -> Vec<&Expression> {
        self.transitions.iter().map(|t| &t.guard.0).collect()
    }
}

fn check_array_bounds<'a, T: StatementSource + 'a>(
    variables: &[GBVar],
    sources: impl Iterator<Item = &'a T>,
) -> Result<(), BuildError> {
    for source in sources {
        for stmt in source.statements() {
            let mut error = None;
            walk_statement(stmt, &mut |s| {
                if error.is_some() {
                    return;
                }
                for expr in expressions_in_statement(s) {
                    if let Err(e) = check_expression_array_bounds(variables, expr) {
                        error = Some(e);
                    }
                }
            });
            if let Some(e) = error {
                return Err(e);
            }
        }
        for guard in source.guards() {
            check_expression_array_bounds(variables, guard)?;
        }
    }
    Ok(())
}

fn expressions_in_statement(stmt: &Statement) -> Vec<&Expression> {
    match stmt {
        Statement::Assign { expr, .. } | Statement::CompoundAssign { expr, .. } => vec![expr],
        Statement::If { cond, .. } => vec![&cond.0],
        Statement::CallFunction { args, .. } => args.iter().collect(),
        Statement::SpriteMove { x, y, .. } | Statement::CameraSnap { x, y } => vec![x, y],
        Statement::Tween { from, to, .. } => vec![from, to],
        _ => Vec::new(),
    }
}

/// Every `Index` node in `expr` whose array is declared and whose index is
/// itself a literal must fall inside that array's declared length.
fn check_expression_array_bounds(variables: &[GBVar], expr: &Expression) -> Result<(), BuildError> {
    let mut error = None;
    crate::ir::visit::walk_expression(expr, &mut |node| {
        if error.is_some() {
            return;
        }
        if let Expression::Index { array, index } = node {
            let Some(len) = variables.iter().find(|v| &v.name == array).and_then(|v| v.ty.array_len())
            else {
                return;
            };
            if let Some(value) = literal_int(index) {
                if value < 0 || value as usize >= len {
                    error = Some(BuildError::ArrayIndexOutOfBounds { index: value, len });
                }
            }
        }
    });
    match error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn literal_int(expr: &Expression) -> Option<i64> {
    match expr {
        Expression::Literal(Literal::U8(v)) => Some(v.to_int() as i64),
        Expression::Literal(Literal::U16(v)) => Some(v.to_int() as i64),
        Expression::Literal(Literal::I8(v)) => Some(v.to_int() as i64),
        Expression::Literal(Literal::I16(v)) => Some(v.to_int() as i64),
        _ => None,
    }
}
