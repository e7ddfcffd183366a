//! Sprite-frame animations: an ordered list of frame indices played back at
//! a fixed rate, looping or one-shot.

use crate::ir::Statement;
use crate::value::U8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Loop,
    Once,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub name: String,
    pub owner: String,
    pub frames: Vec<U8>,
    pub fps: u8,
    pub mode: AnimationMode,
    pub on_complete: Option<Vec<Statement>>,
}
