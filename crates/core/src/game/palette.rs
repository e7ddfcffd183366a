//! GBC palettes: exactly 4 colours, tagged as background or sprite.

use crate::value::GBCColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Background,
    Sprite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub kind: PaletteKind,
    pub colors: Vec<GBCColor>,
}

impl Palette {
    pub const REQUIRED_LEN: usize = 4;
}
