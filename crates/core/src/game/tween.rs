//! Tweens: scripted interpolation of a single numeric target over time.

use crate::ir::Easing;
use crate::value::U16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tween {
    pub name: String,
    pub target: String,
    pub from: i64,
    pub to: i64,
    pub duration: U16,
    pub easing: Easing,
}
