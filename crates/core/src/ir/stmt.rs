//! Side-effectful statement nodes.

use crate::ir::expr::{BinaryOp, Condition, Expression};
use crate::value::{U16, U8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraTransitionKind {
    FadeIn,
    FadeOut,
    Flash,
    WipeLeft,
    WipeRight,
    IrisIn,
    IrisOut,
}

impl CameraTransitionKind {
    /// Stable small integer used both as the enum discriminant in emitted C
    /// and as the "is a transition currently running" sentinel (0 = none).
    pub fn discriminant(self) -> u8 {
        match self {
            CameraTransitionKind::FadeIn => 1,
            CameraTransitionKind::FadeOut => 2,
            CameraTransitionKind::Flash => 3,
            CameraTransitionKind::WipeLeft => 4,
            CameraTransitionKind::WipeRight => 5,
            CameraTransitionKind::IrisIn => 6,
            CameraTransitionKind::IrisOut => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign {
        target: String,
        expr: Expression,
    },
    CompoundAssign {
        target: String,
        op: BinaryOp,
        expr: Expression,
    },
    If {
        cond: Condition,
        then: Vec<Statement>,
        otherwise: Option<Vec<Statement>>,
    },
    SceneChange(String),
    CallFunction {
        name: String,
        args: Vec<Expression>,
    },
    SpriteShow(String),
    SpriteHide(String),
    SpriteMove {
        sprite: String,
        x: Expression,
        y: Expression,
    },
    SpritePlay {
        sprite: String,
        animation: String,
    },
    PhysicsWorldUpdate,
    CollisionResponse {
        tag_a: String,
        tag_b: String,
    },
    StateStart {
        owner: String,
        state: String,
    },
    StateUpdate {
        owner: String,
    },
    Tween {
        target: String,
        from: Expression,
        to: Expression,
        duration: U16,
        easing: Easing,
    },
    DialogSay {
        dialog: String,
        text: String,
    },
    DialogChoice {
        dialog: String,
        options: Vec<String>,
    },
    DialogTick(String),
    SoundPlay {
        sound: String,
        priority: U8,
    },
    SoundStop(String),
    MusicPlay(String),
    MusicStop,
    MusicFadeOut(U16),
    TilemapShow(String),
    TilemapHide(String),
    CameraSnap {
        x: Expression,
        y: Expression,
    },
    CameraFollow(String),
    CameraShake {
        intensity: U8,
        duration: U16,
    },
    CameraTransition {
        kind: CameraTransitionKind,
        duration: U16,
        callback: Option<Vec<Statement>>,
    },
    InputBufferDecrement(String),
    InputBufferFill(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_compare_structurally() {
        let a = Statement::Assign { target: "hp".into(), expr: Expression::u8(3) };
        let b = Statement::Assign { target: "hp".into(), expr: Expression::u8(3) };
        assert_eq!(a, b);
    }

    #[test]
    fn camera_transition_discriminants_are_distinct_and_nonzero() {
        let kinds = [
            CameraTransitionKind::FadeIn,
            CameraTransitionKind::FadeOut,
            CameraTransitionKind::Flash,
            CameraTransitionKind::WipeLeft,
            CameraTransitionKind::WipeRight,
            CameraTransitionKind::IrisIn,
            CameraTransitionKind::IrisOut,
        ];
        let mut seen = std::collections::HashSet::new();
        for k in kinds {
            assert_ne!(k.discriminant(), 0);
            assert!(seen.insert(k.discriminant()));
        }
    }
}
