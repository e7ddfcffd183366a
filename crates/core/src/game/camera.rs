//! Camera position and the entity it optionally follows.

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub x: i16,
    pub y: i16,
    pub follow: Option<String>,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: 0, y: 0, follow: None }
    }
}
