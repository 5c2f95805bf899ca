use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;
use std::rc::Rc;

/// Per-frame angular increments, shared by reference between a symbol's body
/// draw item and its outline draw item so one value object drives both.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub speed_x: f32,
    pub speed_y: f32,
}

/// A floating glyph: position, Euler rotation and bobbing base height.
/// Created once at load, mutated every frame by [`SceneState::advance`].
pub struct FloatingSymbol {
    pub glyph: &'static str,
    pub position: Vec3,
    pub base_y: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub motion: Rc<MotionParams>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0),
            self.position,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Body,
    Outline,
}

/// One renderable entity. Each symbol contributes two: the toon-shaded body
/// and its back-face outline copy, both holding the same [`MotionParams`].
pub struct DrawItem {
    pub symbol_index: usize,
    pub kind: DrawKind,
    pub motion: Rc<MotionParams>,
}

pub struct SceneState {
    symbols: Vec<FloatingSymbol>,
    draw_list: Vec<DrawItem>,
}

/// Pick `SYMBOL_COUNT` distinct glyphs from the alphabet, uniformly and
/// without replacement.
pub fn choose_symbols<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    SYMBOL_ALPHABET
        .choose_multiple(rng, SYMBOL_COUNT)
        .copied()
        .collect()
}

impl SceneState {
    /// A scene with no symbols; drawn when the typeface never arrived.
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
            draw_list: Vec::new(),
        }
    }

    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let glyphs = choose_symbols(rng);
        let symbols: Vec<FloatingSymbol> = glyphs
            .into_iter()
            .enumerate()
            .map(|(i, glyph)| {
                let slot = SYMBOL_SLOTS[i % SYMBOL_SLOTS.len()];
                let motion = Rc::new(MotionParams {
                    speed_x: SPIN_SPEED_X_MIN + rng.gen::<f32>() * SPIN_SPEED_X_SPAN,
                    speed_y: SPIN_SPEED_Y_MIN + rng.gen::<f32>() * SPIN_SPEED_Y_SPAN,
                });
                FloatingSymbol {
                    glyph,
                    position: Vec3::from(slot),
                    base_y: slot[1],
                    rotation_x: rng.gen::<f32>() * PI,
                    rotation_y: rng.gen::<f32>() * PI,
                    motion,
                }
            })
            .collect();
        let draw_list = symbols
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                [
                    DrawItem {
                        symbol_index: i,
                        kind: DrawKind::Body,
                        motion: s.motion.clone(),
                    },
                    DrawItem {
                        symbol_index: i,
                        kind: DrawKind::Outline,
                        motion: s.motion.clone(),
                    },
                ]
            })
            .collect();
        Self { symbols, draw_list }
    }

    pub fn symbols(&self) -> &[FloatingSymbol] {
        &self.symbols
    }

    pub fn draw_list(&self) -> &[DrawItem] {
        &self.draw_list
    }

    /// Advance every symbol by one frame: spin by the stored angular speeds
    /// and bob vertically as a sine of elapsed wall-clock seconds. Purely
    /// cosmetic, monotonic state advance.
    pub fn advance(&mut self, elapsed_sec: f32) {
        for s in &mut self.symbols {
            s.rotation_x += s.motion.speed_x * SPIN_RATE_SCALE;
            s.rotation_y += s.motion.speed_y * SPIN_RATE_SCALE;
            s.position.y =
                s.base_y + (elapsed_sec * s.motion.speed_y * BOB_RATE).sin() * BOB_AMPLITUDE;
        }
    }

    pub fn body_transform(&self, symbol_index: usize) -> Transform {
        let s = &self.symbols[symbol_index];
        Transform {
            position: s.position,
            rotation_x: s.rotation_x,
            rotation_y: s.rotation_y,
            scale: 1.0,
        }
    }

    /// Transform for a draw item. The outline is never mutated on its own:
    /// it is the body transform with uniform scale times `OUTLINE_SCALE`.
    pub fn item_transform(&self, item: &DrawItem) -> Transform {
        let mut t = self.body_transform(item.symbol_index);
        if item.kind == DrawKind::Outline {
            t.scale *= OUTLINE_SCALE;
        }
        t
    }
}
