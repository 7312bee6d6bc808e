//! Drawing surfaces.
//!
//! The renderer only ever talks to a [`Surface`]: a canvas-like path builder
//! with a pen (`move_to` / `line_to`) and a stack of 2D affine transforms
//! (`save` / `restore` / `translate` / `rotate`).
//!
//! [`PathRecorder`] is the in-crate implementation. It applies the current
//! transform and records the resulting device-space commands, which callers
//! can then hand to a rasterizer or serialize.

use std::ops::{Deref, DerefMut};

use lyon_geom::{Angle, Transform, point, vector};
use serde::Serialize;

use crate::geometry::Point;

/// A canvas-style path sink.
///
/// `translate` and `rotate` follow canvas semantics: they apply to incoming
/// coordinates *before* the transform already in effect.
pub trait Surface {
    /// Lift the pen and reposition it.
    fn move_to(&mut self, x: f64, y: f64);
    /// Draw a straight segment from the pen to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the most recently saved transform. No-op on an empty stack.
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate by `angle` radians.
    fn rotate(&mut self, angle: f64);
}

/// Scoped transform state: `save` on creation, `restore` on drop.
///
/// ## Rust Lesson #14: RAII
///
/// `Drop` runs on every exit path (early return, `?`, panic unwinding), so
/// whatever the holder pushes onto the transform stack is always popped.
pub struct SavedState<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
}

/// Save the surface's transform for the lifetime of the returned guard.
pub fn save_scope<S: Surface + ?Sized>(surface: &mut S) -> SavedState<'_, S> {
    surface.save();
    SavedState { surface }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// One device-space path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

/// A [`Surface`] that records transformed path commands.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
    transform: Transform<f64>,
    stack: Vec<Transform<f64>>,
}

impl Default for PathRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform: Transform::identity(),
            stack: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Depth of the saved-transform stack.
    pub fn saved_depth(&self) -> usize {
        self.stack.len()
    }

    /// Render the recorded commands as SVG path data (`M x y L x y ...`).
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            data.push_str(&match command {
                PathCommand::MoveTo(p) => format!("M{:.2} {:.2}", p.x, p.y),
                PathCommand::LineTo(p) => format!("L{:.2} {:.2}", p.x, p.y),
            });
        }
        data
    }

    fn map(&self, x: f64, y: f64) -> Point {
        let p = self.transform.transform_point(point(x, y));
        Point::new(p.x, p.y)
    }
}

impl Surface for PathRecorder {
    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.commands.push(PathCommand::LineTo(p));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.pre_translate(vector(dx, dy));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform.pre_rotate(Angle::radians(angle));
    }
}
