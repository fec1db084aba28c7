// Shared fakes for the engine integration tests.
#![allow(dead_code)]

use fx_core::{FrameHost, Rgb, ShapeElement, Surface};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
    Resize(u32, u32),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize(width, height));
    }
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }
}

pub struct FakeShape {
    pub speed: Option<String>,
    pub base: Vec2,
    pub applied: Rc<Cell<Option<Vec2>>>,
}

impl FakeShape {
    pub fn new(speed: Option<&str>, base: Vec2) -> Self {
        Self {
            speed: speed.map(str::to_string),
            base,
            applied: Rc::new(Cell::new(None)),
        }
    }
}

impl ShapeElement for FakeShape {
    fn speed_attr(&self) -> Option<String> {
        self.speed.clone()
    }
    fn base_position(&self) -> Vec2 {
        self.base
    }
    fn apply_offset(&self, offset: Vec2) {
        self.applied.set(Some(offset));
    }
}

/// Frame host that records requests and cancellations.
#[derive(Clone, Default)]
pub struct CountingHost {
    pub log: Rc<RefCell<HostLog>>,
}

#[derive(Default, Debug)]
pub struct HostLog {
    pub next_id: u32,
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub fail: bool,
}

impl HostLog {
    /// Requests neither cancelled nor consumed by a fired frame.
    pub fn outstanding(&self, fired: &[u32]) -> usize {
        self.requested
            .iter()
            .filter(|&&id| !self.cancelled.contains(&id) && !fired.contains(&id))
            .count()
    }
}

impl FrameHost for CountingHost {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        let mut log = self.log.borrow_mut();
        if log.fail {
            return None;
        }
        log.next_id += 1;
        let id = log.next_id;
        log.requested.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
