use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{default_platforms, step, Body, InputState, Params, Rect, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Start {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
}

/// A recorded input sequence: one `Buttons` bit pattern per frame.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Replay {
    #[serde(default)]
    pub params: Params,
    /// Defaults to the stock level when absent.
    #[serde(default)]
    pub platforms: Option<Vec<Rect>>,
    #[serde(default)]
    pub start: Option<Start>,
    pub inputs: Vec<u8>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceRow {
    pub frame: usize,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub jumped: bool,
    pub landed: bool,
    pub blocked: bool,
    pub respawned: bool,
}

impl TraceRow {
    pub const CSV_HEADER: &'static str = "frame,x,y,vx,vy,on_ground,jumped,landed,blocked,respawned";

    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.frame,
            self.x,
            self.y,
            self.vx,
            self.vy,
            self.on_ground as u8,
            self.jumped as u8,
            self.landed as u8,
            self.blocked as u8,
            self.respawned as u8,
        )
    }
}

impl Replay {
    pub fn from_json(json: &str) -> Result<Self> {
        let replay: Replay = serde_json::from_str(json)?;
        replay.params.validate()?;
        Ok(replay)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn run(&self) -> Vec<TraceRow> {
        let params = &self.params;
        let world = match &self.platforms {
            Some(p) => p.clone(),
            None => default_platforms(params),
        };

        let mut body = Body::spawn(params);
        if let Some(s) = self.start {
            body.x = s.x;
            body.y = s.y;
            body.vx = s.vx;
            body.vy = s.vy;
        }

        let mut input = InputState::new();
        let mut rows = Vec::with_capacity(self.inputs.len());
        for (frame, bits) in self.inputs.iter().enumerate() {
            input.apply_bits(*bits);
            let ev = step(params, &world, &mut body, input.take_frame());
            rows.push(TraceRow {
                frame,
                x: body.x,
                y: body.y,
                vx: body.vx,
                vy: body.vy,
                on_ground: body.on_ground,
                jumped: ev.jumped,
                landed: ev.landed,
                blocked: ev.blocked,
                respawned: ev.respawned,
            });
        }
        rows
    }
}
