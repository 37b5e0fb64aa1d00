use log::info;

use crate::{render, Events, Key, Palette, Params, Result, Sim, Surface};

/// One mounted game: the simulation plus the host-side lifecycle around it.
///
/// Hosts drive it from their frame callback and store the handle of the
/// next requested frame with `set_pending`, so `unmount` can hand it back
/// for cancellation.
#[derive(Debug)]
pub struct Session {
    sim: Sim,
    palette: Palette,
    running: bool,
    pending: Option<i32>,
    fitted: bool,
    frames: u64,
}

impl Session {
    pub fn mount(params: Params, palette: Palette) -> Result<Self> {
        params.validate()?;
        info!(
            "mounting {}x{} platformer, spawn at ({}, {})",
            params.world_w, params.world_h, params.spawn_x, params.spawn_y
        );
        Ok(Self::from_sim(Sim::new(params), palette))
    }

    pub fn from_sim(sim: Sim, palette: Palette) -> Self {
        Self {
            sim,
            palette,
            running: true,
            pending: None,
            fitted: false,
            frames: 0,
        }
    }

    /// Services one frame callback. Nothing advances while unmounted or
    /// while the host has no surface to draw on. A surface that shows up
    /// after a frame without one is resized to the world first.
    pub fn frame(&mut self, surface: Option<&mut dyn Surface>) -> Option<Events> {
        self.pending = None;
        if !self.running {
            return None;
        }
        let Some(surface) = surface else {
            self.fitted = false;
            return None;
        };
        if !self.fitted {
            let p = self.sim.params();
            surface.resize(p.world_w, p.world_h);
            self.fitted = true;
        }

        let ev = self.sim.tick();
        render(
            Some(surface),
            self.sim.params(),
            &self.palette,
            self.sim.platforms(),
            self.sim.body(),
        );
        self.frames += 1;
        Some(ev)
    }

    pub fn set_pending(&mut self, handle: i32) {
        if self.running {
            self.pending = Some(handle);
        }
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// Stops the session. Returns the frame handle the host still has to
    /// cancel, if any.
    pub fn unmount(&mut self) -> Option<i32> {
        if self.running {
            info!("unmounting platformer after {} frames", self.frames);
        }
        self.running = false;
        self.sim.input_mut().clear();
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whether the key belongs to the game.
    pub fn key_down(&mut self, dom_key: &str) -> bool {
        match Key::from_dom_key(dom_key) {
            Some(key) if self.running => {
                self.sim.press(key);
                true
            }
            _ => false,
        }
    }

    pub fn key_up(&mut self, dom_key: &str) -> bool {
        match Key::from_dom_key(dom_key) {
            Some(key) if self.running => {
                self.sim.release(key);
                true
            }
            _ => false,
        }
    }

    pub fn sim(&self) -> &Sim {
        &self.sim
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
