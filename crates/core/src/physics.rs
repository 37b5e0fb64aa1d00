use crate::{rects_intersect, FrameInput, Params, Rect};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,

    pub on_ground: bool,
    pub is_jumping: bool,
}

impl Body {
    pub fn spawn(params: &Params) -> Self {
        Self {
            x: params.spawn_x,
            y: params.spawn_y,
            w: params.player_w,
            h: params.player_h,
            ..Self::default()
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn respawn(&mut self, params: &Params) {
        self.x = params.spawn_x;
        self.y = params.spawn_y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.is_jumping = false;
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    pub jumped: bool,
    pub landed: bool,
    pub blocked: bool,
    pub respawned: bool,
}

/// Applies a jump impulse if the body is standing and not already mid-jump.
pub fn try_jump(params: &Params, body: &mut Body) -> bool {
    if !body.on_ground || body.is_jumping {
        return false;
    }
    body.vy = params.jump_velocity;
    body.is_jumping = true;
    body.on_ground = false;
    log::trace!("jump at ({}, {})", body.x, body.y);
    true
}

/// Fixed step: one call advances exactly one tick regardless of wall time.
#[inline]
pub fn integrate(params: &Params, body: &mut Body) {
    body.vy += params.gravity;
    body.y += body.vy;
    body.x += body.vx;
}

/// Resolves overlaps against every platform in list order. Landing is
/// checked before side contact; bodies rising into a ledge pass through.
pub fn resolve_platforms(params: &Params, world: &[Rect], body: &mut Body, ev: &mut Events) {
    body.on_ground = false;

    for p in world {
        if !rects_intersect(&body.rect(), p) {
            continue;
        }

        let prev_bottom = body.y + body.h - body.vy;
        if body.vy >= 0.0 && prev_bottom <= p.y + params.landing_slop {
            body.y = p.y - body.h;
            body.vy = 0.0;
            body.is_jumping = false;
            body.on_ground = true;
        } else if body.vx > 0.0 && body.x + body.w - body.vx <= p.x {
            body.x = p.x - body.w;
            body.vx = 0.0;
            ev.blocked = true;
        } else if body.vx < 0.0 && body.x - body.vx >= p.right() {
            body.x = p.right();
            body.vx = 0.0;
            ev.blocked = true;
        }
    }
}

/// Keeps the body inside the world horizontally and respawns it once its
/// top edge has dropped below the bottom of the world.
pub fn clamp_to_world(params: &Params, body: &mut Body, ev: &mut Events) {
    if body.x < 0.0 {
        body.x = 0.0;
        body.vx = 0.0;
        ev.blocked = true;
    }
    if body.x + body.w > params.world_w {
        body.x = params.world_w - body.w;
        body.vx = 0.0;
        ev.blocked = true;
    }
    if body.y > params.world_h {
        log::debug!("fell through at x={}, respawning", body.x);
        body.respawn(params);
        ev.respawned = true;
    }
}

/// One simulation tick. Host calls this exactly once per frame.
pub fn step(params: &Params, world: &[Rect], body: &mut Body, input: FrameInput) -> Events {
    let mut ev = Events::default();
    let was_grounded = body.on_ground;

    if input.jump_pressed {
        ev.jumped = try_jump(params, body);
    }

    body.vx = input.move_dir() as f32 * params.move_speed;

    integrate(params, body);
    resolve_platforms(params, world, body, &mut ev);
    clamp_to_world(params, body, &mut ev);

    if body.on_ground && !was_grounded {
        ev.landed = true;
        log::trace!("landed at ({}, {})", body.x, body.y);
    }

    ev
}
