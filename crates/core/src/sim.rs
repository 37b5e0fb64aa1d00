use crate::{default_platforms, step, Body, Events, InputState, Key, Params, Rect};

/// Owned simulation state. Key handlers only touch `input`; `tick` is the
/// sole writer of `body`.
#[derive(Clone, Debug)]
pub struct Sim {
    params: Params,
    platforms: Vec<Rect>,
    body: Body,
    input: InputState,
}

impl Sim {
    pub fn new(params: Params) -> Self {
        let platforms = default_platforms(&params);
        Self::with_platforms(params, platforms)
    }

    pub fn with_platforms(params: Params, platforms: Vec<Rect>) -> Self {
        Self {
            body: Body::spawn(&params),
            params,
            platforms,
            input: InputState::new(),
        }
    }

    pub fn tick(&mut self) -> Events {
        let frame = self.input.take_frame();
        step(&self.params, &self.platforms, &mut self.body, frame)
    }

    pub fn press(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.input.release(key);
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Sim;
    use crate::{Key, Params};

    fn settled() -> Sim {
        let mut sim = Sim::new(Params::default());
        for _ in 0..60 {
            sim.tick();
            if sim.body().on_ground {
                return sim;
            }
        }
        panic!("spawned body never reached the ground");
    }

    #[test]
    fn spawn_falls_onto_default_ground() {
        let sim = settled();
        assert_eq!(sim.body().y + sim.body().h, 360.0);
        assert_eq!(sim.body().x, 50.0);
    }

    #[test]
    fn double_press_between_ticks_jumps_once() {
        let mut sim = settled();
        let g = sim.params().gravity;
        let jump = sim.params().jump_velocity;

        sim.press(Key::Jump);
        sim.release(Key::Jump);
        sim.press(Key::Jump);
        assert!(sim.tick().jumped);
        assert_abs_diff_eq!(sim.body().vy, jump + g, epsilon = 1e-4);

        sim.release(Key::Jump);
        sim.press(Key::Jump);
        assert!(!sim.tick().jumped);
        assert_abs_diff_eq!(sim.body().vy, jump + 2.0 * g, epsilon = 1e-4);
    }

    #[test]
    fn tap_between_ticks_still_jumps() {
        let mut sim = settled();
        sim.press(Key::Jump);
        sim.release(Key::Jump);
        assert!(sim.tick().jumped);
    }

    #[test]
    fn released_direction_stops_next_tick() {
        let mut sim = settled();
        sim.press(Key::Right);
        sim.tick();
        assert_eq!(sim.body().vx, sim.params().move_speed);

        sim.release(Key::Right);
        sim.tick();
        assert_eq!(sim.body().vx, 0.0);
    }

    #[test]
    fn can_climb_onto_first_ledge() {
        let mut sim = settled();
        sim.body_mut().x = 120.0;
        sim.press(Key::Right);
        sim.press(Key::Jump);

        let mut on_ledge = false;
        for _ in 0..60 {
            sim.tick();
            if sim.body().on_ground && sim.body().y + sim.body().h == 280.0 {
                on_ledge = true;
                break;
            }
        }
        assert!(on_ledge, "never landed on the ledge at y=280");
    }
}
