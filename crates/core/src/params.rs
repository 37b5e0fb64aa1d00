use serde::Deserialize;

use crate::{Error, Result};

/// Per-tick tunables. Units are canvas pixels and ticks, not seconds.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Params {
    pub gravity: f32,
    // Negative: canvas y grows downward.
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub landing_slop: f32,

    pub player_w: f32,
    pub player_h: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    pub world_w: f32,
    pub world_h: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_velocity: -12.0,
            move_speed: 5.0,
            landing_slop: 1.0,

            player_w: 30.0,
            player_h: 50.0,
            spawn_x: 50.0,
            spawn_y: 400.0 - 50.0 - 50.0,

            world_w: 600.0,
            world_h: 400.0,
        }
    }
}

impl Params {
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("move_speed", self.move_speed),
            ("landing_slop", self.landing_slop),
            ("player_w", self.player_w),
            ("player_h", self.player_h),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("world_w", self.world_w),
            ("world_h", self.world_h),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        for (name, value) in [
            ("world_w", self.world_w),
            ("world_h", self.world_h),
            ("player_w", self.player_w),
            ("player_h", self.player_h),
        ] {
            if value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.player_w > self.world_w || self.player_h > self.world_h {
            return Err(invalid(format!(
                "player {}x{} does not fit a {}x{} world",
                self.player_w, self.player_h, self.world_w, self.world_h
            )));
        }

        if self.spawn_x < 0.0 || self.spawn_x + self.player_w > self.world_w {
            return Err(invalid(format!(
                "spawn_x {} puts the player outside [0, {}]",
                self.spawn_x, self.world_w
            )));
        }
        if self.spawn_y < 0.0 || self.spawn_y > self.world_h - self.player_h {
            return Err(invalid(format!(
                "spawn_y {} puts the player outside [0, {}]",
                self.spawn_y, self.world_h
            )));
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("landing_slop", self.landing_slop),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.jump_velocity >= 0.0 {
            return Err(invalid(format!(
                "jump_velocity must point upward (negative), got {}",
                self.jump_velocity
            )));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidParams(msg)
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::Error;

    #[test]
    fn defaults_are_valid() {
        let p = Params::default();
        p.validate().expect("default params must validate");
        assert_eq!(p.spawn_y, 300.0);
    }

    #[test]
    fn json_fills_missing_fields_from_defaults() {
        let p = Params::from_json(r#"{ "gravity": 0.5, "world_w": 800 }"#).unwrap();
        assert_eq!(p.gravity, 0.5);
        assert_eq!(p.world_w, 800.0);
        assert_eq!(p.move_speed, Params::default().move_speed);
    }

    #[test]
    fn downward_jump_is_rejected() {
        let err = Params::from_json(r#"{ "jump_velocity": 12 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(ref m) if m.contains("jump_velocity")));
    }

    #[test]
    fn oversized_player_is_rejected() {
        let p = Params {
            player_h: 500.0,
            ..Params::default()
        };
        assert!(matches!(p.validate(), Err(Error::InvalidParams(_))));
    }

    fn rejects_spawn(p: Params, field: &str) {
        match p.validate() {
            Err(Error::InvalidParams(msg)) => assert!(msg.contains(field), "{msg}"),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn spawn_below_the_world_is_rejected() {
        rejects_spawn(
            Params {
                spawn_y: 450.0,
                ..Params::default()
            },
            "spawn_y",
        );
        rejects_spawn(
            Params {
                spawn_y: 351.0,
                ..Params::default()
            },
            "spawn_y",
        );
    }

    #[test]
    fn spawn_above_the_world_is_rejected() {
        rejects_spawn(
            Params {
                spawn_y: -1.0,
                ..Params::default()
            },
            "spawn_y",
        );
    }

    #[test]
    fn spawn_left_of_the_world_is_rejected() {
        rejects_spawn(
            Params {
                spawn_x: -0.5,
                ..Params::default()
            },
            "spawn_x",
        );
    }

    #[test]
    fn spawn_past_the_right_edge_is_rejected() {
        rejects_spawn(
            Params {
                spawn_x: 571.0,
                ..Params::default()
            },
            "spawn_x",
        );
    }

    #[test]
    fn spawn_flush_with_world_corner_is_accepted() {
        let p = Params {
            spawn_x: 570.0,
            spawn_y: 350.0,
            ..Params::default()
        };
        p.validate().expect("spawn touching the bounds is inside the world");
    }

    #[test]
    fn out_of_world_spawn_json_is_rejected() {
        assert!(matches!(
            Params::from_json(r#"{ "spawn_y": 450 }"#),
            Err(Error::InvalidParams(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Params::from_json("{ gravity: }"), Err(Error::Parse(_))));
    }
}
