use crate::{Params, Rect};

/// Full-width ground strip plus three floating ledges, laid out relative to
/// the bottom of the world.
pub fn default_platforms(params: &Params) -> Vec<Rect> {
    let w = params.world_w;
    let h = params.world_h;
    vec![
        Rect::new(0.0, h - 40.0, w, 40.0),
        Rect::new(150.0, h - 120.0, 150.0, 20.0),
        Rect::new(350.0, h - 200.0, 100.0, 20.0),
        Rect::new(50.0, h - 280.0, 80.0, 20.0),
    ]
}
