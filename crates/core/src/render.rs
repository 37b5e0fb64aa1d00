use crate::{Body, Params, Rect};

pub const DEFAULT_BACKGROUND: &str = "hsl(224 71% 4%)";
pub const DEFAULT_PLAYER: &str = "hsl(233 64% 50%)";
pub const DEFAULT_PLATFORM: &str = "hsl(215 28% 17%)";

/// Fill colors, resolved once when the game mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub player: String,
    pub platform: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_owned(),
            player: DEFAULT_PLAYER.to_owned(),
            platform: DEFAULT_PLATFORM.to_owned(),
        }
    }
}

impl Palette {
    /// Builds a palette from theme variables holding bare HSL components
    /// (`"224 71% 4%"`). Missing or blank variables keep the default color.
    pub fn from_theme<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |var: &str, fallback: &str| -> String {
            match lookup(var) {
                Some(v) if !v.trim().is_empty() => format!("hsl({})", v.trim()),
                _ => fallback.to_owned(),
            }
        };

        Self {
            background: resolve("--background", DEFAULT_BACKGROUND),
            player: resolve("--primary", DEFAULT_PLAYER),
            platform: resolve("--secondary", DEFAULT_PLATFORM),
        }
    }
}

/// Something that can be painted with filled rectangles.
pub trait Surface {
    /// Sizes the backing store. Called before the first frame drawn on a
    /// newly found surface.
    fn resize(&mut self, _w: f32, _h: f32) {}
    fn clear(&mut self, w: f32, h: f32);
    fn fill_rect(&mut self, rect: &Rect, color: &str);
}

/// Draws one frame. Returns `false` without doing anything when there is no
/// surface to draw on.
pub fn render(
    surface: Option<&mut dyn Surface>,
    params: &Params,
    palette: &Palette,
    platforms: &[Rect],
    body: &Body,
) -> bool {
    let Some(surface) = surface else {
        return false;
    };

    surface.clear(params.world_w, params.world_h);
    surface.fill_rect(
        &Rect::new(0.0, 0.0, params.world_w, params.world_h),
        &palette.background,
    );
    for p in platforms {
        surface.fill_rect(p, &palette.platform);
    }
    surface.fill_rect(&body.rect(), &palette.player);
    true
}
