use pixplat_core::{Body, Buttons, Events, FrameInput, Params, Rect};

/// # Safety
/// `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn pp_default_params(out: *mut Params) {
    unsafe { *out = Params::default(); }
}

/// # Safety
/// `params` must point to a valid `Params`; `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn pp_spawn_body(params: *const Params, out: *mut Body) {
    let p = unsafe { &*params };
    unsafe { *out = Body::spawn(p); }
}

/// Writes up to `cap` rects of the stock level and returns how many exist.
///
/// # Safety
/// `params` must point to a valid `Params`; `out` must be valid for `cap`
/// writes (may be null when `cap` is 0).
#[no_mangle]
pub unsafe extern "C" fn pp_default_platforms(
    params: *const Params,
    out: *mut Rect,
    cap: usize,
) -> usize {
    let p = unsafe { &*params };
    let platforms = pixplat_core::default_platforms(p);
    let n = platforms.len().min(cap);
    if n > 0 {
        let dst = unsafe { std::slice::from_raw_parts_mut(out, n) };
        dst.copy_from_slice(&platforms[..n]);
    }
    platforms.len()
}

/// # Safety
/// `params` and `body` must be valid; `world_rects` must point to
/// `world_len` rects (may be null when `world_len` is 0).
#[no_mangle]
pub unsafe extern "C" fn pp_step(
    params: *const Params,
    world_rects: *const Rect,
    world_len: usize,
    body: *mut Body,
    input_bits: u8,
    jump_pressed: u8,
) -> Events {
    let p = unsafe { &*params };
    let b = unsafe { &mut *body };
    let world: &[Rect] = if world_len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(world_rects, world_len) }
    };
    let input = FrameInput {
        held: Buttons::from_bits_truncate(input_bits),
        jump_pressed: jump_pressed != 0,
    };

    pixplat_core::step(p, world, b, input)
}

#[cfg(test)]
mod tests {
    use super::{pp_default_params, pp_default_platforms, pp_spawn_body, pp_step};
    use pixplat_core::{Body, Buttons, Params, Rect};

    #[test]
    fn steps_through_the_c_abi() {
        let mut params = Params {
            gravity: 0.0,
            ..Params::default()
        };
        let mut body = Body::default();
        let mut world = [Rect::default(); 8];

        let n = unsafe {
            pp_default_params(&mut params);
            pp_spawn_body(&params, &mut body);
            pp_default_platforms(&params, world.as_mut_ptr(), world.len())
        };
        assert_eq!(params, Params::default());
        assert_eq!(n, 4);
        assert_eq!(body.x, 50.0);

        let ev = unsafe { pp_step(&params, world.as_ptr(), n, &mut body, Buttons::RIGHT.bits(), 0) };
        assert!(!ev.jumped);
        assert_eq!(body.x, 55.0);
    }

    #[test]
    fn platform_count_is_reported_even_without_room() {
        let params = Params::default();
        let n = unsafe { pp_default_platforms(&params, std::ptr::null_mut(), 0) };
        assert_eq!(n, 4);
    }
}
