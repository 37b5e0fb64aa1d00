use pixplat_core::{Key, Params, Sim};

fn main() {
    let mut sim = Sim::new(Params::default());

    let mut jumped = 0u32;
    let mut landed = 0u32;
    let mut blocked = 0u32;
    let mut respawned = 0u32;

    for frame in 0..240 {
        if frame == 0 {
            sim.press(Key::Right);
        }
        if frame == 20 || frame == 90 {
            sim.press(Key::Jump);
        }
        if frame == 21 || frame == 91 {
            sim.release(Key::Jump);
        }
        if frame == 150 {
            sim.release(Key::Right);
            sim.press(Key::Left);
        }

        let ev = sim.tick();
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        blocked += ev.blocked as u32;
        respawned += ev.respawned as u32;
    }

    let b = sim.body();
    println!(
        "{{\"x\":{},\"y\":{},\"vx\":{},\"vy\":{},\"on_ground\":{},\"jumped\":{},\"landed\":{},\"blocked\":{},\"respawned\":{}}}",
        b.x, b.y, b.vx, b.vy, b.on_ground, jumped, landed, blocked, respawned
    );
}
