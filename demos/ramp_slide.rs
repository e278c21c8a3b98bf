use glam::Vec2;
use tether2d::*;

fn main() -> Result<(), PhysicsError> {
    env_logger::init();

    let engine = PhysicsEngine::new(PhysicsConfig::default());
    let mut level = Level::new();

    let player = level.spawn(
        Entity::new(Vec2::new(-1.5, -3.0))
            .with_collider(Collider::boxed(Layer::Player, 1.0, 1.0))
            .with_anchor(Anchor::new(Vec2::new(-4.0, -6.0), 6.0)),
    )?;
    // Floor of unit tiles with a 45 degree ramp rising to the right.
    for i in -4..4 {
        let tile = Collider::boxed(Layer::Static, 1.0, 1.0);
        level.spawn(Entity::new(Vec2::new(i as f32, 1.0)).with_collider(tile))?;
    }
    let ramp = Collider::ramp(Layer::Static, 1.0, Vec2::new(-1.0, -1.0));
    let ramp = level.spawn(Entity::new(Vec2::ZERO).with_collider(ramp))?;
    println!("player={player:?} ramp={ramp:?}");

    let dt = 1.0 / 60.0;
    let mut velocity = Vec2::new(3.0, 0.0);
    for frame in 0..90 {
        let out = match engine.move_towards(&mut level, player, velocity, dt, &[Layer::Ghost]) {
            Ok(out) => out,
            Err(err) => {
                eprintln!("frame {frame}: {err}");
                break;
            }
        };
        out.dispatch(&mut |who: EntityId, info: &CollisionInfo| {
            if who == player {
                println!(
                    "frame {frame}: hit {:?} n=({:.2},{:.2})",
                    info.collider, info.normal.x, info.normal.y
                );
            }
        });
        velocity = out.velocity;
        if let Some(e) = level.entity(player) {
            println!(
                "frame {frame}: pos=({:.3},{:.3}) vel=({:.2},{:.2}) steps={}",
                e.position.x, e.position.y, velocity.x, velocity.y, out.steps
            );
        }
    }
    Ok(())
}
