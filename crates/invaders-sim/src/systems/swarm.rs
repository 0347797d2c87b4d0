//! Swarm movement — discrete horizontal sweeps with direction reversal,
//! descent, and bounds correction.

use invaders_core::constants::*;

use crate::world::GameWorld;

/// Look up the speed/fire tier for the lead invader's y. Returns `None`
/// below the first tier boundary (keep the current settings).
/// Re-evaluated every tick, not once per wave.
pub fn evaluate_tier(lead_y: f32) -> Option<(f64, u32)> {
    for &(min_y, max_y, step_secs, shoot_odds) in &SWARM_TIERS {
        if lead_y >= min_y && lead_y < max_y {
            return Some((step_secs, shoot_odds));
        }
    }
    None
}

/// Accumulate `dt` and, at the step interval, execute one discrete
/// swarm step.
///
/// The reversal check samples pre-step positions of alive invaders
/// only. On reversal: any alive invader past the invasion line kills
/// the defender, the whole grid (dead invaders included) descends, a
/// corrective whole-swarm shift re-aligns the formation, and every
/// direction is negated. Otherwise alive invaders sweep horizontally;
/// dead invaders stay frozen.
pub fn run(world: &mut GameWorld, accumulator: &mut f64, dt: f64, step_secs: f64) {
    *accumulator += dt;
    if *accumulator < step_secs {
        return;
    }

    let reversal = world
        .fleet
        .iter()
        .any(|inv| inv.alive() && (inv.pos.x < SWARM_MIN_X || inv.pos.x > SWARM_MAX_X));

    if reversal {
        for i in 0..world.fleet.len() {
            // Loss check uses the pre-descent y.
            if world.fleet[i].alive() && world.fleet[i].pos.y > INVASION_LINE_Y {
                world.defender.vitals.alive = false;
            }

            world.fleet[i].pos.y += SWARM_DESCENT;

            // An alive invader still out of bounds shifts the ENTIRE
            // swarm back toward the play field, keeping the formation
            // aligned.
            if world.fleet[i].alive() {
                if world.fleet[i].pos.x < SWARM_MIN_X {
                    for inv in &mut world.fleet {
                        inv.pos.x += SWARM_CORRECTION;
                    }
                } else if world.fleet[i].pos.x > SWARM_MAX_X {
                    for inv in &mut world.fleet {
                        inv.pos.x -= SWARM_CORRECTION;
                    }
                }
            }
        }

        for inv in &mut world.fleet {
            inv.direction = -inv.direction;
        }
    } else {
        for inv in &mut world.fleet {
            if inv.alive() {
                inv.pos.x += inv.direction;
            }
        }
    }

    *accumulator = 0.0;
}
