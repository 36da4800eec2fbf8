//! Frame rendering against a pluggable drawing surface
//!
//! The core owns draw order and pixel placement; the embedding supplies
//! resource loading and blitting behind the [`Surface`] trait. Rendering
//! reads the game state and never mutates it.

use glam::Vec2;

use crate::consts::HAZARD_SPRITE_OFFSET;
use crate::grid_to_pixel;
use crate::sim::GameState;

/// An opaque drawing/resource service: sprite lookup plus pixel-space blits
pub trait Surface {
    /// Handle to a loaded sprite
    type Drawable;

    /// Look up a sprite by path. Missing assets are the embedding's concern;
    /// the core skips anything it cannot draw.
    fn get(&self, path: &str) -> Option<Self::Drawable>;

    /// Blit a sprite with its top-left corner at the given pixel position
    fn draw_image(&mut self, drawable: &Self::Drawable, x: f32, y: f32);
}

/// Draw one frame in fixed back-to-front order: hazards, then the player,
/// then any uncollected gems.
pub fn draw_frame<S: Surface>(state: &GameState, surface: &mut S) {
    for hazard in &state.hazards {
        // Hazard art carries transparent headroom; lift it to sit on the lane
        let pos =
            grid_to_pixel(hazard.x, hazard.y as f32) - Vec2::new(0.0, HAZARD_SPRITE_OFFSET);
        blit(surface, hazard.sprite(), pos);
    }

    let player = &state.player;
    blit(
        surface,
        player.sprite(),
        grid_to_pixel(player.x as f32, player.y as f32),
    );

    for gem in &state.gems {
        if gem.collected {
            continue;
        }
        blit(
            surface,
            gem.kind.sprite(),
            grid_to_pixel(gem.x as f32, gem.y as f32),
        );
    }
}

fn blit<S: Surface>(surface: &mut S, path: &str, pos: Vec2) {
    match surface.get(path) {
        Some(drawable) => surface.draw_image(&drawable, pos.x, pos.y),
        None => log::debug!("missing sprite {path}, skipping draw"),
    }
}
