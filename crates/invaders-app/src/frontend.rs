//! Frontend collaborator traits.
//!
//! The simulation is headless; rendering, audio, and input arrive
//! through these traits. A frontend implementation owns the actual
//! window/audio device. `NullFrontend` is the headless implementation
//! used by tests and by tooling that only wants the simulation.

use std::fmt;

use invaders_core::enums::{BarrierStage, InvaderKind, Key, KeyEdge};
use invaders_core::events::AudioCue;
use invaders_core::state::GameSnapshot;
use invaders_core::types::Position;

/// Opaque handle to a loaded texture.
pub type TextureId = usize;

/// Opaque handle to a sprite created from a texture.
pub type SpriteId = usize;

/// A texture or font failed to load. Any asset failure aborts startup;
/// there is no fallback art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    Texture { path: String },
    Font { path: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Texture { path } => write!(f, "failed to load texture: {path}"),
            AssetError::Font { path } => write!(f, "failed to load font: {path}"),
        }
    }
}

impl std::error::Error for AssetError {}

/// The drawing side of a frontend.
pub trait RenderSurface {
    fn load_texture(&mut self, path: &str) -> Result<TextureId, AssetError>;
    fn set_font(&mut self, path: &str) -> Result<(), AssetError>;
    fn create_sprite(&mut self, texture: TextureId) -> SpriteId;
    fn clear(&mut self);
    fn render_sprite(&mut self, sprite: SpriteId, pos: Position);
    fn render_text(&mut self, text: &str, pos: Position);
    fn present(&mut self);
}

/// Fire-and-forget audio playback. Playback failures stay inside the
/// implementation; the simulation never hears about them.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
    fn stop_all(&mut self);
}

/// Source of keyboard edge events, drained once per frame.
pub trait InputSource {
    fn poll_edges(&mut self) -> Vec<(Key, KeyEdge)>;
}

/// All sprites the game draws, created up-front at startup.
#[derive(Debug)]
pub struct SpriteSet {
    pub defender: SpriteId,
    pub grunt: SpriteId,
    pub elite: SpriteId,
    pub flagship: SpriteId,
    pub bullet: SpriteId,
    pub explosion: SpriteId,
    /// Indexed by intact/damaged/critical (a destroyed barrier is not
    /// drawn).
    pub barrier: [SpriteId; 3],
}

impl SpriteSet {
    /// Load every texture and build the sprite table. The first failure
    /// propagates; startup aborts rather than running with missing art.
    pub fn load<R: RenderSurface>(render: &mut R) -> Result<Self, AssetError> {
        render.set_font("assets/fonts/arcade.ttf")?;

        let sprite = |render: &mut R, path: &str| -> Result<SpriteId, AssetError> {
            let texture = render.load_texture(path)?;
            Ok(render.create_sprite(texture))
        };

        Ok(Self {
            defender: sprite(render, "assets/sprites/defender.png")?,
            grunt: sprite(render, "assets/sprites/grunt.png")?,
            elite: sprite(render, "assets/sprites/elite.png")?,
            flagship: sprite(render, "assets/sprites/flagship.png")?,
            bullet: sprite(render, "assets/sprites/bullet.png")?,
            explosion: sprite(render, "assets/sprites/explosion.png")?,
            barrier: [
                sprite(render, "assets/sprites/barrier_intact.png")?,
                sprite(render, "assets/sprites/barrier_damaged.png")?,
                sprite(render, "assets/sprites/barrier_critical.png")?,
            ],
        })
    }
}

/// Draw one snapshot. Dead actors and parked bullets are skipped; the
/// respawning defender blinks out via `visible`.
pub fn draw_frame<R: RenderSurface>(render: &mut R, sprites: &SpriteSet, snap: &GameSnapshot) {
    render.clear();

    if snap.defender.visible {
        render.render_sprite(sprites.defender, snap.defender.pos);
    }

    for inv in &snap.invaders {
        if !inv.alive {
            continue;
        }
        let sprite = match inv.kind {
            InvaderKind::Grunt => sprites.grunt,
            InvaderKind::Elite => sprites.elite,
            InvaderKind::Flagship => sprites.flagship,
        };
        render.render_sprite(sprite, inv.pos);
    }

    if snap.flagship.alive {
        render.render_sprite(sprites.flagship, snap.flagship.pos);
    }

    if snap.player_bullet.alive {
        render.render_sprite(sprites.bullet, snap.player_bullet.pos);
    }
    for bullet in &snap.enemy_bullets {
        if bullet.alive {
            render.render_sprite(sprites.bullet, bullet.pos);
        }
    }

    for barrier in &snap.barriers {
        let sprite = match barrier.stage {
            BarrierStage::Intact => sprites.barrier[0],
            BarrierStage::Damaged => sprites.barrier[1],
            BarrierStage::Critical => sprites.barrier[2],
            BarrierStage::Destroyed => continue,
        };
        render.render_sprite(sprite, barrier.pos);
    }

    for pos in &snap.explosions {
        render.render_sprite(sprites.explosion, *pos);
    }

    render.render_text(
        &format!("SCORE {} x{}", snap.defender.score, snap.defender.multiplier),
        Position::new(20.0, 20.0),
    );
    render.render_text(
        &format!("LIVES {}", snap.defender.lives),
        Position::new(20.0, 50.0),
    );

    render.present();
}

/// Forward the snapshot's drained audio cues to the sink.
pub fn play_cues<A: AudioSink>(audio: &mut A, snap: &GameSnapshot) {
    for cue in &snap.audio_cues {
        audio.play(*cue);
    }
}

/// Headless frontend: swallows draws and cues, produces no input.
/// Counts calls so tests can assert on frame contents.
#[derive(Debug, Default)]
pub struct NullFrontend {
    next_id: usize,
    /// When set, every asset load fails (for startup-abort tests).
    pub fail_assets: bool,
    pub sprites_drawn: usize,
    pub texts_drawn: usize,
    pub frames_presented: usize,
    pub cues_played: Vec<AudioCue>,
}

impl RenderSurface for NullFrontend {
    fn load_texture(&mut self, path: &str) -> Result<TextureId, AssetError> {
        if self.fail_assets {
            return Err(AssetError::Texture { path: path.into() });
        }
        self.next_id += 1;
        Ok(self.next_id)
    }

    fn set_font(&mut self, path: &str) -> Result<(), AssetError> {
        if self.fail_assets {
            return Err(AssetError::Font { path: path.into() });
        }
        Ok(())
    }

    fn create_sprite(&mut self, _texture: TextureId) -> SpriteId {
        self.next_id += 1;
        self.next_id
    }

    fn clear(&mut self) {}

    fn render_sprite(&mut self, _sprite: SpriteId, _pos: Position) {
        self.sprites_drawn += 1;
    }

    fn render_text(&mut self, _text: &str, _pos: Position) {
        self.texts_drawn += 1;
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

impl AudioSink for NullFrontend {
    fn play(&mut self, cue: AudioCue) {
        self.cues_played.push(cue);
    }

    fn stop_all(&mut self) {
        self.cues_played.clear();
    }
}

impl InputSource for NullFrontend {
    fn poll_edges(&mut self) -> Vec<(Key, KeyEdge)> {
        Vec::new()
    }
}
