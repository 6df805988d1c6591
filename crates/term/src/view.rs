//! SceneView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One terminal cell corresponds to one logical pixel of the engine region;
//! the driver sizes the region so the scene plus HUD fit the viewport.

use tui_bounce_core::{Boundary, EngineSnapshot};
use tui_bounce_types::Vec2;

use crate::fmt::format_grouped;
use crate::frame::{Cell, Frame, Rgb, Style};

/// Columns reserved to the right of the scene for the HUD.
pub const HUD_WIDTH: u16 = 24;

/// Glyph used when the configured sprite glyph is unusable.
const PLACEHOLDER_GLYPH: char = 'o';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the sprite scene.
pub struct SceneView {
    sprite_glyph: char,
    sprite_color: Rgb,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            sprite_glyph: '●',
            sprite_color: Rgb::new(255, 102, 0),
        }
    }
}

impl SceneView {
    /// A view with a custom sprite visual.
    ///
    /// An unusable glyph (control character or blank) is replaced by a plain
    /// placeholder; motion and layout are unaffected.
    pub fn new(sprite_glyph: char, sprite_color: Rgb) -> Self {
        let sprite_glyph = if sprite_glyph.is_control() || sprite_glyph == ' ' {
            PLACEHOLDER_GLYPH
        } else {
            sprite_glyph
        };
        Self {
            sprite_glyph,
            sprite_color,
        }
    }

    pub fn sprite_glyph(&self) -> char {
        self.sprite_glyph
    }

    /// Render the snapshot into the caller's framebuffer.
    ///
    /// The frame is resized to the viewport and fully repainted, so a driver
    /// can keep one buffer and pass it in every frame without reallocating.
    /// `probe` is the shape boundary when one is active; its allowed cells are
    /// shaded so the vessel silhouette is visible behind the sprites.
    pub fn render_into(
        &self,
        snap: &EngineSnapshot,
        probe: Option<&dyn Boundary>,
        viewport: Viewport,
        frame: &mut Frame,
    ) {
        frame.resize(viewport.width, viewport.height);
        frame.clear(Cell::new(' ', Style::default()));

        let scene_w = snap.region.width.round().max(0.0) as u16;
        let scene_h = snap.region.height.round().max(0.0) as u16;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let floor = Style::new(Rgb::new(80, 80, 90), Rgb::new(24, 24, 32));
        let vessel = Style::new(Rgb::new(90, 70, 50), Rgb::new(44, 34, 22)).dimmed();

        draw_border(frame, scene_w + 2, scene_h + 2, border);

        // Interior: shaded where the shape allows, plain elsewhere.
        for iy in 0..scene_h {
            for ix in 0..scene_w {
                let style = match probe {
                    Some(b) if b.allows(Vec2::new(ix as f32 + 0.5, iy as f32 + 0.5)) => vessel,
                    Some(_) => floor,
                    None => floor,
                };
                frame.put_char(ix + 1, iy + 1, ' ', style);
            }
        }

        // Sprites, clipped to the interior.
        let sprite_style = Style::new(self.sprite_color, Rgb::new(24, 24, 32)).bold();
        for s in &snap.sprites {
            let side = (s.size.round() as u16).max(1);
            let cx = s.x.round() as i32;
            let cy = s.y.round() as i32;
            for dy in 0..side {
                for dx in 0..side {
                    let x = cx + dx as i32;
                    let y = cy + dy as i32;
                    if x >= 0 && y >= 0 && (x as u16) < scene_w && (y as u16) < scene_h {
                        frame.put_char(x as u16 + 1, y as u16 + 1, self.sprite_glyph, sprite_style);
                    }
                }
            }
        }

        self.draw_hud(frame, snap, scene_w + 4);
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(
        &self,
        snap: &EngineSnapshot,
        probe: Option<&dyn Boundary>,
        viewport: Viewport,
    ) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, probe, viewport, &mut frame);
        frame
    }

    fn draw_hud(&self, frame: &mut Frame, snap: &EngineSnapshot, x: u16) {
        let title = Style::default().bold();
        let label = Style::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));

        let state = if !snap.bounds_ready {
            "LOADING"
        } else if snap.running {
            "RUNNING"
        } else {
            "STOPPED"
        };
        let mode = if snap.shaped { "MASK" } else { "WALLS" };

        frame.put_str(x, 1, "TUI BOUNCE", title);
        frame.put_str(x, 3, &format!("MODE {}", mode), label);
        frame.put_str(
            x,
            4,
            &format!("REGION {}x{}", snap.region.width as u32, snap.region.height as u32),
            label,
        );
        frame.put_str(
            x,
            5,
            &format!("SPRITES {}/{}", snap.sprites.len(), snap.target),
            label,
        );
        frame.put_str(x, 6, &format!("QTY {}", format_grouped(snap.quantity)), label);
        frame.put_str(x, 7, &format!("SEED {}", snap.seed), label);
        frame.put_str(x, 8, &format!("TICK {}", snap.tick_id), label);
        frame.put_str(x, 9, &format!("STATE {}", state), label);

        frame.put_str(x, 11, "+/-    quantity", label);
        frame.put_str(x, 12, "space  run/stop", label);
        frame.put_str(x, 13, "q      quit", label);
    }
}

fn draw_border(frame: &mut Frame, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    for x in 1..w - 1 {
        frame.put_char(x, 0, '─', style);
        frame.put_char(x, h - 1, '─', style);
    }
    for y in 1..h - 1 {
        frame.put_char(0, y, '│', style);
        frame.put_char(w - 1, y, '│', style);
    }
    frame.put_char(0, 0, '┌', style);
    frame.put_char(w - 1, 0, '┐', style);
    frame.put_char(0, h - 1, '└', style);
    frame.put_char(w - 1, h - 1, '┘', style);
}
