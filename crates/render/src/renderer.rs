use lifegrid_common::{LifeConfig, Viewport};
use lifegrid_kernel::World;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads cell states inside a viewport and produces output.
/// It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render the cells of `view`, which may lie anywhere on the plane.
    fn render(&self, world: &World, view: &Viewport) -> Self::Output;
}

/// Plain-text renderer: one glyph per cell, one newline-terminated line per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    pub alive: char,
    pub dead: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '-',
        }
    }
}

impl TextRenderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Self::new(config.alive_glyph, config.dead_glyph)
    }

    /// Render exactly the bounding box of the live cells. An empty world
    /// renders as the empty string.
    pub fn render_fit(&self, world: &World) -> String {
        match world.bounding_box() {
            Some((min, max)) => self.render(world, &Viewport::new(min, max)),
            None => String::new(),
        }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &Viewport) -> String {
        let line_len = view.width().saturating_add(1);
        let capacity = line_len.saturating_mul(view.height()).min(1 << 20) as usize;
        let mut out = String::with_capacity(capacity);
        for y in view.rows() {
            for x in view.columns() {
                let glyph = if world.is_alive((x, y).into()) {
                    self.alive
                } else {
                    self.dead
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        tracing::trace!(
            width = view.width(),
            height = view.height(),
            "rendered text frame"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_common::Pos;

    fn world_of(cells: &[(i64, i64)]) -> World {
        let mut w = World::new();
        for &c in cells {
            w.set_cell(c.into());
        }
        w
    }

    #[test]
    fn empty_world_fit_is_empty_string() {
        let r = TextRenderer::default();
        assert_eq!(r.render_fit(&World::new()), "");
    }

    #[test]
    fn one_cell_world_fits_one_glyph() {
        let r = TextRenderer::default();
        let w = world_of(&[(1, 1)]);
        assert_eq!(r.render_fit(&w), "#\n");
    }

    #[test]
    fn fit_renders_bounding_box() {
        // --x-
        // -x-x
        // x---
        let w = world_of(&[(0, 2), (1, 1), (2, 0), (3, 1)]);
        let r = TextRenderer::default();
        assert_eq!(r.render_fit(&w), "--#-\n-#-#\n#---\n");
    }

    #[test]
    fn viewport_beyond_live_cells_shows_dead_glyphs() {
        let w = world_of(&[(0, 0)]);
        let r = TextRenderer::new('o', '.');
        let view = Viewport::new(Pos::new(-1, -1), Pos::new(1, 0));
        assert_eq!(r.render(&w, &view), "...\n.o.\n");
    }

    #[test]
    fn viewport_without_live_cells_is_all_dead() {
        let w = world_of(&[(100, 100)]);
        let r = TextRenderer::default();
        let view = Viewport::from_size(Pos::new(-3, -3), 2, 2);
        assert_eq!(r.render(&w, &view), "--\n--\n");
    }

    #[test]
    fn from_config_uses_configured_glyphs() {
        let config = LifeConfig {
            alive_glyph: '@',
            dead_glyph: ' ',
            ..LifeConfig::default()
        };
        let r = TextRenderer::from_config(&config);
        assert_eq!(r, TextRenderer::new('@', ' '));
    }

    #[test]
    fn rendering_does_not_change_world() {
        let w = world_of(&[(0, 0), (1, 0), (2, 0)]);
        let r = TextRenderer::default();
        let _ = r.render(&w, &Viewport::from_size(Pos::ORIGIN, 3, 3));
        assert_eq!(w.count(), 3);
        assert_eq!(w.generation(), 0);
    }
}
