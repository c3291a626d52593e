use crate::cube::Cube;
use spincube_common::AppConfig;
use spincube_render::{RenderError, Surface};

/// One iteration of the render loop: clear to the background, draw the cube
/// (advancing its angle), present.
pub fn render_frame<S: Surface + ?Sized>(
    cube: &mut Cube,
    surface: &mut S,
    config: &AppConfig,
) -> Result<(), RenderError> {
    surface.clear(config.display.background);
    cube.draw(surface, config.cube.rotation_rate);
    surface.present()
}

/// Build the cube described by `config`, colored with the display foreground.
pub fn cube_from_config(config: &AppConfig) -> Cube {
    Cube::new(config.cube.center, config.cube.side).with_color(config.display.foreground)
}
