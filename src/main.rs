//! Prints the GLSL scene interface to stdout. Pipe it into the raymarching shader source so its
//! `objects` array matches the host scene table. Set `RAYMARCHER_LOG_LEVEL=trace` to also see
//! every uniform write made while loading the demo scene.

use raymarcher::{
    config,
    engine::{demo_scene::demo_scene, scene_table::SceneTable},
    helper::{anyhow_panic::anyhow_unwrap, logger::init_logger},
    renderer::{
        headless_program::HeadlessProgram,
        shader_interfaces::glsl_interface::scene_declarations_glsl,
        shader_program::ProgramHandle,
    },
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

fn main() -> anyhow::Result<()> {
    init_logger()?;
    info!(
        "{} scene interface for {} primitives",
        config::ENGINE_NAME,
        config::SCENE_CAPACITY
    );

    // dry run against an in-memory program to check the demo scene fits
    let program = HeadlessProgram::with_scene_interface(ProgramHandle(1), config::SCENE_CAPACITY);
    let mut scene = SceneTable::new(program);
    anyhow_unwrap(scene.add_objects(demo_scene()), "add demo scene");
    for (name, value) in scene.program().snapshot() {
        if let Some(value) = value {
            debug!("{} = {:?}", name, value);
        }
    }

    print!("{}", scene_declarations_glsl(config::SCENE_CAPACITY));
    Ok(())
}
