#![cfg(target_arch = "wasm32")]
//! Decorative animated 3D background (floating toon-shaded math symbols)
//! composited behind a scrollable tutor-profile carousel.

use crate::camera::Camera;
use crate::carousel::{CarouselModel, TUTORS};
use crate::constants::{FLATTEN_TOLERANCE, TEXT_DEPTH, TEXT_SIZE, TYPEFACE_URL};
use crate::mesh::GlyphMesh;
use crate::scene::SceneState;
use crate::typeface::Typeface;
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod cards;
mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod mesh;
mod render;
mod scene;
mod typeface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mathbg starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;

    // A missing container aborts everything; the page has nothing to host.
    let container = dom::element_by_id(&document, "bg-container")?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "bg-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let camera = Rc::new(RefCell::new(Camera::new(1.0)));
    events::wire_resize(&window, container.clone(), canvas.clone(), camera.clone());

    // The carousel is independent of the 3D scene and wires up immediately.
    wire_carousel(&window, &document)?;

    let visible = Rc::new(Cell::new(true));
    events::wire_visibility_gate(&container, visible.clone())?;

    let gpu = frame::init_gpu(&canvas).await;

    // The scene only populates once the typeface arrives; on failure the
    // background stays empty and the rest of the page keeps working.
    let (scene_state, gpu) = match assets::load_typeface(TYPEFACE_URL).await {
        Ok(typeface) => populate_scene(&typeface, gpu),
        Err(e) => {
            log::error!("typeface load failed: {:?}", e);
            (SceneState::empty(), gpu)
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: Rc::new(RefCell::new(scene_state)),
        camera,
        visible,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Pick the symbol subset, extrude one mesh per chosen glyph and upload.
fn populate_scene(
    typeface: &Typeface,
    mut gpu: Option<render::GpuState<'static>>,
) -> (SceneState, Option<render::GpuState<'static>>) {
    let mut rng = StdRng::from_entropy();
    let scene_state = SceneState::new(&mut rng);
    let meshes: Vec<Option<GlyphMesh>> = scene_state
        .symbols()
        .iter()
        .map(|s| {
            let built = typeface
                .outline(s.glyph, TEXT_SIZE)
                .ok_or_else(|| anyhow!("glyph {:?} missing from typeface", s.glyph))
                .and_then(|outline| mesh::extrude(&outline, TEXT_DEPTH, FLATTEN_TOLERANCE));
            match built {
                Ok(m) if !m.indices.is_empty() => Some(m),
                Ok(_) => {
                    log::warn!("glyph {:?} has an empty outline", s.glyph);
                    None
                }
                Err(e) => {
                    log::warn!("glyph {:?} skipped: {:?}", s.glyph, e);
                    None
                }
            }
        })
        .collect();
    if let Some(g) = &mut gpu {
        g.upload_meshes(&meshes);
    }
    log::info!(
        "scene populated: {:?}",
        scene_state.symbols().iter().map(|s| s.glyph).collect::<Vec<_>>()
    );
    (scene_state, gpu)
}

fn wire_carousel(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let list = document
        .query_selector(".carousel")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing .carousel"))?;
    let prev = dom::element_by_id(document, "carousel-prev")?;
    let next = dom::element_by_id(document, "carousel-next")?;

    let model = Rc::new(RefCell::new(CarouselModel::new(TUTORS.len())));
    cards::render_cards(document, &list, &model)?;
    cards::wire_navigation(window, list, prev, next);
    Ok(())
}
