use crate::camera::Camera;
use crate::render;
use crate::scene::SceneState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<Camera>>,
    pub visible: Rc<Cell<bool>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Visibility gate: skip all work while the container is off-screen.
        if !self.visible.get() {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f32();
        self.scene.borrow_mut().advance(elapsed);

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());

        let scene = self.scene.borrow();
        let instances: Vec<render::DrawInstance> = scene
            .draw_list()
            .iter()
            .map(|item| render::DrawInstance {
                mesh_index: item.symbol_index,
                model: scene.item_transform(item).matrix(),
                kind: item.kind,
            })
            .collect();
        let camera = self.camera.borrow();
        if let Err(e) = gpu.render(&camera, &instances) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // Leak a canvas clone to satisfy the 'static lifetime of the surface.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop from a self-rescheduling requestAnimationFrame
/// closure; it runs until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
