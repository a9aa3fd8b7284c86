// Browser wiring for the hero backdrop: finds the canvas, sizes it to the
// viewport, feeds window resize and mouse events into the animation, and
// drives it with requestAnimationFrame until unmounted.

use crate::animation::{Animation, FrameHandle, FrameScheduler};
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::listener::EventListener;
use crate::surface::{CanvasSurface, Surface, SurfaceError};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type SharedAnimation = Rc<RefCell<Animation<CanvasSurface, BrowserScheduler>>>;

pub struct BrowserScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for BrowserScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<Function>())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

// Registration failures only cost us that input, the field keeps animating
fn listen<F>(listeners: &mut Vec<EventListener>, target: &EventTarget, event: &'static str, callback: F)
where
    F: FnMut(Event) + 'static,
{
    match EventListener::new(target, event, callback) {
        Ok(listener) => listeners.push(listener),
        Err(e) => log::warn!("could not listen for {}: {:?}", event, e),
    }
}

struct Mounted {
    animation: SharedAnimation,
    frame_callback: FrameCallback,
    listeners: Vec<EventListener>,
}

impl Mounted {
    fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Mounted, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let mut surface = CanvasSurface::acquire(canvas.clone())?;

        let (width, height) = viewport_size(&window);
        surface.resize(width, height);
        let field = ParticleField::initialize(width, height, config, &mut rand::thread_rng());
        let count = field.particles().len();

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = BrowserScheduler {
            window: window.clone(),
            callback: frame_callback.clone(),
        };
        let animation: SharedAnimation =
            Rc::new(RefCell::new(Animation::new(field, surface, scheduler)));

        let frame_animation = animation.clone();
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            #[cfg(feature = "profile")]
            let _timer = crate::Timer::new("HeroBackdrop::frame");
            frame_animation.borrow_mut().on_frame(timestamp);
        }) as Box<dyn FnMut(f64)>));

        let mut listeners = Vec::with_capacity(2);

        let resize_animation = animation.clone();
        let resize_window = window.clone();
        listen(&mut listeners, &window, "resize", move |_| {
            let (width, height) = viewport_size(&resize_window);
            resize_animation.borrow_mut().resize(width, height);
        });

        // clientX/Y are viewport coordinates, the canvas may be scrolled away
        let pointer_animation = animation.clone();
        listen(&mut listeners, &window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let rect = canvas.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                pointer_animation.borrow_mut().set_pointer(x, y);
            }
        });

        animation.borrow_mut().start();
        log::info!("particle backdrop mounted: {} particles on {}x{}", count, width, height);

        Ok(Mounted {
            animation,
            frame_callback,
            listeners,
        })
    }
}

/// Decorative particle field behind the portfolio hero section.
///
/// A backdrop that could not get a 2d context is inert rather than an error:
/// `is_running()` reports false and nothing is ever drawn.
#[wasm_bindgen]
pub struct HeroBackdrop {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroBackdrop {
    pub fn mount(canvas_id: &str) -> HeroBackdrop {
        match CanvasSurface::find(canvas_id) {
            Ok(canvas) => HeroBackdrop::mount_on(canvas),
            Err(e) => HeroBackdrop::inert(e),
        }
    }

    pub fn mount_on(canvas: HtmlCanvasElement) -> HeroBackdrop {
        HeroBackdrop::mount_with_config(canvas, FieldConfig::default())
    }

    // Cancels the pending frame and removes both window listeners. Safe to
    // call more than once; JS `free()` runs it too.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.animation.borrow_mut().teardown();
            drop(mounted.listeners);
            // Breaks the closure -> animation -> scheduler -> closure cycle
            let callback = mounted.frame_callback.borrow_mut().take();
            drop(callback);
            log::info!("particle backdrop unmounted");
        }
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map_or(false, |m| m.animation.borrow().is_running())
    }
}

impl HeroBackdrop {
    pub fn mount_with_config(canvas: HtmlCanvasElement, config: FieldConfig) -> HeroBackdrop {
        match Mounted::new(canvas, config) {
            Ok(mounted) => HeroBackdrop {
                mounted: Some(mounted),
            },
            Err(e) => HeroBackdrop::inert(e),
        }
    }

    fn inert(error: SurfaceError) -> HeroBackdrop {
        log::warn!("particle backdrop disabled: {}", error);
        HeroBackdrop { mounted: None }
    }
}

impl Drop for HeroBackdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}
