use std::cell::RefCell;
use std::rc::Rc;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::snowfall::{spokes, SnowfallConfig, Snowfield};

fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// A running snowfall bound to one canvas. Holds the next animation frame
/// and the resize listener; both are dropped by [`SnowLoop::stop`].
struct SnowLoop {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<Snowfield>,
    rng: RefCell<fastrand::Rng>,
    frame: RefCell<Option<AnimationFrame>>,
    resize: RefCell<Option<EventListener>>,
}

impl SnowLoop {
    fn start(canvas: HtmlCanvasElement, config: SnowfallConfig) -> Option<Rc<Self>> {
        let ctx = context_2d(&canvas)?;
        let (width, height) = viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let mut rng = fastrand::Rng::new();
        let field = Snowfield::new(config, width, height, &mut rng);
        let snow = Rc::new(Self {
            canvas,
            ctx,
            field: RefCell::new(field),
            rng: RefCell::new(rng),
            frame: RefCell::new(None),
            resize: RefCell::new(None),
        });

        if let Some(window) = web_sys::window() {
            let weak = Rc::downgrade(&snow);
            let listener = EventListener::new(&window, "resize", move |_| {
                if let Some(snow) = weak.upgrade() {
                    snow.fit_to_viewport();
                }
            });
            *snow.resize.borrow_mut() = Some(listener);
        }

        snow.schedule();
        Some(snow)
    }

    fn fit_to_viewport(&self) {
        let (width, height) = viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.borrow_mut().resize(width, height);
    }

    fn schedule(self: &Rc<Self>) {
        let snow = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            snow.frame.borrow_mut().take();
            snow.tick();
            snow.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let mut field = self.field.borrow_mut();
        self.ctx.clear_rect(0.0, 0.0, field.width(), field.height());
        self.ctx.set_line_width(field.config().line_width);
        for p in field.particles() {
            self.ctx.begin_path();
            self.ctx.set_stroke_style_str(&p.color);
            self.ctx.set_global_alpha(p.opacity);
            for (x_end, y_end) in spokes(p.x, p.y, p.size) {
                self.ctx.move_to(p.x, p.y);
                self.ctx.line_to(x_end, y_end);
            }
            self.ctx.stroke();
        }
        field.step(&mut self.rng.borrow_mut());
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
        self.resize.borrow_mut().take();
        let field = self.field.borrow();
        self.ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SnowfallProps {
    #[prop_or_default]
    pub config: SnowfallConfig,
}

#[function_component(Snowfall)]
pub fn snowfall(props: &SnowfallProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        use_effect_with(config, move |config| {
            let snow = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| SnowLoop::start(canvas, config.clone()));

            move || {
                if let Some(snow) = snow {
                    snow.stop();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="snowfall"></canvas>
    }
}
