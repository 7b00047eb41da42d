//! Decorative background engine: a canvas filling its container, floating
//! icon entities plus a pointer-tracking spotlight grid, running only while
//! the surface is on screen.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, MouseEvent,
};
use yew::prelude::*;

use hoshikuzu_core::catalog::{icon_set_by_slug, icon_urls, DEFAULT_ICON_SET};
use hoshikuzu_core::field::{splitmix32, FieldConfig, ParticleField};
use hoshikuzu_core::scheduler::{FrameScheduler, Phase};
use hoshikuzu_core::viewport::{ViewportState, RESIZE_DEBOUNCE_MS};

use crate::assets::load_icon_set;
use crate::renderer::draw_frame;

/// Shared silhouette treatment applied to every entity sprite.
const ENTITY_TINT_FILTER: &str = "invert(1) brightness(1.4)";

/// Read-only per-instance configuration; changing it means unmounting and
/// mounting a fresh instance.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BackgroundConfig {
    pub icon_set: String,
    pub field: FieldConfig,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            icon_set: DEFAULT_ICON_SET.to_string(),
            field: FieldConfig::default(),
        }
    }
}

pub(crate) struct BackgroundAnimation {
    container: Element,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: RefCell<ViewportState>,
    field: RefCell<ParticleField>,
    scheduler: RefCell<FrameScheduler>,
    icons: RefCell<Vec<web_sys::HtmlImageElement>>,
    frame: RefCell<Option<AnimationFrame>>,
    resize_debounce: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
    observer: RefCell<Option<IntersectionObserver>>,
    observer_callback: RefCell<Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>>,
    on_screen: Cell<bool>,
    paused: Cell<bool>,
    torn_down: Cell<bool>,
}

impl BackgroundAnimation {
    pub(crate) fn mount(
        container: Element,
        config: &BackgroundConfig,
    ) -> Result<Rc<Self>, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_class_name("background-canvas");
        container.append_child(&canvas)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let icon_set = icon_set_by_slug(&config.icon_set)
            .or_else(|| icon_set_by_slug(DEFAULT_ICON_SET))
            .ok_or_else(|| JsValue::from_str("no icon set"))?;
        // Seed 0 means "pick one": fixed seeds are for reproducing layouts.
        let seed = if config.field.seed != 0 {
            config.field.seed
        } else {
            splitmix32(js_sys::Date::now() as u32)
        };
        let field_config = FieldConfig {
            icon_count: icon_set.files.len(),
            seed,
            ..config.field
        };

        let view = Rc::new(Self {
            container,
            canvas,
            ctx,
            viewport: RefCell::new(ViewportState::new()),
            field: RefCell::new(ParticleField::new(field_config)),
            scheduler: RefCell::new(FrameScheduler::new()),
            icons: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            resize_debounce: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            observer_callback: RefCell::new(None),
            on_screen: Cell::new(false),
            paused: Cell::new(false),
            torn_down: Cell::new(false),
        });

        view.measure();
        view.install_listeners();
        if let Err(err) = view.observe_visibility() {
            view.teardown();
            return Err(err);
        }
        view.begin_icon_load(icon_urls(icon_set));
        Ok(view)
    }

    /// Remeasure the container; regenerate the field when the size change is
    /// significant.
    fn measure(&self) {
        let rect = self.container.get_bounding_client_rect();
        let width = rect.width() as f32;
        let height = rect.height() as f32;
        let significant = self.viewport.borrow_mut().apply_resize(width, height);
        if !significant {
            return;
        }
        let viewport = *self.viewport.borrow();
        self.canvas.set_width(viewport.width() as u32);
        self.canvas.set_height(viewport.height() as u32);
        self.field
            .borrow_mut()
            .regenerate(viewport.width(), viewport.height());
    }

    fn install_listeners(self: &Rc<Self>) {
        let window: web_sys::EventTarget = match web_sys::window() {
            Some(window) => window.into(),
            None => return,
        };
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = view.container.get_bounding_client_rect();
            let local_x = event.client_x() as f32 - rect.left() as f32;
            let local_y = event.client_y() as f32 - rect.top() as f32;
            view.viewport.borrow_mut().set_pointer(local_x, local_y);
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
            let inner = Rc::clone(&view);
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                inner.resize_debounce.borrow_mut().take();
                if !inner.torn_down.get() {
                    inner.measure();
                }
            });
            // A fresh drag event restarts the debounce window.
            *view.resize_debounce.borrow_mut() = Some(timeout);
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    fn observe_visibility(self: &Rc<Self>) -> Result<(), JsValue> {
        let view = Rc::clone(self);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut on_screen = view.on_screen.get();
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_screen = entry.is_intersecting();
                    }
                }
                view.on_screen.set(on_screen);
                view.apply_visibility();
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&self.container);
        *self.observer.borrow_mut() = Some(observer);
        *self.observer_callback.borrow_mut() = Some(callback);
        Ok(())
    }

    fn begin_icon_load(self: &Rc<Self>, urls: Vec<String>) {
        let view = Rc::clone(self);
        spawn_local(async move {
            let icons = load_icon_set(urls).await;
            if view.torn_down.get() {
                return;
            }
            let count = icons.len();
            if count == 0 {
                gloo::console::warn!("no background icons loaded; effect disabled");
            }
            *view.icons.borrow_mut() = icons;
            view.scheduler.borrow_mut().assets_ready(count);
            view.ensure_frame();
        });
    }

    fn apply_visibility(self: &Rc<Self>) {
        let visible = self.on_screen.get() && !self.paused.get();
        self.scheduler.borrow_mut().set_visible(visible);
        if visible {
            self.ensure_frame();
        } else {
            // Cancel the pending callback instead of letting it fire idle.
            self.frame.borrow_mut().take();
        }
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.torn_down.get()
            || self.frame.borrow().is_some()
            || self.scheduler.borrow().phase() != Phase::Running
        {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            view.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if self.torn_down.get() {
            return;
        }
        let tick = self.scheduler.borrow_mut().frame(timestamp);
        if let Some(dt_ms) = tick {
            self.field.borrow_mut().step(dt_ms as f32);
            let viewport = *self.viewport.borrow();
            let field = self.field.borrow();
            let icons = self.icons.borrow();
            if let Err(err) =
                draw_frame(&self.ctx, &viewport, field.entities(), &icons, ENTITY_TINT_FILTER)
            {
                gloo::console::warn!("background draw failed", err);
            }
        }
        if self.scheduler.borrow().phase() == Phase::Running {
            self.ensure_frame();
        }
    }

    fn set_paused(self: &Rc<Self>, paused: bool) {
        self.paused.set(paused);
        self.apply_visibility();
    }

    /// Idempotent: cancels the pending frame, drops every listener and the
    /// observer, and removes the canvas. Safe to call more than once.
    pub(crate) fn teardown(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        self.scheduler.borrow_mut().shutdown();
        self.frame.borrow_mut().take();
        self.resize_debounce.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.observer_callback.borrow_mut().take();
        self.canvas.remove();
    }
}

/// Typed start/stop channel a parent holds to control a mounted engine
/// without reaching into its internals.
#[derive(Clone, Default)]
pub(crate) struct EngineHandle {
    engine: Rc<RefCell<Option<Weak<BackgroundAnimation>>>>,
    paused: Rc<Cell<bool>>,
}

impl PartialEq for EngineHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine)
    }
}

impl EngineHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn attach(&self, engine: &Rc<BackgroundAnimation>) {
        *self.engine.borrow_mut() = Some(Rc::downgrade(engine));
        engine.set_paused(self.paused.get());
    }

    fn detach(&self) {
        self.engine.borrow_mut().take();
    }

    pub(crate) fn start(&self) {
        self.paused.set(false);
        if let Some(engine) = self.upgrade() {
            engine.set_paused(false);
        }
    }

    pub(crate) fn stop(&self) {
        self.paused.set(true);
        if let Some(engine) = self.upgrade() {
            engine.set_paused(true);
        }
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.paused.get()
    }

    fn upgrade(&self) -> Option<Rc<BackgroundAnimation>> {
        self.engine.borrow().as_ref().and_then(Weak::upgrade)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AnimatedBackgroundProps {
    #[prop_or_default]
    pub config: BackgroundConfig,
    #[prop_or_default]
    pub handle: Option<EngineHandle>,
}

/// Container div filling its parent; the engine mounts a canvas inside it
/// and tears itself down when the component unmounts.
#[function_component(AnimatedBackground)]
pub(crate) fn animated_background(props: &AnimatedBackgroundProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let config = props.config.clone();
        let handle = props.handle.clone();
        use_effect_with((config, handle), move |(config, handle)| {
            let engine = node
                .cast::<Element>()
                .and_then(|element| match BackgroundAnimation::mount(element, config) {
                    Ok(engine) => Some(engine),
                    Err(err) => {
                        gloo::console::warn!("background mount failed", err);
                        None
                    }
                });
            if let (Some(handle), Some(engine)) = (handle.as_ref(), engine.as_ref()) {
                handle.attach(engine);
            }
            let handle = handle.clone();
            move || {
                if let Some(handle) = handle {
                    handle.detach();
                }
                if let Some(engine) = engine {
                    engine.teardown();
                }
            }
        });
    }

    html! {
        <div ref={node} class="animated-background" aria-hidden="true"></div>
    }
}
