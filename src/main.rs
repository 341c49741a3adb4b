//! Landing FX entry point
//!
//! On the web, attaches every effect to the page once the module loads.
//! Natively, runs a short headless preview of the effect state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlCanvasElement, HtmlElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, PointerEvent,
    };

    use landing_fx::consts::*;
    use landing_fx::error::{FxError, FxResult};
    use landing_fx::fx::*;
    use landing_fx::platform::BlobCanvas;
    use landing_fx::platform::dom::{self, set_style};
    use landing_fx::platform::timers;
    use landing_fx::Settings;

    /// Long-lived handles for the page's repeating work
    #[derive(Default)]
    pub struct Page {
        logo: Option<IntervalTask<i32>>,
        glow: Option<IntervalTask<i32>>,
    }

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    /// Attach an event listener that lives as long as the page
    fn listen<E: FromWasmAbi + 'static>(
        target: &web_sys::EventTarget,
        event: &str,
        handler: impl FnMut(E) + 'static,
    ) -> FxResult<()> {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Landing FX starting...");

        match setup(Settings::load()) {
            Ok(page) => {
                log::debug!(
                    "Intervals: logo {:?} ms, glow {:?} ms",
                    page.logo.as_ref().map(|t| t.period_ms()),
                    page.glow.as_ref().map(|t| t.period_ms())
                );
                PAGE.with(|p| *p.borrow_mut() = Some(page));
                log::info!("Landing FX running!");
            }
            Err(e) => log::error!("Landing FX setup aborted: {}", e),
        }
    }

    /// Wire every component in page order; the first missing required element stops setup
    fn setup(settings: Settings) -> FxResult<Page> {
        let document = dom::document()?;
        let mut page = Page::default();

        setup_year(&document)?;
        setup_nav(&document)?;
        setup_typing(&document, &settings)?;
        if settings.effective_tilt() {
            setup_tilt(&document)?;
        }
        setup_reveal(&document)?;
        setup_canvas(&document, &settings)?;
        if settings.effective_parallax() {
            setup_parallax(&document)?;
        }
        setup_stagger(&document)?;
        if settings.effective_logo_motion() {
            page.logo = setup_logo(&document)?;
        }
        if settings.ripples {
            setup_ripples(&document)?;
        }
        if settings.glow {
            page.glow = setup_glow(&document)?;
        }

        Ok(page)
    }

    fn setup_year(document: &Document) -> FxResult<()> {
        let year = js_sys::Date::new_0().get_full_year();
        let el = document
            .get_element_by_id("year")
            .ok_or_else(|| FxError::missing("#year"))?;
        el.set_text_content(Some(&year.to_string()));
        Ok(())
    }

    fn setup_nav(document: &Document) -> FxResult<()> {
        let toggle = dom::query(document, ".nav-toggle")?;
        let links = dom::query_html(document, ".nav-links")?;
        let state = Rc::new(RefCell::new(NavToggle::from_aria(
            toggle.get_attribute("aria-expanded").as_deref(),
        )));

        let button = toggle.clone();
        listen(&toggle, "click", move |_event: MouseEvent| {
            let mut nav = state.borrow_mut();
            nav.toggle();
            if let Err(e) = button.set_attribute("aria-expanded", nav.aria_value()) {
                log::warn!("Failed to set aria-expanded: {:?}", e);
            }
            set_style(&links, "display", nav.links_display());
        })
    }

    fn setup_typing(document: &Document, settings: &Settings) -> FxResult<()> {
        let el = dom::query(document, ".typed")?;
        let state = Rc::new(RefCell::new(TypingState::new(
            &settings.words,
            settings.typing_timing(),
        )));
        timers::set_timeout(TYPING_INTRO_MS, move || typing_tick(el, state))?;
        Ok(())
    }

    fn typing_tick(el: Element, state: Rc<RefCell<TypingState>>) {
        let frame = state.borrow_mut().tick();
        el.set_text_content(Some(&frame.text));
        if let Err(e) = timers::set_timeout(frame.next_delay_ms, move || typing_tick(el, state)) {
            log::warn!("Typing stopped: {}", e);
        }
    }

    fn setup_tilt(document: &Document) -> FxResult<()> {
        let cards = dom::query_all(document, "[data-tilt]")?;
        log::debug!("Tilt on {} cards", cards.len());

        for card in cards {
            let card = dom::into_html(card, "[data-tilt]")?;
            let state: Rc<RefCell<TiltState<i32>>> = Rc::new(RefCell::new(TiltState::default()));

            {
                let card_move = card.clone();
                let state = state.clone();
                listen(&card, "mousemove", move |event: MouseEvent| {
                    let (origin, size) = dom::client_rect(&card_move);
                    let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                    let start = state.borrow_mut().pointer_moved(relative_offset(client, origin, size));
                    if start {
                        tilt_frame(card_move.clone(), state.clone());
                    }
                })?;
            }

            let card_leave = card.clone();
            listen(&card, "mouseleave", move |_event: MouseEvent| {
                let generation = state.borrow_mut().pointer_left();
                let card = card_leave.clone();
                let state = state.clone();
                let settle = move || {
                    let pending = state.borrow_mut().settle(generation);
                    if let Some(handle) = pending {
                        timers::cancel_frame(handle);
                        set_style(&card, "transform", "");
                    }
                };
                if let Err(e) = timers::set_timeout(TILT_SETTLE_MS, settle) {
                    log::warn!("Tilt settle not scheduled: {}", e);
                }
            })?;
        }
        Ok(())
    }

    fn tilt_frame(card: HtmlElement, state: Rc<RefCell<TiltState<i32>>>) {
        let transform = state.borrow_mut().frame();
        set_style(&card, "transform", &transform.to_css());

        let next_state = state.clone();
        match timers::request_frame(move |_time| tilt_frame(card, next_state)) {
            Ok(handle) => {
                state.borrow_mut().frame_scheduled(handle);
            }
            Err(e) => log::warn!("Tilt frame not scheduled: {}", e),
        }
    }

    fn setup_reveal(document: &Document) -> FxResult<()> {
        let items = dom::query_all(document, ".feature, .member, .card")?;
        let state = Rc::new(RefCell::new(RevealSet::new(items.len())));

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute("data-reveal-index")
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    if state.borrow_mut().observe(index, entry.is_intersecting())
                        == RevealAction::Reveal
                    {
                        if let Err(e) = target.class_list().add_1("visible") {
                            log::warn!("Failed to reveal element: {:?}", e);
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for (i, item) in items.iter().enumerate() {
            item.set_attribute("data-reveal-index", &i.to_string())?;
            item.class_list().add_1("reveal")?;
            observer.observe(item);
        }
        log::debug!("Observing {} reveal targets", items.len());
        Ok(())
    }

    struct CanvasLoop {
        canvas: BlobCanvas,
        field: BlobField,
        resize: Debounce<i32>,
    }

    fn setup_canvas(document: &Document, settings: &Settings) -> FxResult<()> {
        let window = dom::window()?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("bg-canvas")
            .ok_or_else(|| FxError::missing("#bg-canvas"))?
            .dyn_into()
            .map_err(|_| FxError::WrongElementType {
                selector: "#bg-canvas".into(),
                expected: "HtmlCanvasElement",
            })?;

        let canvas = BlobCanvas::new(canvas, window.device_pixel_ratio())?;
        let seed = js_sys::Date::now() as u64;
        let field = BlobField::new(settings.blob_count, canvas.css_size(), &settings.palette, seed);
        log::info!("Blob field: {} blobs, seed {}", field.blobs().len(), seed);

        let element = canvas.element().clone();
        let state = Rc::new(RefCell::new(CanvasLoop {
            canvas,
            field,
            resize: Debounce::new(RESIZE_DEBOUNCE_MS),
        }));

        {
            let state = state.clone();
            listen(&window, "resize", move |_event: web_sys::Event| {
                let quiet = state.borrow().resize.quiet_ms();
                let fired = state.clone();
                let scheduled = timers::set_timeout(quiet, move || {
                    let mut s = fired.borrow_mut();
                    s.resize.fired();
                    let dpr = dom::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
                    s.canvas.resize(dpr);
                    let size = s.canvas.css_size();
                    s.field.resize(size);
                });
                match scheduled {
                    Ok(handle) => {
                        if let Some(previous) = state.borrow_mut().resize.rearm(handle) {
                            timers::clear_timeout(previous);
                        }
                    }
                    Err(e) => log::warn!("Resize not scheduled: {}", e),
                }
            })?;
        }

        {
            let state = state.clone();
            let target = element.clone();
            listen(&element, "mousemove", move |event: MouseEvent| {
                let (origin, _) = dom::client_rect(&target);
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                state.borrow_mut().field.pointer.moved(client - origin);
            })?;
        }
        {
            let state = state.clone();
            listen(&element, "mouseleave", move |_event: MouseEvent| {
                state.borrow_mut().field.pointer.left();
            })?;
        }

        canvas_frame(state);
        Ok(())
    }

    fn canvas_frame(state: Rc<RefCell<CanvasLoop>>) {
        {
            let scroll = page_scroll_fraction();
            let mut guard = state.borrow_mut();
            let s = &mut *guard;
            let shapes = s.field.step(scroll);
            s.canvas.draw(shapes);
        }

        // Runs for the page's lifetime, so the frame handle is never kept
        if let Err(e) = timers::request_frame(move |_time| canvas_frame(state)) {
            log::error!("Background loop stopped: {}", e);
        }
    }

    fn page_scroll_fraction() -> f32 {
        let Ok(window) = dom::window() else {
            return 0.0;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let scroll_height = window
            .document()
            .and_then(|d| d.body())
            .map(|b| b.scroll_height() as f64)
            .unwrap_or(0.0);
        scroll_fraction(scroll_y, scroll_height, dom::viewport_height(&window))
    }

    fn setup_parallax(document: &Document) -> FxResult<()> {
        let window = dom::window()?;
        let hero = dom::query_html(document, ".hero")?;
        let inner = dom::query_html(document, ".hero-inner")?;

        {
            let hero = hero.clone();
            let win = window.clone();
            listen(&window, "scroll", move |_event: web_sys::Event| {
                let (origin, _) = dom::client_rect(&hero);
                let progress = scroll_progress(origin.y, dom::viewport_height(&win) as f32);
                set_style(&hero, "transform", &hero_transform(progress));
            })?;
        }

        let fine_pointer = window
            .match_media(FINE_POINTER_QUERY)?
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if !fine_pointer {
            log::debug!("Coarse pointer, skipping hero pointer parallax");
            return Ok(());
        }

        {
            let inner = inner.clone();
            let target = hero.clone();
            listen(&hero, "mousemove", move |event: MouseEvent| {
                let (origin, size) = dom::client_rect(&target);
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                set_style(&inner, "transform", &inner_transform(relative_offset(client, origin, size)));
            })?;
        }
        listen(&hero, "mouseleave", move |_event: MouseEvent| {
            set_style(&inner, "transform", "");
        })
    }

    fn setup_stagger(document: &Document) -> FxResult<()> {
        for (i, el) in dom::query_all(document, ".reveal")?.into_iter().enumerate() {
            let el = dom::into_html(el, ".reveal")?;
            set_style(&el, "transition", &stagger_transition(i));
        }
        Ok(())
    }

    fn setup_logo(document: &Document) -> FxResult<Option<IntervalTask<i32>>> {
        let Some(logo) = dom::query_optional(document, ".logo") else {
            log::debug!("No .logo, skipping logo animation");
            return Ok(None);
        };
        let logo = dom::into_html(logo, ".logo")?;

        let mut task = IntervalTask::new(LOGO_INTERVAL_MS);
        let handle = timers::set_interval(task.period_ms(), move || {
            set_style(&logo, "transform", &logo_transform(timers::now_ms()));
        })?;
        task.started(handle);
        Ok(Some(task))
    }

    fn setup_ripples(document: &Document) -> FxResult<()> {
        let live: Rc<RefCell<(RippleSet, HashMap<u32, Element>)>> =
            Rc::new(RefCell::new((RippleSet::new(), HashMap::new())));

        for btn in dom::query_all(document, ".btn")? {
            let live = live.clone();
            let button = btn.clone();
            let document = document.clone();
            listen(&btn, "pointerdown", move |event: PointerEvent| {
                if !is_primary_button(event.button()) {
                    return;
                }
                if let Err(e) = spawn_ripple(&document, &button, &event, &live) {
                    log::warn!("Ripple failed: {}", e);
                }
            })?;
        }
        Ok(())
    }

    fn spawn_ripple(
        document: &Document,
        button: &Element,
        event: &PointerEvent,
        live: &Rc<RefCell<(RippleSet, HashMap<u32, Element>)>>,
    ) -> FxResult<()> {
        let rect = button.get_bounding_client_rect();
        let geometry = RippleGeometry::at(
            (rect.left(), rect.top(), rect.width(), rect.height()),
            (event.client_x() as f64, event.client_y() as f64),
        );

        let ripple = dom::into_html(document.create_element("span")?, "span.ripple")?;
        ripple.set_class_name("ripple");
        let size = format!("{}px", geometry.size);
        set_style(&ripple, "width", &size);
        set_style(&ripple, "height", &size);
        set_style(&ripple, "left", &format!("{}px", geometry.left));
        set_style(&ripple, "top", &format!("{}px", geometry.top));

        let spawned_at = timers::now_ms();

        // Removal is scheduled before the ripple enters the page so it can never leak
        let expiring = live.clone();
        timers::set_timeout(RIPPLE_LIFETIME_MS, move || {
            let mut guard = expiring.borrow_mut();
            let (set, elements) = &mut *guard;
            for id in set.expire(spawned_at + RIPPLE_LIFETIME_MS as f64) {
                if let Some(el) = elements.remove(&id) {
                    el.remove();
                }
            }
        })?;

        button.append_child(&ripple)?;
        {
            let mut guard = live.borrow_mut();
            let id = guard.0.spawn(spawned_at);
            guard.1.insert(id, ripple.clone().into());
        }

        let animated = ripple.clone();
        let started = timers::request_frame(move |_time| {
            set_style(&animated, "transform", "scale(1)");
            set_style(&animated, "opacity", "0");
            set_style(&animated, "transition", RIPPLE_TRANSITION);
        });
        if let Err(e) = started {
            log::warn!("Ripple animation not scheduled: {}", e);
        }
        Ok(())
    }

    fn setup_glow(document: &Document) -> FxResult<Option<IntervalTask<i32>>> {
        let Some(headline) = dom::query_optional(document, ".headline") else {
            log::debug!("No .headline, skipping glow");
            return Ok(None);
        };

        let pulse = GlowPulse::new(js_sys::Date::now() as u64);
        log::debug!("Headline glow every {} ms", pulse.period_ms);

        let mut task = IntervalTask::new(pulse.period_ms);
        let handle = timers::set_interval(task.period_ms(), move || {
            if let Err(e) = headline.class_list().add_1(GLOW_CLASS) {
                log::warn!("Failed to add glow: {:?}", e);
            }
            let headline = headline.clone();
            let off = timers::set_timeout(pulse.hold_ms, move || {
                if let Err(e) = headline.class_list().remove_1(GLOW_CLASS) {
                    log::warn!("Failed to remove glow: {:?}", e);
                }
            });
            if let Err(e) = off {
                log::warn!("Glow reset not scheduled: {}", e);
            }
        })?;
        task.started(handle);
        Ok(Some(task))
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Landing FX (native) starting...");
    log::info!("Effects attach to a page - build for wasm32 and serve with `trunk serve`");

    preview();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Print one typing cycle and a few seconds of blob motion
#[cfg(not(target_arch = "wasm32"))]
fn preview() {
    use glam::Vec2;
    use landing_fx::Settings;
    use landing_fx::fx::{BlobField, TypingState};

    let settings = Settings::load();

    println!("\nTyping preview:");
    let mut typing = TypingState::new(&settings.words, settings.typing_timing());
    let first = typing.word_index();
    let mut elapsed = 0u32;
    loop {
        let frame = typing.tick();
        println!("  {:>5} ms  {:?}", elapsed, frame.text);
        elapsed += frame.next_delay_ms;
        if typing.word_index() != first {
            break;
        }
    }

    println!("\nBlob preview (1280x720, 3 s at 60 fps):");
    let mut field = BlobField::new(settings.blob_count, Vec2::new(1280.0, 720.0), &settings.palette, 7);
    field.pointer.moved(Vec2::new(640.0, 360.0));
    for _ in 0..180 {
        field.step(0.5);
    }
    for (i, blob) in field.blobs().iter().enumerate() {
        println!(
            "  blob {}: pos ({:7.1}, {:7.1})  speed {:.3}",
            i,
            blob.pos.x,
            blob.pos.y,
            blob.vel.length()
        );
    }
}
