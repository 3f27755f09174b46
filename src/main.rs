//! Galaxy Folio entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo::events::EventListener;
    use gloo::render::{AnimationFrame, request_animation_frame};
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
        HtmlTextAreaElement, MouseEvent,
    };

    use galaxy_folio::consts::*;
    use galaxy_folio::contact::{ContactController, EmailJsConfig, Notice, transport};
    use galaxy_folio::motion::{
        Cursor, OrbitRing, PhraseSet, RevealTracker, Starfield, Tilt, TypewriterTicker,
    };
    use galaxy_folio::platform::{self, dom};
    use galaxy_folio::{Portfolio, Settings, Theme, view};

    /// A skill icon the frame loop moves around its ring
    struct OrbitIcon {
        outer: bool,
        slot: usize,
        el: HtmlElement,
    }

    /// Animated page state
    struct Page {
        settings: Settings,
        typewriter: TypewriterTicker,
        tilt: Tilt,
        cursor: Cursor,
        inner: OrbitRing,
        outer: OrbitRing,
        reveals: RevealTracker,
        // Elements updated every frame
        typewriter_el: Option<HtmlElement>,
        tilt_el: Option<HtmlElement>,
        cursor_dot: Option<HtmlElement>,
        cursor_ring: Option<HtmlElement>,
        orbit_icons: Vec<OrbitIcon>,
        orbit_path: Option<HtmlElement>,
        reveal_els: Vec<HtmlElement>,
        started_at: f64,
        last_time: Option<f64>,
        last_text: String,
        /// Pending animation frame; dropping it stops the loop
        frame: Option<AnimationFrame>,
    }

    impl Page {
        fn new(document: &Document, portfolio: &Portfolio, settings: Settings) -> Self {
            let phrases = PhraseSet::new(portfolio.hero.phrases.iter().copied())
                .unwrap_or_else(|_| PhraseSet::single(portfolio.hero.name));

            let mut reveal_els = dom::html_elements(document, ".reveal");
            if settings.reduced_motion {
                // Show everything in place, no entrances
                for el in &reveal_els {
                    dom::set_class(el, view::REVEAL_VISIBLE_CLASS, true);
                }
                reveal_els.clear();
            }

            let mut page = Self {
                typewriter: TypewriterTicker::new(
                    phrases,
                    settings.typewriter_pause_ms,
                    platform::seed(),
                ),
                tilt: Tilt::new(settings.effective_tilt_degrees(), settings.tilt_spring),
                cursor: Cursor::new(settings.cursor_spring),
                inner: OrbitRing::inner(portfolio.inner_skills.len()),
                outer: OrbitRing::outer(portfolio.outer_skills.len()),
                reveals: RevealTracker::new(reveal_els.len()),
                typewriter_el: dom::html_by_id(document, "typewriter"),
                tilt_el: dom::html_by_id(document, "hero-scene"),
                cursor_dot: dom::html_by_id(document, "cursor-dot"),
                cursor_ring: dom::html_by_id(document, "cursor-ring"),
                orbit_icons: collect_orbit_icons(document),
                orbit_path: dom::html_by_id(document, "orbit-path-inner"),
                reveal_els,
                started_at: platform::now_ms(),
                last_time: None,
                last_text: String::new(),
                frame: None,
                settings,
            };

            let (w, h) = dom::viewport_size();
            page.cursor.place_at_center(w, h);
            page.typewriter.mount(page.started_at);
            page
        }

        fn update(&mut self, dt: f32, now: f64) {
            self.typewriter.advance(now);
            self.tilt.update(dt);
            if self.settings.custom_cursor {
                self.cursor.update(dt);
            }
        }

        fn render(&mut self, now: f64) {
            let text = self.typewriter.display();
            if text != self.last_text {
                if let Some(el) = &self.typewriter_el {
                    el.set_text_content(Some(&text));
                }
                self.last_text = text;
            }

            if let Some(el) = &self.tilt_el {
                dom::set_transform(el, &self.tilt.css_transform());
            }

            if self.settings.custom_cursor {
                if let Some(el) = &self.cursor_dot {
                    dom::set_transform(el, &Cursor::css_translate(self.cursor.dot()));
                }
                if let Some(el) = &self.cursor_ring {
                    dom::set_transform(el, &Cursor::css_translate(self.cursor.ring()));
                }
            }

            if self.settings.effective_orbit_spin() {
                let elapsed = (now - self.started_at) / 1000.0;
                let t_inner = self.inner.phase(elapsed);
                let t_outer = self.outer.phase(elapsed);
                for icon in &self.orbit_icons {
                    let (ring, t) = if icon.outer {
                        (&self.outer, t_outer)
                    } else {
                        (&self.inner, t_inner)
                    };
                    dom::set_transform(&icon.el, &ring.css_transform(icon.slot, t));
                }
                if let Some(el) = &self.orbit_path {
                    dom::set_transform(el, &self.inner.path_css_transform(t_inner));
                }
            }

            let (_, viewport_height) = dom::viewport_size();
            for (i, el) in self.reveal_els.iter().enumerate() {
                if let Some(visible) = self.reveals.observe(i, dom::bounding_rect(el), viewport_height)
                {
                    dom::set_class(el, view::REVEAL_VISIBLE_CLASS, visible);
                }
            }
        }
    }

    impl Drop for Page {
        fn drop(&mut self) {
            self.typewriter.unmount();
            log::info!("Page unmounted");
        }
    }

    fn collect_orbit_icons(document: &Document) -> Vec<OrbitIcon> {
        dom::html_elements(document, ".orbit-skill")
            .into_iter()
            .map(|el| OrbitIcon {
                outer: el.get_attribute("data-ring").as_deref() == Some("outer"),
                slot: el
                    .get_attribute("data-slot")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
                el,
            })
            .collect()
    }

    /// Everything that must be released on unmount
    struct Mounted {
        _page: Rc<RefCell<Page>>,
        _listeners: Vec<EventListener>,
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Galaxy Folio starting...");
        run_with(Settings::load());
    }

    fn run_with(settings: Settings) {
        let document = dom::document().expect("no document");
        let portfolio = Portfolio::galaxy();

        if let Some(body) = document.body() {
            body.set_class_name(settings.theme.body_class());
        }

        let starfield = if settings.starfield {
            Starfield::generate(platform::seed(), STAR_COUNT)
        } else {
            Starfield::default()
        };
        for (id, html) in view::sections(&portfolio, &starfield) {
            dom::set_inner_html(&document, id, &html);
        }
        log::info!(
            "Rendered {} stars, {} projects",
            starfield.len(),
            portfolio.project_count()
        );

        let page = Rc::new(RefCell::new(Page::new(&document, &portfolio, settings.clone())));
        let contact = Rc::new(RefCell::new(ContactController::new(EmailJsConfig::default())));

        let mut listeners = Vec::new();
        setup_tilt(&document, &page, &mut listeners);
        if settings.custom_cursor {
            setup_cursor(&page, &mut listeners);
        } else {
            dom::set_hidden(&document, "cursor-dot", true);
            dom::set_hidden(&document, "cursor-ring", true);
        }
        setup_contact(&document, contact, &mut listeners);

        schedule_frame(&page);

        MOUNTED.with(|m| {
            *m.borrow_mut() = Some(Mounted {
                _page: page,
                _listeners: listeners,
            })
        });

        log::info!("Galaxy Folio running!");
    }

    /// Drop the page: cancels typewriter timers, removes listeners, stops the frame loop
    pub fn unmount() {
        MOUNTED.with(|m| m.borrow_mut().take());
    }

    /// Persist a theme choice and remount so the new tilt magnitude applies
    pub fn set_theme(name: &str) {
        let Some(theme) = Theme::from_str(name) else {
            log::warn!("Unknown theme '{name}'");
            return;
        };
        let mut settings = Settings::load();
        settings.theme = theme;
        settings.save();
        log::info!("Theme set to {}", theme.as_str());

        unmount();
        run_with(settings);
    }

    fn setup_tilt(
        document: &Document,
        page: &Rc<RefCell<Page>>,
        listeners: &mut Vec<EventListener>,
    ) {
        let Some(hero) = dom::by_id(document, "home") else {
            return;
        };

        {
            let page = Rc::downgrade(page);
            let hero_clone = hero.clone();
            listeners.push(EventListener::new(&hero, "mousemove", move |event: &Event| {
                let (Some(page), Some(event)) = (page.upgrade(), event.dyn_ref::<MouseEvent>())
                else {
                    return;
                };
                let rect = dom::bounding_rect(&hero_clone);
                page.borrow_mut().tilt.pointer_move(
                    rect,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
            }));
        }

        {
            let page = Rc::downgrade(page);
            listeners.push(EventListener::new(&hero, "mouseleave", move |_event: &Event| {
                if let Some(page) = page.upgrade() {
                    page.borrow_mut().tilt.pointer_leave();
                }
            }));
        }
    }

    fn setup_cursor(page: &Rc<RefCell<Page>>, listeners: &mut Vec<EventListener>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let page = Rc::downgrade(page);
        listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
            let (Some(page), Some(event)) = (page.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                return;
            };
            page.borrow_mut()
                .cursor
                .pointer_move(event.client_x() as f32, event.client_y() as f32);
        }));
    }

    fn field_value(document: &Document, id: &str) -> String {
        let Some(el) = dom::by_id(document, id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_button(document: &Document, controller: &ContactController) {
        if let Some(button) = dom::by_id(document, "contact-submit")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(controller.is_loading());
            button.set_text_content(Some(controller.button_label()));
        }
    }

    fn setup_contact(
        document: &Document,
        contact: Rc<RefCell<ContactController>>,
        listeners: &mut Vec<EventListener>,
    ) {
        let Some(form) = dom::by_id(document, "contact-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let form_clone = form.clone();
        listeners.push(EventListener::new(&form, "submit", move |event: &Event| {
            event.prevent_default();
            let Some(document) = dom::document() else {
                return;
            };

            let request = {
                let mut c = contact.borrow_mut();
                c.form.name = field_value(&document, "user_name");
                c.form.email = field_value(&document, "user_email");
                c.form.message = field_value(&document, "message");
                match c.begin_submit() {
                    Ok(request) => request,
                    Err(e) => {
                        log::warn!("Contact form rejected: {e}");
                        dom::alert(&e.to_string());
                        return;
                    }
                }
            };
            set_button(&document, &contact.borrow());

            let contact = contact.clone();
            let form = form_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = transport::send(&request).await;
                let notice = contact.borrow_mut().finish(result);
                if let Some(document) = dom::document() {
                    set_button(&document, &contact.borrow());
                }
                dom::alert(notice.message());
                if notice == Notice::Transmitted {
                    form.reset();
                }
            });
        }));
    }

    fn schedule_frame(page: &Rc<RefCell<Page>>) {
        let weak = Rc::downgrade(page);
        let handle = request_animation_frame(move |time| frame(&weak, time));
        page.borrow_mut().frame = Some(handle);
    }

    fn frame(page: &Weak<RefCell<Page>>, time: f64) {
        // Page gone: unmounted, stop looping
        let Some(page) = page.upgrade() else {
            return;
        };
        {
            let mut p = page.borrow_mut();
            p.frame.take();

            let dt = match p.last_time {
                Some(last) => ((time - last) / 1000.0) as f32,
                None => FRAME_DT,
            };
            p.last_time = Some(time);

            let now = platform::now_ms();
            p.update(dt.min(0.1), now);
            p.render(now);
        }
        schedule_frame(&page);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

/// Tear the page down (timers, listeners, frame loop)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_page::unmount();
}

/// Switch theme ("galaxy" or "minimal") and persist it
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_theme(name: &str) {
    wasm_page::set_theme(name);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Galaxy Folio (native) starting...");
    log::info!("Native mode only previews content - run with `trunk serve` for the page");

    preview_typewriter();

    match serde_json::to_string_pretty(&galaxy_folio::Portfolio::galaxy()) {
        Ok(json) => println!("\n{json}"),
        Err(e) => log::error!("Failed to serialize content: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Print the first few seconds of the hero typewriter
#[cfg(not(target_arch = "wasm32"))]
fn preview_typewriter() {
    use galaxy_folio::Portfolio;
    use galaxy_folio::motion::{PhraseSet, TypewriterTicker};

    let portfolio = Portfolio::galaxy();
    let Ok(phrases) = PhraseSet::new(portfolio.hero.phrases.iter().copied()) else {
        log::warn!("No hero phrases");
        return;
    };
    let mut ticker = TypewriterTicker::new(phrases, galaxy_folio::consts::DEFAULT_PAUSE_MS, 1);
    ticker.mount(0.0);

    println!("Typewriter preview:");
    let mut now = 0.0;
    while now < 12_000.0 {
        now += 50.0;
        if ticker.advance(now) {
            println!("{:>6.0} ms  {}", now, ticker.display());
        }
    }
}
