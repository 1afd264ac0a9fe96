//! Browser host: resolves the page once, wires listeners, applies effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here. The behavior cores hand back
//! [`Effect`] lists and [`Page::apply`] turns them into DOM calls. A missing
//! element or a failing DOM call is logged and skipped; it never takes the
//! other behaviors down with it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, FocusOptions, FormData, HtmlElement,
    HtmlFormElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::anchor::AnchorFocus;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::consts::{REVEAL_SELECTOR, REVEAL_THRESHOLD, WHATSAPP_PLACEHOLDER};
use crate::contact::ContactSubmission;
use crate::effect::{Effect, Target, TaskId};
use crate::error::SiteError;
use crate::filter::FilterState;
use crate::header::HeaderState;
use crate::lifecycle::{LoadHook, ReadyState};
use crate::links;
use crate::nav::NavState;
use crate::reveal::RevealSet;
use crate::theme::{ThemePalette, ThemeState};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Text of the embedded `#site-config` block, if the page has one.
#[must_use]
pub fn config_text(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content())
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("query {selector:?} failed: {}", SiteError::from(err));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?} failed: {}", SiteError::from(err));
            return Vec::new();
        }
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    out
}

/// Attach a page-lifetime listener to `target`.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], flagged passive so scrolling is never blocked.
fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    match event.target()?.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

fn log_failure(context: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::debug!("{context}: {err}");
    }
}

/// The page context: resolved elements, configuration, and every
/// behavior's state. Built once by [`Page::resolve`].
pub struct Page {
    window: Window,
    document: Document,
    root: Option<Element>,
    body: Option<Element>,
    header: Option<Element>,
    nav: Option<Element>,
    nav_toggle: Option<Element>,
    theme_toggle: Option<Element>,
    theme_icon: Option<Element>,
    theme_meta: Option<Element>,
    filters: Vec<Element>,
    works: Vec<Element>,
    observed: Vec<Element>,
    config: SiteConfig,
    header_state: RefCell<HeaderState>,
    nav_state: RefCell<NavState>,
    filter_state: RefCell<FilterState>,
    reveal: RefCell<RevealSet>,
    anchor: RefCell<AnchorFocus>,
    theme: RefCell<ThemeState>,
    observer: RefCell<Option<IntersectionObserver>>,
    timers: RefCell<HashMap<TaskId, Timeout>>,
}

impl Page {
    /// Look up every anchor element in `document`.
    #[must_use]
    pub fn resolve(window: Window, document: Document, config: SiteConfig) -> Rc<Self> {
        let filters = query_all(&document, ".filter");
        let works = query_all(&document, ".work");
        let observed = query_all(&document, REVEAL_SELECTOR);
        let theme_toggle = document.get_element_by_id("theme-toggle");
        let theme_icon = theme_toggle.as_ref().and_then(|btn| match btn.query_selector(".theme-ico") {
            Ok(found) => found,
            Err(_) => None,
        });

        let filter_state = FilterState::new(
            filters.iter().map(|f| f.get_attribute("data-filter")).collect(),
            works.iter().map(|w| w.get_attribute("data-type")).collect(),
        );
        let reveal = RevealSet::new(observed.len());
        let theme = ThemeState::new(ThemePalette::from(&config));

        Rc::new(Self {
            root: document.document_element(),
            body: document.body().map(Element::from),
            header: query(&document, ".site-header"),
            nav: document.get_element_by_id("nav"),
            nav_toggle: query(&document, ".nav-toggle"),
            theme_meta: query(&document, "meta[name=\"theme-color\"]"),
            theme_toggle,
            theme_icon,
            filters,
            works,
            observed,
            config,
            header_state: RefCell::new(HeaderState::new()),
            nav_state: RefCell::new(NavState::new()),
            filter_state: RefCell::new(filter_state),
            reveal: RefCell::new(reveal),
            anchor: RefCell::new(AnchorFocus::new()),
            theme: RefCell::new(theme),
            observer: RefCell::new(None),
            timers: RefCell::new(HashMap::new()),
            window,
            document,
        })
    }

    /// Wire every behavior whose anchor elements are present.
    pub fn install(self: &Rc<Self>) {
        log_failure("header", self.install_header());
        log_failure("nav", self.install_nav());
        log_failure("filters", self.install_filters());
        log_failure("reveal", self.install_reveal());
        log_failure("anchors", self.install_anchors());
        log_failure("theme", self.install_theme());
        log_failure("contact", self.install_contact());
        self.rewrite_messaging_links();
    }

    // --- Measurements ---

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(_) => self.root.as_ref().map_or(0.0, |r| f64::from(r.scroll_top())),
        }
    }

    fn viewport_width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(w) => w.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        }
    }

    fn header_height(&self) -> Option<f64> {
        self.header
            .as_ref()
            .and_then(|h| h.dyn_ref::<HtmlElement>())
            .map(|h| f64::from(h.offset_height()))
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::Body => self.body.as_ref(),
            Target::Header => self.header.as_ref(),
            Target::Nav => self.nav.as_ref(),
            Target::NavToggle => self.nav_toggle.as_ref(),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::ThemeIcon => self.theme_icon.as_ref(),
            Target::ThemeMeta => self.theme_meta.as_ref(),
            Target::Filter(i) => self.filters.get(i),
            Target::Work(i) => self.works.get(i),
            Target::Observed(i) => self.observed.get(i),
        }
    }

    fn by_id(&self, id: &str) -> Result<Element, SiteError> {
        self.document.get_element_by_id(id).ok_or(SiteError::MissingElement("anchor target"))
    }

    // --- Effects ---

    /// Apply `effects` in order. Failures are logged per effect.
    pub fn apply(self: &Rc<Self>, effects: &[Effect]) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                log::debug!("skipped {effect:?}: {err}");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: &Effect) -> Result<(), SiteError> {
        match effect {
            Effect::ToggleClass { target, class, on } => {
                let el = self.element(*target).ok_or(SiteError::MissingElement("class target"))?;
                el.class_list().toggle_with_force(class, *on)?;
            }
            Effect::SetAttribute { target, name, value } => {
                let el = self.element(*target).ok_or(SiteError::MissingElement("attribute target"))?;
                el.set_attribute(name, value)?;
            }
            Effect::SetStyle { target, property, value } => {
                let el = self
                    .element(*target)
                    .and_then(|el| el.dyn_ref::<HtmlElement>())
                    .ok_or(SiteError::MissingElement("style target"))?;
                let style = el.style();
                if value.is_empty() {
                    style.remove_property(property)?;
                } else {
                    style.set_property(property, value)?;
                }
            }
            Effect::SetText { target, text } => {
                let el = self.element(*target).ok_or(SiteError::MissingElement("text target"))?;
                el.set_text_content(Some(text));
            }
            Effect::SetRootVar { name, value } => {
                let root = self
                    .root
                    .as_ref()
                    .and_then(|el| el.dyn_ref::<HtmlElement>())
                    .ok_or(SiteError::MissingElement("root"))?;
                root.style().set_property(name, value)?;
            }
            Effect::Persist { key, value } => {
                let storage = self.window.local_storage()?.ok_or(SiteError::MissingElement("localStorage"))?;
                storage.set_item(key, value)?;
            }
            Effect::Navigate(href) => {
                self.window.location().set_href(href)?;
            }
            Effect::ScheduleFocus { task, delay_ms, .. } => self.schedule_focus(*task, *delay_ms),
            Effect::CancelFocus(task) => {
                self.timers.borrow_mut().remove(task);
            }
            Effect::Focus { element_id } => {
                let el = self.by_id(element_id)?;
                el.set_attribute("tabindex", "-1")?;
                if let Some(el) = el.dyn_ref::<HtmlElement>() {
                    let options = FocusOptions::new();
                    options.set_prevent_scroll(true);
                    el.focus_with_options(&options)?;
                }
            }
            Effect::ScrollIntoView { element_id } => self.by_id(element_id)?.scroll_into_view(),
            Effect::Unobserve(index) => {
                if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), self.observed.get(*index)) {
                    observer.unobserve(el);
                }
            }
            Effect::RecomputeHeaderHeight => self.recompute_header_height(),
        }
        Ok(())
    }

    fn schedule_focus(self: &Rc<Self>, task: TaskId, delay_ms: u32) {
        let page = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            let effects = page.anchor.borrow_mut().fire(task);
            page.apply(&effects);
        });
        let mut timers = self.timers.borrow_mut();
        // Fired timers are dropped here, never from inside their own callback.
        let anchor = self.anchor.borrow();
        timers.retain(|t, _| anchor.is_pending(*t));
        timers.insert(task, timeout);
    }

    /// Cancel one scheduled focus move.
    pub fn cancel_focus(self: &Rc<Self>, task: TaskId) {
        let effects = self.anchor.borrow_mut().cancel(task);
        self.apply(&effects);
    }

    /// Re-measure the header and publish `--header-h`.
    pub fn recompute_header_height(self: &Rc<Self>) {
        let measured = self.header_height();
        let effects = self.header_state.borrow_mut().recompute_height(measured);
        self.apply(&effects);
    }

    /// Run `work` on window `load`, or right away if `load` already fired
    /// before the module started.
    fn when_loaded<F>(&self, mut work: F) -> Result<(), SiteError>
    where
        F: FnMut() + 'static,
    {
        match LoadHook::from(ReadyState::parse(&self.document.ready_state())) {
            LoadHook::RunNow => {
                work();
                Ok(())
            }
            LoadHook::OnLoad => listen(&self.window, "load", move |_| work()),
        }
    }

    // --- Behaviors ---

    fn install_header(self: &Rc<Self>) -> Result<(), SiteError> {
        let effects = self.header_state.borrow_mut().on_scroll(self.scroll_y());
        self.apply(&effects);
        self.recompute_header_height();

        let page = Rc::clone(self);
        listen_passive(&self.window, "scroll", move |_| {
            let effects = page.header_state.borrow_mut().on_scroll(page.scroll_y());
            page.apply(&effects);
        })?;

        let page = Rc::clone(self);
        listen(&self.window, "resize", move |_| page.recompute_header_height())?;
        let page = Rc::clone(self);
        self.when_loaded(move || page.recompute_header_height())?;

        // The reduced-motion query doubles as a re-layout trigger when system
        // settings change.
        if let Ok(Some(mql)) = self.window.match_media(REDUCED_MOTION_QUERY) {
            let page = Rc::clone(self);
            listen(&mql, "change", move |_| page.recompute_header_height())?;
        }
        Ok(())
    }

    fn install_nav(self: &Rc<Self>) -> Result<(), SiteError> {
        let Some(nav) = self.nav.clone() else {
            return Err(SiteError::MissingElement("#nav"));
        };

        if let Some(toggle) = self.nav_toggle.clone() {
            let page = Rc::clone(self);
            listen(&toggle, "click", move |_| {
                let effects = page.nav_state.borrow_mut().toggle();
                page.apply(&effects);
            })?;

            let page = Rc::clone(self);
            listen(&nav, "click", move |event| {
                let is_link = event_element(&event).is_some_and(|t| matches!(t.matches("a"), Ok(true)));
                if is_link {
                    let effects = page.nav_state.borrow_mut().on_link_click(page.viewport_width());
                    page.apply(&effects);
                }
            })?;

            let effects = self.nav_state.borrow_mut().init();
            self.apply(&effects);
        }

        let page = Rc::clone(self);
        listen(&self.window, "resize", move |_| {
            let effects = page.nav_state.borrow_mut().on_resize(page.viewport_width());
            page.apply(&effects);
        })
    }

    fn install_filters(self: &Rc<Self>) -> Result<(), SiteError> {
        for (index, button) in self.filters.iter().enumerate() {
            let page = Rc::clone(self);
            listen(button, "click", move |_| {
                let effects = page.filter_state.borrow_mut().select(index);
                page.apply(&effects);
            })?;
        }
        Ok(())
    }

    fn install_reveal(self: &Rc<Self>) -> Result<(), SiteError> {
        let reduced_motion = matches!(self.window.match_media(REDUCED_MOTION_QUERY), Ok(Some(mql)) if mql.matches());
        let observer_available =
            matches!(js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")), Ok(true));

        let effects = self.reveal.borrow_mut().arm(reduced_motion, observer_available);
        self.apply(&effects);
        if !self.reveal.borrow().is_armed() {
            log::debug!("reveal disabled (reduced motion: {reduced_motion}, observer: {observer_available})");
            return Ok(());
        }

        let page = Rc::clone(self);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = page.observed.iter().position(|el| *el == target) else {
                    continue;
                };
                let effects = page.reveal.borrow_mut().on_intersect(index, entry.is_intersecting());
                page.apply(&effects);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        for el in &self.observed {
            observer.observe(el);
        }
        *self.observer.borrow_mut() = Some(observer);
        Ok(())
    }

    fn install_anchors(self: &Rc<Self>) -> Result<(), SiteError> {
        let page = Rc::clone(self);
        listen(&self.document, "click", move |event| {
            let Some(link) = event_element(&event).and_then(|t| match t.closest("a[href^=\"#\"]") {
                Ok(found) => found,
                Err(_) => None,
            }) else {
                return;
            };
            let href = link.get_attribute("href").unwrap_or_default();
            let effects = page.anchor.borrow_mut().on_click(&href, |id| page.document.get_element_by_id(id).is_some());
            page.apply(&effects);
        })?;

        let page = Rc::clone(self);
        self.when_loaded(move || {
            let hash = page.window.location().hash().unwrap_or_default();
            let effects = AnchorFocus::on_load(&hash, |id| page.document.get_element_by_id(id).is_some());
            page.apply(&effects);
        })
    }

    fn install_theme(self: &Rc<Self>) -> Result<(), SiteError> {
        let Some(button) = self.theme_toggle.clone() else {
            return Err(SiteError::MissingElement("#theme-toggle"));
        };

        let key = self.theme.borrow().palette.storage_key.clone();
        let stored = match self.window.local_storage() {
            Ok(Some(storage)) => storage.get_item(&key).unwrap_or_default(),
            _ => None,
        };
        let effects = self.theme.borrow_mut().init(stored.as_deref());
        self.apply(&effects);

        let page = Rc::clone(self);
        listen(&button, "click", move |_| {
            let current = page.root.as_ref().and_then(|r| r.get_attribute("data-theme"));
            let effects = page.theme.borrow_mut().toggle(current.as_deref());
            page.apply(&effects);
        })
    }

    fn install_contact(self: &Rc<Self>) -> Result<(), SiteError> {
        let form = match self.document.get_element_by_id("contact-form").map(|el| el.dyn_into::<HtmlFormElement>()) {
            Some(Ok(form)) => form,
            _ => return Err(SiteError::MissingElement("#contact-form")),
        };

        let page = Rc::clone(self);
        let target = form.clone();
        listen(&target, "submit", move |event| {
            event.prevent_default();
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!("contact form unreadable: {}", SiteError::from(err));
                    return;
                }
            };
            let field = |name: &str| data.get(name).as_string();
            let submission = ContactSubmission::new(
                field("nombre").as_deref(),
                field("email").as_deref(),
                field("mensaje").as_deref(),
            );
            let effects = submission.submit(&page.config.contact_email, &page.config.contact_subject);
            page.apply(&effects);
        })
    }

    fn rewrite_messaging_links(&self) {
        let number = self.config.whatsapp_digits();
        if number.is_empty() {
            log::warn!("{}; messaging links left as authored", SiteError::EmptyNumber);
            return;
        }
        let anchors = query_all(&self.document, &format!("a[href*=\"{WHATSAPP_PLACEHOLDER}\"]"));
        let hrefs: Vec<String> = anchors.iter().map(|a| a.get_attribute("href").unwrap_or_default()).collect();
        for (index, href) in links::rewrite_all(hrefs.iter().map(String::as_str), &number) {
            if let Some(anchor) = anchors.get(index) {
                log_failure("messaging link", anchor.set_attribute("href", &href).map_err(SiteError::from));
            }
        }
        log::debug!("rewrote messaging links to {number}");
    }
}
