//! Browser page: builds the DOM, owns every listener, tears it all down again.
//!
//! State lives in a thread-local because every entry point is a JS callback on
//! the single UI thread. Nothing here runs per frame; the hearts and the burst
//! are CSS animations generated once.

pub mod audio;
pub mod escaping_button;
mod markup;

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use crate::config::PageConfig;
use crate::effects::{fall_keyframes, spawn_burst, spawn_hearts, BurstStyle, HeartStyle};
use crate::error::PageError;
use crate::geometry::Displacement;
use crate::rng::Xorshift64;

use self::audio::BackgroundAudio;
use self::escaping_button::EscapingButton;

struct PageState {
    config: PageConfig,
    doc: Document,
    root: HtmlElement,
    question: HtmlElement,
    answer: HtmlElement,
    escaping: Option<EscapingButton>,
    audio: Option<BackgroundAudio>,
    accepted: bool,
    rng: Xorshift64,
    // kept alive for the page lifetime
    _listeners: Vec<EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<PageState>> = const { RefCell::new(None) };
}

pub(crate) fn create_html(doc: &Document, tag: &str) -> Result<HtmlElement, PageError> {
    doc.create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::Dom(format!("<{}> is not an HtmlElement", tag)))
}

/// Build the page into `document.body`. An already mounted page is torn down first.
pub fn mount(config: PageConfig) -> Result<(), PageError> {
    unmount();
    let win = window().ok_or(PageError::NoWindow)?;
    let doc = win.document().ok_or(PageError::NoDocument)?;
    let body = doc.body().ok_or(PageError::NoBody)?;
    let wording = markup::wording_for(config.variant);
    let mut rng = Xorshift64::from_entropy();

    let root = create_html(&doc, "main")?;
    root.set_class_name("vp-root");
    root.style().set_property("background", wording.background)?;

    let style = create_html(&doc, "style")?;
    let heart_style = HeartStyle::for_variant(config.variant);
    let css = format!("{}{}", markup::BASE_CSS, fall_keyframes(&heart_style));
    style.set_text_content(Some(&css));
    root.append_child(&style)?;

    // Falling hearts
    let sky = create_html(&doc, "div")?;
    sky.set_class_name("vp-sky");
    let mut sky_html = String::new();
    for heart in spawn_hearts(config.heart_count, &heart_style, &mut rng) {
        sky_html.push_str(&format!(
            "<div class=\"vp-falling\" style=\"{}\">{}</div>",
            heart.inline_style(),
            markup::heart_svg("", "white")
        ));
    }
    sky.set_inner_html(&sky_html);
    root.append_child(&sky)?;

    // Card: question and (hidden) answer panels
    let card = create_html(&doc, "div")?;
    card.set_class_name("vp-card");
    let question = create_html(&doc, "div")?;
    question.set_inner_html(&markup::question_html(&wording));
    let answer = create_html(&doc, "div")?;
    answer.set_inner_html(&markup::answer_html(&wording));
    answer.style().set_property("display", "none")?;
    card.append_child(&question)?;
    card.append_child(&answer)?;
    root.append_child(&card)?;

    let footer = create_html(&doc, "footer")?;
    footer.set_class_name("vp-footer");
    footer.set_inner_html(wording.footer);
    root.append_child(&footer)?;

    // "No..." button goes next to "Yes" in the button row
    let row = question
        .query_selector(".vp-buttons")?
        .ok_or_else(|| PageError::Dom("button row missing".into()))?;
    let no_btn = create_html(&doc, "button")?;
    no_btn.set_class_name("vp-no");
    no_btn.set_text_content(Some(wording.no_label));
    row.append_child(&no_btn)?;
    let escaping = EscapingButton::mount(&no_btn, config.padding)?;

    let yes_btn = question
        .query_selector(".vp-yes")?
        .ok_or_else(|| PageError::Dom("yes button missing".into()))?;
    let yes_listener = EventListener::new(&yes_btn, "click", |evt| {
        evt.stop_propagation();
        accept();
    });

    let audio = BackgroundAudio::mount(&doc, &root, &config)?;
    // listeners above are released by their guards if this fails
    body.append_child(&root)?;

    page_log!(
        "page mounted: {:?}, {} hearts, padding {}px",
        config.variant,
        config.heart_count,
        config.padding
    );
    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(PageState {
            config,
            doc,
            root,
            question,
            answer,
            escaping: Some(escaping),
            audio: Some(audio),
            accepted: false,
            rng,
            _listeners: vec![yes_listener],
        });
    });
    Ok(())
}

/// Remove the page and release every listener. Returns false when nothing was mounted.
pub fn unmount() -> bool {
    let state = PAGE.with(|cell| cell.borrow_mut().take());
    match state {
        Some(mut st) => {
            st.escaping = None;
            st.audio = None;
            st.root.remove();
            page_log!("page unmounted");
            true
        }
        None => false,
    }
}

/// "Yes" was chosen: swap the card, burst the hearts, drop the runaway button.
pub fn accept() {
    PAGE.with(|cell| {
        if let Some(st) = cell.borrow_mut().as_mut() {
            if let Err(e) = st.accept() {
                page_warn!("accept failed: {}", e);
            }
        }
    });
}

pub fn is_mounted() -> bool {
    PAGE.with(|cell| cell.borrow().is_some())
}

/// `Some(accepted)` while mounted.
pub fn is_accepted() -> Option<bool> {
    PAGE.with(|cell| cell.borrow().as_ref().map(|st| st.accepted))
}

/// Current translation of the escaping button, if it is still on the page.
pub fn escaping_displacement() -> Option<Displacement> {
    PAGE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|st| st.escaping.as_ref())
            .and_then(|b| b.displacement())
    })
}

impl PageState {
    fn accept(&mut self) -> Result<(), PageError> {
        if self.accepted {
            return Ok(());
        }
        self.accepted = true;
        self.escaping = None;
        self.question.style().set_property("display", "none")?;
        self.answer.style().set_property("display", "block")?;
        self.root.class_list().add_1("vp-accepted")?;
        if let Some(audio) = &self.audio {
            audio.activate();
            audio.set_accepted(true);
        }
        self.spawn_burst()
    }

    fn spawn_burst(&mut self) -> Result<(), PageError> {
        let win = window().ok_or(PageError::NoWindow)?;
        let w = win.inner_width()?.as_f64().unwrap_or(0.0);
        let h = win.inner_height()?.as_f64().unwrap_or(0.0);
        let style = BurstStyle::for_variant(self.config.variant);
        let count = self.config.particle_count;
        let particles = spawn_burst(count, w / 2.0, h / 2.0, &style, &mut self.rng);

        let layer = create_html(&self.doc, "div")?;
        layer.set_class_name("vp-burst");
        let mut css = String::new();
        let mut html = String::new();
        for p in &particles {
            css.push_str(&p.keyframes(&style));
            html.push_str(&format!(
                "<div class=\"vp-particle\" style=\"{}\">{}</div>",
                p.inline_style(&style),
                markup::heart_svg("", "currentColor")
            ));
        }
        layer.set_inner_html(&format!("<style>{}</style>{}", css, html));
        self.root.append_child(&layer)?;
        page_log!("celebration: {} hearts", particles.len());
        Ok(())
    }
}
