//! Hidden `<audio>` element plus the first-gesture unlock listeners.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement, HtmlElement};

use crate::audio::{AudioAction, AudioGate, AutoplayMode, GESTURE_EVENTS};
use crate::config::{PageConfig, Variant};
use crate::error::PageError;

use super::create_html;

struct AudioInner {
    element: HtmlAudioElement,
    gate: AudioGate,
    prompt: HtmlElement,
    accepted: bool,
    gestures: Vec<EventListener>,
}

type SharedAudio = Rc<RefCell<AudioInner>>;

pub struct BackgroundAudio {
    inner: SharedAudio,
}

fn autoplay_mode(variant: Variant) -> AutoplayMode {
    match variant {
        Variant::Classic => AutoplayMode::Audible,
        Variant::Padded => AutoplayMode::MutedUntilGesture,
    }
}

impl BackgroundAudio {
    /// Create the audio element under `parent`, kick off autoplay and listen
    /// for the first click / touch / key press on the window.
    pub fn mount(
        doc: &Document,
        parent: &HtmlElement,
        config: &PageConfig,
    ) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let element = HtmlAudioElement::new_with_src(&config.audio_src)?;
        element.set_loop(true);
        element.set_autoplay(true);
        element.set_preload("auto");
        element.set_volume(config.volume);
        element.style().set_property("display", "none")?;
        parent.append_child(&element)?;

        let prompt = create_html(doc, "div")?;
        prompt.set_class_name("vp-audio-prompt");
        prompt.set_text_content(Some("Tap anywhere for a melody..."));
        parent.append_child(&prompt)?;

        let inner = Rc::new(RefCell::new(AudioInner {
            element,
            gate: AudioGate::new(autoplay_mode(config.variant)),
            prompt,
            accepted: false,
            gestures: Vec::new(),
        }));
        inner.borrow().sync_prompt();

        let action = inner.borrow_mut().gate.start();
        perform(&inner, action);

        let gestures = GESTURE_EVENTS
            .iter()
            .map(|&event| {
                let inner_evt = inner.clone();
                EventListener::new(&window, event, move |_evt| {
                    let action = inner_evt.borrow_mut().activate();
                    perform(&inner_evt, action);
                })
            })
            .collect();
        inner.borrow_mut().gestures = gestures;
        Ok(Self { inner })
    }

    /// Unmute and play; used by the "Yes" button as a backup unlock.
    pub fn activate(&self) {
        let action = self.inner.borrow_mut().activate();
        perform(&self.inner, action);
    }

    /// Hide the hint once the question has been answered.
    pub fn set_accepted(&self, accepted: bool) {
        let mut st = self.inner.borrow_mut();
        st.accepted = accepted;
        st.sync_prompt();
    }

    pub fn unmount(&self) {
        // take the listeners out before dropping them so no borrow is held
        let gestures = std::mem::take(&mut self.inner.borrow_mut().gestures);
        drop(gestures);
        let st = self.inner.borrow();
        let _ = st.element.pause();
        st.element.remove();
        st.prompt.remove();
    }
}

impl Drop for BackgroundAudio {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl AudioInner {
    fn activate(&mut self) -> AudioAction {
        let action = self.gate.activate();
        if action != AudioAction::Nothing {
            page_log!("audio unlocked by user gesture");
            // This may run inside one of the gesture handlers, which must not
            // free its own closure mid-call: drop them once the event is done.
            let gestures = std::mem::take(&mut self.gestures);
            wasm_bindgen_futures::spawn_local(async move { drop(gestures) });
        }
        self.sync_prompt();
        action
    }

    fn sync_prompt(&self) {
        let display = if self.gate.show_prompt(self.accepted) {
            "block"
        } else {
            "none"
        };
        let _ = self.prompt.style().set_property("display", display);
    }

    fn settle(&mut self, request: u32, ok: bool) {
        if !self.gate.on_play_result(request, ok) {
            page_log!("ignoring stale play() result #{}", request);
            return;
        }
        self.sync_prompt();
    }
}

fn perform(inner: &SharedAudio, action: AudioAction) {
    let AudioAction::Play { muted, request } = action else {
        return;
    };
    let promise = {
        let st = inner.borrow();
        st.element.set_muted(muted);
        st.element.play()
    };
    match promise {
        Ok(promise) => {
            let inner = inner.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let ok = match JsFuture::from(promise).await {
                    Ok(_) => true,
                    Err(err) => {
                        page_warn!("audio play rejected (muted={}): {:?}", muted, err);
                        false
                    }
                };
                inner.borrow_mut().settle(request, ok);
            });
        }
        Err(err) => {
            page_warn!("audio play failed: {:?}", err);
            inner.borrow_mut().settle(request, false);
        }
    }
}
