//! DOM binding for the "No" button that never lets itself be clicked.

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{EventTarget, HtmlElement, Window};

use crate::error::PageError;
use crate::evasive::{dispatch, mount_slot, unmount_slot, ControlHost, ControlSlot, Trigger};
use crate::geometry::{Displacement, ElementBox, Viewport};
use crate::rng::Xorshift64;

/// Measures the element with `getBoundingClientRect()` and moves it through
/// its inline `transform`.
pub struct DomHost {
    element: HtmlElement,
    window: Window,
}

impl ControlHost for DomHost {
    fn bounding_box(&self) -> ElementBox {
        let r = self.element.get_bounding_client_rect();
        ElementBox::new(r.left(), r.top(), r.width(), r.height())
    }

    fn viewport(&self) -> Viewport {
        let w = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let h = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Viewport::new(w.unwrap_or(0.0), h.unwrap_or(0.0))
    }

    fn apply_transform(&self, css: &str) {
        let _ = self.element.style().set_property("transform", css);
    }
}

pub struct EscapingButton {
    slot: ControlSlot<DomHost, Xorshift64>,
    listeners: Vec<EventListener>,
}

fn listen(
    target: &EventTarget,
    trigger: Trigger,
    slot: ControlSlot<DomHost, Xorshift64>,
) -> EventListener {
    let event = trigger.event_name();
    if trigger.suppresses_default() {
        // touch listeners default to passive, where preventDefault() is ignored
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(target, event, options, move |evt| {
            evt.prevent_default();
            dispatch(&slot, trigger);
        })
    } else {
        EventListener::new(target, event, move |_evt| {
            dispatch(&slot, trigger);
        })
    }
}

impl EscapingButton {
    /// Attach to `element`: hover and touch make it jump, window resizes pull it
    /// back on-screen. The returned value owns the listeners; dropping it or
    /// calling `unmount()` releases them.
    pub fn mount(element: &HtmlElement, padding: f64) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let host = DomHost {
            element: element.clone(),
            window: window.clone(),
        };
        let slot = mount_slot(host, padding, Xorshift64::from_entropy());

        let listeners = vec![
            listen(element, Trigger::PointerEnter, slot.clone()),
            listen(element, Trigger::TouchStart, slot.clone()),
            listen(&window, Trigger::Resize, slot.clone()),
        ];
        page_log!("escaping button mounted (padding {}px)", padding);
        Ok(Self { slot, listeners })
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Current translation, if still mounted.
    pub fn displacement(&self) -> Option<Displacement> {
        self.slot.borrow().as_ref().map(|m| m.control.displacement())
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
        if let Some(ctrl) = unmount_slot(&self.slot) {
            page_log!("escaping button unmounted after {} moves", ctrl.moves());
        }
    }
}

impl Drop for EscapingButton {
    fn drop(&mut self) {
        self.unmount();
    }
}
