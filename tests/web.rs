// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

use valentine_page::page::escaping_button::EscapingButton;
use valentine_page::{page, PageConfig, Variant};

wasm_bindgen_test_configure!(run_in_browser);

fn button_at(left: f64, top: f64) -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let btn: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    btn.set_text_content(Some("No..."));
    btn.style().set_css_text(&format!(
        "position:fixed;left:{}px;top:{}px;width:100px;height:40px;",
        left, top
    ));
    doc.body().unwrap().append_child(&btn).unwrap();
    btn
}

fn fire(target: &web_sys::EventTarget, name: &str) {
    let evt = Event::new(name).unwrap();
    target.dispatch_event(&evt).unwrap();
}

#[wasm_bindgen_test]
fn hover_moves_button() {
    let btn = button_at(10.0, 10.0);
    let ctl = EscapingButton::mount(&btn, 0.0).unwrap();
    fire(btn.as_ref(), "mouseenter");
    let d = ctl.displacement().unwrap();
    assert!(d.x != 0.0 || d.y != 0.0);
    btn.remove();
}

#[wasm_bindgen_test]
fn touchstart_moves_button_and_cancels_default() {
    let btn = button_at(10.0, 10.0);
    let ctl = EscapingButton::mount(&btn, 0.0).unwrap();
    let init = EventInit::new();
    init.set_cancelable(true);
    let evt = Event::new_with_event_init_dict("touchstart", &init).unwrap();
    btn.dispatch_event(&evt).unwrap();
    assert!(evt.default_prevented());
    let d = ctl.displacement().unwrap();
    assert!(d.x != 0.0 || d.y != 0.0);

    // hover does not touch the default action
    let hover = Event::new_with_event_init_dict("mouseenter", &init).unwrap();
    btn.dispatch_event(&hover).unwrap();
    assert!(!hover.default_prevented());
    drop(ctl);
    btn.remove();
}

#[wasm_bindgen_test]
fn resize_after_unmount_is_ignored() {
    let win = web_sys::window().unwrap();
    let width = win.inner_width().unwrap().as_f64().unwrap();
    // right edge past the viewport so a live resize listener would move it
    let btn = button_at(width - 20.0, 10.0);
    let mut ctl = EscapingButton::mount(&btn, 0.0).unwrap();
    ctl.unmount();
    let before = btn.style().get_property_value("transform").unwrap();
    fire(win.as_ref(), "resize");
    let after = btn.style().get_property_value("transform").unwrap();
    assert_eq!(before, after);
    assert!(!ctl.is_mounted());
    btn.remove();
}

#[wasm_bindgen_test]
fn resize_pulls_clipped_button_back() {
    let win = web_sys::window().unwrap();
    let width = win.inner_width().unwrap().as_f64().unwrap();
    let btn = button_at(width - 20.0, 10.0);
    let ctl = EscapingButton::mount(&btn, 0.0).unwrap();
    fire(win.as_ref(), "resize");
    let rect = btn.get_bounding_client_rect();
    assert!(rect.right() <= width + 0.5, "right {} > {}", rect.right(), width);
    drop(ctl);
    btn.remove();
}

#[wasm_bindgen_test]
fn page_mount_accept_unmount() {
    page::mount(PageConfig::for_variant(Variant::Classic)).unwrap();
    assert_eq!(page::is_accepted(), Some(false));
    assert!(page::escaping_displacement().is_some());
    page::accept();
    assert_eq!(page::is_accepted(), Some(true));
    assert!(page::escaping_displacement().is_none());
    assert!(page::unmount());
    assert!(!page::is_mounted());
    assert!(!page::unmount());
}
