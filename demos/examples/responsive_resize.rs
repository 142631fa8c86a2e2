// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop/mobile switching with a debounced resize and a mobile toggle.
//!
//! Resize events arrive in a burst; only the last width is applied, once the window has
//! been quiet for `resize_debounce_ms`.
//!
//! Run:
//! - `cargo run -p waypost_demos --example responsive_resize`

use kurbo::Size;
use waypost_nav::{Mode, NavConfig, NavEvent, NavigationController};
use waypost_tree::{Document, Dom};

fn main() {
    let mut doc = Document::new(Size::new(1024.0, 768.0));
    let body = doc.body();
    let nav = doc.append(body, "nav", &[("id", "site-nav")]);
    let toggle = doc.append(
        nav,
        "button",
        &[
            ("class", "mobile-menu-toggle"),
            ("aria-controls", "site-menu"),
            ("aria-expanded", "false"),
        ],
    );
    let list = doc.append(nav, "ul", &[("id", "site-menu")]);
    let li = doc.append(list, "li", &[]);
    let products = doc.append(
        li,
        "button",
        &[("aria-haspopup", "true"), ("aria-controls", "products")],
    );
    doc.append_text(products, "Products");
    let panel = doc.append(li, "ul", &[("id", "products")]);
    let li = doc.append(panel, "li", &[]);
    doc.append(li, "a", &[("href", "/widgets")]);

    let mut ctl = NavigationController::new(&mut doc, "#site-nav", NavConfig::default(), ()).unwrap();
    ctl.handle_event(&mut doc, &NavEvent::Click { target: products }, 0);
    assert_eq!(doc.attribute(panel, "aria-hidden").as_deref(), Some("false"));

    // A drag from 1024 down to 375 pixels.
    for (i, width) in [900.0, 720.0, 540.0, 375.0].into_iter().enumerate() {
        let now = 100 + 20 * i as u64;
        ctl.handle_event(&mut doc, &NavEvent::Resize { width }, now);
        ctl.tick(&mut doc, now);
        println!("t={now:>4} width={width:>5} mode={:?}", ctl.mode());
        assert_eq!(ctl.mode(), Mode::Desktop);
    }
    doc.set_viewport(Size::new(375.0, 768.0));
    ctl.tick(&mut doc, 310);
    println!("t= 310 settled mode={:?}", ctl.mode());
    assert_eq!(ctl.mode(), Mode::Mobile);
    assert_eq!(doc.attribute(panel, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(doc.attribute(toggle, "hidden"), None);
    assert_eq!(doc.attribute(list, "aria-hidden").as_deref(), Some("true"));

    ctl.handle_event(&mut doc, &NavEvent::Click { target: toggle }, 400);
    println!(
        "toggle expanded={:?} list classes={:?}",
        doc.attribute(toggle, "aria-expanded"),
        doc.attribute(list, "class")
    );
    assert!(ctl.is_mobile_menu_open());
    assert!(doc.has_class(list, "mobile-open"));

    // Back to desktop: the toggle hides, the list is visible, the open flag is kept.
    ctl.handle_resize(&mut doc, 1280.0);
    assert_eq!(doc.attribute(toggle, "hidden").as_deref(), Some(""));
    assert_eq!(doc.attribute(list, "aria-hidden").as_deref(), Some("false"));
    assert!(ctl.is_mobile_menu_open());

    let listeners = ctl.destroy(&mut doc);
    println!("unsubscribe: {listeners:?}");
}
