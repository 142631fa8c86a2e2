// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard traversal through a menu bar, a dropdown, and a nested submenu.
//!
//! Run:
//! - `cargo run -p waypost_demos --example keyboard_walk`

use kurbo::Size;
use waypost_nav::{Key, LiveRegion, NavConfig, NavEvent, NavigationController, Outcome};
use waypost_tree::{Document, Dom, ElementId};

fn item(doc: &mut Document, list: ElementId, text: &str) -> ElementId {
    let li = doc.append(list, "li", &[]);
    let a = doc.append(li, "a", &[("href", "#")]);
    doc.append_text(a, text);
    a
}

fn trigger(doc: &mut Document, list: ElementId, text: &str, panel: &str) -> (ElementId, ElementId) {
    let li = doc.append(list, "li", &[]);
    let button = doc.append(
        li,
        "button",
        &[("aria-haspopup", "true"), ("aria-controls", panel), ("aria-expanded", "false")],
    );
    doc.append_text(button, text);
    let ul = doc.append(li, "ul", &[("id", panel), ("aria-hidden", "true")]);
    (button, ul)
}

fn main() {
    let mut doc = Document::new(Size::new(1280.0, 800.0));
    let body = doc.body();
    let region = doc.append(body, "div", &[("id", "nav-announcer"), ("aria-live", "polite")]);
    let nav = doc.append(body, "nav", &[("id", "main-nav")]);
    let list = doc.append(nav, "ul", &[("class", "nav-menu")]);

    let home = item(&mut doc, list, "Home");
    let (services, services_panel) = trigger(&mut doc, list, "Services", "services-menu");
    let web = item(&mut doc, services_panel, "Web Design");
    let (hosting, hosting_panel) = trigger(&mut doc, services_panel, "Hosting", "hosting-menu");
    let shared = item(&mut doc, hosting_panel, "Shared");
    item(&mut doc, hosting_panel, "Cloud");
    let development = item(&mut doc, services_panel, "Development");
    let contact = item(&mut doc, list, "Contact");

    let config = NavConfig::default();
    let live = LiveRegion::from_config(&doc, &config);
    let mut ctl = NavigationController::new(&mut doc, "#main-nav", config, live).unwrap();
    println!("{ctl:?}");

    let mut now = 0;
    let mut press = |doc: &mut Document, ctl: &mut NavigationController<Option<LiveRegion>>, key: Key| {
        now += 50;
        let target = doc.active_element().unwrap();
        let outcome = ctl.handle_event(doc, &NavEvent::KeyDown { target, key }, now);
        let focused = doc.active_element().unwrap();
        println!(
            "{key:?} on {:?} -> {:?}, focus {:?}, live region {:?}",
            doc.text_content(target),
            outcome,
            doc.text_content(focused),
            doc.text_content(region)
        );
        outcome
    };

    doc.focus(home);
    press(&mut doc, &mut ctl, Key::ArrowLeft);
    assert_eq!(doc.active_element(), Some(contact));
    press(&mut doc, &mut ctl, Key::ArrowRight);
    press(&mut doc, &mut ctl, Key::ArrowRight);
    assert_eq!(doc.active_element(), Some(services));

    assert_eq!(press(&mut doc, &mut ctl, Key::ArrowDown), Outcome::Handled);
    assert_eq!(doc.active_element(), Some(web));
    assert_eq!(doc.text_content(region), "Services menu opened");

    press(&mut doc, &mut ctl, Key::ArrowUp);
    assert_eq!(doc.active_element(), Some(development));
    press(&mut doc, &mut ctl, Key::Home);
    press(&mut doc, &mut ctl, Key::ArrowDown);
    assert_eq!(doc.active_element(), Some(hosting));

    press(&mut doc, &mut ctl, Key::ArrowRight);
    assert_eq!(doc.active_element(), Some(shared));
    assert_eq!(doc.attribute(hosting, "aria-expanded").as_deref(), Some("true"));

    press(&mut doc, &mut ctl, Key::Escape);
    assert_eq!(doc.active_element(), Some(hosting));
    press(&mut doc, &mut ctl, Key::Escape);
    assert_eq!(doc.active_element(), Some(services));
    assert_eq!(doc.attribute(services_panel, "aria-hidden").as_deref(), Some("true"));

    ctl.tick(&mut doc, 10_000);
    assert_eq!(doc.text_content(region), "");
}
