// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent with viewport overflow nudges.
//!
//! The right-most dropdown is laid out past the viewport edge, so opening it pins the
//! panel to the right of its trigger instead.
//!
//! Run:
//! - `cargo run -p waypost_demos --example hover_menu`

use kurbo::{Rect, Size};
use waypost_nav::{Listeners, NavConfig, NavEvent, NavigationController};
use waypost_tree::{Document, Dom, ElementId};

fn dropdown(doc: &mut Document, list: ElementId, text: &str, id: &str) -> (ElementId, ElementId) {
    let li = doc.append(list, "li", &[]);
    let button = doc.append(
        li,
        "button",
        &[("aria-haspopup", "true"), ("aria-controls", id)],
    );
    doc.append_text(button, text);
    let panel = doc.append(li, "ul", &[("id", id)]);
    for entry in ["One", "Two"] {
        let li = doc.append(panel, "li", &[]);
        let a = doc.append(li, "a", &[("href", "#")]);
        doc.append_text(a, entry);
    }
    (button, panel)
}

fn main() {
    let mut doc = Document::new(Size::new(1024.0, 768.0));
    let body = doc.body();
    let nav = doc.append(body, "nav", &[("id", "main-nav")]);
    let list = doc.append(nav, "ul", &[("class", "nav-menu")]);
    let (docs, docs_panel) = dropdown(&mut doc, list, "Docs", "docs-menu");
    let (account, account_panel) = dropdown(&mut doc, list, "Account", "account-menu");
    doc.set_bounds(docs_panel, Rect::new(40.0, 48.0, 240.0, 160.0));
    doc.set_bounds(account_panel, Rect::new(920.0, 48.0, 1120.0, 160.0));

    let config = NavConfig {
        open_on_hover: true,
        ..NavConfig::default()
    };
    let mut ctl = NavigationController::new(&mut doc, "#main-nav", config, ()).unwrap();
    assert!(ctl.listeners().contains(Listeners::ROOT_POINTERMOVE));

    let mut show = |doc: &mut Document, target: Option<ElementId>, now: u64| {
        ctl.handle_event(doc, &NavEvent::PointerMove { target }, now);
        println!(
            "t={now:>3} docs={:?} account={:?} account left/right={:?}/{:?}",
            doc.attribute(docs_panel, "aria-hidden"),
            doc.attribute(account_panel, "aria-hidden"),
            doc.style(account_panel, "left"),
            doc.style(account_panel, "right"),
        );
    };

    show(&mut doc, Some(docs), 0);
    assert_eq!(doc.attribute(docs_panel, "aria-hidden").as_deref(), Some("false"));
    assert_eq!(doc.style(docs_panel, "left"), None);

    show(&mut doc, Some(account), 40);
    assert_eq!(doc.attribute(docs_panel, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(doc.style(account_panel, "right"), Some("0"));
    assert_eq!(doc.style(account_panel, "left"), Some("auto"));

    show(&mut doc, None, 80);
    assert_eq!(doc.attribute(account_panel, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(doc.style(account_panel, "right"), None);
}
