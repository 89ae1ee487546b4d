//! navmenu demo - Main Entry Point
//!
//! Usage: `navmenu-demo [width] [height]`

use anyhow::{Context, Result, bail};
use navmenu::{Init, ManualClock, MenuEvent, MenuOptions, MenuTargets};
use navmenu_dom::{Document, Viewport, to_html};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let width = parse_arg(args.next(), 480).context("invalid width")?;
    let height = parse_arg(args.next(), 720).context("invalid height")?;

    let doc = sample_page(Viewport::new(width, height))?;
    let nav = doc.get_element_by_id("site-nav").context("sample page has no navigation")?;
    let options = MenuOptions::from_data_options("sticky: 1; animateduration: 300")?;

    let targets = MenuTargets::new(nav);
    let mut controller = match navmenu::init(doc, targets, &options, ManualClock::new())? {
        Init::Ready(controller) => controller,
        Init::Degraded { reason, .. } => bail!("menu degraded: {reason:?}"),
    };
    println!("== initial ({:?})", controller.display_mode());
    println!("{}", to_html(controller.host().tree(), controller.wrapper()));

    controller.handle_event(MenuEvent::Click(controller.toggle()));
    controller.clock().advance(controller.config().animation_duration);
    let fired = controller.run_due_timers();
    tracing::info!("{} timers fired, menu {:?}", fired, controller.primary_state());

    if let Some(entry) = controller.submenus().entries().first().copied() {
        controller.handle_event(MenuEvent::Click(entry.toggle));
    }
    if let Some(&link) = controller.links().last() {
        controller.handle_event(MenuEvent::Focus(link));
    }

    let wrapper = controller.wrapper();
    let doc = controller.into_host();
    println!("== after interaction");
    println!("{}", to_html(doc.tree(), wrapper));
    let body = to_html(doc.tree(), doc.body());
    println!("== body: {}>", body.split('>').next().unwrap_or_default());
    Ok(())
}

fn parse_arg(arg: Option<String>, default: u32) -> Result<u32> {
    match arg {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

/// Three-level navigation inside a `<nav>` measured at 180px
fn sample_page(viewport: Viewport) -> Result<Document> {
    let mut doc = Document::new();
    doc.set_viewport(viewport);
    let nav = doc.append_element(doc.body(), "nav", &["site-nav"])?;
    doc.tree_mut()
        .element_mut(nav)
        .context("nav is not an element")?
        .set_attr("id", "site-nav");
    doc.set_offset_height(nav, 180);
    let menu = doc.append_element(nav, "ul", &[])?;

    for (label, children) in [
        ("Home", &[][..]),
        ("Products", &["Hardware", "Software"][..]),
        ("About", &["Team"][..]),
    ] {
        let item = doc.append_element(menu, "li", &[])?;
        doc.append_text_element(item, "a", label)?;
        if children.is_empty() {
            continue;
        }
        let sub = doc.append_element(item, "ul", &[])?;
        for child in children {
            let sub_item = doc.append_element(sub, "li", &[])?;
            doc.append_text_element(sub_item, "a", child)?;
        }
    }
    Ok(doc)
}
