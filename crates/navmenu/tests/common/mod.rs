//! Shared page fixture for integration tests

#![allow(dead_code)]

use navmenu::{init, ManualClock, MenuController, MenuOptions, MenuTargets};
use navmenu_dom::{Document, NodeId, Viewport};

/// Sample page:
///
/// ```text
/// nav
/// └ ul (menu)
///   ├ li home      > a
///   ├ li products  > a, ul > li hardware > a, ul > li cables > a
///   │                       li software > a
///   └ li about     > a, ul > li team > a
/// ```
pub type Controller = MenuController<Document, ManualClock>;

pub struct Page {
    pub doc: Document,
    pub nav: NodeId,
    pub menu: NodeId,
    pub home: NodeId,
    pub products: NodeId,
    pub hardware: NodeId,
    pub software: NodeId,
    pub about: NodeId,
    pub products_list: NodeId,
    pub hardware_list: NodeId,
    pub about_list: NodeId,
    pub cables_link: NodeId,
    pub software_link: NodeId,
    pub home_link: NodeId,
}

pub fn page(width: u32, height: u32) -> Page {
    let mut doc = Document::new();
    doc.set_viewport(Viewport::new(width, height));
    let nav = doc.append_element(doc.body(), "nav", &["site-nav"]).unwrap();
    let menu = doc.append_element(nav, "ul", &[]).unwrap();

    let home = doc.append_element(menu, "li", &[]).unwrap();
    let home_link = doc.append_text_element(home, "a", "Home").unwrap();

    let products = doc.append_element(menu, "li", &[]).unwrap();
    doc.append_text_element(products, "a", "Products").unwrap();
    let products_list = doc.append_element(products, "ul", &[]).unwrap();
    let hardware = doc.append_element(products_list, "li", &[]).unwrap();
    doc.append_text_element(hardware, "a", "Hardware").unwrap();
    let hardware_list = doc.append_element(hardware, "ul", &[]).unwrap();
    let cables = doc.append_element(hardware_list, "li", &[]).unwrap();
    let cables_link = doc.append_text_element(cables, "a", "Cables").unwrap();
    let software = doc.append_element(products_list, "li", &[]).unwrap();
    let software_link = doc.append_text_element(software, "a", "Software").unwrap();

    let about = doc.append_element(menu, "li", &[]).unwrap();
    doc.append_text_element(about, "a", "About").unwrap();
    let about_list = doc.append_element(about, "ul", &[]).unwrap();
    let team = doc.append_element(about_list, "li", &[]).unwrap();
    doc.append_text_element(team, "a", "Team").unwrap();

    Page {
        doc,
        nav,
        menu,
        home,
        products,
        hardware,
        software,
        about,
        products_list,
        hardware_list,
        about_list,
        cables_link,
        software_link,
        home_link,
    }
}

pub fn start(doc: Document, nav: NodeId, options: &MenuOptions, clock: &ManualClock) -> Controller {
    init(doc, MenuTargets::new(nav), options, clock.clone())
        .expect("valid options")
        .controller()
        .expect("supported host")
}

pub fn resize(controller: &mut Controller, width: u32, height: u32) {
    controller.host_mut().set_viewport(Viewport::new(width, height));
    controller.on_resize();
}
