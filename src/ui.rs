use diorama_core::constants::NO_SELECTION_TEXT;
use diorama_core::{ObjectInfo, SelectionChange};
use web_sys as web;

/// The `#info` side panel describing the current selection.
#[derive(Clone)]
pub struct InfoPanel {
    el: web::Element,
}

impl InfoPanel {
    pub fn find(document: &web::Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(|el| Self { el })
    }

    pub fn show(&self, change: &SelectionChange) {
        match change {
            SelectionChange::Selected { info, .. } => self.el.set_inner_html(&info_html(info)),
            SelectionChange::Cleared => self.el.set_text_content(Some(NO_SELECTION_TEXT)),
        }
    }
}

pub fn info_html(info: &ObjectInfo) -> String {
    let p = info.position;
    let s = info.size;
    format!(
        "<div><b>Position</b></div>\
         <div class=\"mono\">x: {:.2}</div>\
         <div class=\"mono\">y: {:.2}</div>\
         <div class=\"mono\">z: {:.2}</div>\
         <br/>\
         <div><b>Size</b></div>\
         <div class=\"mono\">width: {:.2}</div>\
         <div class=\"mono\">height: {:.2}</div>\
         <div class=\"mono\">depth: {:.2}</div>",
        p.x, p.y, p.z, s.x, s.y, s.z
    )
}
