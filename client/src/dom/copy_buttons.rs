//! Copy buttons injected into rendered code blocks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::elements::{query_all, set_attr, set_class, set_style};
use super::events::listen;
use crate::components::copy_button::{CopyButton, CopyView};
use crate::state::copy_button::{CopyFeedback, FEEDBACK_LABEL};
use crate::state::theme::Theme;
use crate::util::browser::{BrowserError, write_clipboard};
use crate::util::text::code_payload;
use crate::util::timer::BrowserScheduler;

type SharedButton = Rc<RefCell<CopyButton<DomCopyBlock, BrowserScheduler>>>;

pub struct DomCopyBlock {
    image: HtmlImageElement,
    feedback: Element,
}

impl CopyView for DomCopyBlock {
    fn render(&self, feedback: CopyFeedback, theme: Theme) {
        self.image.set_src(feedback.icon(theme));
        set_class(&self.feedback, "show", feedback.shows_label());
    }
}

/// Every copy button on the page, so a theme change can recolor them.
#[derive(Clone, Default)]
pub struct CopyButtons {
    theme: Rc<Cell<Theme>>,
    buttons: Rc<RefCell<Vec<SharedButton>>>,
}

impl CopyButtons {
    pub fn new(theme: Theme) -> Self {
        Self { theme: Rc::new(Cell::new(theme)), buttons: Rc::default() }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        for button in self.buttons.borrow().iter() {
            button.borrow().set_theme(theme);
        }
    }

    /// Give every `.content pre` without one a copy button.
    pub fn attach_all(&self, document: &Document) {
        for block in query_all(document, ".content pre") {
            if block.has_attribute("data-copy-init") {
                continue;
            }
            set_attr(&block, "data-copy-init", "1");
            if let Err(err) = self.attach(document, &block) {
                log::debug!("copy button not attached: {err}");
            }
        }
    }

    fn attach(&self, document: &Document, block: &Element) -> Result<(), BrowserError> {
        if let Some(block) = block.dyn_ref::<HtmlElement>() {
            if block.style().get_property_value("position").unwrap_or_default().is_empty() {
                set_style(block, "position", "relative");
            }
        }

        let trigger = document.create_element("button")?;
        trigger.set_class_name("copy-btn");
        let image = document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| BrowserError::Dom("img is not an image element".to_owned()))?;
        image.set_alt("Copy");
        trigger.append_child(&image)?;

        let feedback = document.create_element("div")?;
        feedback.set_class_name("copy-feedback");
        feedback.set_text_content(Some(FEEDBACK_LABEL));

        block.append_child(&trigger)?;
        block.append_child(&feedback)?;

        let view = Rc::new(DomCopyBlock { image, feedback });
        let button: SharedButton = Rc::new(RefCell::new(CopyButton::new(view, BrowserScheduler, self.theme.get())));
        self.buttons.borrow_mut().push(Rc::clone(&button));

        let block = block.clone();
        listen(&trigger, "click", move |_| {
            let button = Rc::clone(&button);
            let text = match block_text(&block) {
                Ok(text) => text,
                Err(err) => {
                    button.borrow().fail(&err);
                    return;
                }
            };
            wasm_bindgen_futures::spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => button.borrow_mut().confirm(),
                    Err(err) => button.borrow().fail(&err),
                }
            });
        });
        Ok(())
    }
}

/// Rendered text of `block` without the injected button and label.
fn block_text(block: &Element) -> Result<String, BrowserError> {
    let clone = block
        .clone_node_with_deep(true)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BrowserError::Dom("code block clone is not an element".to_owned()))?;
    let injected = clone.query_selector_all(".copy-btn, .copy-feedback")?;
    for index in 0..injected.length() {
        if let Some(element) = injected.get(index).as_ref().and_then(|node| node.dyn_ref::<Element>()) {
            element.remove();
        }
    }
    Ok(code_payload(&clone.inner_text()))
}
