//! Page Event Binder
//!
//! Installs one `click` and one `change` listener on the document and turns
//! events on the page's controls into actions. Controls are matched with
//! `closest()` at event time, so markup added after load is covered too.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::actions::{Action, Patch};
use crate::api;
use crate::config::{
    PageConfig, COMPLETED_SELECTOR, COMPLETE_ALL_SELECTOR, LIST_DELETE_SELECTOR, LIST_ID_ATTR,
    TODO_DELETE_SELECTOR, TODO_ID_ATTR,
};
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::models::{ListId, TodoId};
use crate::page::{Page, WebPage};

/// Bind every handler on `document`. Handlers live for the rest of the page.
pub fn bind(document: Document, config: PageConfig) -> Result<(), JsValue> {
    let page = Rc::new(WebPage::new(document));
    let ctx = AppContext::new(config);

    let on_click = {
        let page = Rc::clone(&page);
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if let Some(action) = event_element(&ev).and_then(|target| click_action(&target)) {
                run(ctx, Rc::clone(&page), action);
            }
        })
    };
    let on_change = {
        let page = Rc::clone(&page);
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if let Some(action) = event_element(&ev).and_then(|target| change_action(&target)) {
                run(ctx, Rc::clone(&page), action);
            }
        })
    };

    let document = page.document();
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // Page-lifetime listeners
    on_click.forget();
    on_change.forget();

    log::info!(
        "bound todo page: {} todo deletes, {} checkboxes, {} list deletes, complete-all {}",
        page.count(TODO_DELETE_SELECTOR),
        page.count(COMPLETED_SELECTOR),
        page.count(LIST_DELETE_SELECTOR),
        if page.count(COMPLETE_ALL_SELECTOR) > 0 { "present" } else { "absent" },
    );
    Ok(())
}

// ========================
// Event Resolution
// ========================

fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor-or-self matching `selector`
fn control(target: &Element, selector: &str) -> Option<Element> {
    target.closest(selector).ok().flatten()
}

fn id_attr<T>(control: &Element, attr: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let id = control.get_attribute(attr).and_then(|raw| parse(&raw));
    if id.is_none() {
        log::warn!("<{}> has no usable {}, ignoring", control.tag_name().to_lowercase(), attr);
    }
    id
}

fn click_action(target: &Element) -> Option<Action> {
    if let Some(button) = control(target, TODO_DELETE_SELECTOR) {
        return id_attr(&button, TODO_ID_ATTR, TodoId::parse).map(Action::DeleteTodo);
    }
    if let Some(button) = control(target, COMPLETE_ALL_SELECTOR) {
        return id_attr(&button, LIST_ID_ATTR, ListId::parse).map(Action::CompleteAll);
    }
    if let Some(button) = control(target, LIST_DELETE_SELECTOR) {
        return id_attr(&button, LIST_ID_ATTR, ListId::parse).map(Action::DeleteList);
    }
    None
}

fn change_action(target: &Element) -> Option<Action> {
    let checkbox = control(target, COMPLETED_SELECTOR)?.dyn_into::<HtmlInputElement>().ok()?;
    let completed = checkbox.checked();
    id_attr(&checkbox, TODO_ID_ATTR, TodoId::parse).map(|id| Action::SetCompleted { id, completed })
}

// ========================
// Execution
// ========================

fn run(ctx: AppContext, page: Rc<WebPage>, action: Action) {
    spawn_local(async move {
        let result = match action.request() {
            Ok(request) => api::send(&ctx.api_base(), &request).await,
            Err(err) => Err(err),
        };
        apply(ctx, &*page, &action, result);
    });
}

/// Reflect a finished request on the page
pub fn apply(ctx: AppContext, page: &impl Page, action: &Action, result: ApiResult<()>) {
    let banner = action.banner();
    if let Err(err) = result {
        log::warn!("{:?} failed: {}", action, err);
        page.set_banner_visible(banner, true);
        return;
    }

    match ctx.with_config(|config| action.on_success(config)) {
        Patch::None => {}
        Patch::RemoveTodoItem(id) => {
            if !page.remove_todo_item(&id) {
                log::debug!("todo {} already gone from page", id);
            }
        }
        Patch::RemoveListItem(id) => {
            if !page.remove_list_item(&id) {
                log::debug!("list {} already gone from page", id);
            }
        }
        Patch::CheckAllCompleted => {
            let count = page.check_all_completed();
            log::debug!("checked {} todos", count);
        }
        Patch::Navigate(path) => page.navigate(path),
    }
    page.set_banner_visible(banner, false);
}
