//! Full-screen overlay ("top sheet") used to host dialogs.
//!
//! The parent decides visibility through the `open` prop. After each render the
//! sheet syncs the `show` class on its element with that prop; the CSS
//! transition lives in `index.html`. The class change is deferred briefly so the
//! browser can paint the initial state first.
//!
//! A click on the backdrop itself or an Escape key press asks the parent to
//! close the sheet through `on_dismiss`.

use log::warn;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

const SHOW_CLASS: &str = "show";
const TOGGLE_DELAY_MS: i32 = 50;
const DISMISS_KEY: &str = "Escape";

pub struct YwMaterialTopSheet {
    pub id: String,
    node_ref: NodeRef,
    /// Visibility last pushed to the DOM.
    shown: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            shown: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_backdrop = {
            let on_dismiss = ctx.props().on_dismiss.clone();
            Callback::from(move |e: MouseEvent| {
                if is_backdrop_target(&e) {
                    on_dismiss.emit(());
                }
            })
        };
        let on_key = {
            let on_dismiss = ctx.props().on_dismiss.clone();
            Callback::from(move |e: KeyboardEvent| {
                if is_dismiss_key(&e.key()) {
                    on_dismiss.emit(());
                }
            })
        };

        html! {
            <div
                class="top-sheet"
                id={self.id.clone()}
                tabindex="-1"
                ref={self.node_ref.clone()}
                onclick={on_backdrop}
                onkeydown={on_key}
            >
                { ctx.props().children.clone() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let open = ctx.props().open;
        if let Some(show) = pending_toggle(self.shown, open) {
            self.shown = show;
            toggle_top_sheet(&self.node_ref, show);
        }
    }
}

/// The class change needed to bring the DOM from `shown` to `open`, if any.
fn pending_toggle(shown: bool, open: bool) -> Option<bool> {
    (shown != open).then_some(open)
}

fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

/// True only for clicks on the overlay itself, not on the dialog inside it.
fn is_backdrop_target(e: &MouseEvent) -> bool {
    match (e.target(), e.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

fn toggle_top_sheet(top_sheet_ref: &NodeRef, show: bool) {
    let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let func = js_sys::Function::new_no_args(&toggle_script(&top_sheet.id(), show));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(&func, TOGGLE_DELAY_MS)
        .is_err()
    {
        warn!("Could not schedule top sheet toggle for #{}", top_sheet.id());
    }

    // Keyboard focus on the sheet so Escape reaches its keydown handler.
    if show {
        top_sheet.focus().ok();
    }
}

fn toggle_script(element_id: &str, show: bool) -> String {
    let method = if show { "add" } else { "remove" };
    format!(
        "document.querySelector('#{}').classList.{}('{}')",
        element_id, method, SHOW_CLASS
    )
}
