//! View rendering for the suppliers page: search bar, "add" button, the
//! filtered supplier cards (or an empty-state card) and the creation dialog.

use yew::html::Scope;
use yew::prelude::*;

use common::model::supplier::Supplier;

use super::dialogs::create::create_dialog;
use super::helpers::{empty_state_message, input_value};
use super::messages::Msg;
use super::state::SuppliersPage;

pub fn view(component: &SuppliersPage, ctx: &Context<SuppliersPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="suppliers-root">
            { build_toolbar(component, link) }
            { build_list(component, link) }
            { create_dialog(component, link) }
        </div>
    }
}

fn build_toolbar(component: &SuppliersPage, link: &Scope<SuppliersPage>) -> Html {
    html! {
        <div class="toolbar">
            <div class="search">
                <i class="material-icons">{"search"}</i>
                <input
                    placeholder="Поиск поставщиков..."
                    value={component.directory.search_term().to_string()}
                    oninput={link.batch_callback(|e: InputEvent| input_value(e).map(Msg::SetSearchTerm))}
                />
            </div>
            <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreateDialog)}>
                <i class="material-icons">{"add"}</i>
                {"Добавить поставщика"}
            </button>
        </div>
    }
}

fn build_list(component: &SuppliersPage, link: &Scope<SuppliersPage>) -> Html {
    if let Some(state) = component.directory.empty_state() {
        return html! {
            <div class="card-grid">
                <div class="card empty">
                    <i class="material-icons">{"inventory_2"}</i>
                    <p>{ empty_state_message(state) }</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="card-grid">
            { for component.directory.filtered_view().into_iter().map(|s| supplier_card(s, link)) }
        </div>
    }
}

fn supplier_card(supplier: &Supplier, link: &Scope<SuppliersPage>) -> Html {
    let on_delete = {
        let id = supplier.id.clone();
        link.callback(move |_| Msg::DeleteSupplier(id.clone()))
    };

    html! {
        <div class="card supplier-card" key={supplier.id.to_string()}>
            <div>
                <h3>{ supplier.name.clone() }</h3>
                <p class="category">{ supplier.category.clone() }</p>
                { detail_line("person", &supplier.contact) }
                { optional_line("mail", &supplier.email) }
                { optional_line("phone", &supplier.phone) }
            </div>
            <button class="icon-btn" title="Удалить" onclick={on_delete}>
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}

fn detail_line(icon: &'static str, text: &str) -> Html {
    html! {
        <div class="line">
            <i class="material-icons">{ icon }</i>
            <span>{ text.to_string() }</span>
        </div>
    }
}

fn optional_line(icon: &'static str, text: &str) -> Html {
    if text.is_empty() {
        html! {}
    } else {
        detail_line(icon, text)
    }
}
