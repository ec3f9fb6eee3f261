//! Presentation strings and small event helpers for the suppliers page.
//! User-facing text is in Russian.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::draft::DraftField;
use common::store::EmptyState;

/// Form label shown above a draft input.
pub fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => "Название компании",
        DraftField::Contact => "Контактное лицо",
        DraftField::Email => "Email",
        DraftField::Phone => "Телефон",
        DraftField::Category => "Категория",
    }
}

pub fn field_placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => "ООО \"Название\"",
        DraftField::Contact => "Иванов Иван",
        DraftField::Email => "email@example.com",
        DraftField::Phone => "+7 (___) ___-__-__",
        DraftField::Category => "Оптовик, Производитель...",
    }
}

/// HTML input type. Only a browser hint, nothing is validated.
pub fn field_input_type(field: DraftField) -> &'static str {
    match field {
        DraftField::Email => "email",
        _ => "text",
    }
}

pub fn empty_state_message(state: EmptyState) -> &'static str {
    match state {
        EmptyState::NoMatches => "Поставщики не найдены",
        EmptyState::NoSuppliers => "Добавьте первого поставщика",
    }
}

/// Current value of the `<input>` that fired the event, or `None` if the
/// event did not come from an input element.
pub fn input_value(e: InputEvent) -> Option<String> {
    e.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}
