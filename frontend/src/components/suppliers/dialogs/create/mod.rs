use common::model::draft::DraftField;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::suppliers::helpers::{
    field_input_type, field_label, field_placeholder, input_value,
};
use crate::components::suppliers::{Msg, SuppliersPage};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// "New supplier" form hosted on a top sheet. Inputs edit the directory draft
/// field by field; the submit button asks the directory to add it. The close
/// button, Escape and a click on the backdrop all close the sheet.
pub fn create_dialog(component: &SuppliersPage, link: &Scope<SuppliersPage>) -> Html {
    html! {
        <YwMaterialTopSheet
            open={component.create_dialog_open}
            on_dismiss={link.callback(|_| Msg::CloseCreateDialog)}
        >
            <div class="dialog">
                <button
                    class="icon-btn close"
                    title="Закрыть"
                    onclick={link.callback(|_| Msg::CloseCreateDialog)}
                >
                    <i class="material-icons">{"close"}</i>
                </button>
                <h2>{"Новый поставщик"}</h2>
                { for DraftField::ALL.into_iter().map(|field| draft_input(component, link, field)) }
                <button class="primary-btn" onclick={link.callback(|_| Msg::AddSupplier)}>
                    {"Добавить"}
                </button>
            </div>
        </YwMaterialTopSheet>
    }
}

fn draft_input(component: &SuppliersPage, link: &Scope<SuppliersPage>, field: DraftField) -> Html {
    let key = field.key();
    html! {
        <div class="form-row" key={key}>
            <label for={key}>{ field_label(field) }</label>
            <input
                id={key}
                type={field_input_type(field)}
                placeholder={field_placeholder(field)}
                value={component.directory.draft().get(field).to_string()}
                oninput={link.batch_callback(move |e: InputEvent| {
                    input_value(e).map(|value| Msg::UpdateDraft(field, value))
                })}
            />
        </div>
    }
}
