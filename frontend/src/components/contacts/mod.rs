use yew::{html, Component, Context, Html};

/// Contacts tab. Only a placeholder card for now; it has no behavior.
pub struct ContactsPlaceholder;

impl Component for ContactsPlaceholder {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactsPlaceholder
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="card empty">
                <i class="material-icons">{"groups"}</i>
                <p>{"Здесь будут отображаться все контакты из базы поставщиков"}</p>
            </div>
        }
    }
}
