use crate::components::contacts::ContactsPlaceholder;
use crate::components::suppliers::SuppliersPage;
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Suppliers,
    Contacts,
}

pub enum Msg {
    SetTab(Tab),
}

pub struct App {
    active_tab: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: Tab::Suppliers,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.active_tab != tab;
                self.active_tab = tab;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_class = |tab: Tab| classes!("tab-btn", (self.active_tab == tab).then_some("active"));

        // Both tabs stay mounted so the suppliers page keeps its session state
        // while the contacts tab is shown.
        let hidden = |tab: Tab| (self.active_tab != tab).then_some("display:none;");

        html! {
            <div>
                <header class="app-header">
                    <div class="inner">
                        <i class="material-icons">{"shopping_cart"}</i>
                        <h1>{"Управление закупками"}</h1>
                    </div>
                </header>
                <main class="app-main">
                    <div class="tab-bar">
                        <button
                            class={tab_class(Tab::Suppliers)}
                            onclick={link.callback(|_| Msg::SetTab(Tab::Suppliers))}
                        >
                            {"Поставщики"}
                        </button>
                        <button
                            class={tab_class(Tab::Contacts)}
                            onclick={link.callback(|_| Msg::SetTab(Tab::Contacts))}
                        >
                            {"База контактов"}
                        </button>
                    </div>
                    <div style={hidden(Tab::Suppliers)}>
                        <SuppliersPage />
                    </div>
                    <div style={hidden(Tab::Contacts)}>
                        <ContactsPlaceholder />
                    </div>
                </main>
            </div>
        }
    }
}
