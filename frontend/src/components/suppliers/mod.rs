//! Suppliers page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! The page owns a [`common::store::SupplierDirectory`] for the lifetime of the
//! session. Every user action becomes a `Msg`, `update` applies it to the
//! directory, and `view` renders the filtered list plus the creation dialog.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SuppliersPageProps;
pub use state::SuppliersPage;

impl Component for SuppliersPage {
    type Message = Msg;
    type Properties = SuppliersPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        SuppliersPage::new(ctx.props().seeded)
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
