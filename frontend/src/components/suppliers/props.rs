use yew::prelude::*;

/// Properties for the `SuppliersPage`.
#[derive(Properties, PartialEq, Clone)]
pub struct SuppliersPageProps {
    /// Start the session from the built-in demo directory instead of an empty
    /// one. Read once, when the component is created.
    #[prop_or(true)]
    pub seeded: bool,
}
