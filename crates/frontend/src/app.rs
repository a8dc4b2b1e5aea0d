use crate::checker::ui::CheckerPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <CheckerPage /> }
}
