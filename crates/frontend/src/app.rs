use crate::chat::ChatInterface;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ChatInterface />
    }
}
