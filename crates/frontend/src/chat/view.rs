//! Analyst Chat - View Component

use super::message_bubble::MessageBubble;
use super::model::send_chat_request_with_timeout;
use super::view_model::ChatVm;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::chat::ChatOutcome;
use leptos::prelude::*;

/// Example questions offered while the conversation is still empty.
/// Selecting one fills the input; it never auto-submits.
const SUGGESTED_PROMPTS: [&str; 3] = [
    "Show me all tables",
    "Count rows in orders",
    "Who are the top customers?",
];

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[component]
#[allow(non_snake_case)]
pub fn ChatInterface() -> impl IntoView {
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = {
        let messages_container_ref = messages_container_ref.clone();
        move || {
            if let Some(container) = messages_container_ref.get() {
                request_animation_frame(move || {
                    container.set_scroll_top(container.scroll_height());
                });
            }
        }
    };

    // Submit handler: one user message appended, one request dispatched.
    // ChatSession rejects empty input and double submissions on its own.
    let handle_send = Callback::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_| {
            let input = vm.input.get();

            let mut session = vm.session.get();
            let Some(request) = session.submit(&input, now_ms()) else {
                return;
            };
            vm.session.set(session);
            vm.input.set(String::new());
            scroll_to_bottom();

            let scroll_to_bottom = scroll_to_bottom.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match send_chat_request_with_timeout(&request).await {
                    Ok(response) => ChatOutcome::Answer(response),
                    Err(e) => {
                        // Developer-facing detail only; the user sees the
                        // fixed fallback answer.
                        log::error!("chat request failed: {}", e);
                        ChatOutcome::Failed
                    }
                };

                let mut session = vm.session.get();
                session.settle(outcome, now_ms());
                vm.session.set(session);
                scroll_to_bottom();
            });
        }
    });

    let is_loading = move || vm.session.get().awaiting_response;
    let submit_disabled =
        Signal::derive(move || !vm.session.get().can_submit(&vm.input.get()));

    view! {
        <div style="display: flex; height: 100vh; width: 100%; align-items: center; justify-content: center; padding: 16px; background: var(--colorNeutralBackground1);">
            <div style="width: 100%; max-width: 960px; height: 90vh; display: flex; flex-direction: column; overflow: hidden; border: 1px solid var(--colorNeutralStroke2); border-radius: 12px; background: var(--colorNeutralBackground1);">
                // Header
                <div style="padding: 16px; border-bottom: 1px solid var(--colorNeutralStroke2); display: flex; align-items: center; gap: 12px; flex-shrink: 0;">
                    <div style="height: 40px; width: 40px; border-radius: 50%; background: var(--colorBrandBackground); color: white; display: flex; align-items: center; justify-content: center;">
                        {icon("database")}
                    </div>
                    <div>
                        <h1 style="font-size: 18px; font-weight: bold; margin: 0;">
                            "Natural Language Data Analyst"
                        </h1>
                        <p style="font-size: 12px; color: var(--colorBrandForeground1); margin: 0;">
                            "PostgreSQL • LangGraph • MCP"
                        </p>
                    </div>
                </div>

                // Messages area
                <div
                    node_ref=messages_container_ref
                    style="flex: 1; min-height: 0; overflow-y: auto; display: flex; flex-direction: column; gap: 24px; padding: 16px;"
                >
                    // Empty state with suggested prompts
                    {move || {
                        vm.session.get().messages.is_empty().then(|| {
                            view! {
                                <div style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 50vh; gap: 16px; color: var(--colorNeutralForeground3);">
                                    <div style="opacity: 0.3; transform: scale(2.5);">{icon("database")}</div>
                                    <p style="text-align: center; max-width: 360px;">
                                        "Ask me anything about your database. I can analyze schemas and run SQL queries to find answers."
                                    </p>
                                    <div style="display: flex; gap: 8px; flex-wrap: wrap; justify-content: center;">
                                        {SUGGESTED_PROMPTS
                                            .iter()
                                            .map(|&prompt| {
                                                view! {
                                                    <Button
                                                        variant="outline"
                                                        on_click=Callback::new(move |_| {
                                                            vm.input.set(prompt.to_string())
                                                        })
                                                    >
                                                        {prompt}
                                                    </Button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                    }}

                    <For
                        each={move || vm.session.get().messages.into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(idx, _)| *idx
                        let:entry
                    >
                        <MessageBubble message=entry.1 />
                    </For>

                    // Loading bubble while awaiting the response
                    {move || {
                        is_loading().then(|| {
                            view! {
                                <div style="display: flex; width: 100%; justify-content: flex-start;">
                                    <div style="display: flex; flex-direction: row; gap: 8px; max-width: 85%;">
                                        <div style="height: 32px; width: 32px; flex-shrink: 0; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--colorNeutralBackground3);">
                                            {icon("loader")}
                                        </div>
                                        <div style="padding: 10px 14px; border-radius: 12px; border-top-left-radius: 0; background: var(--colorNeutralBackground2); font-size: 14px; color: var(--colorNeutralForeground3);">
                                            "Thinking & Analyzing..."
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>

                // Input area
                <div style="padding: 16px; border-top: 1px solid var(--colorNeutralStroke2); flex-shrink: 0;">
                    <form
                        style="display: flex; gap: 8px;"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    >
                        <div style="flex: 1;">
                            <Input
                                value=vm.input
                                placeholder="Ask a question about your data..."
                                on_input=Callback::new(move |value: String| vm.input.set(value))
                            />
                        </div>
                        <Button button_type="submit" disabled=submit_disabled>
                            {icon("send")}
                        </Button>
                    </form>
                </div>
            </div>
        </div>
    }
}
