//! Analyst Chat - Message Bubble Component

use super::data_table::DataTable;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use contracts::chat::ChatMessage;
use leptos::prelude::*;

/// One conversation turn: avatar plus content bubble.
///
/// User turns sit on the right and render their text verbatim, whitespace
/// preserved, never interpreted as markup. Assistant turns sit on the left,
/// render markdown, and show the data table below the bubble when the
/// message carries a tabular payload.
#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();

    let content = if is_user {
        view! {
            <div style="white-space: pre-wrap;">{message.content.clone()}</div>
        }
        .into_any()
    } else {
        view! {
            <div class="markdown-content" inner_html=render_markdown(&message.content)></div>
        }
        .into_any()
    };

    let table = (!is_user)
        .then(|| message.data.clone())
        .flatten()
        .map(|data| view! { <DataTable data=data /> });

    view! {
        <div style=if is_user {
            "display: flex; width: 100%; justify-content: flex-end;"
        } else {
            "display: flex; width: 100%; justify-content: flex-start;"
        }>
            <div style=if is_user {
                "display: flex; flex-direction: row-reverse; gap: 8px; max-width: 85%;"
            } else {
                "display: flex; flex-direction: row; gap: 8px; max-width: 85%;"
            }>
                <div style=if is_user {
                    "height: 32px; width: 32px; flex-shrink: 0; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--colorBrandBackground); color: white;"
                } else {
                    "height: 32px; width: 32px; flex-shrink: 0; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--colorPaletteGreenBackground3); color: white;"
                }>
                    {if is_user { icon("user") } else { icon("bot") }}
                </div>

                <div style="display: flex; flex-direction: column; gap: 8px; min-width: 0;">
                    <div style=if is_user {
                        "padding: 10px 14px; border-radius: 12px; border-top-right-radius: 0; background: var(--colorBrandBackground2); font-size: 14px; line-height: 1.5;"
                    } else {
                        "padding: 10px 14px; border-radius: 12px; border-top-left-radius: 0; background: var(--colorNeutralBackground2); font-size: 14px; line-height: 1.5;"
                    }>
                        {content}
                    </div>
                    {table}
                </div>
            </div>
        </div>
    }
}
