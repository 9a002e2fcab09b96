//! Analyst Chat - Data Table Component

use contracts::chat::RowSet;
use leptos::prelude::*;

/// Renders a tabular query result below an assistant message.
///
/// The payload is whatever JSON the backend attached to the answer. Anything
/// that is not a non-empty array of objects produces no output at all.
/// Columns are fixed by the first row; cells missing in later rows show a
/// dimmed `null` placeholder.
#[component]
#[allow(non_snake_case)]
pub fn DataTable(data: serde_json::Value) -> impl IntoView {
    let row_set = RowSet::from_json(&data);

    row_set.map(|rs| {
        let header_cells = rs
            .columns
            .iter()
            .map(|col| {
                view! {
                    <th style="position: sticky; top: 0; text-align: left; padding: 8px 12px; font-weight: bold; white-space: nowrap; background: var(--colorNeutralBackground3); color: var(--colorNeutralForeground2);">
                        {col.clone()}
                    </th>
                }
            })
            .collect_view();

        let body_rows = rs
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|cell| {
                        let content = if cell.is_null() {
                            view! {
                                <span style="color: var(--colorNeutralForeground4); font-style: italic;">
                                    "null"
                                </span>
                            }
                            .into_any()
                        } else {
                            view! { <span>{cell.display()}</span> }.into_any()
                        };
                        view! {
                            <td style="padding: 6px 12px; font-family: monospace; font-size: 12px; white-space: nowrap; border-top: 1px solid var(--colorNeutralStroke2);">
                                {content}
                            </td>
                        }
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view();

        view! {
            <div style="margin-top: 8px; width: 100%; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; overflow: hidden;">
                <div style="padding: 8px 12px; background: var(--colorNeutralBackground3); font-size: 13px; font-weight: 500; color: var(--colorNeutralForeground3);">
                    "Data Result"
                </div>
                <div style="max-height: 300px; overflow: auto;">
                    <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                        <thead>
                            <tr>{header_cells}</tr>
                        </thead>
                        <tbody>{body_rows}</tbody>
                    </table>
                </div>
            </div>
        }
    })
}
