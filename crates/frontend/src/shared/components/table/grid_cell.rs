//! Renders the cells produced by the column projection.

use contracts::shared::grid::{CellContent, HeaderLabel};
use contracts::shared::list_view::SortArrow;
use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GridHeader(
    label: HeaderLabel,
    arrow: Option<SortArrow>,
    #[prop(optional)]
    align_right: bool,
    /// `None` for columns without a sort field
    on_sort: Option<Callback<()>>,
) -> impl IntoView {
    let text = match label {
        HeaderLabel::Text(text) => view! { <span>{text}</span> }.into_any(),
        HeaderLabel::Pending => view! { <span class="skeleton skeleton--text"></span> }.into_any(),
    };
    let class = match (on_sort.is_some(), align_right) {
        (true, true) => "table__sortable-header table__sortable-header--right",
        (true, false) => "table__sortable-header",
        (false, true) => "table__header table__header--right",
        (false, false) => "table__header",
    };

    view! {
        <TableHeaderCell>
            <div
                class=class
                on:click=move |_| {
                    if let Some(on_sort) = on_sort {
                        on_sort.run(());
                    }
                }
            >
                {text}
                {arrow.map(|a| view! { <span class="sort-icon sort-icon--active">{a.indicator()}</span> })}
            </div>
        </TableHeaderCell>
    }
}

#[component]
pub fn GridCell(
    content: CellContent,
    /// Receives checkbox changes of a `Checkbox` cell
    on_toggle: Callback<bool>,
) -> impl IntoView {
    match content {
        CellContent::Skeleton => view! {
            <TableCell><span class="skeleton skeleton--text"></span></TableCell>
        }
        .into_any(),
        CellContent::Checkbox { checked, disabled } => view! {
            <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=checked
                    prop:disabled=disabled
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
            </TableCell>
        }
        .into_any(),
        CellContent::Text(text) => view! { <TableCell>{text}</TableCell> }.into_any(),
        CellContent::Avatar { text, thumbnail } => view! {
            <TableCell>
                <div class="table__avatar">
                    {match thumbnail {
                        Some(url) => view! { <img class="table__thumbnail" src=url alt="" /> }.into_any(),
                        None => view! { <span class="table__thumbnail table__thumbnail--empty"></span> }.into_any(),
                    }}
                    <span>{text}</span>
                </div>
            </TableCell>
        }
        .into_any(),
        CellContent::Status { label, positive } => view! {
            <TableCell>
                <Badge
                    appearance=BadgeAppearance::Tint
                    color=if positive { BadgeColor::Success } else { BadgeColor::Danger }
                >
                    {label}
                </Badge>
            </TableCell>
        }
        .into_any(),
        CellContent::Money(money) => view! {
            <TableCell class="text-right">{format_money(&money)}</TableCell>
        }
        .into_any(),
    }
}
