use super::state::PickerOption;
use contracts::domain::a002_product::columns::ProductColumnSelection;
use leptos::prelude::*;
use thaw::*;

/// Popover listing fixed columns and grid attributes as checkboxes
#[component]
pub fn ColumnPicker(
    #[prop(into)] options: Signal<Vec<PickerOption>>,
    columns: RwSignal<ProductColumnSelection>,
    /// Attribute list still loading
    #[prop(into)]
    loading: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="column-picker">
            <div class="column-picker__header">
                <span class="column-picker__title">"Columns"</span>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_close.run(())>
                    "Done"
                </Button>
            </div>
            <ul class="column-picker__list">
                <For
                    each=move || options.get()
                    key=|option| option.token.to_value()
                    children=move |option: PickerOption| {
                        let token = option.token.clone();
                        let checked_token = option.token.clone();
                        view! {
                            <li class="column-picker__item">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || columns.with(|c| c.contains(&checked_token))
                                        on:change=move |_| columns.update(|c| c.toggle(token.clone()))
                                    />
                                    <span>{option.label}</span>
                                </label>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || loading.get()>
                <span class="skeleton skeleton--text"></span>
            </Show>
        </div>
    }
}
