use super::view_model::CategoryCreateViewModel;
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::document::set_title;
use crate::shared::url_state::use_route_id;
use contracts::domain::a001_category::urls::{category_list_url, category_url};
use contracts::shared::mutation::SaveButtonState;
use leptos::prelude::*;
use thaw::*;

pub const CREATE_CATEGORY_TITLE: &str = "Create category";

fn save_label(state: SaveButtonState) -> &'static str {
    match state {
        SaveButtonState::Default | SaveButtonState::Loading => "Save",
        SaveButtonState::Success => "Saved",
        SaveButtonState::Error => "Error",
    }
}

/// `/categories/add` and `/categories/:id/add`
#[component]
pub fn CategoryCreatePage() -> impl IntoView {
    let parent_id = use_route_id().get_untracked();
    let back_href = match parent_id.as_deref() {
        Some(id) => category_url(id, None),
        None => category_list_url(None),
    };

    let vm = CategoryCreateViewModel::new(parent_id);
    on_cleanup(move || vm.teardown());
    set_title(CREATE_CATEGORY_TITLE);

    view! {
        <div class="page details-page">
            <PageHeader title=CREATE_CATEGORY_TITLE.to_string() back_href=back_href>
                <></>
            </PageHeader>

            <ErrorBanner error=vm.transport_error />
            {move || {
                vm.form_errors()
                    .into_iter()
                    .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    .collect_view()
            }}

            <div class="details-form">
                <section class="card">
                    <h3 class="card__title">"General information"</h3>
                    <div class="form-group">
                        <label for="name">"Category name"</label>
                        <Input value=vm.name placeholder="Category name" attr:id="name" />
                        {move || vm.field_error("name").map(|e| view! { <div class="form-group__error">{e}</div> })}
                    </div>
                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <Textarea value=vm.description placeholder="Description" attr:rows=6 attr:id="description" />
                        {move || {
                            vm.field_error("descriptionJson")
                                .map(|e| view! { <div class="form-group__error">{e}</div> })
                        }}
                    </div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Search engine preview"</h3>
                    <div class="form-group">
                        <label for="seo_title">"Search engine title"</label>
                        <Input value=vm.seo_title attr:id="seo_title" />
                    </div>
                    <div class="form-group">
                        <label for="seo_description">"Search engine description"</label>
                        <Textarea value=vm.seo_description attr:rows=3 attr:id="seo_description" />
                    </div>
                </section>
            </div>

            <div class="save-bar">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.back()>
                    "Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit()
                    disabled=Signal::derive(move || !vm.can_submit())
                    loading=Signal::derive(move || vm.save_state() == SaveButtonState::Loading)
                >
                    {move || save_label(vm.save_state())}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_label_follows_state() {
        assert_eq!(save_label(SaveButtonState::Default), "Save");
        assert_eq!(save_label(SaveButtonState::Loading), "Save");
        assert_eq!(save_label(SaveButtonState::Success), "Saved");
        assert_eq!(save_label(SaveButtonState::Error), "Error");
    }
}
