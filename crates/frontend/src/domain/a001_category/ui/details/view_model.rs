use crate::domain::a001_category::api;
use crate::domain::a002_product::api as product_api;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::url_state::{use_query_state, use_route_id, RouterNavigator};
use contracts::domain::a001_category::dto::{
    CategoryDetails, CategoryDetailsData, CategoryDetailsVariables, CategoryListItem,
    CategoryProductItem,
};
use contracts::domain::a001_category::urls::{
    category_list_url, category_url, CategoryDialog, CategoryPageTab, CategoryParams,
};
use contracts::shared::grid::Selection;
use contracts::shared::list_view::{PageControls, PageInfo};
use leptos::prelude::*;

/// State and commands of the category detail page
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub id: Memo<Option<String>>,
    pub params: Memo<CategoryParams>,
    pub loader: Loader<CategoryDetailsData>,
    /// Checked rows of the active tab
    pub selection: RwSignal<Selection>,
    /// Delete mutations of the page
    pub mutations: MutationRunner,
    variables: Memo<Option<CategoryDetailsVariables>>,
    navigator: RouterNavigator,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        let id = use_route_id();
        let params = use_query_state::<CategoryParams>();
        let variables = Memo::new(move |_| {
            let id = id.get()?;
            Some(params.with(|p| CategoryDetailsVariables::new(&id, &p.pagination)))
        });

        let vm = Self {
            id,
            params,
            loader: Loader::new(),
            selection: RwSignal::new(Selection::default()),
            mutations: MutationRunner::new(),
            variables,
            navigator: RouterNavigator::new(),
        };

        Effect::new(move |_| {
            if let Some(variables) = vm.variables.get() {
                vm.selection.set(Selection::default());
                vm.loader.load(api::fetch_category(variables));
            }
        });

        vm
    }

    fn reload(&self) {
        if let Some(variables) = self.variables.get_untracked() {
            self.loader.load(api::fetch_category(variables));
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn category(&self) -> Option<CategoryDetails> {
        self.loader
            .data
            .with(|data| data.as_ref().and_then(|d| d.category.clone()))
    }

    /// The query finished but returned no category
    pub fn not_found(&self) -> bool {
        self.loader
            .data
            .with(|data| data.as_ref().is_some_and(|d| d.category.is_none()))
    }

    pub fn title(&self) -> String {
        self.loader
            .data
            .with(|data| {
                data.as_ref()
                    .and_then(|d| d.category.as_ref())
                    .map(|c| c.name.clone())
            })
            .unwrap_or_default()
    }

    pub fn active_tab(&self) -> CategoryPageTab {
        self.params
            .with(|p| p.active_tab.unwrap_or(CategoryPageTab::Categories))
    }

    /// Parent category, or the list for a root category
    pub fn back_url(&self) -> String {
        let parent = self.loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.category.as_ref())
                .and_then(|c| c.parent_id().map(str::to_string))
        });
        match parent {
            Some(parent) => category_url(&parent, None),
            None => category_list_url(None),
        }
    }

    /// `None` until loaded
    pub fn subcategories(&self) -> Option<Vec<CategoryListItem>> {
        self.loader.data.with(|data| {
            let category = data.as_ref()?.category.as_ref()?;
            Some(
                category
                    .children
                    .as_ref()
                    .map(|c| c.nodes())
                    .unwrap_or_default(),
            )
        })
    }

    /// `None` until loaded
    pub fn products(&self) -> Option<Vec<CategoryProductItem>> {
        self.loader.data.with(|data| {
            let category = data.as_ref()?.category.as_ref()?;
            Some(
                category
                    .products
                    .as_ref()
                    .map(|c| c.nodes())
                    .unwrap_or_default(),
            )
        })
    }

    /// Ids of the loaded rows of the active tab
    pub fn loaded_ids(&self) -> Vec<String> {
        match self.active_tab() {
            CategoryPageTab::Categories => self
                .subcategories()
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.id)
                .collect(),
            CategoryPageTab::Products => self
                .products()
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.id)
                .collect(),
        }
    }

    fn page_info(&self) -> Option<PageInfo> {
        let tab = self.active_tab();
        self.loader.data.with(|data| {
            let category = data.as_ref()?.category.as_ref()?;
            match tab {
                CategoryPageTab::Categories => category.children_page_info().cloned(),
                CategoryPageTab::Products => category.products_page_info().cloned(),
            }
        })
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.page_info().as_ref(), self.loader.loading.get())
    }

    pub fn is_dialog_open(&self, kind: CategoryDialog) -> bool {
        self.params
            .with(|p| p.dialog.as_ref().is_some_and(|d| d.kind == kind))
    }

    pub fn bulk_count(&self) -> usize {
        self.params.with(|p| p.bulk_selection.len())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn apply(&self, next: CategoryParams) {
        if let Some(id) = self.id.get_untracked() {
            self.navigator.go(&category_url(&id, Some(&next)));
        }
    }

    pub fn go(&self, url: &str) {
        self.navigator.go(url);
    }

    pub fn set_tab(&self, tab: CategoryPageTab) {
        self.apply(self.params.get_untracked().with_tab(tab));
    }

    pub fn next_page(&self) {
        let current = self.params.get_untracked();
        if let Some(pagination) = self
            .page_info()
            .and_then(|info| current.pagination.next_page(&info))
        {
            self.apply(CategoryParams { pagination, ..current });
        }
    }

    pub fn previous_page(&self) {
        let current = self.params.get_untracked();
        if let Some(pagination) = self
            .page_info()
            .and_then(|info| current.pagination.previous_page(&info))
        {
            self.apply(CategoryParams { pagination, ..current });
        }
    }

    pub fn set_page_size(&self, rows: u32) {
        let mut next = self.params.get_untracked();
        next.pagination.rows = Some(rows);
        next.pagination.reset_cursors();
        self.apply(next);
    }

    pub fn open_delete(&self) {
        self.apply(
            self.params
                .get_untracked()
                .with_dialog(CategoryDialog::Delete, None),
        );
    }

    /// Open the bulk dialog matching the active tab for the checked rows
    pub fn open_bulk_delete(&self) {
        let kind = match self.active_tab() {
            CategoryPageTab::Categories => CategoryDialog::DeleteCategories,
            CategoryPageTab::Products => CategoryDialog::DeleteProducts,
        };
        let mut next = self.params.get_untracked().with_dialog(kind, None);
        next.bulk_selection = self.selection.with_untracked(|s| s.ids().to_vec());
        self.apply(next);
    }

    pub fn close_dialog(&self) {
        self.apply(self.params.get_untracked().without_dialog());
    }

    pub fn delete(&self) {
        let Some(id) = self.id.get_untracked() else {
            return;
        };
        let back_url = self.back_url();
        let navigator = self.navigator;
        self.mutations.run(
            "Category deleted",
            async move { api::delete_category(id).await.map(|p| p.errors) },
            move || navigator.go(&back_url),
        );
    }

    pub fn delete_selected(&self) {
        let params = self.params.get_untracked();
        let ids = params.bulk_selection.clone();
        let Some(kind) = params.dialog.map(|d| d.kind) else {
            return;
        };
        if ids.is_empty() {
            return;
        }

        let vm = *self;
        let on_success = move || {
            // the page may have been left while the request ran
            if vm.params.try_get_untracked().is_none() {
                return;
            }
            vm.selection.try_update(|s| s.clear());
            vm.close_dialog();
            vm.reload();
        };
        match kind {
            CategoryDialog::DeleteCategories => self.mutations.run(
                "Categories deleted",
                async move { api::bulk_delete_categories(ids).await.map(|p| p.errors) },
                on_success,
            ),
            CategoryDialog::DeleteProducts => self.mutations.run(
                "Products deleted",
                async move { product_api::bulk_delete_products(ids).await.map(|p| p.errors) },
                on_success,
            ),
            CategoryDialog::Delete => {}
        }
    }
}
