use leptos::prelude::*;
use thaw::*;

/// Row of tab buttons; the active one is highlighted
#[component]
pub fn TabBar(
    /// `(code, label)` pairs in display order
    #[prop(into)]
    tabs: Signal<Vec<(String, String)>>,
    #[prop(into)] active: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="tab-bar">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|(code, label)| {
                        let selected = code.clone();
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if active.with(|active| *active == code) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                size=ButtonSize::Small
                                on_click=move |_| on_select.run(selected.clone())
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()
            }}
        </Flex>
    }
}
