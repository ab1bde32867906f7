//! Hover-activated reaction menu.

use leptos::prelude::*;

use crate::state::reactions::{Reaction, ReactionMenu, report_reaction};

#[component]
pub fn ReactionPicker() -> impl IntoView {
    let menu = expect_context::<RwSignal<ReactionMenu>>();

    view! {
        <div
            class="reaction-picker"
            on:mouseenter=move |_| menu.update(ReactionMenu::pointer_enter)
            on:mouseleave=move |_| menu.update(ReactionMenu::pointer_leave)
        >
            <button class="composer-bar__icon" title="Reactions">"☺"</button>
            <Show when=move || menu.get().open>
                <div class="reaction-picker__menu">
                    {Reaction::ALL
                        .into_iter()
                        .map(|reaction| {
                            view! {
                                <button
                                    class="reaction-picker__option"
                                    on:click=move |_| {
                                        report_reaction(reaction);
                                    }
                                >
                                    {reaction.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
