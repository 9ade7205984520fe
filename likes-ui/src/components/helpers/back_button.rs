//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Returns to the liked content page
#[component]
pub fn BackButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        div { class: "mb-6",
            button {
                class: "inline-flex items-center text-gray-400 hover:text-white transition-colors",
                "data-testid": "back-button",
                onclick: move |_| on_click.call(()),
                ArrowLeftIcon { class: "w-5 h-5 mr-2" }
                "Back to Liked Content"
            }
        }
    }
}
