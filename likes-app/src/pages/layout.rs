use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        main { class: "min-h-screen bg-[#121212]", Outlet::<Route> {} }
    }
}
