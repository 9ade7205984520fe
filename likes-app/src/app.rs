use crate::app_service::AppService;
use crate::config::Config;
use crate::pages::{AppLayout, Likes, PlaylistDetail};
use dioxus::prelude::*;
use likes_common::LikedCollections;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Likes {},
    #[route("/playlist/:playlist_id")]
    PlaylistDetail { playlist_id: String },
}

/// Startup data handed to the component tree (Send-safe)
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Config,
    pub liked: LikedCollections,
}

#[component]
pub fn App() -> Element {
    let context: AppContext = use_context();
    use_context_provider(|| AppService::new(&context));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(feature = "desktop")]
fn make_config(config: &Config) -> dioxus::desktop::Config {
    use dioxus::desktop::{LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(1200, 800));

    dioxus::desktop::Config::default()
        .with_window(window)
        .with_background_color((0x12, 0x12, 0x12, 0xff))
}

pub fn launch_app(context: AppContext) {
    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(make_config(&context.config));

    builder
        // Provide AppContext (Send-safe) - AppService is created inside App
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}
