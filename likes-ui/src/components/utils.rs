//! Utility functions for UI components

use dioxus::prelude::*;
use likes_common::{Effect, Intent};

/// Route click handler effects to a view's callbacks.
///
/// Views without a navigation callback pass `None`; their handlers never
/// produce navigation effects.
pub(crate) fn emit(
    effects: Vec<Effect>,
    on_dispatch: EventHandler<Intent>,
    on_navigate: Option<EventHandler<String>>,
) {
    for effect in effects {
        match effect {
            Effect::Dispatch(intent) => on_dispatch.call(intent),
            Effect::Navigate(path) => {
                if let Some(on_navigate) = on_navigate {
                    on_navigate.call(path);
                }
            }
        }
    }
}
