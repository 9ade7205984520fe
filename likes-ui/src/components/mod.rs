//! Shared UI components

pub mod helpers;
pub mod icons;
pub mod liked_content;
pub mod playback;
pub mod playlist_card;
pub mod playlist_detail;
mod utils;

pub use helpers::BackButton;
pub use icons::{ArrowLeftIcon, ClockIcon, HeartIcon, PauseIcon, PlayIcon};
pub use liked_content::LikedContentView;
pub use playback::NowPlayingBarView;
pub use playlist_card::PlaylistCard;
pub use playlist_detail::PlaylistDetailView;
