mod layout;
mod likes;
mod playlist;

pub use layout::AppLayout;
pub use likes::Likes;
pub use playlist::PlaylistDetail;
