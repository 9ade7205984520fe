mod now_playing_bar;

pub use now_playing_bar::NowPlayingBarView;
