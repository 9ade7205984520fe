mod back_button;

pub use back_button::BackButton;
