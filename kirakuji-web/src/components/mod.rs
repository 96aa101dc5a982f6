pub mod home_modal;
pub mod language_select;
pub mod modal;
pub mod result_card;
pub mod transition_overlay;
