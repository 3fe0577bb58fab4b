pub mod settings_item;
pub mod toast_card;
