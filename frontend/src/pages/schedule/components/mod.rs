pub mod date_bar;
pub mod edit_dialog;
pub mod lesson_card;
pub mod upload_dialog;
