// Reusable components live here.

pub mod article_card;
pub mod article_list;
pub mod author_list;
pub mod loading_spinner;
