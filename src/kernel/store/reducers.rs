mod context_menu;
mod explorer;
mod search;
