pub mod page_presenter;
