pub mod nav_bar;
pub mod report_view;
pub mod status_line;
