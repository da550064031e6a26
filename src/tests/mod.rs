mod helpers;

mod workbook_test;
mod analysis_test;
