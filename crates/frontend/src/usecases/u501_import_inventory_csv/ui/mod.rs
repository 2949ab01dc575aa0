pub mod imports_page;
